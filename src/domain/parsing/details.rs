use std::collections::BTreeMap;

const NOT_SPECIFIED: &str = "Not specified";

/// Parse `Key: Value` lines from a details extraction reply.
///
/// Keys are lower-cased with spaces joined by underscores; bullets and bold
/// markers are dropped. Values reading "Not specified" are skipped.
pub fn parse_extracted_details(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .filter_map(|line| {
            let line = line.replace("**", "");
            let (key, value) = line.split_once(':')?;
            let key = key
                .trim()
                .trim_start_matches(['-', '*', '•'])
                .trim()
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("_");
            let value = value.trim();
            if key.is_empty() || value.is_empty() || value.eq_ignore_ascii_case(NOT_SPECIFIED) {
                return None;
            }
            Some((key, value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        let text = "Make: Honda\nFuel Type: Petrol\n- **Engine details:** 1.5L turbo";
        let details = parse_extracted_details(text);
        assert_eq!(details.get("make").map(String::as_str), Some("Honda"));
        assert_eq!(details.get("fuel_type").map(String::as_str), Some("Petrol"));
        assert_eq!(details.get("engine_details").map(String::as_str), Some("1.5L turbo"));
    }

    #[test]
    fn not_specified_and_prose_lines_are_skipped() {
        let text = "Here is what I found\nTransmission: Not specified\nYear: 2016";
        let details = parse_extracted_details(text);
        assert_eq!(details.len(), 1);
        assert_eq!(details.get("year").map(String::as_str), Some("2016"));
    }

    #[test]
    fn value_keeps_later_colons() {
        let details = parse_extracted_details("Condition: Good: minor wear");
        assert_eq!(details.get("condition").map(String::as_str), Some("Good: minor wear"));
    }
}
