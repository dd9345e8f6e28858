use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Extraction;

use super::{first_success, Strategy};

pub const FACTORS_HEADING: &str = "KEY PRICING FACTORS";
pub const FACTORS_PLACEHOLDER: &str = "Detailed factors included in market analysis";

const NAME_SUFFIXES: [&str; 3] = ["Impact", "Assessment", "Factors"];
const MIN_EXPLANATION_CHARS: usize = 10;
const MAX_SENTENCE_CHARS: usize = 200;

/// Keywords searched for when there is no labeled section, with the
/// factor name each one is reported under.
const KEYWORD_FACTORS: [(&str, &str); 6] = [
    ("mileage", "Mileage"),
    ("condition", "Condition"),
    ("market demand", "Market Demand"),
    ("location", "Location"),
    ("depreciation", "Depreciation"),
    ("features", "Features"),
];

type Factors = BTreeMap<String, String>;

const STRATEGIES: &[Strategy<(), Factors>] = &[
    ("labeled factor section", from_labeled_section),
    ("keyword sentences", from_keyword_sentences),
];

static BULLET: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-•]|\*\s|\d+[.)])\s*([^:]+?)\s*:\s*(.+?)\s*$"));

/// Map factor names to the model's explanation of how each affects price.
pub fn extract_factors(text: &str) -> Extraction<Factors> {
    if let Err(e) = BULLET.as_ref() {
        return Extraction::failed(placeholder(), format!("factor pattern failed to compile: {e}"));
    }

    match first_success(STRATEGIES, &(), text) {
        Some(factors) => Extraction::Found(factors),
        None => Extraction::no_match(placeholder()),
    }
}

fn placeholder() -> Factors {
    let mut factors = Factors::new();
    factors.insert("Analysis".to_string(), FACTORS_PLACEHOLDER.to_string());
    factors
}

fn from_labeled_section(_: &(), text: &str) -> Option<Factors> {
    let bullet = BULLET.as_ref().ok()?;

    let section = text
        .lines()
        .skip_while(|line| !opens_section(line))
        .skip(1)
        .take_while(|line| !is_heading(line));

    let factors: Factors = section
        .filter_map(|line| {
            let line = line.replace("**", "");
            let caps = bullet.captures(&line)?;
            let name = clean_factor_name(caps.get(1)?.as_str());
            let explanation = caps.get(2)?.as_str().trim();
            if name.is_empty() || explanation.chars().count() < MIN_EXPLANATION_CHARS {
                return None;
            }
            Some((name, explanation.to_string()))
        })
        .collect();

    (!factors.is_empty()).then_some(factors)
}

fn from_keyword_sentences(_: &(), text: &str) -> Option<Factors> {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let factors: Factors = KEYWORD_FACTORS
        .iter()
        .filter_map(|(keyword, name)| {
            let sentence = sentences
                .iter()
                .find(|s| s.to_lowercase().contains(keyword))?;
            let cleaned = clean_sentence(sentence);
            (!cleaned.is_empty()).then(|| (name.to_string(), truncate(&cleaned, MAX_SENTENCE_CHARS)))
        })
        .collect();

    (!factors.is_empty()).then_some(factors)
}

/// `**KEY PRICING FACTORS:**`, `## Key Pricing Factors` and the like; prose
/// that merely mentions the phrase does not count.
fn opens_section(line: &str) -> bool {
    line.trim_start_matches(|c: char| c == '*' || c == '#' || c.is_whitespace())
        .to_uppercase()
        .starts_with(FACTORS_HEADING)
}

fn is_heading(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("**") || trimmed.starts_with('#')
}

fn clean_factor_name(raw: &str) -> String {
    let mut name = raw.trim();
    for suffix in NAME_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            name = stripped.trim_end();
        }
    }
    name.to_string()
}

fn clean_sentence(sentence: &str) -> String {
    sentence
        .replace("**", "")
        .trim_start_matches(['-', '*', '•', '#', ' '])
        .trim()
        .to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DegradeReason;

    #[test]
    fn labeled_section_yields_trimmed_names() {
        let text = "\
**PRICE RANGE:**
- Minimum Value: $10,000

**KEY PRICING FACTORS:**
- Mileage Impact: High mileage reduces value significantly.
- Condition Assessment: Minor scratches on the rear bumper.
- Market Demand Factors: Compact SUVs sell quickly in spring.

**MARKET ANALYSIS:**
- Trend: Prices have softened over the last quarter.";

        let factors = extract_factors(text);
        assert!(factors.is_found());
        let factors = factors.into_value();
        assert_eq!(factors.len(), 3);
        assert_eq!(
            factors.get("Mileage").map(String::as_str),
            Some("High mileage reduces value significantly.")
        );
        assert!(factors.contains_key("Condition"));
        assert!(factors.contains_key("Market Demand"));
        assert!(!factors.contains_key("Trend"));
    }

    #[test]
    fn bold_factor_names_are_unwrapped() {
        let text = "KEY PRICING FACTORS\n- **Location Impact:** Urban markets pay a premium here.";
        let factors = extract_factors(text).into_value();
        assert_eq!(
            factors.get("Location").map(String::as_str),
            Some("Urban markets pay a premium here.")
        );
    }

    #[test]
    fn short_explanations_are_noise() {
        let text = "**KEY PRICING FACTORS:**\n- Mileage: Low\n- Features: Sunroof and heated seats add value.";
        let factors = extract_factors(text).into_value();
        assert!(!factors.contains_key("Mileage"));
        assert!(factors.contains_key("Features"));
    }

    #[test]
    fn keyword_fallback_extracts_sentences() {
        let text = "This sedan has been well kept. Its mileage is below average for the year! \
                    Depreciation has mostly flattened out.";
        let factors = extract_factors(text);
        assert!(factors.is_found());
        let factors = factors.into_value();
        assert_eq!(
            factors.get("Mileage").map(String::as_str),
            Some("Its mileage is below average for the year")
        );
        assert_eq!(
            factors.get("Depreciation").map(String::as_str),
            Some("Depreciation has mostly flattened out")
        );
    }

    #[test]
    fn keyword_sentences_are_truncated() {
        let long = format!("The condition {}", "is excellent ".repeat(30));
        let factors = extract_factors(&long).into_value();
        let condition = factors.get("Condition").unwrap();
        assert!(condition.ends_with("..."));
        assert!(condition.chars().count() <= MAX_SENTENCE_CHARS + 3);
    }

    #[test]
    fn prose_mention_does_not_open_the_section() {
        let text = "\
The key pricing factors for this car are mostly positive.

**KEY PRICING FACTORS:**
- Mileage Impact: Below average for the year, which supports the price.
- Market Demand: Compact SUVs are selling quickly right now.

**MARKET ANALYSIS:**
Prices are stable.";

        let factors = extract_factors(text);
        assert!(factors.is_found());
        let factors = factors.into_value();
        assert_eq!(factors.len(), 2);
        assert!(factors.contains_key("Mileage"));
        assert!(factors.contains_key("Market Demand"));
    }

    #[test]
    fn placeholder_when_nothing_matches() {
        let factors = extract_factors("Nice car.");
        assert_eq!(factors.reason(), Some(&DegradeReason::NoMatch));
        assert_eq!(
            factors.into_value().get("Analysis").map(String::as_str),
            Some(FACTORS_PLACEHOLDER)
        );
    }

    #[test]
    fn empty_section_falls_back_to_keywords() {
        let text = "**KEY PRICING FACTORS:**\n\n**MARKET ANALYSIS:**\nLocation matters a lot for this model.";
        let factors = extract_factors(text).into_value();
        assert!(factors.contains_key("Location"));
    }
}
