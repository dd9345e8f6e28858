//! Prompt templates and the descriptor renderer that fills them.

use crate::application::ChatMessage;
use crate::domain::VehicleDescriptor;

const COMPARISON_SYSTEM: &str =
    "You are an expert automotive consultant providing detailed car comparisons.";

const PRICING_SYSTEM: &str = "You are a professional car appraiser with 20+ years of \
experience in automotive valuation.";

const EXTRACTION_SYSTEM: &str =
    "You are an expert at extracting car specifications from descriptions.";

const COMPARISON_TEMPLATE: &str = "\
You are an expert automotive analyst. Compare two cars based on the provided details and give a comprehensive analysis.

Car 1 Details:
{car1}

Car 2 Details:
{car2}

Provide a detailed comparison covering:
1. Performance and Engine Specifications
2. Fuel Efficiency and Running Costs
3. Features and Technology
4. Safety Ratings (if known)
5. Reliability and Maintenance
6. Resale Value
7. Overall Value for Money

Format your response as a structured analysis with clear sections and bullet points.
End with a section titled \"Recommendation\" giving a clear recommendation for different use cases (family, commuting, performance, etc.).";

const PRICING_TEMPLATE: &str = "\
You are a professional car appraiser with expertise in market valuation. Estimate the price of the following car:

{car}

Consider mileage and condition, engine and features, market demand and supply, \
location-based pricing, depreciation patterns and current market trends.
If a location is given, quote prices in that market's local currency.

Answer using exactly this structure:

**PRICE RANGE:**
- Minimum Value: <currency symbol><amount>
- Maximum Value: <currency symbol><amount>
- Most Likely Price: <currency symbol><amount>

**KEY PRICING FACTORS:**
- Mileage Impact: <one or two sentences>
- Condition Assessment: <one or two sentences>
- Market Demand: <one or two sentences>
- Location Impact: <one or two sentences>
- Depreciation: <one or two sentences>
- Features Impact: <one or two sentences>

**MARKET ANALYSIS:**
<current trends, and tips for buyers and sellers>

Be realistic and give reasoning for your estimates.";

const EXTRACTION_TEMPLATE: &str = "\
Extract structured car information from the following description:

Description: {description}

Extract and return the following information if available:
- Make
- Model
- Year
- Engine details
- Transmission type
- Fuel type
- Mileage
- Key features
- Condition
- Any other relevant specifications

If information is not available, write \"Not specified\".
Return one field per line in the form \"Field: Value\".";

/// Render the present attributes of `vehicle` as `Label: value` lines,
/// ending with the free-text description.
pub fn render_descriptor(vehicle: &VehicleDescriptor) -> String {
    let mileage = vehicle
        .mileage()
        .map(|m| format!("{m} {}", vehicle.mileage_unit()));

    let fields: [(&str, Option<&str>); 11] = [
        ("Make", vehicle.make()),
        ("Model", vehicle.model()),
        ("Year", vehicle.year()),
        ("Engine", vehicle.engine()),
        ("Transmission", vehicle.transmission()),
        ("Fuel Type", vehicle.fuel_type()),
        ("Mileage", mileage.as_deref()),
        ("Features", vehicle.features()),
        ("Condition", vehicle.condition()),
        ("Location", vehicle.location()),
        ("Price", vehicle.price()),
    ];

    let mut lines: Vec<String> = fields
        .iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label}: {v}")))
        .collect();
    lines.push(format!("Description: {}", vehicle.raw_description().trim()));

    lines.join("\n")
}

/// Substitute every `{slot}` in `template` in a single pass, so text that
/// was already inserted is never scanned again.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((pos, key, value)) = slots
        .iter()
        .filter_map(|(key, value)| rest.find(*key).map(|pos| (pos, *key, *value)))
        .min_by_key(|(pos, ..)| *pos)
    {
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + key.len()..];
    }
    out.push_str(rest);

    out
}

pub fn comparison_messages(car1: &VehicleDescriptor, car2: &VehicleDescriptor) -> Vec<ChatMessage> {
    let first = render_descriptor(car1);
    let second = render_descriptor(car2);
    let prompt = fill(COMPARISON_TEMPLATE, &[("{car1}", first.as_str()), ("{car2}", second.as_str())]);
    vec![ChatMessage::system(COMPARISON_SYSTEM), ChatMessage::user(prompt)]
}

pub fn price_estimation_messages(car: &VehicleDescriptor) -> Vec<ChatMessage> {
    let prompt = fill(PRICING_TEMPLATE, &[("{car}", render_descriptor(car).as_str())]);
    vec![ChatMessage::system(PRICING_SYSTEM), ChatMessage::user(prompt)]
}

pub fn details_extraction_messages(description: &str) -> Vec<ChatMessage> {
    let prompt = fill(EXTRACTION_TEMPLATE, &[("{description}", description.trim())]);
    vec![ChatMessage::system(EXTRACTION_SYSTEM), ChatMessage::user(prompt)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ChatRole;
    use crate::domain::MileageUnit;

    fn labeled_lines(rendered: &str) -> usize {
        rendered.lines().filter(|l| l.contains(": ")).count()
    }

    #[test]
    fn description_only_renders_one_line() {
        let rendered = render_descriptor(&VehicleDescriptor::new("Blue 2012 hatchback, one owner"));
        assert_eq!(rendered, "Description: Blue 2012 hatchback, one owner");
        assert_eq!(labeled_lines(&rendered), 1);
    }

    #[test]
    fn present_fields_render_in_order() {
        let vehicle = VehicleDescriptor::new("Well maintained")
            .with_make("Toyota")
            .with_year("2018")
            .with_mileage("62000", MileageUnit::Km)
            .with_location("Toronto");

        assert_eq!(
            render_descriptor(&vehicle),
            "Make: Toyota\nYear: 2018\nMileage: 62000 km\nLocation: Toronto\nDescription: Well maintained"
        );
    }

    #[test]
    fn blank_fields_are_omitted() {
        let vehicle = VehicleDescriptor::new("x").with_make("   ").with_condition("");
        assert_eq!(render_descriptor(&vehicle), "Description: x");
    }

    #[test]
    fn comparison_prompt_embeds_both_vehicles() {
        let a = VehicleDescriptor::new("first").with_make("Honda");
        let b = VehicleDescriptor::new("second").with_make("Mazda");
        let messages = comparison_messages(&a, &b);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);
        assert!(messages[1].content.contains("Make: Honda\nDescription: first"));
        assert!(messages[1].content.contains("Make: Mazda\nDescription: second"));
    }

    #[test]
    fn placeholder_text_in_a_description_is_left_alone() {
        let a = VehicleDescriptor::new("seller wrote {car2} in the ad");
        let b = VehicleDescriptor::new("Mazda 3");
        let prompt = &comparison_messages(&a, &b)[1].content;

        assert!(prompt.contains("Description: seller wrote {car2} in the ad"));
        assert_eq!(prompt.matches("Description: Mazda 3").count(), 1);
    }

    #[test]
    fn pricing_prompt_requests_labeled_output() {
        let messages = price_estimation_messages(&VehicleDescriptor::new("sedan"));
        let prompt = &messages[1].content;
        assert!(prompt.contains("Minimum Value:"));
        assert!(prompt.contains("Most Likely Price:"));
        assert!(prompt.contains("**KEY PRICING FACTORS:**"));
        assert!(prompt.contains("Description: sedan"));
    }
}
