use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MileageUnit {
    #[default]
    #[serde(alias = "mi", alias = "mile")]
    Miles,
    #[serde(alias = "kilometers", alias = "kilometres")]
    Km,
}

impl MileageUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Miles => "miles",
            Self::Km => "km",
        }
    }
}

impl fmt::Display for MileageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured hints plus the mandatory free-text description of one vehicle.
///
/// Every structured field is advisory: absent or blank fields are simply
/// left out of the prompt. `year`, `mileage` and `price` accept either JSON
/// numbers or strings and are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDescriptor {
    #[serde(default)]
    make: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    year: Option<String>,
    #[serde(default)]
    engine: Option<String>,
    #[serde(default)]
    transmission: Option<String>,
    #[serde(default)]
    fuel_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    mileage: Option<String>,
    #[serde(default)]
    mileage_unit: Option<MileageUnit>,
    #[serde(default)]
    features: Option<String>,
    #[serde(default)]
    condition: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    price: Option<String>,
    #[serde(alias = "description")]
    raw_description: String,
}

impl VehicleDescriptor {
    pub fn new(raw_description: impl Into<String>) -> Self {
        Self {
            raw_description: raw_description.into(),
            ..Self::default()
        }
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = Some(transmission.into());
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    pub fn with_mileage(mut self, mileage: impl Into<String>, unit: MileageUnit) -> Self {
        self.mileage = Some(mileage.into());
        self.mileage_unit = Some(unit);
        self
    }

    pub fn with_features(mut self, features: impl Into<String>) -> Self {
        self.features = Some(features.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn make(&self) -> Option<&str> {
        present(&self.make)
    }

    pub fn model(&self) -> Option<&str> {
        present(&self.model)
    }

    pub fn year(&self) -> Option<&str> {
        present(&self.year)
    }

    pub fn engine(&self) -> Option<&str> {
        present(&self.engine)
    }

    pub fn transmission(&self) -> Option<&str> {
        present(&self.transmission)
    }

    pub fn fuel_type(&self) -> Option<&str> {
        present(&self.fuel_type)
    }

    pub fn mileage(&self) -> Option<&str> {
        present(&self.mileage)
    }

    pub fn mileage_unit(&self) -> MileageUnit {
        self.mileage_unit.unwrap_or_default()
    }

    pub fn features(&self) -> Option<&str> {
        present(&self.features)
    }

    pub fn condition(&self) -> Option<&str> {
        present(&self.condition)
    }

    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    pub fn price(&self) -> Option<&str> {
        present(&self.price)
    }

    pub fn raw_description(&self) -> &str {
        &self.raw_description
    }

    pub fn has_description(&self) -> bool {
        !self.raw_description.trim().is_empty()
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(number_text(&n))),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub car1: VehicleDescriptor,
    pub car2: VehicleDescriptor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEstimateRequest {
    pub car_details: VehicleDescriptor,
}

/// Body of the details extraction endpoint: a bare JSON string or an
/// object carrying a `description` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExtractDetailsRequest {
    Text(String),
    Object { description: String },
}

impl ExtractDetailsRequest {
    pub fn into_description(self) -> String {
        match self {
            Self::Text(description) | Self::Object { description } => description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_coerced_to_text() {
        let json = r#"{"year": 2019, "mileage": 45000.0, "price": "12000", "raw_description": "ok"}"#;
        let v: VehicleDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(v.year(), Some("2019"));
        assert_eq!(v.mileage(), Some("45000"));
        assert_eq!(v.price(), Some("12000"));
    }

    #[test]
    fn blank_fields_are_not_present() {
        let json = r#"{"make": "  ", "model": null, "raw_description": "x"}"#;
        let v: VehicleDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(v.make(), None);
        assert_eq!(v.model(), None);
    }

    #[test]
    fn description_alias_and_unit_aliases() {
        let json = r#"{"description": "red hatchback", "mileage": "80000", "mileage_unit": "kilometers"}"#;
        let v: VehicleDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(v.raw_description(), "red hatchback");
        assert_eq!(v.mileage_unit(), MileageUnit::Km);
    }

    #[test]
    fn missing_description_is_rejected() {
        let json = r#"{"make": "Toyota"}"#;
        assert!(serde_json::from_str::<VehicleDescriptor>(json).is_err());
    }

    #[test]
    fn extract_request_accepts_both_shapes() {
        let a: ExtractDetailsRequest = serde_json::from_str(r#""2015 Civic""#).unwrap();
        let b: ExtractDetailsRequest =
            serde_json::from_str(r#"{"description": "2015 Civic"}"#).unwrap();
        assert_eq!(a.into_description(), "2015 Civic");
        assert_eq!(b.into_description(), "2015 Civic");
    }
}
