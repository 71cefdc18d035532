//! DTOs for decoding GeoJSON feature collections.
//!
//! Decoding is schema tolerant below the top level. The document must be an
//! object whose `features` member, when present, is an array; past that point
//! unknown fields are ignored and each entry is held as raw JSON, so a single
//! odd feature never fails the whole document.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::Region;

#[derive(Debug, Deserialize)]
pub(super) struct FeatureCollectionDto {
    #[serde(default)]
    pub(super) features: Option<Vec<Value>>,
}

#[derive(Debug, Default)]
pub(super) struct FeatureDto {
    pub(super) properties: Value,
    pub(super) geometry: Value,
}

impl FeatureCollectionDto {
    /// Decode a parsed document, rejecting anything but a JSON object.
    pub(super) fn from_document(document: Value) -> Result<Self, String> {
        if !document.is_object() {
            return Err(format!(
                "expected a feature collection object, found {}",
                json_kind(&document)
            ));
        }
        serde_json::from_value(document).map_err(|error| error.to_string())
    }

    pub(super) fn into_domain_regions(self) -> Vec<Region> {
        self.features
            .unwrap_or_default()
            .into_iter()
            .map(FeatureDto::from_entry)
            .map(FeatureDto::into_domain_region)
            .collect()
    }
}

impl FeatureDto {
    /// Non-object entries become an unnamed region without geometry.
    fn from_entry(entry: Value) -> Self {
        match entry {
            Value::Object(fields) => Self::from_fields(fields),
            _ => Self::default(),
        }
    }

    fn from_fields(mut fields: Map<String, Value>) -> Self {
        Self {
            properties: fields.remove("properties").unwrap_or_default(),
            geometry: fields.remove("geometry").unwrap_or_default(),
        }
    }

    fn into_domain_region(self) -> Region {
        let name = self
            .properties
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Region::new(name, self.geometry)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
