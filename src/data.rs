//! Custom Data - User-Supplied Field Values
//!
//! The form payload a site is instantiated from. Shapes are disjoint:
//! a value is a single string, a list of entries, or a group of named
//! members. The pipeline never mutates a payload it is given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One value in a custom data payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Value for text, textarea, email, url, color and image fields.
    Scalar(String),
    /// Entries for an array field, one map per card.
    List(Vec<BTreeMap<String, String>>),
    /// Members of an object field, e.g. social media links.
    Group(BTreeMap<String, String>),
}

/// The full payload, keyed by field key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomData(pub BTreeMap<String, FieldValue>);

impl CustomData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.0.insert(key.into(), value);
    }

    /// The scalar value of a field, if the field holds one.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(FieldValue::Scalar(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// The entries of an array field, if the field holds a list.
    pub fn list(&self, key: &str) -> Option<&[BTreeMap<String, String>]> {
        match self.0.get(key) {
            Some(FieldValue::List(entries)) => Some(entries.as_slice()),
            _ => None,
        }
    }

    /// The members of an object field, if the field holds a group.
    pub fn group(&self, key: &str) -> Option<&BTreeMap<String, String>> {
        match self.0.get(key) {
            Some(FieldValue::Group(members)) => Some(members),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_shapes_deserialize_by_structure() {
        let data: CustomData = serde_json::from_value(json!({
            "businessName": "Glow & Co",
            "products": [{"name": "Serum", "price": "$29"}],
            "socialMedia": {"facebook": "https://facebook.com/glow"}
        }))
        .unwrap();

        assert_eq!(data.scalar("businessName"), Some("Glow & Co"));
        assert_eq!(data.list("products").map(|p| p.len()), Some(1));
        assert_eq!(
            data.group("socialMedia").and_then(|g| g.get("facebook")).map(String::as_str),
            Some("https://facebook.com/glow")
        );
    }

    #[test]
    fn accessors_reject_mismatched_shapes() {
        let data: CustomData =
            serde_json::from_value(json!({"products": "not a list"})).unwrap();
        assert!(data.list("products").is_none());
        assert_eq!(data.scalar("products"), Some("not a list"));
        assert!(data.scalar("missing").is_none());
    }

    #[test]
    fn payload_round_trips_through_json() {
        let source = json!({
            "tagline": "Radiance daily",
            "services": [{"name": "Facial", "description": "60 minutes"}]
        });
        let data: CustomData = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(serde_json::to_value(&data).unwrap(), source);
    }
}
