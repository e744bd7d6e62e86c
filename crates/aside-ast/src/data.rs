/*
 * data.rs
 * Copyright (c) 2025 aside contributors
 *
 * Render metadata attached to block nodes.
 */

//! Render metadata attached to block nodes.
//!
//! A [`Data`] record is the hand-off point between transforms and writers.
//! Writers recognize two entries:
//!
//! - `h_name`: element name to emit instead of the node's natural element
//! - `h_properties`: element properties, keyed by property name
//!   (`className` is written as the `class` attribute)
//!
//! Everything else lives in `extra`, an opaque ordered bag that transforms
//! must carry through untouched.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Property name writers map to the `class` attribute.
pub const CLASS_NAME: &str = "className";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_name: Option<String>,
    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    pub h_properties: LinkedHashMap<String, String>,
    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    pub extra: LinkedHashMap<String, serde_json::Value>,
}

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no entry of any kind is present.
    pub fn is_empty(&self) -> bool {
        self.h_name.is_none() && self.h_properties.is_empty() && self.extra.is_empty()
    }

    /// Builder-style insertion into the opaque bag.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn get_extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Set a single property, keeping every other property in place.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.h_properties.insert(name.into(), value.into());
    }

    pub fn class_name(&self) -> Option<&str> {
        self.h_properties.get(CLASS_NAME).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_empty() {
        assert!(Data::new().is_empty());
        assert!(!Data::new().with_extra("k", json!(1)).is_empty());
    }

    #[test]
    fn test_set_property_keeps_existing_properties() {
        let mut data = Data::new();
        data.set_property("id", "intro");
        data.set_property(CLASS_NAME, "note");

        assert_eq!(data.class_name(), Some("note"));
        assert_eq!(data.h_properties.get("id").map(String::as_str), Some("intro"));

        data.set_property(CLASS_NAME, "tip");
        assert_eq!(data.class_name(), Some("tip"));
        // insertion order is kept on overwrite
        let keys: Vec<&str> = data.h_properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", CLASS_NAME]);
    }

    #[test]
    fn test_serializes_with_mdast_key_names() {
        let mut data = Data::new().with_extra("existingProp", json!("value"));
        data.h_name = Some("aside".to_string());
        data.set_property(CLASS_NAME, "note");

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({
                "hName": "aside",
                "hProperties": { "className": "note" },
                "extra": { "existingProp": "value" }
            })
        );
    }

    #[test]
    fn test_empty_data_serializes_to_empty_object() {
        let value = serde_json::to_value(Data::new()).unwrap();
        assert_eq!(value, json!({}));
    }
}
