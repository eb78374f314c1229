//! Inline style declarations.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// A typed style value.
///
/// Values are inferred when parsed: integers first, then floats,
/// anything else is kept as a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Integer(i32),
    Float(f32),
    String(String),
}

impl StyleValue {
    /// Get the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            StyleValue::Integer(i) => Some(i as f32),
            StyleValue::Float(f) => Some(f),
            StyleValue::String(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Integer(i) => write!(f, "{i}"),
            StyleValue::Float(v) => write!(f, "{v}"),
            StyleValue::String(s) => write!(f, "{s}"),
        }
    }
}

/// Property name to value mapping from a `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Style {
    properties: HashMap<String, StyleValue>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) {
        self.properties.insert(key.into(), value);
    }

    /// Get a property value.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.properties.get(key)
    }

    /// Get a string property.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    /// Get a numeric property as a float.
    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(StyleValue::as_f32)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, StyleValue)> for Style {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut style = Style::new();
        style.insert("fill", StyleValue::String("#ff0000".to_string()));
        style.insert("stroke-width", StyleValue::Integer(2));
        style.insert("opacity", StyleValue::Float(0.5));

        assert_eq!(style.len(), 3);
        assert_eq!(style.get_str("fill"), Some("#ff0000"));
        assert_eq!(style.get_f32("stroke-width"), Some(2.0));
        assert_eq!(style.get_f32("opacity"), Some(0.5));
        assert_eq!(style.get_f32("fill"), None);
        assert_eq!(style.get_str("missing"), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut style = Style::new();
        style.insert("fill", StyleValue::String("red".to_string()));
        style.insert("fill", StyleValue::String("blue".to_string()));

        assert_eq!(style.len(), 1);
        assert_eq!(style.get_str("fill"), Some("blue"));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(StyleValue::Integer(3).to_string(), "3");
        assert_eq!(StyleValue::Float(0.25).to_string(), "0.25");
        assert_eq!(StyleValue::String("none".to_string()).to_string(), "none");
    }
}
