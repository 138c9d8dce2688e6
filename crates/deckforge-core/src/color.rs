//! Color handling for slide elements.
//!
//! Wraps the `color` crate's [`DynamicColor`] so the rest of the workspace
//! can parse CSS color strings ("#22d3ee", "white", "rgb(...)") and hand the
//! result straight to the SVG exporter.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Error produced when a color string cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid color '{input}': {reason}")]
pub struct ColorError {
    input: String,
    reason: String,
}

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Provides parsing from CSS color strings, display formatting, and
/// conversion into SVG attribute values.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#22d3ee",
    /// "rgb(255, 0, 0)", or "white".
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(ColorError {
                input: color_str.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

// Serialized as the CSS string form so colors can appear directly in
// configuration files.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::new(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_colors() {
        assert!(Color::new("#22d3ee").is_ok());
        assert!(Color::new("#0A0F1C").is_ok());
    }

    #[test]
    fn test_parses_named_colors() {
        assert!(Color::new("white").is_ok());
        assert!(Color::new("black").is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_roundtrips_through_serde() {
        let color = Color::new("#22d3ee").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(color, back);
    }
}
