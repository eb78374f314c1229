//! Inline style attribute parser.

use crate::error::{Result, SceneError};
use crate::types::{Style, StyleValue};

/// Parse a `key:value;key:value` declaration list.
///
/// Empty pieces (such as after a trailing `;`) are skipped. Every other
/// piece must contain exactly one `:` and a non-empty key.
pub fn parse_style(source: &str) -> Result<Style> {
    let mut style = Style::new();

    for piece in source.split(';') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        let mut parts = piece.split(':');
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed(piece));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(malformed(piece));
        }

        style.insert(key, infer_value(value.trim()));
    }

    Ok(style)
}

/// Infer a typed value: integer, then float, then plain string.
///
/// Only finite floats are accepted; `NaN`, `inf` and values that overflow
/// `f32` stay strings, matching what path data accepts as a number.
pub fn infer_value(value: &str) -> StyleValue {
    if let Ok(i) = value.parse::<i32>() {
        return StyleValue::Integer(i);
    }

    match value.parse::<f32>() {
        Ok(f) if f.is_finite() => StyleValue::Float(f),
        _ => StyleValue::String(value.to_string()),
    }
}

fn malformed(piece: &str) -> SceneError {
    SceneError::MalformedStyleDeclaration {
        piece: piece.to_string(),
    }
}
