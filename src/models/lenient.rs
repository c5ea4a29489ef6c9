//! Lenient field decoders for spreadsheet-sourced records.
//!
//! Sheet cells arrive as numbers, numeric strings, booleans or
//! `"TRUE"`/`"FALSE"` text depending on how the row was typed in.
//! Unparseable cells decode to the field's zero value instead of
//! failing the whole sync.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::enums::Gender;

pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_i64(&value).unwrap_or(0))
}

pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_i64(&value)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0))
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    })
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

pub fn gender<'de, D>(deserializer: D) -> Result<Gender, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Gender::from(value_to_text(&value)))
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(value_to_text(&other)),
    })
}

pub(crate) fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(float_to_i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_to_i64))
        }
        _ => None,
    }
}

/// Truncate a float cell. Non-finite or out-of-range values are rejected
/// rather than saturated.
fn float_to_i64(f: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && in_range).then(|| f.trunc() as i64)
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "int")]
        id: i64,
        #[serde(deserialize_with = "count")]
        age: u32,
        #[serde(deserialize_with = "flag")]
        available: bool,
        #[serde(deserialize_with = "text")]
        phone: String,
    }

    #[test]
    fn accepts_native_json_types() {
        let row: Row = serde_json::from_str(
            r#"{"id": 7, "age": 42, "available": true, "phone": "555-0101"}"#,
        )
        .unwrap();
        assert_eq!(row.id, 7);
        assert_eq!(row.age, 42);
        assert!(row.available);
        assert_eq!(row.phone, "555-0101");
    }

    #[test]
    fn oversized_numbers_decode_to_zero() {
        for cell in [r#""1e30""#, "1e30", r#""-1e30""#, r#""NaN""#, r#""inf""#] {
            let json = format!(r#"{{"id": {cell}, "age": 1, "available": true, "phone": ""}}"#);
            let row: Row = serde_json::from_str(&json).unwrap();
            assert_eq!(row.id, 0, "cell {cell}");
        }
        assert_eq!(value_to_i64(&Value::from(12.9)), Some(12));
        assert_eq!(value_to_i64(&Value::from("-3.5")), Some(-3));
    }

    #[test]
    fn accepts_sheet_text_cells() {
        let row: Row = serde_json::from_str(
            r#"{"id": "12", "age": "30.0", "available": "TRUE", "phone": 5550101}"#,
        )
        .unwrap();
        assert_eq!(row.id, 12);
        assert_eq!(row.age, 30);
        assert!(row.available);
        assert_eq!(row.phone, "5550101");
    }

    #[test]
    fn garbage_cells_fall_back_to_zero_values() {
        let row: Row = serde_json::from_str(
            r#"{"id": "abc", "age": -4, "available": null, "phone": null}"#,
        )
        .unwrap();
        assert_eq!(row.id, 0);
        assert_eq!(row.age, 0);
        assert!(!row.available);
        assert_eq!(row.phone, "");
    }
}
