//! Lenient field decoders for ORDS rows.
//!
//! ORDS serializes NUMBER columns as JSON numbers and VARCHAR columns as
//! strings, and the same logical field is not always the same column type
//! across endpoints. These decoders never fail: a value of an unexpected
//! shape decodes as `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

pub(crate) fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Some(Value::String(s)) => parse_quantity(&s),
        _ => None,
    })
}

fn parse_quantity(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|f| f.round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_string")]
        code: Option<String>,
        #[serde(default, deserialize_with = "lenient_quantity")]
        qty: Option<i64>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_string_field_accepts_numbers_and_nulls() {
        assert_eq!(row(r#"{"code": "PO-1"}"#).code.as_deref(), Some("PO-1"));
        assert_eq!(row(r#"{"code": 40012}"#).code.as_deref(), Some("40012"));
        assert_eq!(row(r#"{"code": null}"#).code, None);
        assert_eq!(row(r#"{"code": [1, 2]}"#).code, None);
        assert_eq!(row(r#"{}"#).code, None);
    }

    #[test]
    fn test_quantity_field_accepts_numeric_shapes() {
        assert_eq!(row(r#"{"qty": 12}"#).qty, Some(12));
        assert_eq!(row(r#"{"qty": 2.6}"#).qty, Some(3));
        assert_eq!(row(r#"{"qty": " 7 "}"#).qty, Some(7));
        assert_eq!(row(r#"{"qty": "many"}"#).qty, None);
        assert_eq!(row(r#"{"qty": true}"#).qty, None);
    }
}
