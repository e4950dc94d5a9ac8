//! Lenient numeric handling for report payloads.
//!
//! The reporting endpoints are backed by spreadsheet-imported data, so a
//! "numeric" field may arrive as a JSON number, a locale-formatted string
//! ("1 234,56"), an empty string, or null. Everything funnels into
//! `Option<f64>` through [`lenient_f64`].

use serde::{Deserialize, Deserializer};

/// Parse a locale-formatted number ("1 234,56" or "1234.56") into an `f64`.
///
/// Thousands separators (regular, non-breaking and narrow non-breaking
/// spaces) are stripped and a decimal comma is accepted. Empty or
/// unparseable input yields `0.0`.
pub fn parse_locale_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Deserialize a number-like JSON value into `Option<f64>`.
///
/// Accepted inputs: number, numeric string (locale formats included),
/// empty string, null, absent field (with `#[serde(default)]`). An empty
/// string maps to `None`; any other string goes through
/// [`parse_locale_number`].
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(parse_locale_number(&s))
            }
        }
        Some(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_f64")]
        value: Option<f64>,
    }

    #[test]
    fn test_parse_locale_number() {
        assert_eq!(parse_locale_number("1 234,56"), 1234.56);
        assert_eq!(parse_locale_number("1234.56"), 1234.56);
        assert_eq!(parse_locale_number("-12,5"), -12.5);
        assert_eq!(parse_locale_number(""), 0.0);
        assert_eq!(parse_locale_number("n/a"), 0.0);
    }

    #[test]
    fn test_lenient_from_number() {
        let row: Row = serde_json::from_str(r#"{"value": 42.5}"#).unwrap();
        assert_eq!(row.value, Some(42.5));
    }

    #[test]
    fn test_lenient_from_string() {
        let row: Row = serde_json::from_str(r#"{"value": "1 234,56"}"#).unwrap();
        assert_eq!(row.value, Some(1234.56));
    }

    #[test]
    fn test_lenient_null_empty_absent() {
        let row: Row = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(row.value, None);
        let row: Row = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert_eq!(row.value, None);
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.value, None);
    }
}
