//! Typed setting values.

use std::fmt;

use crate::error::{FlipbookError, Result};
use crate::settings::key::{SettingKey, SettingKind};

/// A setting value: integer, boolean or string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Int(i32),
    Bool(bool),
    Str(String),
}

impl SettingValue {
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Int(_) => SettingKind::Int,
            SettingValue::Bool(_) => SettingKind::Bool,
            SettingValue::Str(_) => SettingKind::Str,
        }
    }

    /// Integer view. Booleans read as 0/1, strings as 0 unless they parse.
    pub fn as_int(&self) -> i32 {
        match self {
            SettingValue::Int(v) => *v,
            SettingValue::Bool(b) => i32::from(*b),
            SettingValue::Str(s) => s.trim().parse().unwrap_or(0),
        }
    }

    /// Boolean view. Integers are on when non-zero.
    pub fn as_bool(&self) -> bool {
        match self {
            SettingValue::Int(v) => *v != 0,
            SettingValue::Bool(b) => *b,
            SettingValue::Str(s) => parse_bool(s).unwrap_or(false),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Parse command-line text into a value of `key`'s kind.
    pub fn parse_for(key: SettingKey, raw: &str) -> Result<Self> {
        let invalid = || FlipbookError::InvalidSettingValue {
            key,
            raw: raw.to_string(),
        };

        match key.kind() {
            SettingKind::Int => raw.trim().parse().map(SettingValue::Int).map_err(|_| invalid()),
            SettingKind::Bool => parse_bool(raw).map(SettingValue::Bool).ok_or_else(invalid),
            SettingKind::Str => Ok(SettingValue::Str(raw.to_string())),
        }
    }

    /// Convert a JSON value read from disk. Anything that does not fit a
    /// setting value (floats, arrays, objects, null) yields `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(SettingValue::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(SettingValue::Int),
            serde_json::Value::String(s) => Some(SettingValue::Str(s.clone())),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            SettingValue::Int(v) => serde_json::Value::from(*v),
            SettingValue::Bool(b) => serde_json::Value::from(*b),
            SettingValue::Str(s) => serde_json::Value::from(s.as_str()),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Int(v) => write!(f, "{}", v),
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Int(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("on", true)]
    #[test_case("TRUE", true)]
    #[test_case("1", true)]
    #[test_case("off", false)]
    #[test_case("no", false)]
    fn test_parse_bool_words(raw: &str, expected: bool) {
        let value = SettingValue::parse_for(SettingKey::Shadow, raw).unwrap();
        assert_eq!(value, SettingValue::Bool(expected));
    }

    #[test]
    fn test_parse_int_rejects_text() {
        let err = SettingValue::parse_for(SettingKey::FrameSize, "big").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTING_VALUE");
        assert_eq!(
            SettingValue::parse_for(SettingKey::FrameSize, " 8 ").unwrap(),
            SettingValue::Int(8)
        );
    }

    #[test]
    fn test_from_json_drops_unusable_values() {
        assert_eq!(SettingValue::from_json(&json!(7)), Some(SettingValue::Int(7)));
        assert_eq!(SettingValue::from_json(&json!("grey")), Some("grey".into()));
        assert_eq!(SettingValue::from_json(&json!(1.5)), None);
        assert_eq!(SettingValue::from_json(&json!(null)), None);
        assert_eq!(SettingValue::from_json(&json!(5_000_000_000_i64)), None);
    }

    #[test]
    fn test_cross_kind_views() {
        assert!(SettingValue::Int(3).as_bool());
        assert_eq!(SettingValue::Bool(true).as_int(), 1);
        assert_eq!(SettingValue::Int(3).as_str(), None);
    }
}
