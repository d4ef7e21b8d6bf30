use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Type tag stored alongside a cell value, as in the interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    #[serde(rename = "s")]
    String,
    #[serde(rename = "n")]
    Number,
    #[serde(rename = "b")]
    Boolean,
    #[serde(rename = "d")]
    Date,
}

impl CellType {
    pub fn tag(self) -> &'static str {
        match self {
            Self::String => "s",
            Self::Number => "n",
            Self::Boolean => "b",
            Self::Date => "d",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    /// Always finite; see [`CellValue::number`].
    Number(f64),
    Boolean(bool),
    Date(NaiveDateTime),
}

impl CellValue {
    pub fn number(value: f64) -> Result<Self, GridError> {
        if value.is_finite() {
            Ok(Self::Number(value))
        } else {
            Err(GridError::NonFiniteNumber(value))
        }
    }

    /// The type tag inferred from the value.
    pub fn cell_type(&self) -> CellType {
        match self {
            Self::String(_) => CellType::String,
            Self::Number(_) => CellType::Number,
            Self::Boolean(_) => CellType::Boolean,
            Self::Date(_) => CellType::Date,
        }
    }

    /// Convert a dynamically typed value supplied by a host.
    ///
    /// Strings, finite numbers and booleans are accepted. Anything else is a caller bug and is
    /// rejected rather than coerced.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, GridError> {
        use serde_json::Value;
        match value {
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Number(n) => n
                .as_f64()
                .ok_or(GridError::UnsupportedCellType("number"))
                .and_then(Self::number),
            Value::Bool(b) => Ok(Self::Boolean(*b)),
            Value::Null => Err(GridError::UnsupportedCellType("null")),
            Value::Array(_) => Err(GridError::UnsupportedCellType("array")),
            Value::Object(_) => Err(GridError::UnsupportedCellType("object")),
        }
    }

    /// Interpret typed or pasted text. Empty text means "no value".
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(n) = trimmed.parse::<f64>()
            && n.is_finite()
        {
            return Some(Self::Number(n));
        }
        match trimmed {
            "TRUE" => return Some(Self::Boolean(true)),
            "FALSE" => return Some(Self::Boolean(false)),
            _ => {}
        }
        if let Some(date) = parse_date(trimmed) {
            return Some(Self::Date(date));
        }
        Some(Self::String(input.to_string()))
    }

    /// The text shown in the grid and written to the clipboard.
    pub fn display(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Boolean(true) => "TRUE".to_string(),
            Self::Boolean(false) => "FALSE".to_string(),
            Self::Date(d) => format_date(d),
        }
    }
}

/// `2024-03-01` or `2024-03-01T12:30:00`.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_TIME_FORMAT).to_string()
}

/// A stored cell: the value and its inferred type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    value: CellValue,
    kind: CellType,
}

impl Cell {
    pub fn new(value: CellValue) -> Self {
        let kind = value.cell_type();
        Self { value, kind }
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    pub fn kind(&self) -> CellType {
        self.kind
    }

    pub fn into_value(self) -> CellValue {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_inference() {
        assert_eq!(Cell::new(CellValue::String("x".into())).kind(), CellType::String);
        assert_eq!(Cell::new(CellValue::Number(1.0)).kind(), CellType::Number);
        assert_eq!(Cell::new(CellValue::Boolean(true)).kind(), CellType::Boolean);
        let date = parse_date("2024-03-01").unwrap();
        assert_eq!(Cell::new(CellValue::Date(date)).kind().tag(), "d");
    }

    #[test]
    fn test_json_values_are_strict() {
        assert_eq!(
            CellValue::from_json(&json!("a")).unwrap(),
            CellValue::String("a".into())
        );
        assert_eq!(
            CellValue::from_json(&json!(2.5)).unwrap(),
            CellValue::Number(2.5)
        );
        assert!(matches!(
            CellValue::from_json(&json!({ "a": 1 })),
            Err(GridError::UnsupportedCellType("object"))
        ));
        assert!(matches!(
            CellValue::from_json(&json!(null)),
            Err(GridError::UnsupportedCellType("null"))
        ));
        assert!(matches!(
            CellValue::number(f64::NAN),
            Err(GridError::NonFiniteNumber(_))
        ));
    }

    #[test]
    fn test_input_round_trips_through_display() {
        for text in ["12.5", "-3", "TRUE", "2024-03-01T12:30:00", "hello world"] {
            let value = CellValue::from_input(text).unwrap();
            assert_eq!(value.display(), text);
        }
        assert_eq!(CellValue::from_input("   "), None);
        assert_eq!(
            CellValue::from_input("inf"),
            Some(CellValue::String("inf".into()))
        );
    }
}
