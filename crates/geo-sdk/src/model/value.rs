//! Value types for Geo properties.
//!
//! [`TypedValue`] is what callers hand to the builders: ids inside it (units,
//! languages) are still loose strings. [`Value`] is the normalized form that
//! ends up inside an [`Op`](crate::model::Op), with every reference resolved
//! to an [`Id`] and integers checked.

use serde::{Deserialize, Serialize};

use crate::model::Id;

/// Data types a property can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Boolean,
    Integer,
    Float,
    Decimal,
    Text,
    Bytes,
    Date,
    Time,
    Datetime,
    Schedule,
    Point,
    Embedding,
    /// Values of this property are relations to other entities.
    Relation,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Integer => "INTEGER",
            DataType::Float => "FLOAT",
            DataType::Decimal => "DECIMAL",
            DataType::Text => "TEXT",
            DataType::Bytes => "BYTES",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Datetime => "DATETIME",
            DataType::Schedule => "SCHEDULE",
            DataType::Point => "POINT",
            DataType::Embedding => "EMBEDDING",
            DataType::Relation => "RELATION",
        }
    }
}

/// Embedding element encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingSubType {
    /// 32-bit IEEE 754 float, little-endian (4 bytes per dim)
    Float32,
    /// Signed 8-bit integer (1 byte per dim)
    Int8,
    /// Bit-packed binary, LSB-first (1/8 byte per dim)
    Binary,
}

impl EmbeddingSubType {
    /// Returns the number of bytes needed for the given number of dimensions.
    pub fn bytes_for_dims(self, dims: usize) -> usize {
        match self {
            EmbeddingSubType::Float32 => dims * 4,
            EmbeddingSubType::Int8 => dims,
            EmbeddingSubType::Binary => dims.div_ceil(8),
        }
    }
}

/// Decimal mantissa representation.
///
/// Most decimals fit in i64; larger values use big-endian two's complement bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DecimalMantissa {
    I64(i64),
    Big(Vec<u8>),
}

/// Integer input, either a native number that still has to pass the
/// safe-integer checks or an exact integer that is taken as-is.
///
/// GRC-20 stores integer values as signed 64-bit, so `Exact` covers the whole
/// range the protocol can carry. Wider integers convert through
/// `TryFrom<i128>`, which fails instead of truncating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegerValue {
    Number(f64),
    /// Any `i64`, including values beyond 2^53 - 1.
    Exact(i64),
}

impl TryFrom<i128> for IntegerValue {
    type Error = std::num::TryFromIntError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        i64::try_from(value).map(IntegerValue::Exact)
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        IntegerValue::Exact(value)
    }
}

impl From<f64> for IntegerValue {
    fn from(value: f64) -> Self {
        IntegerValue::Number(value)
    }
}

/// A caller-supplied value, before unit/language references are validated.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Boolean {
        value: bool,
    },
    Integer {
        value: IntegerValue,
        unit: Option<String>,
    },
    Float {
        value: f64,
        unit: Option<String>,
    },
    Decimal {
        exponent: i32,
        mantissa: DecimalMantissa,
        unit: Option<String>,
    },
    Text {
        value: String,
        language: Option<String>,
    },
    Bytes {
        value: Vec<u8>,
    },
    Point {
        lon: f64,
        lat: f64,
        alt: Option<f64>,
    },
    /// ISO 8601 date, e.g. `2024-01-15`.
    Date {
        value: String,
    },
    /// ISO 8601 time with zone, e.g. `14:30:00Z`.
    Time {
        value: String,
    },
    /// ISO 8601 date and time, e.g. `2024-01-15T14:30:00Z`.
    Datetime {
        value: String,
    },
    /// iCalendar RRULE, e.g. `FREQ=WEEKLY;BYDAY=MO,WE,FR`.
    Schedule {
        value: String,
    },
    Embedding {
        sub_type: EmbeddingSubType,
        dims: usize,
        data: Vec<u8>,
    },
}

impl TypedValue {
    pub fn boolean(value: bool) -> Self {
        TypedValue::Boolean { value }
    }

    pub fn integer(value: impl Into<IntegerValue>) -> Self {
        TypedValue::Integer {
            value: value.into(),
            unit: None,
        }
    }

    pub fn float(value: f64) -> Self {
        TypedValue::Float { value, unit: None }
    }

    pub fn decimal(exponent: i32, mantissa: DecimalMantissa) -> Self {
        TypedValue::Decimal {
            exponent,
            mantissa,
            unit: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        TypedValue::Text {
            value: value.into(),
            language: None,
        }
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        TypedValue::Bytes {
            value: value.into(),
        }
    }

    pub fn point(lon: f64, lat: f64, alt: Option<f64>) -> Self {
        TypedValue::Point { lon, lat, alt }
    }

    pub fn date(value: impl Into<String>) -> Self {
        TypedValue::Date {
            value: value.into(),
        }
    }

    pub fn time(value: impl Into<String>) -> Self {
        TypedValue::Time {
            value: value.into(),
        }
    }

    pub fn datetime(value: impl Into<String>) -> Self {
        TypedValue::Datetime {
            value: value.into(),
        }
    }

    pub fn schedule(value: impl Into<String>) -> Self {
        TypedValue::Schedule {
            value: value.into(),
        }
    }

    pub fn embedding(sub_type: EmbeddingSubType, dims: usize, data: impl Into<Vec<u8>>) -> Self {
        TypedValue::Embedding {
            sub_type,
            dims,
            data: data.into(),
        }
    }

    /// Attaches a unit to a numeric value. Other variants are returned unchanged.
    pub fn with_unit(self, unit: impl Into<String>) -> Self {
        let unit = Some(unit.into());
        match self {
            TypedValue::Integer { value, .. } => TypedValue::Integer { value, unit },
            TypedValue::Float { value, .. } => TypedValue::Float { value, unit },
            TypedValue::Decimal {
                exponent, mantissa, ..
            } => TypedValue::Decimal {
                exponent,
                mantissa,
                unit,
            },
            other => other,
        }
    }

    /// Attaches a language to a text value. Other variants are returned unchanged.
    pub fn with_language(self, language: impl Into<String>) -> Self {
        match self {
            TypedValue::Text { value, .. } => TypedValue::Text {
                value,
                language: Some(language.into()),
            },
            other => other,
        }
    }

    /// The lowercase variant name, as used in error contexts.
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::Boolean { .. } => "boolean",
            TypedValue::Integer { .. } => "integer",
            TypedValue::Float { .. } => "float",
            TypedValue::Decimal { .. } => "decimal",
            TypedValue::Text { .. } => "text",
            TypedValue::Bytes { .. } => "bytes",
            TypedValue::Point { .. } => "point",
            TypedValue::Date { .. } => "date",
            TypedValue::Time { .. } => "time",
            TypedValue::Datetime { .. } => "datetime",
            TypedValue::Schedule { .. } => "schedule",
            TypedValue::Embedding { .. } => "embedding",
        }
    }
}

/// A normalized value, ready to be placed in an op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Value {
    Boolean {
        value: bool,
    },
    Integer {
        value: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<Id>,
    },
    Float {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<Id>,
    },
    Decimal {
        exponent: i32,
        mantissa: DecimalMantissa,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<Id>,
    },
    Text {
        value: String,
        /// Language entity, or None for the default (language-neutral) slot.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<Id>,
    },
    Bytes {
        value: Vec<u8>,
    },
    Point {
        lon: f64,
        lat: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<f64>,
    },
    Date {
        value: String,
    },
    Time {
        value: String,
    },
    Datetime {
        value: String,
    },
    Schedule {
        value: String,
    },
    Embedding {
        #[serde(rename = "subType")]
        sub_type: EmbeddingSubType,
        dims: usize,
        data: Vec<u8>,
    },
}

impl Value {
    /// Returns the data type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Boolean { .. } => DataType::Boolean,
            Value::Integer { .. } => DataType::Integer,
            Value::Float { .. } => DataType::Float,
            Value::Decimal { .. } => DataType::Decimal,
            Value::Text { .. } => DataType::Text,
            Value::Bytes { .. } => DataType::Bytes,
            Value::Point { .. } => DataType::Point,
            Value::Date { .. } => DataType::Date,
            Value::Time { .. } => DataType::Time,
            Value::Datetime { .. } => DataType::Datetime,
            Value::Schedule { .. } => DataType::Schedule,
            Value::Embedding { .. } => DataType::Embedding,
        }
    }
}

/// A caller-supplied property/value pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValueParam {
    pub property: String,
    pub value: TypedValue,
}

impl PropertyValueParam {
    pub fn new(property: impl Into<String>, value: TypedValue) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }
}

/// A validated property/value pair attached to an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub property: Id,
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_bytes_for_dims() {
        assert_eq!(EmbeddingSubType::Float32.bytes_for_dims(10), 40);
        assert_eq!(EmbeddingSubType::Int8.bytes_for_dims(10), 10);
        assert_eq!(EmbeddingSubType::Binary.bytes_for_dims(10), 2);
        assert_eq!(EmbeddingSubType::Binary.bytes_for_dims(8), 1);
    }

    #[test]
    fn test_wide_integers_convert_without_truncation() {
        let big = i128::from(i64::MAX);
        assert_eq!(IntegerValue::try_from(big).unwrap(), IntegerValue::Exact(i64::MAX));
        assert_eq!(
            IntegerValue::try_from(i128::from(i64::MIN)).unwrap(),
            IntegerValue::Exact(i64::MIN)
        );
        assert!(IntegerValue::try_from(big + 1).is_err());
        assert!(IntegerValue::try_from(i128::from(i64::MIN) - 1).is_err());
    }

    #[test]
    fn test_with_unit_only_touches_numbers() {
        let unit = "016c9b1cd8a84e4d9e844e40878bb235";
        match TypedValue::integer(5i64).with_unit(unit) {
            TypedValue::Integer { unit: Some(u), .. } => assert_eq!(u, unit),
            other => panic!("Expected integer with unit, got {:?}", other),
        }
        assert_eq!(TypedValue::text("x").with_unit(unit), TypedValue::text("x"));
        assert_eq!(TypedValue::boolean(true).with_language(unit), TypedValue::boolean(true));
    }

    #[test]
    fn test_value_serialization_is_tagged() {
        let value = Value::Text {
            value: "hello".to_string(),
            language: None,
        };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "text", "value": "hello" }));
        assert_eq!(value.data_type(), DataType::Text);

        let decimal = Value::Decimal {
            exponent: -2,
            mantissa: DecimalMantissa::I64(1234),
            unit: None,
        };
        let json = serde_json::to_value(&decimal).unwrap();
        assert_eq!(json["mantissa"], serde_json::json!({ "type": "i64", "value": 1234 }));
        let back: Value = serde_json::from_value(json).unwrap();
        assert_eq!(back, decimal);
    }

    #[test]
    fn test_data_type_names() {
        assert_eq!(DataType::Relation.as_str(), "RELATION");
        assert_eq!(serde_json::to_string(&DataType::Datetime).unwrap(), "\"DATETIME\"");
    }
}
