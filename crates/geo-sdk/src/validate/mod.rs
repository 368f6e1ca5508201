//! Value validation and normalization.
//!
//! Every builder runs caller values through here before they are admitted
//! into an op: property/unit/language references become [`Id`]s and native
//! numbers are checked to be safe integers. Failures carry a parameter path
//! such as ``"`unit` in `values` in `createEntity`"``.

use crate::error::ValidationError;
use crate::model::{Id, IntegerValue, PropertyValue, PropertyValueParam, TypedValue, Value};

/// Largest integer magnitude a double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The parameter path of the value being validated, e.g. "in `values` in
/// `createEntity`". Labels built from it name the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    path: String,
}

impl Scope {
    /// Top-level scope of an operation.
    pub fn new(op: &str) -> Self {
        Scope {
            path: format!(" in `{}`", op),
        }
    }

    /// Scope of a nested parameter.
    pub fn within(&self, parent: &str) -> Self {
        Scope {
            path: format!(" in `{}`{}", parent, self.path),
        }
    }

    /// ``Scope::new("createEntity").label("id")`` gives ``"`id` in `createEntity`"``.
    pub fn label(&self, name: &str) -> String {
        format!("`{}`{}", name, self.path)
    }

    /// Validates an id string found at field `name`.
    pub fn id(&self, name: &str, value: &str) -> Result<Id, ValidationError> {
        Id::checked(value, &self.label(name))
    }

    pub fn optional_id(&self, name: &str, value: Option<&str>) -> Result<Option<Id>, ValidationError> {
        value.map(|v| self.id(name, v)).transpose()
    }

    /// Validates a list of id strings that share field `name`.
    pub fn ids<S: AsRef<str>>(&self, name: &str, values: &[S]) -> Result<Vec<Id>, ValidationError> {
        let context = self.label(name);
        values.iter().map(|v| Id::checked(v.as_ref(), &context)).collect()
    }
}

/// Resolves an integer input to an `i64`.
///
/// Native numbers must be finite, integral, and within
/// [`MAX_SAFE_INTEGER`]. Exact integers are taken as-is.
pub fn normalize_integer(value: IntegerValue, context: &str) -> Result<i64, ValidationError> {
    let v = match value {
        IntegerValue::Exact(v) => return Ok(v),
        IntegerValue::Number(v) => v,
    };

    let context = context.to_string();
    if v.is_nan() {
        return Err(ValidationError::NotANumber { value: v, context });
    }
    if v.is_infinite() {
        return Err(ValidationError::NotFinite { value: v, context });
    }
    if v.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger { value: v, context });
    }
    if v.abs() > MAX_SAFE_INTEGER {
        return Err(ValidationError::UnsafeIntegerRange { value: v, context });
    }
    Ok(v as i64)
}

/// Normalizes a single typed value found in the `values` of `scope`.
///
/// `default_language` is applied to text values that carry no language.
pub fn normalize_value(
    value: &TypedValue,
    scope: &Scope,
    default_language: Option<Id>,
) -> Result<Value, ValidationError> {
    let values_scope = scope.within("values");
    let unit = |unit: &Option<String>| values_scope.optional_id("unit", unit.as_deref());

    let normalized = match value {
        TypedValue::Boolean { value } => Value::Boolean { value: *value },
        TypedValue::Integer { value, unit: u } => {
            let unit = unit(u)?;
            Value::Integer {
                value: normalize_integer(*value, &format!("`integer` value{}", scope.path))?,
                unit,
            }
        }
        TypedValue::Float { value, unit: u } => Value::Float {
            value: *value,
            unit: unit(u)?,
        },
        TypedValue::Decimal {
            exponent,
            mantissa,
            unit: u,
        } => Value::Decimal {
            exponent: *exponent,
            mantissa: mantissa.clone(),
            unit: unit(u)?,
        },
        TypedValue::Text { value, language } => {
            let language = values_scope.optional_id("language", language.as_deref())?;
            Value::Text {
                value: value.clone(),
                language: language.or(default_language),
            }
        }
        TypedValue::Bytes { value } => Value::Bytes {
            value: value.clone(),
        },
        TypedValue::Point { lon, lat, alt } => Value::Point {
            lon: *lon,
            lat: *lat,
            alt: *alt,
        },
        TypedValue::Date { value } => Value::Date {
            value: value.clone(),
        },
        TypedValue::Time { value } => Value::Time {
            value: value.clone(),
        },
        TypedValue::Datetime { value } => Value::Datetime {
            value: value.clone(),
        },
        TypedValue::Schedule { value } => Value::Schedule {
            value: value.clone(),
        },
        TypedValue::Embedding {
            sub_type,
            dims,
            data,
        } => Value::Embedding {
            sub_type: *sub_type,
            dims: *dims,
            data: data.clone(),
        },
    };

    Ok(normalized)
}

/// Validates and normalizes a caller-supplied value list, in order.
pub fn normalize_property_values(
    values: &[PropertyValueParam],
    scope: &Scope,
    default_language: Option<Id>,
) -> Result<Vec<PropertyValue>, ValidationError> {
    let property_context = scope.label("values");
    values
        .iter()
        .map(|entry| {
            Ok(PropertyValue {
                property: Id::checked(&entry.property, &property_context)?,
                value: normalize_value(&entry.value, scope, default_language)?,
            })
        })
        .collect()
}
