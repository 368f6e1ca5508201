//! Builder API for ergonomic value construction.
//!
//! # Example
//!
//! ```rust
//! use geo_sdk::model::builder::PropertyValuesBuilder;
//! use geo_sdk::graph::{create_entity, CreateEntityParams};
//! use geo_sdk::genesis::properties;
//!
//! let values = PropertyValuesBuilder::new()
//!     .text(properties::description(), "A knowledge graph browser", None)
//!     .integer("1b2c4a3fb1d24f6a8c3e9f7d5a6b4c2e", 1999i64, None)
//!     .build();
//!
//! let entity = create_entity(CreateEntityParams {
//!     name: Some("Geo".to_string()),
//!     values,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! assert_eq!(entity.ops.len(), 1);
//! ```

use crate::model::{DecimalMantissa, EmbeddingSubType, PropertyValueParam, TypedValue};

/// Builder for a list of [`PropertyValueParam`]s.
///
/// Ids are accepted as strings and validated later by the op builders, so
/// the error path names the op that received them.
#[derive(Debug, Clone, Default)]
pub struct PropertyValuesBuilder {
    values: Vec<PropertyValueParam>,
}

impl PropertyValuesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property value.
    pub fn value(mut self, property: impl Into<String>, value: TypedValue) -> Self {
        self.values.push(PropertyValueParam::new(property, value));
        self
    }

    pub fn text(
        self,
        property: impl Into<String>,
        value: impl Into<String>,
        language: Option<String>,
    ) -> Self {
        self.value(
            property,
            TypedValue::Text {
                value: value.into(),
                language,
            },
        )
    }

    /// Adds an integer. Pass an `i64` for an exact value, or an `f64` that
    /// must hold a safe integer.
    pub fn integer(
        self,
        property: impl Into<String>,
        value: impl Into<crate::model::IntegerValue>,
        unit: Option<String>,
    ) -> Self {
        self.value(
            property,
            TypedValue::Integer {
                value: value.into(),
                unit,
            },
        )
    }

    pub fn float(self, property: impl Into<String>, value: f64, unit: Option<String>) -> Self {
        self.value(property, TypedValue::Float { value, unit })
    }

    pub fn decimal(
        self,
        property: impl Into<String>,
        exponent: i32,
        mantissa: DecimalMantissa,
        unit: Option<String>,
    ) -> Self {
        self.value(
            property,
            TypedValue::Decimal {
                exponent,
                mantissa,
                unit,
            },
        )
    }

    pub fn boolean(self, property: impl Into<String>, value: bool) -> Self {
        self.value(property, TypedValue::boolean(value))
    }

    pub fn bytes(self, property: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.value(property, TypedValue::bytes(value))
    }

    /// Adds a POINT value (longitude, latitude, optional altitude).
    pub fn point(self, property: impl Into<String>, lon: f64, lat: f64, alt: Option<f64>) -> Self {
        self.value(property, TypedValue::point(lon, lat, alt))
    }

    pub fn date(self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.value(property, TypedValue::date(value))
    }

    pub fn time(self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.value(property, TypedValue::time(value))
    }

    pub fn datetime(self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.value(property, TypedValue::datetime(value))
    }

    pub fn schedule(self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.value(property, TypedValue::schedule(value))
    }

    pub fn embedding(
        self,
        property: impl Into<String>,
        sub_type: EmbeddingSubType,
        dims: usize,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        self.value(property, TypedValue::embedding(sub_type, dims, data))
    }

    pub fn build(self) -> Vec<PropertyValueParam> {
        self.values
    }
}
