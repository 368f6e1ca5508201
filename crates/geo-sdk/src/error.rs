//! Error types for op building, calldata encoding, and edit publication.

use thiserror::Error;

/// Broad classification of validation failures.
///
/// Every [`ValidationError`] maps onto exactly one kind, so callers can branch
/// on the category without matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value matches neither accepted `Id` textual form.
    InvalidIdentifier,
    /// A bytes16/bytes32/address hex value fails its length or charset pattern.
    InvalidHexFormat,
    /// Integer coercion failed (fractional, NaN, infinite, or outside the safe range).
    InvalidNumericValue,
    /// A space id is neither a valid `Id` nor a bare 32-hex on-chain id.
    InvalidSpaceIdentifier,
    /// Any other malformed parameter (relation position, voting settings, missing config).
    InvalidArgument,
}

impl ErrorKind {
    /// Returns a stable identifier for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidIdentifier => "invalid_identifier",
            ErrorKind::InvalidHexFormat => "invalid_hex_format",
            ErrorKind::InvalidNumericValue => "invalid_numeric_value",
            ErrorKind::InvalidSpaceIdentifier => "invalid_space_identifier",
            ErrorKind::InvalidArgument => "invalid_argument",
        }
    }
}

/// A parameter failed validation before any operation was built.
///
/// Messages always name the offending value together with its parameter path,
/// e.g. ``Invalid id: "x" for `unit` in `values` in `createEntity` ``.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    // === Identifiers ===
    #[error("Invalid id: \"{value}\" for {context}")]
    InvalidId { value: String, context: String },

    #[error("Invalid spaceId: \"{value}\". Expected a valid UUID or 32-character hex string.")]
    InvalidSpaceId { value: String },

    // === Hex formats ===
    #[error("Invalid hex32: {value}")]
    InvalidHex32 { value: String },

    #[error("Invalid bytes16 hex: {value}")]
    InvalidBytes16 { value: String },

    #[error("{field} must be bytes16 hex (0x followed by 32 hex chars). Received: {value}")]
    NotBytes16Hex { field: &'static str, value: String },

    #[error("{field} must be an address (0x followed by 40 hex chars). Received: {value}")]
    InvalidAddress { field: &'static str, value: String },

    // === Numeric values ===
    #[error("Value {} is not a valid integer for {context}", js_number(.value))]
    NotANumber { value: f64, context: String },

    #[error("Value {} is not a valid integer for {context}", js_number(.value))]
    NotFinite { value: f64, context: String },

    #[error("Value {} is not a valid integer for {context}", js_number(.value))]
    NotAnInteger { value: f64, context: String },

    #[error(
        "Value {} is outside safe integer range for {context}. Use an exact integer (`IntegerValue::Exact`) for large integers.",
        js_number(.value)
    )]
    UnsafeIntegerRange { value: f64, context: String },

    // === Everything else ===
    #[error("Invalid value for {context}: {reason}")]
    InvalidArgument { context: String, reason: String },
}

impl ValidationError {
    /// Returns the error kind for this validation error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidId { .. } => ErrorKind::InvalidIdentifier,
            ValidationError::InvalidSpaceId { .. } => ErrorKind::InvalidSpaceIdentifier,
            ValidationError::InvalidHex32 { .. }
            | ValidationError::InvalidBytes16 { .. }
            | ValidationError::NotBytes16Hex { .. }
            | ValidationError::InvalidAddress { .. } => ErrorKind::InvalidHexFormat,
            ValidationError::NotANumber { .. }
            | ValidationError::NotFinite { .. }
            | ValidationError::NotAnInteger { .. }
            | ValidationError::UnsafeIntegerRange { .. } => ErrorKind::InvalidNumericValue,
            ValidationError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn invalid_argument(context: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidArgument {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

/// Renders a number the way a JSON/JS client would print it, so that
/// `NaN`, `Infinity` and integral floats (`42`, not `42.0`) read naturally.
fn js_number(value: &f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        }
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// The external publish collaborator failed to produce a content identifier.
#[derive(Debug, Error)]
#[error("failed to publish edit: {message}")]
pub struct PublishError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PublishError {
    /// Creates a publish error with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a publish error wrapping an underlying transport/encoding error.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Any failure surfaced by the space/proposal assemblers.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl Error {
    /// Returns the validation error kind, if this is a validation failure.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Validation(e) => Some(e.kind()),
            Error::Publish(_) => None,
        }
    }
}

/// Result alias for assembler operations.
pub type Result<T> = std::result::Result<T, Error>;
