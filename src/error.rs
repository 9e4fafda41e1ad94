//! Unified error type for the recordset codec.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for all decode, mapping, and encode operations.
///
/// Variants carry the record type tag and field name that produced the error
/// where applicable. All variants are serializable for structured error
/// reporting.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CodecError {
    /// The record JSON is malformed: truncated input, a non-object top-level
    /// value, or a nested value where a scalar is expected.
    #[error("Malformed record JSON: {detail}")]
    Malformed {
        /// Details about what was wrong with the input.
        detail: String,
    },

    /// A field the record type requires is absent from the wire object.
    ///
    /// Only AAAA performs this dedicated check (for `address`). Other record
    /// types surface an absent field as [`InvalidFieldValue`](Self::InvalidFieldValue)
    /// when the value is read.
    #[error("[{record_type}] Missing required field '{field}'")]
    MissingField {
        /// Record type tag being mapped.
        record_type: String,
        /// Wire field name that was absent.
        field: String,
    },

    /// A field value could not be coerced to the shape its record type
    /// requires (absent source, non-decimal integer, list where a single
    /// string is expected).
    #[error("[{record_type}] Invalid value for field '{field}': {detail}")]
    InvalidFieldValue {
        /// Record type tag being mapped.
        record_type: String,
        /// Wire field name that failed to coerce.
        field: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Canonical record data held a shape the wire format cannot represent.
    ///
    /// This is a caller contract violation and is not expected in normal
    /// operation.
    #[error("Cannot encode field '{field}': {detail}")]
    UnencodableData {
        /// Field name that could not be written.
        field: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl CodecError {
    /// Whether the error is expected behavior for untrusted upstream payloads,
    /// used for log leveling.
    ///
    /// Returns `true` for errors a well-formed but incomplete provider payload
    /// can produce (`warn` level); `false` for malformed streams and caller
    /// contract violations (`error` level).
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::InvalidFieldValue { .. }
        )
    }
}

/// Convenience type alias for `Result<T, CodecError>`.
pub type Result<T> = std::result::Result<T, CodecError>;
