//! # dns-recordset-codec
//!
//! A bidirectional codec between a DNS provider's recordset JSON wire format
//! and a typed, record-type-keyed RDATA model, for use by provider-agnostic
//! DNS tooling.
//!
//! The decode path turns one wire object into a [`GenericRecord`] (header
//! plus an ordered bag of type-specific fields) and then into a typed
//! [`RecordData`]. The encode path writes a [`RecordData`] back as the named
//! wire fields; the caller owns the output object and writes the header keys
//! (`name`, `type`, `ttl`) itself.
//!
//! ## Supported Record Types
//!
//! | Type | Wire fields | Canonical fields |
//! |------|-------------|------------------|
//! | A | `address` | `address` |
//! | NS | `target` | `nsdname` |
//! | CNAME | `target` | `cname` |
//! | PTR | `target` | `ptrdname` |
//! | MX | `priority`, `target` | `preference`, `exchange` |
//! | TXT | `strings` (list) | `txtdata` (quoted-joined) |
//! | AAAA | `address` | `address` (uppercased on decode) |
//! | SRV | `priority`, `weight`, `port`, `target` | same |
//! | NAPTR | `order`, `preference`, `flags`, `service`, `regexp`, `replacement` | `services` for `service`, rest same |
//! | CERT | `certType`, `keyTag`, `algorithm`, `cert` | `format`, `tag`, `algorithm`, `certificate` |
//! | SSHFP | `algorithm`, `digestType`, `fingerprint` | `algorithm`, `fptype`, `fingerprint` |
//! | SPF | `strings` (list) | `txtdata` (quoted-joined) |
//!
//! Any other type tag passes through both directions as an identity
//! string-to-string mapping ([`RecordData::Unknown`]), in wire field order.
//!
//! ## Decoding
//!
//! ```rust
//! use dns_recordset_codec::{decode_record, parse_record_data, RecordData};
//!
//! # fn main() -> dns_recordset_codec::Result<()> {
//! let record = decode_record(
//!     r#"{"name":"mail.example.com.","type":"MX","ttl":3600,"class":"IN",
//!         "priority":"10","target":"mx.example.com."}"#,
//! )?;
//! assert_eq!(record.ttl, Some(3600));
//!
//! let data = parse_record_data(&record)?;
//! assert_eq!(
//!     data,
//!     RecordData::MX {
//!         preference: 10,
//!         exchange: "mx.example.com.".to_string(),
//!     }
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Encoding
//!
//! ```rust
//! use dns_recordset_codec::{write_rdata_fields, RecordData, RecordType};
//!
//! # fn main() -> dns_recordset_codec::Result<()> {
//! let data = RecordData::TXT {
//!     txtdata: "\"foo\" \"bar\"".to_string(),
//! };
//!
//! let mut object = serde_json::Map::new();
//! object.insert("name".to_string(), "txt.example.com.".into());
//! object.insert("type".to_string(), RecordType::Txt.as_str().into());
//! object.insert("ttl".to_string(), 300.into());
//! write_rdata_fields(&data, &mut object)?;
//!
//! assert_eq!(object["strings"], serde_json::json!(["foo", "bar"]));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, CodecError>`](CodecError):
//!
//! - [`CodecError::Malformed`] — broken JSON or a wrong token shape
//! - [`CodecError::MissingField`] — AAAA without an `address` field
//! - [`CodecError::InvalidFieldValue`] — a field that won't coerce (absent
//!   source value, non-decimal integer)
//! - [`CodecError::UnencodableData`] — canonical data the wire cannot carry
//!
//! The codec is pure and stateless: nothing is retried, cached, or shared
//! between calls.

mod codec;
mod error;
mod types;

// Re-export error types
pub use error::{CodecError, Result};

// Re-export codec operations
pub use codec::rdata::{parse_record_data, write_rdata_fields};
pub use codec::strings::{join_segments, split_segments};
pub use codec::wire::{decode_record, record_from_value};

// Re-export model types
pub use types::{FieldMap, FieldValue, GenericRecord, RecordData, RecordType};
