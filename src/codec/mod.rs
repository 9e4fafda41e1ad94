//! The recordset codec: wire JSON ↔ generic record ↔ typed RDATA.

/// Quoted multi-string join/split used by TXT/SPF-like types.
pub mod strings;

/// Mapping between generic records and typed RDATA.
pub mod rdata;

/// Wire object decoding.
pub mod wire;
