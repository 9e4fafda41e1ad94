//! Mapping between [`GenericRecord`] field bags and typed [`RecordData`].

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::codec::strings;
use crate::error::{CodecError, Result};
use crate::types::{FieldMap, FieldValue, GenericRecord, RecordData, RecordType};

/// Map a decoded wire record to its canonical RDATA.
///
/// Dispatches on the record's `type` tag via the supported-type table. A
/// record with no tag, or a tag outside the table, passes its fields through
/// unchanged as [`RecordData::Unknown`].
pub fn parse_record_data(record: &GenericRecord) -> Result<RecordData> {
    let Some(record_type) = record
        .record_type
        .as_deref()
        .and_then(RecordType::from_tag)
    else {
        if let Some(tag) = record.record_type.as_deref() {
            log::debug!("record type '{tag}' is not in the supported table, passing fields through");
        }
        return Ok(RecordData::Unknown {
            fields: record.fields.clone(),
        });
    };

    let fields = &record.fields;
    match record_type {
        RecordType::A => Ok(RecordData::A {
            address: string_field(fields, record_type, "address")?,
        }),
        RecordType::Ns => Ok(RecordData::NS {
            nsdname: string_field(fields, record_type, "target")?,
        }),
        RecordType::Cname => Ok(RecordData::CNAME {
            cname: string_field(fields, record_type, "target")?,
        }),
        RecordType::Ptr => Ok(RecordData::PTR {
            ptrdname: string_field(fields, record_type, "target")?,
        }),
        RecordType::Mx => Ok(RecordData::MX {
            preference: int_field(fields, record_type, "priority")?,
            exchange: string_field(fields, record_type, "target")?,
        }),
        RecordType::Txt => Ok(RecordData::TXT {
            txtdata: joined_field(fields, record_type)?,
        }),
        // AAAA is the one type with a dedicated required-field check; its
        // address is normalized to uppercase.
        RecordType::Aaaa => match fields.get("address") {
            None => Err(CodecError::MissingField {
                record_type: record_type.to_string(),
                field: "address".to_string(),
            }),
            Some(FieldValue::Single(address)) => Ok(RecordData::AAAA {
                address: address.to_uppercase(),
            }),
            Some(FieldValue::Multi(_)) => Err(list_value_error(record_type, "address")),
        },
        RecordType::Srv => Ok(RecordData::SRV {
            priority: int_field(fields, record_type, "priority")?,
            weight: int_field(fields, record_type, "weight")?,
            port: int_field(fields, record_type, "port")?,
            target: string_field(fields, record_type, "target")?,
        }),
        RecordType::Naptr => Ok(RecordData::NAPTR {
            order: int_field(fields, record_type, "order")?,
            preference: int_field(fields, record_type, "preference")?,
            flags: string_field(fields, record_type, "flags")?,
            services: string_field(fields, record_type, "service")?,
            regexp: string_field(fields, record_type, "regexp")?,
            replacement: string_field(fields, record_type, "replacement")?,
        }),
        RecordType::Cert => Ok(RecordData::CERT {
            format: int_field(fields, record_type, "certType")?,
            tag: int_field(fields, record_type, "keyTag")?,
            algorithm: int_field(fields, record_type, "algorithm")?,
            certificate: string_field(fields, record_type, "cert")?,
        }),
        RecordType::Sshfp => Ok(RecordData::SSHFP {
            algorithm: int_field(fields, record_type, "algorithm")?,
            fptype: int_field(fields, record_type, "digestType")?,
            fingerprint: string_field(fields, record_type, "fingerprint")?,
        }),
        RecordType::Spf => Ok(RecordData::SPF {
            txtdata: joined_field(fields, record_type)?,
        }),
    }
}

/// Write canonical RDATA as its named wire fields into an output object.
///
/// Header fields (`name`, `type`, `ttl`) are the caller's responsibility;
/// [`RecordData::record_type`] gives the tag to write. Strings are written as
/// JSON strings, integers as JSON numbers, and TXT/SPF text is split back
/// into its `strings` wire value. [`RecordData::Unknown`] fields are written
/// in map order and must all be single strings.
pub fn write_rdata_fields(data: &RecordData, object: &mut Map<String, Value>) -> Result<()> {
    match data {
        RecordData::A { address } | RecordData::AAAA { address } => {
            object.insert("address".to_string(), Value::String(address.clone()));
        }
        RecordData::NS { nsdname } => {
            object.insert("target".to_string(), Value::String(nsdname.clone()));
        }
        RecordData::CNAME { cname } => {
            object.insert("target".to_string(), Value::String(cname.clone()));
        }
        RecordData::PTR { ptrdname } => {
            object.insert("target".to_string(), Value::String(ptrdname.clone()));
        }
        RecordData::MX {
            preference,
            exchange,
        } => {
            object.insert("priority".to_string(), Value::from(*preference));
            object.insert("target".to_string(), Value::String(exchange.clone()));
        }
        RecordData::TXT { txtdata } | RecordData::SPF { txtdata } => {
            object.insert("strings".to_string(), strings::split_segments(txtdata));
        }
        RecordData::SRV {
            priority,
            weight,
            port,
            target,
        } => {
            object.insert("priority".to_string(), Value::from(*priority));
            object.insert("weight".to_string(), Value::from(*weight));
            object.insert("port".to_string(), Value::from(*port));
            object.insert("target".to_string(), Value::String(target.clone()));
        }
        RecordData::NAPTR {
            order,
            preference,
            flags,
            services,
            regexp,
            replacement,
        } => {
            object.insert("order".to_string(), Value::from(*order));
            object.insert("preference".to_string(), Value::from(*preference));
            object.insert("flags".to_string(), Value::String(flags.clone()));
            object.insert("service".to_string(), Value::String(services.clone()));
            object.insert("regexp".to_string(), Value::String(regexp.clone()));
            object.insert("replacement".to_string(), Value::String(replacement.clone()));
        }
        RecordData::CERT {
            format,
            tag,
            algorithm,
            certificate,
        } => {
            object.insert("certType".to_string(), Value::from(*format));
            object.insert("keyTag".to_string(), Value::from(*tag));
            object.insert("algorithm".to_string(), Value::from(*algorithm));
            object.insert("cert".to_string(), Value::String(certificate.clone()));
        }
        RecordData::SSHFP {
            algorithm,
            fptype,
            fingerprint,
        } => {
            object.insert("algorithm".to_string(), Value::from(*algorithm));
            object.insert("digestType".to_string(), Value::from(*fptype));
            object.insert("fingerprint".to_string(), Value::String(fingerprint.clone()));
        }
        RecordData::Unknown { fields } => {
            for (name, value) in fields.iter() {
                match value {
                    FieldValue::Single(value) => {
                        object.insert(name.to_string(), Value::String(value.clone()));
                    }
                    FieldValue::Multi(_) => {
                        return Err(CodecError::UnencodableData {
                            field: name.to_string(),
                            detail: "unknown-type fields must be single strings".to_string(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

// ============ Field extraction ============

// Only AAAA gets a dedicated missing-field check; for every other type an
// absent value surfaces through these helpers as a value error.

fn string_field(fields: &FieldMap, record_type: RecordType, name: &str) -> Result<String> {
    match fields.get(name) {
        Some(FieldValue::Single(value)) => Ok(value.clone()),
        Some(FieldValue::Multi(_)) => Err(list_value_error(record_type, name)),
        None => Err(absent_value_error(record_type, name)),
    }
}

fn int_field<T>(fields: &FieldMap, record_type: RecordType, name: &str) -> Result<T>
where
    T: FromStr,
{
    let raw = string_field(fields, record_type, name)?;
    raw.parse().map_err(|_| CodecError::InvalidFieldValue {
        record_type: record_type.to_string(),
        field: name.to_string(),
        detail: format!("'{raw}' is not a valid integer"),
    })
}

fn joined_field(fields: &FieldMap, record_type: RecordType) -> Result<String> {
    fields
        .get("strings")
        .map(strings::join_segments)
        .ok_or_else(|| absent_value_error(record_type, "strings"))
}

fn absent_value_error(record_type: RecordType, name: &str) -> CodecError {
    CodecError::InvalidFieldValue {
        record_type: record_type.to_string(),
        field: name.to_string(),
        detail: "value is absent".to_string(),
    }
}

fn list_value_error(record_type: RecordType, name: &str) -> CodecError {
    CodecError::InvalidFieldValue {
        record_type: record_type.to_string(),
        field: name.to_string(),
        detail: "expected a single string, found a string list".to_string(),
    }
}
