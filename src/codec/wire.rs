//! Wire decoder: one provider recordset JSON object → [`GenericRecord`].

use serde_json::Value;

use crate::error::{CodecError, Result};
use crate::types::{FieldValue, GenericRecord};

/// Decode one record object from its JSON text.
///
/// Malformed or truncated JSON surfaces as [`CodecError::Malformed`].
pub fn decode_record(json: &str) -> Result<GenericRecord> {
    let value: Value = serde_json::from_str(json).map_err(|e| CodecError::Malformed {
        detail: e.to_string(),
    })?;
    record_from_value(&value)
}

/// Decode one record object from an already-parsed JSON value.
///
/// Recognizes the header keys `name`, `type`, and `ttl`; a `class` key is
/// consumed and discarded. Every other key is a type-specific field: `null`
/// values are dropped, `strings` may be an array or a scalar, and any other
/// scalar is coerced to its string form. The input must be a JSON object.
pub fn record_from_value(value: &Value) -> Result<GenericRecord> {
    let Value::Object(object) = value else {
        return Err(CodecError::Malformed {
            detail: format!("expected a JSON object, got {}", value_kind(value)),
        });
    };

    let mut record = GenericRecord::default();
    for (key, value) in object {
        match key.as_str() {
            "name" => record.name = Some(scalar_to_string(key, value)?),
            "type" => record.record_type = Some(scalar_to_string(key, value)?),
            "ttl" => record.ttl = Some(ttl_from_value(value)?),
            // The surrounding system assumes a single implicit class.
            "class" => {}
            "strings" => {
                // Peek at the value kind: an array is the normal shape, any
                // scalar falls back to a single string under the same key.
                let value = match value {
                    Value::Array(items) => {
                        let mut segments = Vec::with_capacity(items.len());
                        for item in items {
                            segments.push(scalar_to_string(key, item)?);
                        }
                        FieldValue::Multi(segments)
                    }
                    other => {
                        log::debug!("field 'strings' is not an array, reading a single string");
                        FieldValue::Single(scalar_to_string(key, other)?)
                    }
                };
                record.fields.insert(key.clone(), value);
            }
            _ => match value {
                // A null field is consumed without being stored.
                Value::Null => {}
                other => {
                    record
                        .fields
                        .insert(key.clone(), FieldValue::Single(scalar_to_string(key, other)?));
                }
            },
        }
    }

    Ok(record)
}

/// Read a scalar as its string form, the way a lenient token reader does:
/// numbers and booleans coerce, nested values are a stream error.
fn scalar_to_string(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(CodecError::Malformed {
            detail: format!(
                "expected a scalar for field '{field}', got {}",
                value_kind(value)
            ),
        }),
    }
}

/// Read the `ttl` header as an integer, accepting a JSON number or a decimal
/// string.
fn ttl_from_value(value: &Value) -> Result<u32> {
    let out_of_range = || CodecError::Malformed {
        detail: format!("ttl '{value}' is not an unsigned 32-bit integer"),
    };
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(out_of_range),
        Value::String(s) => s.parse::<u32>().map_err(|_| out_of_range()),
        _ => Err(CodecError::Malformed {
            detail: format!("expected an integer for field 'ttl', got {}", value_kind(value)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
