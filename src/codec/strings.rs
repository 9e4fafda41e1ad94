//! Quoted multi-string convention for TXT/SPF-like record types.
//!
//! The wire carries the segments as a JSON array; the canonical side holds a
//! single string with each segment wrapped in double quotes and joined by one
//! space, e.g. `["foo", "bar"]` ↔ `"foo" "bar"`.

use serde_json::Value;

use crate::types::FieldValue;

/// The exact segment boundary in the quoted-joined form.
const SEGMENT_DELIMITER: &str = "\" \"";

/// Join wire segments into the canonical quoted form.
///
/// A [`FieldValue::Single`] passes through unchanged — a scalar `strings`
/// field on the wire is already in its canonical shape.
#[must_use]
pub fn join_segments(value: &FieldValue) -> String {
    match value {
        FieldValue::Multi(segments) => {
            let mut joined = String::new();
            for (i, segment) in segments.iter().enumerate() {
                if i > 0 {
                    joined.push(' ');
                }
                joined.push('"');
                joined.push_str(segment);
                joined.push('"');
            }
            joined
        }
        FieldValue::Single(value) => value.clone(),
    }
}

/// Split the canonical quoted form back into its wire value.
///
/// A string with a distinct leading and trailing double quote is stripped and
/// split into a JSON array; anything else is written back as a single JSON
/// string scalar.
///
/// Splitting is on the literal `" "` delimiter with no escaping: a genuine
/// segment containing that exact substring splits incorrectly. That is the
/// wire contract, not a bug to fix here.
#[must_use]
pub fn split_segments(joined: &str) -> Value {
    if joined.len() >= 2 && joined.starts_with('"') && joined.ends_with('"') {
        let inner = &joined[1..joined.len() - 1];
        Value::Array(
            inner
                .split(SEGMENT_DELIMITER)
                .map(|segment| Value::String(segment.to_string()))
                .collect(),
        )
    } else {
        Value::String(joined.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ---- join_segments ----

    #[test]
    fn join_two_segments() {
        let value = FieldValue::Multi(vec!["foo".to_string(), "bar".to_string()]);
        assert_eq!(join_segments(&value), "\"foo\" \"bar\"");
    }

    #[test]
    fn join_single_segment() {
        let value = FieldValue::Multi(vec!["only".to_string()]);
        assert_eq!(join_segments(&value), "\"only\"");
    }

    #[test]
    fn join_empty_list() {
        let value = FieldValue::Multi(vec![]);
        assert_eq!(join_segments(&value), "");
    }

    #[test]
    fn join_scalar_passes_through() {
        let value = FieldValue::Single("v=spf1 include:example.com -all".to_string());
        assert_eq!(join_segments(&value), "v=spf1 include:example.com -all");
    }

    // ---- split_segments ----

    #[test]
    fn split_two_segments() {
        assert_eq!(split_segments("\"foo\" \"bar\""), json!(["foo", "bar"]));
    }

    #[test]
    fn split_single_segment() {
        assert_eq!(split_segments("\"only\""), json!(["only"]));
    }

    #[test]
    fn split_unquoted_scalar() {
        assert_eq!(
            split_segments("v=spf1 -all"),
            json!("v=spf1 -all")
        );
    }

    #[test]
    fn split_empty_string() {
        assert_eq!(split_segments(""), json!(""));
    }

    #[test]
    fn split_lone_quote_is_scalar() {
        // One character cannot be both the leading and the trailing quote.
        assert_eq!(split_segments("\""), json!("\""));
    }

    #[test]
    fn split_quoted_empty() {
        assert_eq!(split_segments("\"\""), json!([""]));
    }

    #[test]
    fn split_delimiter_inside_segment_splits() {
        // Pins the documented fragility: an embedded delimiter is
        // indistinguishable from a segment boundary.
        let value = FieldValue::Multi(vec!["x\" \"y".to_string()]);
        let joined = join_segments(&value);
        assert_eq!(joined, "\"x\" \"y\"");
        assert_eq!(split_segments(&joined), json!(["x", "y"]));
    }

    #[test]
    fn round_trip_segments() {
        let value = FieldValue::Multi(vec!["first".to_string(), "second".to_string()]);
        let joined = join_segments(&value);
        assert_eq!(split_segments(&joined), json!(["first", "second"]));
    }
}
