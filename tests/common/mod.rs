//! Shared helpers for the codec integration tests.

#![allow(dead_code)]

use serde_json::{Map, Value};

use dns_recordset_codec::{RecordData, Result, decode_record, parse_record_data, write_rdata_fields};

/// Assert that a `Result` is `Ok` and unwrap it (failing the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Assert that an `Option` is `Some` and unwrap it (failing the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// One well-formed canonical sample per supported record type.
///
/// The AAAA sample is already uppercase so the decode normalization is an
/// identity for round-trip comparisons.
pub fn sample_record_data() -> Vec<(&'static str, RecordData)> {
    vec![
        (
            "A",
            RecordData::A {
                address: "192.0.2.1".to_string(),
            },
        ),
        (
            "NS",
            RecordData::NS {
                nsdname: "ns1.example.com.".to_string(),
            },
        ),
        (
            "CNAME",
            RecordData::CNAME {
                cname: "origin.example.com.".to_string(),
            },
        ),
        (
            "PTR",
            RecordData::PTR {
                ptrdname: "host.example.com.".to_string(),
            },
        ),
        (
            "MX",
            RecordData::MX {
                preference: 10,
                exchange: "mail.example.com.".to_string(),
            },
        ),
        (
            "TXT",
            RecordData::TXT {
                txtdata: "\"foo\" \"bar\"".to_string(),
            },
        ),
        (
            "AAAA",
            RecordData::AAAA {
                address: "2001:DB8::1".to_string(),
            },
        ),
        (
            "SRV",
            RecordData::SRV {
                priority: 0,
                weight: 5,
                port: 443,
                target: "sip.example.com.".to_string(),
            },
        ),
        (
            "NAPTR",
            RecordData::NAPTR {
                order: 100,
                preference: 50,
                flags: "s".to_string(),
                services: "SIP+D2U".to_string(),
                regexp: String::new(),
                replacement: "_sip._udp.example.com.".to_string(),
            },
        ),
        (
            "CERT",
            RecordData::CERT {
                format: 1,
                tag: 12345,
                algorithm: 5,
                certificate: "TUlJQ1d3bUNlcnQ=".to_string(),
            },
        ),
        (
            "SSHFP",
            RecordData::SSHFP {
                algorithm: 4,
                fptype: 2,
                fingerprint: "123456789abcdef67890123456789abcdef67890".to_string(),
            },
        ),
        (
            "SPF",
            RecordData::SPF {
                txtdata: "\"v=spf1 include:example.com -all\"".to_string(),
            },
        ),
    ]
}

/// Build a full wire object: header keys plus the encoded RDATA fields.
pub fn wire_object(tag: &str, name: &str, ttl: u32, data: &RecordData) -> Result<Map<String, Value>> {
    let mut object = Map::new();
    object.insert("name".to_string(), Value::String(name.to_string()));
    object.insert("type".to_string(), Value::String(tag.to_string()));
    object.insert("ttl".to_string(), Value::from(ttl));
    write_rdata_fields(data, &mut object)?;
    Ok(object)
}

/// Encode canonical data to the wire and decode it back through the full
/// pipeline.
pub fn roundtrip(tag: &str, data: &RecordData) -> Result<RecordData> {
    let object = wire_object(tag, "roundtrip.example.com.", 600, data)?;
    let json = Value::Object(object).to_string();
    let record = decode_record(&json)?;
    parse_record_data(&record)
}
