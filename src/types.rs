use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============ Record Type Table ============

/// DNS record types the codec maps to typed RDATA.
///
/// Serialized as the uppercase wire tags (`"A"`, `"AAAA"`, `"NAPTR"`, etc.).
/// A tag outside this table is not an error: the record falls through to the
/// [`RecordData::Unknown`] passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// Name server record.
    Ns,
    /// Canonical name (alias) record.
    Cname,
    /// Pointer (reverse lookup) record.
    Ptr,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// IPv6 address record.
    Aaaa,
    /// Service locator record.
    Srv,
    /// Naming authority pointer record.
    Naptr,
    /// Certificate record.
    Cert,
    /// SSH fingerprint record.
    Sshfp,
    /// Sender Policy Framework record.
    Spf,
}

impl RecordType {
    /// Look up a wire type tag in the supported-type table.
    ///
    /// The match is case-sensitive and exact: `"aaaa"` or `"Mx"` are not
    /// recognized and the record takes the unknown-type passthrough path.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "A" => Some(Self::A),
            "NS" => Some(Self::Ns),
            "CNAME" => Some(Self::Cname),
            "PTR" => Some(Self::Ptr),
            "MX" => Some(Self::Mx),
            "TXT" => Some(Self::Txt),
            "AAAA" => Some(Self::Aaaa),
            "SRV" => Some(Self::Srv),
            "NAPTR" => Some(Self::Naptr),
            "CERT" => Some(Self::Cert),
            "SSHFP" => Some(Self::Sshfp),
            "SPF" => Some(Self::Spf),
            _ => None,
        }
    }

    /// The uppercase wire tag for this record type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Ns => "NS",
            Self::Cname => "CNAME",
            Self::Ptr => "PTR",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Aaaa => "AAAA",
            Self::Srv => "SRV",
            Self::Naptr => "NAPTR",
            Self::Cert => "CERT",
            Self::Sshfp => "SSHFP",
            Self::Spf => "SPF",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Field Values ============

/// A single wire field value: one string, or an ordered list of
/// character-string segments (the `strings` field of TXT/SPF-like types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single string value.
    Single(String),
    /// Ordered character-string segments.
    Multi(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(segments: Vec<String>) -> Self {
        Self::Multi(segments)
    }
}

/// Insertion-ordered map of wire field name to [`FieldValue`].
///
/// Field emission order is observable on the wire for the unknown-type path,
/// so iteration follows insertion order. Keys are unique; inserting an
/// existing key overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    /// Create an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, overwriting in place if the name is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter().position(|(n, _)| *n == name) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a field by wire name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of fields in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

// Serialized as a plain JSON object so the canonical model stays wire-shaped.
impl Serialize for FieldMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldMapVisitor;

        impl<'de> Visitor<'de> for FieldMapVisitor {
            type Value = FieldMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of record fields")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<FieldMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = FieldMap::new();
                while let Some((name, value)) = access.next_entry::<String, FieldValue>()? {
                    fields.insert(name, value);
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor)
    }
}

// ============ Generic Record ============

/// Decode intermediate form: header fields plus the open bag of type-specific
/// wire fields.
///
/// Produced only by the wire decoder. `record_type` is read before `fields`
/// is interpreted; when the wire omits `type`, mapping degenerates to the
/// unknown-type passthrough.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericRecord {
    /// Record name, if the wire carried a `name` key.
    pub name: Option<String>,
    /// Wire record type tag, if the wire carried a `type` key.
    pub record_type: Option<String>,
    /// Time to live in seconds, if the wire carried a `ttl` key.
    pub ttl: Option<u32>,
    /// Type-specific fields in wire order.
    pub fields: FieldMap,
}

// ============ Canonical RDATA ============

/// Type-safe representation of DNS record data.
///
/// Each variant carries the canonical fields for that record type; the wire
/// field names differ for several types (see the crate-level table).
/// [`Unknown`](Self::Unknown) is the identity passthrough for any type tag
/// outside the supported table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record — maps a hostname to an IPv4 address.
    A {
        /// IPv4 address (e.g., `"192.0.2.1"`).
        address: String,
    },

    /// NS record — authoritative name server.
    NS {
        /// Name server hostname (wire field `target`).
        nsdname: String,
    },

    /// CNAME record — alias from one name to another.
    CNAME {
        /// Target hostname (wire field `target`).
        cname: String,
    },

    /// PTR record — reverse-lookup pointer.
    PTR {
        /// Pointer target hostname (wire field `target`).
        ptrdname: String,
    },

    /// MX record — mail exchange server.
    MX {
        /// Priority, lower is preferred (wire field `priority`).
        preference: u16,
        /// Mail server hostname (wire field `target`).
        exchange: String,
    },

    /// TXT record — one or more character-string segments, held as the
    /// quoted-joined form (e.g. `"foo" "bar"`).
    TXT {
        /// Quoted-joined text content (wire field `strings`).
        txtdata: String,
    },

    /// AAAA record — maps a hostname to an IPv6 address.
    ///
    /// The address is upper-cased when decoded from the wire.
    AAAA {
        /// IPv6 address (e.g., `"2001:DB8::1"`).
        address: String,
    },

    /// SRV record — service locator.
    SRV {
        /// Priority, lower is preferred.
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },

    /// NAPTR record — naming authority pointer.
    NAPTR {
        /// Processing order, lower first.
        order: u16,
        /// Preference among same-order records.
        preference: u16,
        /// Rewrite flags.
        flags: String,
        /// Service parameters (wire field `service`).
        services: String,
        /// Substitution expression.
        regexp: String,
        /// Replacement domain name.
        replacement: String,
    },

    /// CERT record — stored certificate.
    CERT {
        /// Certificate type (wire field `certType`).
        format: u16,
        /// Key tag (wire field `keyTag`).
        tag: u16,
        /// Signing algorithm.
        algorithm: u8,
        /// Base64 certificate payload (wire field `cert`).
        certificate: String,
    },

    /// SSHFP record — SSH public key fingerprint.
    SSHFP {
        /// Public key algorithm.
        algorithm: u8,
        /// Fingerprint digest type (wire field `digestType`).
        fptype: u8,
        /// Hex fingerprint.
        fingerprint: String,
    },

    /// SPF record — sender policy, same quoted-joined shape as TXT.
    SPF {
        /// Quoted-joined policy text (wire field `strings`).
        txtdata: String,
    },

    /// Fallback for record types outside the supported table: the wire
    /// fields pass through unchanged, in wire order.
    Unknown {
        /// Wire fields, verbatim.
        fields: FieldMap,
    },
}

impl RecordData {
    /// Returns the [`RecordType`] discriminant, or `None` for
    /// [`Unknown`](Self::Unknown) data (its tag lives with the caller).
    #[must_use]
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            Self::A { .. } => Some(RecordType::A),
            Self::NS { .. } => Some(RecordType::Ns),
            Self::CNAME { .. } => Some(RecordType::Cname),
            Self::PTR { .. } => Some(RecordType::Ptr),
            Self::MX { .. } => Some(RecordType::Mx),
            Self::TXT { .. } => Some(RecordType::Txt),
            Self::AAAA { .. } => Some(RecordType::Aaaa),
            Self::SRV { .. } => Some(RecordType::Srv),
            Self::NAPTR { .. } => Some(RecordType::Naptr),
            Self::CERT { .. } => Some(RecordType::Cert),
            Self::SSHFP { .. } => Some(RecordType::Sshfp),
            Self::SPF { .. } => Some(RecordType::Spf),
            Self::Unknown { .. } => None,
        }
    }
}
