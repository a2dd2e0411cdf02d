//! Document model: ordered test case records plus flat string parameters.
//!
//! A [`Document`] is the single owned value the application edits. Editors
//! never hold a mutable reference to it; they compute replacement slices
//! ([`Record`] or [`Params`]) which the owner merges back with
//! [`Document::replace_record`] and [`Document::replace_params`].

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Prefix for generated field and parameter names
pub const GENERATED_PARAM_PREFIX: &str = "new_param_";

/// Prefix for generated record identifiers
pub const GENERATED_RECORD_PREFIX: &str = "new_testcase_";

/// Ordered mapping of field name to value for one record
pub type FieldSet = IndexMap<String, FieldValue>;

/// Ordered mapping of parameter name to value
pub type Params = IndexMap<String, String>;

// ─────────────────────────────────────────────────────────────────────────────
// Field Values
// ─────────────────────────────────────────────────────────────────────────────

/// A record field value: free text or a boolean flag.
///
/// Serialized as a native JSON string or boolean. Any other JSON type is
/// rejected when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// Whether `other` has the same variant as `self`
    pub fn same_kind(&self, other: &FieldValue) -> bool {
        self.is_flag() == other.is_flag()
    }

    /// Convert between text and flag.
    ///
    /// Text `"true"` or `"True"` becomes `Flag(true)`, any other text becomes
    /// `Flag(false)`. Flags become the literal strings `"True"` / `"False"`.
    pub fn converted(&self) -> FieldValue {
        match self {
            Self::Text(s) => Self::Flag(matches!(s.as_str(), "true" | "True")),
            Self::Flag(true) => Self::text("True"),
            Self::Flag(false) => Self::text("False"),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(true) => f.write_str("True"),
            Self::Flag(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// One named test case.
///
/// Held as an explicit `(id, fields)` pair so a record always has exactly
/// one identifier. On the wire it is a single-entry object
/// `{ "<id>": { ...fields } }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub id: String,
    pub fields: FieldSet,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: FieldSet::new(),
        }
    }

    pub fn with_fields(id: impl Into<String>, fields: FieldSet) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Builder helper that appends one field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.id, &self.fields)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a test case object with exactly one key")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
                let Some((id, fields)) = map.next_entry::<String, FieldSet>()? else {
                    return Err(de::Error::invalid_length(0, &self));
                };
                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom(format!(
                        "test case `{id}` must be the only key in its object"
                    )));
                }
                Ok(Record { id, fields })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────────────────────────────────────

/// The full editable state: ordered records plus the parameter mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "testcases")]
    pub records: Vec<Record>,

    pub params: Params,
}

impl Document {
    /// Create an empty document (no records, no parameters)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.params.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Merge an updated record back at `index`.
    ///
    /// Only that position changes. Returns `false` (and changes nothing) if
    /// `index` is out of range.
    pub fn replace_record(&mut self, index: usize, record: Record) -> bool {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => {
                tracing::warn!(
                    "Ignoring update for record {} (document has {})",
                    index,
                    self.records.len()
                );
                false
            }
        }
    }

    /// Replace the parameter mapping wholesale
    pub fn replace_params(&mut self, params: Params) {
        self.params = params;
    }

    /// Append a new record with a generated id and a copy of `template`.
    ///
    /// Returns the index of the new record.
    pub fn add_record(&mut self, template: &FieldSet) -> usize {
        let id = self.next_record_id();
        self.records.push(Record::with_fields(id, template.clone()));
        self.records.len() - 1
    }

    /// Remove the record at `index`
    pub fn remove_record(&mut self, index: usize) -> Option<Record> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Generated id for the next record: `new_testcase_<n+1>`, bumped until
    /// no existing record uses it.
    pub fn next_record_id(&self) -> String {
        unique_name(GENERATED_RECORD_PREFIX, self.records.len() + 1, |candidate| {
            self.records.iter().any(|r| r.id == candidate)
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generated Names
// ─────────────────────────────────────────────────────────────────────────────

/// Build `<prefix><n>` starting at `start`, incrementing `n` while `taken`
/// reports a collision.
pub fn unique_name(prefix: &str, start: usize, taken: impl Fn(&str) -> bool) -> String {
    let mut n = start;
    loop {
        let candidate = format!("{prefix}{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Generated name for a new field: `new_param_<field count>`, made unique
pub fn next_field_name(fields: &FieldSet) -> String {
    unique_name(GENERATED_PARAM_PREFIX, fields.len(), |c| {
        fields.contains_key(c)
    })
}

/// Generated name for a new parameter: `new_param_<param count>`, made unique
pub fn next_param_name(params: &Params) -> String {
    unique_name(GENERATED_PARAM_PREFIX, params.len(), |c| {
        params.contains_key(c)
    })
}
