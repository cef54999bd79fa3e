//! Flat record model

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Number, Value};
use std::io;

/// A single field value. Only `String` values are eligible for classification;
/// everything else passes through unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
    /// Array or object carried verbatim
    Nested(Value),
}

impl FieldValue {
    /// The string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::String(s),
            Value::Number(n) => Self::Number(n),
            Value::Bool(b) => Self::Bool(b),
            Value::Null => Self::Null,
            nested @ (Value::Array(_) | Value::Object(_)) => Self::Nested(nested),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::String(s) => Value::String(s),
            FieldValue::Number(n) => Value::Number(n),
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Null => Value::Null,
            FieldValue::Nested(v) => v,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A flat, insertion-ordered mapping from field name to value.
///
/// Redaction only ever replaces values of existing keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object into a record. Returns `None` when the text is not
    /// valid JSON or the top-level value is not an object.
    pub fn parse(text: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(text).ok()? {
            Value::Object(map) => Some(Self::from(map)),
            _ => None,
        }
    }

    /// Append a field, or overwrite it in place if the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Overwrite the value of an existing key. Returns `false` (and leaves the
    /// record untouched) when the key is absent.
    pub fn replace(&mut self, key: &str, value: FieldValue) -> bool {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Find a field by ASCII case-insensitive key, returning the stored key
    pub fn find_ignore_case(&self, key: &str) -> Option<(&str, &FieldValue)> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Render as a JSON object with `", "` / `": "` separators and non-ASCII
    /// characters escaped, keeping field order
    pub fn to_json(&self) -> Result<String> {
        let value = Value::from(self.clone());
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, SpacedAsciiFormatter);
        value.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// JSON formatter producing `{"a": 1, "b": [1, 2]}` with `\uXXXX` escapes
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(
            record
                .fields
                .into_iter()
                .map(|(k, v)| (k, v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
