//! Raw tag dictionaries as delivered by an extraction source.
//!
//! A [`RawTags`] value is a flat, ordered mapping from a tool-specific tag key
//! (for example `"ExifIFD:FNumber"` or `"QuickTime:CreationDate"`) to a
//! [`RawValue`]. Nothing in here interprets the keys; that is the job of the
//! [`Mapper`](crate::exif::Mapper).

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::record::serialize_number;

/// A single raw tag value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl RawValue {
    /// The trimmed text of a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s.trim()),
            _ => None,
        }
    }

    /// The value as a number, parsing `Text` if it holds a plain decimal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) if n.is_finite() => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// `true` for empty/whitespace text and empty lists.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Text(s) => s.trim().is_empty(),
            RawValue::Number(_) => false,
            RawValue::List(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }

    /// Convert a JSON scalar or array into a raw value.
    ///
    /// Returns `None` for `null`, nested objects, and arrays holding
    /// non-scalar elements.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value as Json;

        match value {
            Json::String(s) => Some(RawValue::Text(s.clone())),
            Json::Number(n) => n.as_f64().map(RawValue::Number),
            Json::Bool(b) => Some(RawValue::Text(b.to_string())),
            Json::Array(items) => items
                .iter()
                .map(|item| match item {
                    Json::String(s) => Some(s.clone()),
                    Json::Number(n) => Some(n.to_string()),
                    Json::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(RawValue::List),
            Json::Null | Json::Object(_) => None,
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Text(s) => serializer.serialize_str(s),
            RawValue::Number(n) => serialize_number(*n, serializer),
            RawValue::List(items) => items.serialize(serializer),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<Vec<String>> for RawValue {
    fn from(items: Vec<String>) -> Self {
        RawValue::List(items)
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(items: Vec<&str>) -> Self {
        RawValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// An ordered raw tag dictionary.
///
/// Keys are unique; inserting an existing key replaces its value in place and
/// keeps the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTags {
    entries: Vec<(String, RawValue)>,
}

impl RawTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a tag.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build a dictionary from one JSON object of a tag dump.
    ///
    /// Values that cannot be represented as a [`RawValue`] are skipped.
    /// Returns `None` if `value` is not an object.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut tags = RawTags::new();
        for (key, value) in object {
            match RawValue::from_json(value) {
                Some(raw) => tags.insert(key.clone(), raw),
                None => log::debug!("Skipping non-scalar tag {key}"),
            }
        }
        Some(tags)
    }
}

impl<K, V> FromIterator<(K, V)> for RawTags
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = RawTags::new();
        for (key, value) in iter {
            tags.insert(key, value);
        }
        tags
    }
}

impl Serialize for RawTags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
