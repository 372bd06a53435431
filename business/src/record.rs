//! Records as returned by the remote API, and the raw form input used to
//! build create/update payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ustr::Ustr;

/// Identifier assigned by the remote service. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Coerced JSON object sent on create/update.
pub type Payload = Map<String, Value>;

/// One entity instance. `id` is mandatory; every other field is opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// The value of `name`, treating `null` the same as an absent field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Display text of a scalar field; `None` means missing.
    pub fn text(&self, name: &str) -> Option<String> {
        if name == "id" {
            return Some(self.id.to_string());
        }
        self.get(name).map(scalar_text)
    }
}

/// Text form of a JSON value as it would appear in a form input or table cell.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Raw field inputs keyed by field name, exactly as typed.
///
/// Absent keys read as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<Ustr, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> &str {
        self.values
            .get(&Ustr::from(field))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(Ustr::from(field), value.into());
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Overlay every entry of `other` onto `self`.
    pub fn merge(&mut self, other: &Self) {
        for (k, v) in &other.values {
            self.values.insert(*k, v.clone());
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (k, v) in iter {
            form.set(k.as_ref(), v);
        }
        form
    }
}
