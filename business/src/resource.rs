//! Static per-resource declarations: fields, coercions, validation rules and
//! table columns.
//!
//! A resource is pure data. The controller reads it to build payloads from
//! form input, to validate before any network call, and to render rows.

use chrono::NaiveDate;
use serde_json::{Number, Value};

use crate::record::{FormValues, Payload, Record, scalar_text};

/// How a raw text input becomes a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Trimmed text.
    Text,
    /// Trimmed, upper-cased text (ISO codes).
    Upper,
    /// Any decimal number.
    Number,
    /// Whole number, used for foreign keys.
    Integer,
    /// Calendar date in `YYYY-MM-DD`.
    Date,
    /// One of a fixed set of options.
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub coercion: Coercion,
    /// Raw value used when the input is empty, and what a reset form shows.
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, coercion: Coercion) -> Self {
        Self {
            name,
            label,
            required: false,
            coercion,
            default: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// Coerce one raw input. `Ok(None)` means the field is missing.
    pub fn coerce(&self, raw: &str) -> Result<Option<Value>, String> {
        let trimmed = raw.trim();
        let trimmed = if trimmed.is_empty() {
            match self.default {
                Some(default) => default,
                None => return Ok(None),
            }
        } else {
            trimmed
        };

        let value = match self.coercion {
            Coercion::Text => Value::String(trimmed.to_owned()),
            Coercion::Upper => Value::String(trimmed.to_uppercase()),
            Coercion::Number => {
                let number = trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .ok_or_else(|| format!("{} must be a number.", self.label))?;
                Value::Number(number)
            }
            Coercion::Integer => {
                let number = trimmed
                    .parse::<i64>()
                    .map_err(|_err| format!("{} must be a whole number.", self.label))?;
                Value::Number(number.into())
            }
            Coercion::Date => {
                let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .map_err(|_err| format!("{} must be a date (YYYY-MM-DD).", self.label))?;
                Value::String(date.format("%Y-%m-%d").to_string())
            }
            Coercion::Choice(options) => {
                let choice = options
                    .iter()
                    .find(|option| option.eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| {
                        format!("{} must be one of: {}.", self.label, options.join(", "))
                    })?;
                Value::String((*choice).to_owned())
            }
        };
        Ok(Some(value))
    }
}

/// What a table column shows.
#[derive(Debug, Clone, Copy)]
pub enum ColumnKind {
    Id,
    Field(&'static str),
    /// Two fields shown as `a / b`, each falling back to the placeholder.
    Pair(&'static str, &'static str),
    /// A value computed from the whole record.
    Derived(fn(&Record) -> Option<String>),
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub kind: ColumnKind,
    /// Shown for missing values.
    pub placeholder: &'static str,
}

impl ColumnSpec {
    pub const fn id() -> Self {
        Self {
            header: "ID",
            kind: ColumnKind::Id,
            placeholder: "",
        }
    }

    pub const fn field(header: &'static str, name: &'static str) -> Self {
        Self {
            header,
            kind: ColumnKind::Field(name),
            placeholder: "",
        }
    }

    pub const fn pair(header: &'static str, a: &'static str, b: &'static str) -> Self {
        Self {
            header,
            kind: ColumnKind::Pair(a, b),
            placeholder: "-",
        }
    }

    pub const fn derived(header: &'static str, compute: fn(&Record) -> Option<String>) -> Self {
        Self {
            header,
            kind: ColumnKind::Derived(compute),
            placeholder: "",
        }
    }

    pub const fn or(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn cell(&self, record: &Record) -> String {
        let or_placeholder = |value: Option<String>| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| self.placeholder.to_owned())
        };
        match self.kind {
            ColumnKind::Id => record.id().to_string(),
            ColumnKind::Field(name) => or_placeholder(record.get(name).map(scalar_text)),
            ColumnKind::Pair(a, b) => format!(
                "{} / {}",
                or_placeholder(record.text(a)),
                or_placeholder(record.text(b))
            ),
            ColumnKind::Derived(compute) => or_placeholder(compute(record)),
        }
    }
}

/// Cross-field rule run after coercion. `Err` carries the message shown to the user.
pub type Rule = fn(&Payload) -> Result<(), String>;

#[derive(Debug, Clone, Copy)]
pub struct ResourceConfig {
    /// Name used on the command line, e.g. `countries`.
    pub key: &'static str,
    /// REST path segment, e.g. `paises`.
    pub path: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    pub fields: &'static [FieldSpec],
    pub columns: &'static [ColumnSpec],
    /// Fields matched by the live filter. `id` is allowed.
    pub searchable: &'static [&'static str],
    pub rules: &'static [Rule],
    pub empty_message: &'static str,
    pub delete_prompt: &'static str,
    /// Shown instead of the generic save failure when the server gives no detail.
    pub save_failure_hint: Option<&'static str>,
}

impl ResourceConfig {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    /// Form contents after a reset: defaults only.
    pub fn default_form(&self) -> FormValues {
        self.fields
            .iter()
            .filter_map(|f| f.default.map(|d| (f.name, d)))
            .collect()
    }

    /// Form contents for editing `record`; missing values become empty text.
    pub fn form_from_record(&self, record: &Record) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name, record.text(f.name).unwrap_or_default()))
            .collect()
    }

    /// Validate and coerce form input into a payload.
    ///
    /// Required fields are checked first, in declaration order, then each
    /// coercion, then the cross-field rules. The first failure wins.
    pub fn build_payload(&self, form: &FormValues) -> Result<Payload, String> {
        if let Some(missing) = self
            .fields
            .iter()
            .find(|f| f.required && f.default.is_none() && form.get(f.name).trim().is_empty())
        {
            return Err(format!("{} is required.", missing.label));
        }

        let mut payload = Payload::new();
        for field in self.fields {
            let value = field.coerce(form.get(field.name))?;
            payload.insert(field.name.to_owned(), value.unwrap_or(Value::Null));
        }

        for rule in self.rules {
            rule(&payload)?;
        }
        Ok(payload)
    }

    /// Case-insensitive substring match over the searchable fields.
    /// `needle` must already be uppercase.
    pub fn matches(&self, record: &Record, needle: &str) -> bool {
        self.searchable.iter().any(|name| {
            record
                .text(name)
                .is_some_and(|text| text.to_uppercase().contains(needle))
        })
    }
}

/// Payload helpers for rules.
pub fn payload_number(payload: &Payload, name: &str) -> Option<f64> {
    payload.get(name).and_then(Value::as_f64)
}

pub fn payload_str<'a>(payload: &'a Payload, name: &str) -> Option<&'a str> {
    payload.get(name).and_then(Value::as_str)
}

pub fn payload_has(payload: &Payload, name: &str) -> bool {
    payload.get(name).is_some_and(|v| !v.is_null())
}
