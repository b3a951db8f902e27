//! The result record returned by a parse call.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A single stored value: the text given to an option, or `true` when the
/// option was used as a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Str(String),
    Flag,
}

impl ArgValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            Self::Flag => None,
        }
    }
}

impl From<Option<String>> for ArgValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Flag, Self::Str)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl Serialize for ArgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Flag => serializer.serialize_bool(true),
        }
    }
}

/// What `values[name]` holds: a scalar, or a list for `multiple` options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Single(ArgValue),
    Multiple(Vec<ArgValue>),
}

impl OptionValue {
    /// The most recent value (the scalar itself, or the last list entry).
    pub fn last(&self) -> Option<&ArgValue> {
        match self {
            Self::Single(v) => Some(v),
            Self::Multiple(vs) => vs.last(),
        }
    }

    pub fn as_slice(&self) -> &[ArgValue] {
        match self {
            Self::Single(v) => std::slice::from_ref(v),
            Self::Multiple(vs) => vs.as_slice(),
        }
    }
}

/// Parsed flags, values and positionals.
///
/// `flags` and `values` keep first-encounter order of option names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArgs {
    flags: IndexMap<String, bool>,
    values: IndexMap<String, OptionValue>,
    positionals: Vec<String>,
}

impl ParsedArgs {
    /// Whether the option was used at all (in any form).
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn value(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// The last string value given to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(OptionValue::last)
            .and_then(ArgValue::as_str)
    }

    /// Every stored value for `name` (one element for non-`multiple` options).
    pub fn get_all(&self, name: &str) -> Option<&[ArgValue]> {
        self.values.get(name).map(OptionValue::as_slice)
    }

    pub fn flags(&self) -> &IndexMap<String, bool> {
        &self.flags
    }

    pub fn values(&self) -> &IndexMap<String, OptionValue> {
        &self.values
    }

    pub fn positionals(&self) -> &[String] {
        self.positionals.as_slice()
    }
}

impl ParsedArgs {
    pub(crate) fn push_flag(&mut self, name: &str) {
        self.flags.insert(name.to_string(), true);
    }

    pub(crate) fn set_value(&mut self, name: &str, value: ArgValue) {
        self.values
            .insert(name.to_string(), OptionValue::Single(value));
    }

    /// Append to the list for `name`, starting one if needed. Only used for
    /// `multiple` options, which never hold a single value.
    pub(crate) fn push_value(&mut self, name: &str, value: ArgValue) {
        let slot = self
            .values
            .entry(name.to_string())
            .or_insert_with(|| OptionValue::Multiple(Vec::new()));
        debug_assert!(
            matches!(slot, OptionValue::Multiple(_)),
            "'{name}' already holds a single value"
        );
        if let OptionValue::Multiple(vs) = slot {
            vs.push(value);
        }
    }

    pub(crate) fn push_positional(&mut self, token: impl Into<String>) {
        self.positionals.push(token.into());
    }
}
