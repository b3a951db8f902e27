//! Option schema and parse configuration.
//!
//! A schema can be built in code:
//!
//! ```
//! use parseargs::{OptionConfig, OptionSchema};
//!
//! let schema = OptionSchema::new()
//!     .option("output", OptionConfig::string().short('o'))
//!     .option("verbose", OptionConfig::boolean().short('v').multiple());
//! assert_eq!(schema.len(), 2);
//! ```
//!
//! or validated from a loosely-typed JSON object with [`OptionSchema::from_json`]
//! / [`ParseConfig::from_json`]. Validation is eager: a bad entry is reported
//! before any token is scanned.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ParseError, ParseResult};

/// Declared value kind of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Takes a value, either `--name=value` or `--name value`.
    String,
    /// A flag.
    Boolean,
    /// No `type` declared; behaves like a flag unless given `=value`.
    #[default]
    Unspecified,
}

/// One schema entry, keyed by its long name in [`OptionSchema`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub multiple: bool,
}

impl OptionConfig {
    /// An option with no declared type.
    pub fn new() -> Self {
        Self::default()
    }

    /// A value-taking option (`type: "string"`).
    pub fn string() -> Self {
        Self {
            kind: ValueKind::String,
            ..Self::default()
        }
    }

    /// A flag (`type: "boolean"`).
    pub fn boolean() -> Self {
        Self {
            kind: ValueKind::Boolean,
            ..Self::default()
        }
    }

    /// Set the single-character alias (`-o` for `--output`).
    pub fn short(mut self, alias: char) -> Self {
        self.short = Some(alias);
        self
    }

    /// Accumulate repeated uses into a list instead of overwriting.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn takes_value(&self) -> bool {
        self.kind == ValueKind::String
    }
}

/// Mapping from long option name to its declaration.
///
/// Iteration order is insertion order; short alias lookup returns the first
/// entry declaring the alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OptionSchema {
    entries: IndexMap<String, OptionConfig>,
}

impl OptionSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option (builder form of [`OptionSchema::insert`]).
    pub fn option(mut self, name: impl Into<String>, config: OptionConfig) -> Self {
        self.insert(name, config);
        self
    }

    /// Declare an option. Redeclaring a name replaces its config in place.
    pub fn insert(&mut self, name: impl Into<String>, config: OptionConfig) {
        self.entries.insert(name.into(), config);
    }

    pub fn get(&self, name: &str) -> Option<&OptionConfig> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionConfig)> {
        self.entries.iter().map(|(name, config)| (name.as_str(), config))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate a JSON object of the form
    /// `{"name": {"short": "n", "type": "string", "multiple": true}, ...}`.
    pub fn from_json(value: &Value) -> ParseResult<Self> {
        let Value::Object(map) = value else {
            return Err(ParseError::arg_type("options", "of type object", value));
        };

        let mut schema = Self::new();
        for (name, entry) in map {
            let config = option_from_json(name, entry)?;
            schema.insert(name.clone(), config);
        }
        Ok(schema)
    }
}

fn option_from_json(name: &str, entry: &Value) -> ParseResult<OptionConfig> {
    let field = |key: &str| format!("options.{name}.{key}");

    let Value::Object(fields) = entry else {
        return Err(ParseError::arg_type(
            format!("options.{name}"),
            "of type object",
            entry,
        ));
    };

    let mut config = OptionConfig::new();

    if let Some(kind) = fields.get("type") {
        config.kind = match kind {
            Value::String(s) if s == "string" => ValueKind::String,
            Value::String(s) if s == "boolean" => ValueKind::Boolean,
            other => {
                return Err(ParseError::arg_type(
                    field("type"),
                    "one of: 'string', 'boolean'",
                    other,
                ));
            }
        };
    }

    if let Some(short) = fields.get("short") {
        let Value::String(s) = short else {
            return Err(ParseError::arg_type(field("short"), "of type string", short));
        };
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => config.short = Some(c),
            _ => {
                return Err(ParseError::arg_value(
                    field("short"),
                    format!("must be a single character, received '{s}'"),
                ));
            }
        }
    }

    config.multiple = multiple_from_json(name, fields)?;

    for key in fields.keys() {
        if !matches!(key.as_str(), "type" | "short" | "multiple" | "multiples") {
            tracing::debug!(option = name, key = key.as_str(), "ignoring unknown option attribute");
        }
    }

    Ok(config)
}

/// `multiple` is canonical; `multiples` is accepted as an alias.
fn multiple_from_json(name: &str, fields: &Map<String, Value>) -> ParseResult<bool> {
    let mut resolved: Option<bool> = None;
    for key in ["multiple", "multiples"] {
        let Some(value) = fields.get(key) else {
            continue;
        };
        let Value::Bool(flag) = value else {
            return Err(ParseError::arg_type(
                format!("options.{name}.{key}"),
                "of type boolean",
                value,
            ));
        };
        if let Some(prev) = resolved {
            if prev != *flag {
                return Err(ParseError::arg_value(
                    format!("options.{name}.multiples"),
                    format!("conflicts with options.{name}.multiple"),
                ));
            }
        }
        resolved = Some(*flag);
    }
    Ok(resolved.unwrap_or(false))
}

/// Everything a parse call needs.
///
/// `argv: None` means "ask the host for its arguments" (see
/// [`crate::parse_args_with`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseConfig {
    pub argv: Option<Vec<String>>,
    pub strict: bool,
    pub options: OptionSchema,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn argv<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.argv = Some(argv.into_iter().map(Into::into).collect());
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn options(mut self, options: OptionSchema) -> Self {
        self.options = options;
        self
    }

    /// Validate a JSON object `{"argv": [...], "strict": bool, "options": {...}}`.
    ///
    /// Every key is optional.
    pub fn from_json(value: &Value) -> ParseResult<Self> {
        let Value::Object(map) = value else {
            return Err(ParseError::arg_type("config", "of type object", value));
        };

        let mut config = Self::new();

        if let Some(argv) = map.get("argv") {
            let Value::Array(items) = argv else {
                return Err(ParseError::arg_type("argv", "an instance of Array", argv));
            };
            let mut tokens = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                let Value::String(s) = item else {
                    return Err(ParseError::arg_type(
                        format!("argv[{idx}]"),
                        "of type string",
                        item,
                    ));
                };
                tokens.push(s.clone());
            }
            config.argv = Some(tokens);
        }

        if let Some(strict) = map.get("strict") {
            let Value::Bool(strict) = strict else {
                return Err(ParseError::arg_type("strict", "of type boolean", strict));
            };
            config.strict = *strict;
        }

        if let Some(options) = map.get("options") {
            config.options = OptionSchema::from_json(options)?;
        }

        Ok(config)
    }
}
