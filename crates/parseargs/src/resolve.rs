//! Map option names as written on the command line to schema entries.

use std::borrow::Cow;

use crate::config::{OptionConfig, OptionSchema};

/// An option name after alias resolution, with its declaration if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub name: &'a str,
    pub config: Option<&'a OptionConfig>,
}

impl Resolution<'_> {
    pub fn is_known(&self) -> bool {
        self.config.is_some()
    }

    /// Only a declared `string` option takes the following token as its value.
    pub fn takes_value(&self) -> bool {
        self.config.is_some_and(OptionConfig::takes_value)
    }

    pub fn multiple(&self) -> bool {
        self.config.is_some_and(|c| c.multiple)
    }
}

/// Canonical long name for a short alias.
///
/// The first schema entry declaring `alias` wins. Without a match the alias
/// itself is the option name.
pub fn resolve_short(alias: char, schema: &OptionSchema) -> Cow<'_, str> {
    schema
        .iter()
        .find(|(_, config)| config.short == Some(alias))
        .map(|(name, _)| Cow::Borrowed(name))
        .unwrap_or_else(|| Cow::Owned(alias.to_string()))
}

/// Look up a long name. Unknown names resolve to themselves with no config.
pub fn lookup<'a>(name: &'a str, schema: &'a OptionSchema) -> Resolution<'a> {
    Resolution {
        name,
        config: schema.get(name),
    }
}
