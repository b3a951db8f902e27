//! The token scanner.
//!
//! A single left-to-right pass over the tokens:
//! - `--` ends option processing; every later token is positional
//! - `-` alone is positional (stdin/stdout by convention)
//! - `-abc` is expanded in place to `-a -b -c` and processed in that order
//! - `--name=value` / `-n=value` store `value` regardless of declared type
//! - `--name value` consumes `value` only when `name` is declared `string`
//!   and `value` does not start with `-`
//! - anything else not starting with `-` is positional

use std::borrow::Cow;

use crate::config::OptionSchema;
use crate::error::ParseResult;
use crate::parsed::ParsedArgs;
use crate::resolve::{lookup, resolve_short};
use crate::store::store_option_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Positional,
    /// A lone `-`.
    Stdio,
    /// A lone `--`.
    Terminator,
    /// `-a` or the head of a group `-abc` (`rest` is `"bc"`).
    Short { alias: char, rest: &'a str },
    /// `--name`, with the two leading dashes removed. Further dashes are kept.
    Long(&'a str),
}

fn classify(arg: &str) -> Token<'_> {
    let Some(body) = arg.strip_prefix('-') else {
        return Token::Positional;
    };
    match body {
        "" => Token::Stdio,
        "-" => Token::Terminator,
        _ => match body.strip_prefix('-') {
            Some(name) => Token::Long(name),
            None => {
                let mut chars = body.chars();
                // `body` is non-empty here.
                let alias = chars.next().unwrap_or_default();
                Token::Short {
                    alias,
                    rest: chars.as_str(),
                }
            }
        },
    }
}

/// Parse `tokens` against `schema`.
///
/// The caller's tokens are never modified; short groups are expanded in a
/// private working copy. In strict mode the first undeclared or misused option
/// aborts the parse.
pub fn parse<S: AsRef<str>>(
    tokens: &[S],
    schema: &OptionSchema,
    strict: bool,
) -> ParseResult<ParsedArgs> {
    let mut argv: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
    let mut result = ParsedArgs::default();

    tracing::debug!(tokens = argv.len(), options = schema.len(), strict, "parsing arguments");

    let mut pos = 0usize;
    while pos < argv.len() {
        let arg = argv[pos].clone();

        let candidate: Cow<'_, str> = match classify(&arg) {
            Token::Positional | Token::Stdio => {
                tracing::trace!(token = arg.as_str(), "positional");
                result.push_positional(arg.as_str());
                pos += 1;
                continue;
            }
            Token::Terminator => {
                tracing::trace!(remaining = argv.len() - pos - 1, "terminator");
                for rest in argv.drain(pos + 1..) {
                    result.push_positional(rest);
                }
                break;
            }
            Token::Short { alias, rest } => {
                if !rest.is_empty() {
                    let expanded: Vec<String> = rest.chars().map(|c| format!("-{c}")).collect();
                    argv.splice(pos + 1..pos + 1, expanded);
                }
                resolve_short(alias, schema)
            }
            Token::Long(name) => Cow::Borrowed(name),
        };

        let (name, inline) = match candidate.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (candidate.as_ref(), None),
        };

        let value = if inline.is_some() {
            inline
        } else {
            match argv.get(pos + 1) {
                Some(next) if !next.starts_with('-') && lookup(name, schema).takes_value() => {
                    pos += 1;
                    Some(next.clone())
                }
                _ => None,
            }
        };

        tracing::trace!(token = arg.as_str(), option = name, value = ?value, "option");
        store_option_value(strict, schema, name, value, &mut result)?;
        pos += 1;
    }

    Ok(result)
}
