//! POSIX/GNU-style command-line argument parsing driven by a declarative
//! option schema.
//!
//! ```
//! use parseargs::{OptionConfig, OptionSchema, parse};
//!
//! let schema = OptionSchema::new()
//!     .option("file", OptionConfig::string().short('f'))
//!     .option("verbose", OptionConfig::boolean().short('v'));
//!
//! let parsed = parse(&["-vf", "in.txt", "out.txt"], &schema, true).unwrap();
//! assert!(parsed.flag("verbose"));
//! assert_eq!(parsed.get("file"), Some("in.txt"));
//! assert_eq!(parsed.positionals(), ["out.txt"]);
//! ```
//!
//! The result is split into `flags` (every option seen), `values` (what each
//! option stored) and `positionals`. It serializes to
//! `{"flags": {...}, "values": {...}, "positionals": [...]}`.

pub mod config;
pub mod error;
pub mod host;
pub mod parsed;
pub mod resolve;
pub mod scan;
pub mod store;

pub use config::{OptionConfig, OptionSchema, ParseConfig, ValueKind};
pub use error::{ParseError, ParseResult};
pub use host::{Invocation, host_args, user_args};
pub use parsed::{ArgValue, OptionValue, ParsedArgs};
pub use scan::parse;

/// Parse `config.argv`, or the host's arguments when it is `None`.
pub fn parse_args(config: ParseConfig) -> ParseResult<ParsedArgs> {
    parse_args_with(config, host_args)
}

/// Parse `config.argv`, calling `source` for the tokens only when it is `None`.
pub fn parse_args_with<F>(config: ParseConfig, source: F) -> ParseResult<ParsedArgs>
where
    F: FnOnce() -> Vec<String>,
{
    let ParseConfig {
        argv,
        strict,
        options,
    } = config;
    let argv = argv.unwrap_or_else(source);
    parse(&argv, &options, strict)
}

/// Validate a JSON configuration and parse it (see [`ParseConfig::from_json`]).
pub fn parse_args_json(config: &serde_json::Value) -> ParseResult<ParsedArgs> {
    parse_args(ParseConfig::from_json(config)?)
}
