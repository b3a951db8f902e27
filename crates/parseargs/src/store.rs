//! Record one option occurrence into the result.

use crate::config::{OptionSchema, ValueKind};
use crate::error::{ParseError, ParseResult};
use crate::parsed::{ArgValue, ParsedArgs};
use crate::resolve::lookup;

/// Store an occurrence of option `name`.
///
/// `value` is `None` when the option was used as a flag; it is stored as
/// `true`. `multiple` options append in encounter order, others keep the last
/// write.
///
/// In strict mode `name` must be declared, a declared `boolean` must not carry
/// a value and a declared `string` must.
pub fn store_option_value(
    strict: bool,
    schema: &OptionSchema,
    name: &str,
    value: Option<String>,
    result: &mut ParsedArgs,
) -> ParseResult<()> {
    let option = lookup(name, schema);

    if strict {
        let Some(config) = option.config else {
            return Err(ParseError::UnknownOption {
                option: option.name.to_string(),
            });
        };
        match (config.kind, value.is_some()) {
            (ValueKind::Boolean, true) => {
                return Err(ParseError::InvalidOptionValue {
                    option: option.name.to_string(),
                    reason: "does not take an argument".to_string(),
                });
            }
            (ValueKind::String, false) => {
                return Err(ParseError::InvalidOptionValue {
                    option: option.name.to_string(),
                    reason: "argument missing".to_string(),
                });
            }
            _ => {}
        }
    }

    result.push_flag(option.name);

    let value = ArgValue::from(value);
    if option.multiple() {
        result.push_value(option.name, value);
    } else {
        result.set_value(option.name, value);
    }
    Ok(())
}
