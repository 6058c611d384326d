//! Runs one `regex` call as described by the command line

use std::fmt;

use builtins::{regex_function, FunctionError};
use core_types::{Type, Value};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Result of the type phase alone
    Type(Type),
    /// Result of a full call
    Value(Value),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Type(ty) => write_shape(f, ty),
            Outcome::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Like `Type`'s Display, but spells out object attributes and tuple
/// elements.
fn write_shape(f: &mut fmt::Formatter<'_>, ty: &Type) -> fmt::Result {
    match ty {
        Type::Object(attrs) => {
            f.write_str("object {")?;
            for (i, (name, attr)) in attrs.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}: ", name)?;
                write_shape(f, attr)?;
            }
            f.write_str("}")
        }
        Type::Tuple(elems) => {
            f.write_str("tuple [")?;
            for (i, elem) in elems.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_shape(f, elem)?;
            }
            f.write_str("]")
        }
        other => write!(f, "{}", other),
    }
}

/// Execute the call `cli` describes.
///
/// # Example
/// ```
/// use clap::Parser;
/// use value_cli::{run, Cli};
///
/// let cli = Cli::parse_from(["vcall", r"\d+", "abc123"]);
/// assert_eq!(run(&cli).unwrap().to_string(), "\"123\"");
/// ```
pub fn run(cli: &Cli) -> CliResult<Outcome> {
    let function = regex_function();
    let pattern = if cli.unknown_pattern {
        Value::unknown(Type::String)
    } else {
        Value::string(&cli.pattern)
    };

    let subject = match (&cli.string, cli.type_only) {
        (Some(s), _) => Value::string(s),
        (None, true) => Value::unknown(Type::String),
        (None, false) => return Err(CliError::MissingSubject),
    };
    let args = [pattern, subject];

    let name_param = |err: FunctionError| match err.arg_index() {
        Some(index) => CliError::Argument {
            param: function
                .param_for(index)
                .map_or_else(|| format!("argument {}", index), |p| p.name.clone()),
            source: err,
        },
        None => CliError::Function(err),
    };

    if cli.type_only {
        let ty = function.return_type_for_values(&args).map_err(name_param)?;
        debug!(result_type = %ty, "type phase done");
        return Ok(Outcome::Type(ty));
    }

    let value = function.call(&args).map_err(name_param)?;
    Ok(Outcome::Value(value))
}
