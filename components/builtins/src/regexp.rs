//! Pattern-based substring extraction
//!
//! `regex(pattern, string)` applies a regular expression once to a string.
//! Its result type depends on the capture groups of the pattern:
//! - no capture groups: a string holding the whole match
//! - only named groups: an object with one string attribute per group name
//! - only unnamed groups: a tuple with one string per group
//! - named and unnamed groups together: rejected
//!
//! A group that did not take part in the match (for example, one side of an
//! alternation) yields a null string rather than an empty one.

use core_types::{Type, Value};
use regex::{Captures, Match, Regex};
use tracing::{debug, trace};

use crate::error::{ArgError, FunctionError, FunctionResult};
use crate::function::{Function, Parameter, Spec};

/// Errors specific to pattern extraction
#[derive(Debug, thiserror::Error)]
pub enum RegexError {
    /// The pattern does not compile
    #[error("invalid regexp pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// The pattern uses both named and unnamed capture groups
    #[error("invalid regexp pattern: cannot mix both named and unnamed capture groups")]
    MixedCaptureGroups,
    /// The pattern matched nowhere in the subject
    #[error("pattern did not match any part of the given string")]
    NoMatch,
}

/// Structural type `regex` returns for `pattern`.
///
/// Decided from the pattern alone; nothing is matched.
///
/// # Examples
///
/// ```
/// use builtins::regex_pattern_result_type;
/// use core_types::Type;
///
/// assert_eq!(regex_pattern_result_type(r"\d+").unwrap(), Type::String);
/// assert_eq!(
///     regex_pattern_result_type(r"(\d+)-(\d+)").unwrap(),
///     Type::tuple(vec![Type::String, Type::String])
/// );
/// assert!(regex_pattern_result_type(r"(\d+)(?P<y>\d+)").is_err());
/// ```
pub fn regex_pattern_result_type(pattern: &str) -> Result<Type, RegexError> {
    let re = Regex::new(pattern)?;
    classify_capture_groups(&re)
}

fn classify_capture_groups(re: &Regex) -> Result<Type, RegexError> {
    let mut named = Vec::new();
    let mut unnamed = 0usize;
    // group 0 is the whole match
    for name in re.capture_names().skip(1) {
        match name {
            Some(name) => named.push(name),
            None => unnamed += 1,
        }
    }

    match (named.is_empty(), unnamed) {
        (true, 0) => Ok(Type::String),
        (true, n) => Ok(Type::tuple(vec![Type::String; n])),
        (false, 0) => Ok(Type::object(named.into_iter().map(|n| (n, Type::String)))),
        (false, _) => Err(RegexError::MixedCaptureGroups),
    }
}

/// The `regex` function.
pub fn regex_function() -> Function {
    Function::new(
        Spec::new(regex_type, regex_impl)
            .with_param(Parameter::new("pattern", Type::String))
            .with_param(Parameter::new("string", Type::String)),
    )
}

/// Extract substrings of `string` matched by `pattern`.
///
/// Shorthand for calling [`regex_function`] with both arguments.
pub fn regex(pattern: &Value, string: &Value) -> FunctionResult<Value> {
    regex_function().call(&[pattern.clone(), string.clone()])
}

fn regex_type(args: &[Value]) -> FunctionResult<Type> {
    let [pattern, _] = args else {
        return Err(FunctionError::Arity {
            expected: 2,
            got: args.len(),
        });
    };
    if !pattern.is_known() {
        // can't predict the shape without seeing the pattern
        return Ok(Type::Dynamic);
    }

    let ty = regex_pattern_result_type(string_arg(pattern, 0)?)
        .map_err(|err| ArgError::new(0, err))?;
    trace!(result_type = %ty, "classified pattern");
    Ok(ty)
}

fn regex_impl(args: &[Value], result_type: &Type) -> FunctionResult<Value> {
    if result_type.is_dynamic() {
        return Ok(Value::dynamic());
    }
    let [pattern, subject] = args else {
        return Err(FunctionError::Arity {
            expected: 2,
            got: args.len(),
        });
    };
    let subject = string_arg(subject, 1)?;
    let re = Regex::new(string_arg(pattern, 0)?)
        .map_err(|err| ArgError::new(0, RegexError::from(err)))?;

    let Some(captures) = re.captures(subject) else {
        debug!(pattern = re.as_str(), "no match");
        return Err(FunctionError::eval(RegexError::NoMatch));
    };

    match result_type {
        Type::String => Ok(Value::string(
            captures.get(0).map_or("", |m| m.as_str()),
        )),
        Type::Tuple(_) => Ok(Value::tuple(
            captures.iter().skip(1).map(group_value).collect(),
        )),
        Type::Object(_) => Ok(named_groups(&re, &captures)),
        other => Err(FunctionError::eval(format!(
            "invalid return type: {}",
            other.friendly_name_for_constraint()
        ))),
    }
}

fn named_groups(re: &Regex, captures: &Captures<'_>) -> Value {
    Value::object(
        re.capture_names()
            .zip(captures.iter())
            .skip(1)
            .filter_map(|(name, m)| name.map(|name| (name, group_value(m)))),
    )
}

fn group_value(m: Option<Match<'_>>) -> Value {
    match m {
        Some(m) => Value::string(m.as_str()),
        // the group sat in a branch that did not participate
        None => Value::null(Type::String),
    }
}

fn string_arg(value: &Value, index: usize) -> FunctionResult<&str> {
    value
        .as_str()
        .ok_or_else(|| ArgError::msg(index, "string required").into())
}
