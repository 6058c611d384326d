//! Two-phase functions over structural values
//!
//! This crate provides the function call protocol and the built-in functions
//! implemented on top of it:
//! - [`Function`] / [`Spec`] / [`Parameter`] - the type-then-evaluate contract
//! - [`FunctionError`] / [`ArgError`] - call failures, optionally tied to an argument
//! - [`regex`] - pattern-based substring extraction with a data-dependent result type
//!
//! # Example
//!
//! ```
//! use builtins::regex_function;
//! use core_types::{Type, Value};
//!
//! let f = regex_function();
//! let args = [Value::string(r"(?P<y>\d+)-(?P<m>\d+)"), Value::string("2020-04")];
//!
//! // Type phase alone: no matching happens here
//! let ty = f.return_type_for_values(&args).unwrap();
//! assert_eq!(ty, Type::object([("y", Type::String), ("m", Type::String)]));
//!
//! // Both phases
//! let v = f.call(&args).unwrap();
//! assert_eq!(v.attribute("y"), Some(&Value::string("2020")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod function;
pub mod regexp;

// Re-export main types for convenience
pub use error::{ArgError, BoxError, FunctionError, FunctionResult};
pub use function::{static_return, Function, ImplFn, Parameter, Spec, TypeFn};
pub use regexp::{regex, regex_function, regex_pattern_result_type, RegexError};
