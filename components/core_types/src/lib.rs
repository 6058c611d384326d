//! Structural types and immutable values.
//!
//! This crate provides the foundational data model: structural type
//! descriptors, immutable tagged values over those types, and the composite
//! constructors that derive and validate element types at construction time.
//!
//! # Overview
//!
//! - [`Type`] - Structural type descriptor (primitives, collections, objects, tuples)
//! - [`Value`] - Immutable `(Type, payload)` pair
//! - [`Repr`] - Payload of a value, one variant per type tag
//! - [`Number`] - Arbitrary-precision decimal number
//! - [`ValueSet`] / [`SetRules`] - Set storage and its equivalence strategy
//! - [`ConstructionError`] - Invariant violations found while building composites
//!
//! # Examples
//!
//! ```
//! use core_types::{Type, Value};
//!
//! let list = Value::list(vec![Value::string("a"), Value::string("b")]);
//! assert_eq!(list.ty(), &Type::list(Type::String));
//! assert_eq!(list.length(), Some(2));
//!
//! let obj = Value::object([("name", Value::string("x")), ("size", Value::number_int(3))]);
//! assert_eq!(obj.ty().attribute_type("size"), Some(&Type::Number));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod construct;
mod error;
mod number;
mod set;
mod ty;
mod value;

pub use error::{CollectionKind, ConstructionError};
pub use number::{Number, ParseNumberError};
pub use set::{SetRules, StructuralRules, ValueSet};
pub use ty::Type;
pub use value::{Repr, Value};
