//! Construction invariant violations.
//!
//! These describe caller bugs: the panicking constructors on [`Value`]
//! abort with the message of one of these errors, while the `try_*`
//! constructors hand it back for code that cannot pre-validate its input.
//!
//! [`Value`]: crate::Value

use crate::Type;
use std::fmt;

/// The homogeneous collection kind being constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// List
    List,
    /// Map
    Map,
    /// Set
    Set,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::List => write!(f, "list"),
            CollectionKind::Map => write!(f, "map"),
            CollectionKind::Set => write!(f, "set"),
        }
    }
}

/// A construction invariant that the input violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// The element type cannot be inferred from zero elements.
    #[error("must not construct an empty {kind} by inference; give the element type explicitly")]
    EmptyCollection {
        /// Collection being built
        kind: CollectionKind,
    },
    /// Two elements have different, non-dynamic types.
    #[error("inconsistent {kind} element types ({expected} then {found})")]
    InconsistentElementTypes {
        /// Collection being built
        kind: CollectionKind,
        /// Element type inferred so far
        expected: Type,
        /// Conflicting element type
        found: Type,
    },
}
