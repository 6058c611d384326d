//! Structural type descriptors.
//!
//! Types are compared structurally: two types are equal when their tags and
//! contents are recursively equal. Object attribute equality ignores the order
//! in which attributes were declared, but iteration follows declaration order.

use indexmap::IndexMap;
use std::fmt;

/// A structural type.
///
/// # Examples
///
/// ```
/// use core_types::Type;
///
/// let a = Type::object([("y", Type::String), ("m", Type::String)]);
/// let b = Type::object([("m", Type::String), ("y", Type::String)]);
/// assert_eq!(a, b);
/// assert_ne!(Type::list(Type::String), Type::set(Type::String));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean
    Bool,
    /// Arbitrary-precision decimal number
    Number,
    /// NFC-normalized Unicode string
    String,
    /// Ordered sequence of elements of one type
    List(Box<Type>),
    /// String-keyed mapping to elements of one type
    Map(Box<Type>),
    /// Unordered collection of distinct elements of one type
    Set(Box<Type>),
    /// Fixed attribute names, each with its own type
    Object(IndexMap<String, Type>),
    /// Fixed-length sequence, each position with its own type
    Tuple(Vec<Type>),
    /// Placeholder for a type that is not yet known
    Dynamic,
}

impl Type {
    /// List of `element`.
    pub fn list(element: Type) -> Self {
        Type::List(Box::new(element))
    }

    /// Map of `element`.
    pub fn map(element: Type) -> Self {
        Type::Map(Box::new(element))
    }

    /// Set of `element`.
    pub fn set(element: Type) -> Self {
        Type::Set(Box::new(element))
    }

    /// Object type from `(name, type)` pairs, keeping declaration order.
    pub fn object<K: Into<String>>(attrs: impl IntoIterator<Item = (K, Type)>) -> Self {
        Type::Object(attrs.into_iter().map(|(k, t)| (k.into(), t)).collect())
    }

    /// Object type with no attributes.
    pub fn empty_object() -> Self {
        Type::Object(IndexMap::new())
    }

    /// Tuple type from element types.
    pub fn tuple(elements: Vec<Type>) -> Self {
        Type::Tuple(elements)
    }

    /// Tuple type with no elements.
    pub fn empty_tuple() -> Self {
        Type::Tuple(Vec::new())
    }

    /// Bool, Number or String.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Bool | Type::Number | Type::String)
    }

    /// Whether this is a list type.
    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    /// Whether this is a map type.
    pub fn is_map(&self) -> bool {
        matches!(self, Type::Map(_))
    }

    /// Whether this is a set type.
    pub fn is_set(&self) -> bool {
        matches!(self, Type::Set(_))
    }

    /// List, Map or Set.
    pub fn is_collection(&self) -> bool {
        matches!(self, Type::List(_) | Type::Map(_) | Type::Set(_))
    }

    /// Whether this is an object type.
    pub fn is_object(&self) -> bool {
        matches!(self, Type::Object(_))
    }

    /// Whether this is a tuple type.
    pub fn is_tuple(&self) -> bool {
        matches!(self, Type::Tuple(_))
    }

    /// Whether this is the dynamic placeholder.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Type::Dynamic)
    }

    /// Element type of a List, Map or Set.
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::List(e) | Type::Map(e) | Type::Set(e) => Some(e),
            _ => None,
        }
    }

    /// Attribute types of an object, in declaration order.
    pub fn attribute_types(&self) -> Option<&IndexMap<String, Type>> {
        match self {
            Type::Object(attrs) => Some(attrs),
            _ => None,
        }
    }

    /// Type of the named attribute, if this is an object that has it.
    pub fn attribute_type(&self, name: &str) -> Option<&Type> {
        self.attribute_types().and_then(|attrs| attrs.get(name))
    }

    /// Whether this is an object with the named attribute.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute_type(name).is_some()
    }

    /// Element types of a tuple.
    pub fn tuple_element_types(&self) -> Option<&[Type]> {
        match self {
            Type::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    /// Friendly name used when the type appears as a requirement in an error
    /// message. The dynamic placeholder reads as "any type" here.
    pub fn friendly_name_for_constraint(&self) -> String {
        match self {
            Type::Dynamic => "any type".to_string(),
            Type::List(e) => format!("list of {}", e.friendly_name_for_constraint()),
            Type::Map(e) => format!("map of {}", e.friendly_name_for_constraint()),
            Type::Set(e) => format!("set of {}", e.friendly_name_for_constraint()),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Number => write!(f, "number"),
            Type::String => write!(f, "string"),
            Type::List(e) => write!(f, "list of {}", e),
            Type::Map(e) => write!(f, "map of {}", e),
            Type::Set(e) => write!(f, "set of {}", e),
            Type::Object(_) => write!(f, "object"),
            Type::Tuple(_) => write!(f, "tuple"),
            Type::Dynamic => write!(f, "dynamic"),
        }
    }
}
