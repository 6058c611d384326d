//! Immutable value representation.
//!
//! A [`Value`] pairs a [`Type`] with a [`Repr`] payload. Values are built
//! once by the constructors in this crate and never mutated afterwards, so
//! they can be shared across threads freely.

use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;

use crate::{Number, Type, ValueSet};

/// Payload of a [`Value`].
///
/// There is one payload variant per type tag, plus two states that any type
/// can be in: [`Repr::Unknown`] and [`Repr::Null`].
#[derive(Debug, Clone, PartialEq)]
pub enum Repr {
    /// Type is known but the value is not yet
    Unknown,
    /// Typed null
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(Number),
    /// NFC-normalized string
    String(String),
    /// List elements in order
    List(Vec<Value>),
    /// Tuple elements in order
    Tuple(Vec<Value>),
    /// Map entries by key
    Map(BTreeMap<String, Value>),
    /// Set members
    Set(ValueSet),
    /// Object attributes in declaration order
    Object(IndexMap<String, Value>),
}

/// An immutable `(Type, payload)` pair.
///
/// Equality is raw structural equality: same type, same state, same payload.
///
/// # Examples
///
/// ```
/// use core_types::{Type, Value};
///
/// let s = Value::string("hello");
/// assert_eq!(s.ty(), &Type::String);
/// assert_eq!(s.as_str(), Some("hello"));
///
/// let pending = Value::unknown(Type::String);
/// assert!(!pending.is_known());
/// assert_eq!(pending.as_str(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    ty: Type,
    repr: Repr,
}

impl Value {
    pub(crate) fn from_parts(ty: Type, repr: Repr) -> Self {
        Value { ty, repr }
    }

    /// Type of this value.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Payload of this value.
    pub fn repr(&self) -> &Repr {
        &self.repr
    }

    /// Whether the value is concretely known. Nested unknowns inside a known
    /// collection do not count; see [`Value::is_whole_known`].
    pub fn is_known(&self) -> bool {
        !matches!(self.repr, Repr::Unknown)
    }

    /// Whether this value and everything nested inside it is known.
    pub fn is_whole_known(&self) -> bool {
        match &self.repr {
            Repr::Unknown => false,
            Repr::Null | Repr::Bool(_) | Repr::Number(_) | Repr::String(_) => true,
            Repr::List(vals) | Repr::Tuple(vals) => vals.iter().all(Value::is_whole_known),
            Repr::Map(entries) => entries.values().all(Value::is_whole_known),
            Repr::Set(set) => set.iter().all(Value::is_whole_known),
            Repr::Object(attrs) => attrs.values().all(Value::is_whole_known),
        }
    }

    /// Whether this is a typed null.
    pub fn is_null(&self) -> bool {
        matches!(self.repr, Repr::Null)
    }

    /// Boolean payload.
    pub fn as_bool(&self) -> Option<bool> {
        match self.repr {
            Repr::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Number payload.
    pub fn as_number(&self) -> Option<&Number> {
        match &self.repr {
            Repr::Number(n) => Some(n),
            _ => None,
        }
    }

    /// String payload, already normalized.
    pub fn as_str(&self) -> Option<&str> {
        match &self.repr {
            Repr::String(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of a list or tuple.
    pub fn as_elements(&self) -> Option<&[Value]> {
        match &self.repr {
            Repr::List(vals) | Repr::Tuple(vals) => Some(vals),
            _ => None,
        }
    }

    /// Entries of a map.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match &self.repr {
            Repr::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Members of a set.
    pub fn as_set(&self) -> Option<&ValueSet> {
        match &self.repr {
            Repr::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Named attribute of an object.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        match &self.repr {
            Repr::Object(attrs) => attrs.get(name),
            _ => None,
        }
    }

    /// Element at `key`: a whole number for lists and tuples, a string for
    /// maps.
    pub fn index(&self, key: &Value) -> Option<&Value> {
        match &self.repr {
            Repr::List(vals) | Repr::Tuple(vals) => {
                let position = key.as_number()?.to_i64()?;
                vals.get(usize::try_from(position).ok()?)
            }
            Repr::Map(entries) => entries.get(key.as_str()?),
            _ => None,
        }
    }

    /// Number of elements, entries, members or attributes.
    pub fn length(&self) -> Option<usize> {
        match &self.repr {
            Repr::List(vals) | Repr::Tuple(vals) => Some(vals.len()),
            Repr::Map(entries) => Some(entries.len()),
            Repr::Set(set) => Some(set.len()),
            Repr::Object(attrs) => Some(attrs.len()),
            Repr::Unknown
            | Repr::Null
            | Repr::Bool(_)
            | Repr::Number(_)
            | Repr::String(_) => None,
        }
    }
}

fn write_seq<'a>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    vals: impl Iterator<Item = &'a Value>,
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, v) in vals.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", v)?;
    }
    f.write_str(close)
}

/// Debugging notation.
///
/// - unknown → `(unknown string)`
/// - null → `null`
/// - string → `"text"`
/// - list → `["a", "b"]`, tuple → `("a", null)`, set → `set("a")`
/// - map → `{"k" = 1}`, object → `{name = "x"}`
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let obj = Value::object([("y", Value::string("2020"))]);
/// assert_eq!(obj.to_string(), r#"{y = "2020"}"#);
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Unknown => write!(f, "(unknown {})", self.ty),
            Repr::Null => write!(f, "null"),
            Repr::Bool(b) => write!(f, "{}", b),
            Repr::Number(n) => write!(f, "{}", n),
            Repr::String(s) => write!(f, "{:?}", s),
            Repr::List(vals) => write_seq(f, "[", vals.iter(), "]"),
            Repr::Tuple(vals) => write_seq(f, "(", vals.iter(), ")"),
            Repr::Set(set) => write_seq(f, "set(", set.iter(), ")"),
            Repr::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?} = {}", k, v)?;
                }
                f.write_str("}")
            }
            Repr::Object(attrs) => {
                f.write_str("{")?;
                for (i, (k, v)) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}
