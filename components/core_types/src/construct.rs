//! Value constructors.
//!
//! Primitive constructors wrap a payload directly. Composite constructors
//! derive the composite's type from the supplied values; List, Map and Set
//! additionally require every element to share one element type, where the
//! dynamic placeholder is compatible with anything and never contributes to
//! the inferred type.
//!
//! Violating those invariants is a caller bug. `list`, `map`, `set` and
//! `set_with_rules` panic; the `try_*` variants return [`ConstructionError`].

use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use unicode_normalization::{is_nfc, UnicodeNormalization};

use crate::{
    CollectionKind, ConstructionError, Number, Repr, SetRules, StructuralRules, Type, Value,
    ValueSet,
};

impl Value {
    /// Boolean value.
    pub fn bool(v: bool) -> Self {
        Value::from_parts(Type::Bool, Repr::Bool(v))
    }

    /// Number value. The number moves into the value.
    pub fn number(v: Number) -> Self {
        Value::from_parts(Type::Number, Repr::Number(v))
    }

    /// Number value from a signed integer.
    pub fn number_int(v: i64) -> Self {
        Value::number(Number::from(v))
    }

    /// Number value from an unsigned integer.
    pub fn number_uint(v: u64) -> Self {
        Value::number(Number::from(v))
    }

    /// Number value holding the exact value of `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is NaN or infinite.
    pub fn number_float(v: f64) -> Self {
        Value::number(Number::from_f64(v))
    }

    /// String value, normalized to NFC.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// // "é" precomposed vs "e" + combining acute accent
    /// assert_eq!(Value::string("\u{e9}"), Value::string("e\u{301}"));
    /// ```
    pub fn string(v: impl AsRef<str>) -> Self {
        let raw = v.as_ref();
        let normalized = if is_nfc(raw) {
            raw.to_string()
        } else {
            raw.nfc().collect()
        };
        Value::from_parts(Type::String, Repr::String(normalized))
    }

    /// Null of the given type.
    pub fn null(ty: Type) -> Self {
        Value::from_parts(ty, Repr::Null)
    }

    /// Value of a known type whose content is not yet known.
    pub fn unknown(ty: Type) -> Self {
        Value::from_parts(ty, Repr::Unknown)
    }

    /// Unknown value of unknown type.
    pub fn dynamic() -> Self {
        Value::unknown(Type::Dynamic)
    }

    /// Object whose type has one attribute per entry, typed exactly as the
    /// entry's value. Zero attributes is allowed.
    pub fn object<K: Into<String>>(attrs: impl IntoIterator<Item = (K, Value)>) -> Self {
        let attrs: IndexMap<String, Value> = attrs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let ty = Type::Object(
            attrs
                .iter()
                .map(|(k, v)| (k.clone(), v.ty().clone()))
                .collect(),
        );
        Value::from_parts(ty, Repr::Object(attrs))
    }

    /// Tuple whose type lists each element's type. Zero elements is allowed.
    pub fn tuple(vals: Vec<Value>) -> Self {
        let ty = Type::Tuple(vals.iter().map(|v| v.ty().clone()).collect());
        Value::from_parts(ty, Repr::Tuple(vals))
    }

    /// List with the element type inferred from `vals`.
    ///
    /// # Panics
    ///
    /// Panics if `vals` is empty or holds two different non-dynamic types.
    pub fn list(vals: Vec<Value>) -> Self {
        Self::try_list(vals).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Fallible form of [`Value::list`].
    pub fn try_list(vals: Vec<Value>) -> Result<Self, ConstructionError> {
        let element = infer_element_type(CollectionKind::List, &vals)?;
        Ok(Value::from_parts(Type::list(element), Repr::List(vals)))
    }

    /// Empty list of `element`.
    pub fn list_empty(element: Type) -> Self {
        Value::from_parts(Type::list(element), Repr::List(Vec::new()))
    }

    /// Map with the element type inferred from the entry values. A repeated
    /// key keeps its last value.
    ///
    /// # Panics
    ///
    /// Panics if there are no entries or two values have different
    /// non-dynamic types.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::try_map(entries).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Fallible form of [`Value::map`].
    pub fn try_map<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Result<Self, ConstructionError> {
        let entries: BTreeMap<String, Value> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let element = infer_element_type(CollectionKind::Map, entries.values())?;
        Ok(Value::from_parts(Type::map(element), Repr::Map(entries)))
    }

    /// Empty map of `element`.
    pub fn map_empty(element: Type) -> Self {
        Value::from_parts(Type::map(element), Repr::Map(BTreeMap::new()))
    }

    /// Set with the element type inferred from `vals`, deduplicated by
    /// [`StructuralRules`] bound to that type.
    ///
    /// # Panics
    ///
    /// Panics if `vals` is empty or holds two different non-dynamic types.
    pub fn set(vals: Vec<Value>) -> Self {
        Self::try_set(vals).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Fallible form of [`Value::set`].
    pub fn try_set(vals: Vec<Value>) -> Result<Self, ConstructionError> {
        let element = infer_element_type(CollectionKind::Set, &vals)?;
        let rules = Arc::new(StructuralRules::new(element.clone()));
        Ok(Value::from_parts(
            Type::set(element),
            Repr::Set(ValueSet::from_values(rules, vals)),
        ))
    }

    /// Empty set of `element`.
    pub fn set_empty(element: Type) -> Self {
        let rules = Arc::new(StructuralRules::new(element.clone()));
        Value::from_parts(Type::set(element), Repr::Set(ValueSet::new(rules)))
    }

    /// Set deduplicated by a caller-supplied strategy. The strategy's element
    /// type is the set's element type; `vals` may be empty.
    ///
    /// # Panics
    ///
    /// Panics if an element is neither of the strategy's element type nor
    /// dynamic.
    pub fn set_with_rules(rules: Arc<dyn SetRules>, vals: Vec<Value>) -> Self {
        Self::try_set_with_rules(rules, vals).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Fallible form of [`Value::set_with_rules`].
    pub fn try_set_with_rules(
        rules: Arc<dyn SetRules>,
        vals: Vec<Value>,
    ) -> Result<Self, ConstructionError> {
        let element = rules.element_type().clone();
        if let Some(bad) = vals.iter().find(|v| !conforms(v.ty(), &element)) {
            return Err(ConstructionError::InconsistentElementTypes {
                kind: CollectionKind::Set,
                expected: element,
                found: bad.ty().clone(),
            });
        }
        Ok(Value::from_parts(
            Type::set(element),
            Repr::Set(ValueSet::from_values(rules, vals)),
        ))
    }
}

fn conforms(ty: &Type, element: &Type) -> bool {
    ty.is_dynamic() || element.is_dynamic() || ty == element
}

/// The element type starts out dynamic and becomes the type of the first
/// non-dynamic element. Later elements must match it or be dynamic.
fn infer_element_type<'a>(
    kind: CollectionKind,
    vals: impl IntoIterator<Item = &'a Value>,
) -> Result<Type, ConstructionError> {
    let mut seen_any = false;
    let mut element = Type::Dynamic;
    for v in vals {
        seen_any = true;
        if element.is_dynamic() {
            element = v.ty().clone();
        } else if !v.ty().is_dynamic() && v.ty() != &element {
            return Err(ConstructionError::InconsistentElementTypes {
                kind,
                expected: element,
                found: v.ty().clone(),
            });
        }
    }
    if !seen_any {
        return Err(ConstructionError::EmptyCollection { kind });
    }
    Ok(element)
}
