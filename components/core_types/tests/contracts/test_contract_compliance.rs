//! Contract compliance tests for core_types
//!
//! Property checks for the homogeneity invariants of the composite
//! constructors.

use core_types::{Type, Value};
use proptest::prelude::*;

fn primitive_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::bool),
        any::<i64>().prop_map(Value::number_int),
        "[a-z]{0,8}".prop_map(Value::string),
    ]
}

/// A non-empty vector of values that all share one primitive type.
fn homogeneous_values() -> impl Strategy<Value = (Type, Vec<Value>)> {
    prop_oneof![
        prop::collection::vec(any::<bool>().prop_map(Value::bool), 1..16)
            .prop_map(|vs| (Type::Bool, vs)),
        prop::collection::vec(any::<i64>().prop_map(Value::number_int), 1..16)
            .prop_map(|vs| (Type::Number, vs)),
        prop::collection::vec("[a-z]{0,8}".prop_map(Value::string), 1..16)
            .prop_map(|vs| (Type::String, vs)),
    ]
}

proptest! {
    #[test]
    fn list_of_homogeneous_values_preserves_everything((ty, vals) in homogeneous_values()) {
        let list = Value::list(vals.clone());
        prop_assert_eq!(list.ty(), &Type::list(ty));
        prop_assert_eq!(list.as_elements().unwrap(), &vals[..]);
    }

    #[test]
    fn map_of_homogeneous_values_infers_type((ty, vals) in homogeneous_values()) {
        let entries: Vec<(String, Value)> = vals
            .into_iter()
            .enumerate()
            .map(|(i, v)| (format!("k{}", i), v))
            .collect();
        let count = entries.len();
        let map = Value::map(entries);
        prop_assert_eq!(map.ty(), &Type::map(ty));
        prop_assert_eq!(map.length(), Some(count));
    }

    #[test]
    fn set_never_exceeds_input((ty, vals) in homogeneous_values()) {
        let count = vals.len();
        let set = Value::set(vals.clone());
        prop_assert_eq!(set.ty(), &Type::set(ty));
        prop_assert!(set.length().unwrap() <= count);
        for v in &vals {
            prop_assert!(set.as_set().unwrap().contains(v));
        }
    }

    #[test]
    fn dynamic_elements_are_wildcards(
        (ty, vals) in homogeneous_values(),
        at in 0usize..16,
    ) {
        let mut vals = vals;
        let at = at % (vals.len() + 1);
        vals.insert(at, Value::dynamic());
        let list = Value::list(vals);
        prop_assert_eq!(list.ty(), &Type::list(ty));
    }

    #[test]
    fn two_distinct_types_are_rejected(a in primitive_value(), b in primitive_value()) {
        prop_assume!(a.ty() != b.ty());
        prop_assert!(Value::try_list(vec![a.clone(), b.clone()]).is_err());
        prop_assert!(Value::try_map(vec![("a", a.clone()), ("b", b.clone())]).is_err());
        prop_assert!(Value::try_set(vec![a, b]).is_err());
    }

    #[test]
    fn list_empty_accepts_any_type(ty in prop_oneof![
        Just(Type::Bool),
        Just(Type::Number),
        Just(Type::String),
        Just(Type::Dynamic),
        Just(Type::list(Type::String)),
        Just(Type::empty_object()),
    ]) {
        let list = Value::list_empty(ty.clone());
        prop_assert_eq!(list.ty(), &Type::list(ty));
        prop_assert_eq!(list.length(), Some(0));
    }
}

#[cfg(test)]
mod value_contract_tests {
    use super::*;

    /// Empty inferring constructors are caller bugs
    #[test]
    fn test_empty_inferring_constructors_fail() {
        assert!(Value::try_list(vec![]).is_err());
        assert!(Value::try_map(Vec::<(String, Value)>::new()).is_err());
        assert!(Value::try_set(vec![]).is_err());
    }

    /// Strings are normalized once, at construction
    #[test]
    fn test_nfc_equivalent_inputs_compare_equal() {
        assert_eq!(Value::string("e\u{301}"), Value::string("\u{e9}"));
        assert_ne!("e\u{301}".as_bytes(), "\u{e9}".as_bytes());
    }
}
