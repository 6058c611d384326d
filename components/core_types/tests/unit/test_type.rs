//! Unit tests for Type

use core_types::Type;

#[cfg(test)]
mod type_equality_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitives_equal_themselves() {
        assert_eq!(Type::Bool, Type::Bool);
        assert_eq!(Type::Number, Type::Number);
        assert_eq!(Type::String, Type::String);
        assert_ne!(Type::String, Type::Number);
    }

    #[test]
    fn test_collection_kinds_differ() {
        assert_ne!(Type::list(Type::String), Type::map(Type::String));
        assert_ne!(Type::map(Type::String), Type::set(Type::String));
    }

    #[test]
    fn test_object_attribute_types_matter() {
        let a = Type::object([("name", Type::String)]);
        let b = Type::object([("name", Type::Number)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_object_attribute_names_matter() {
        let a = Type::object([("a", Type::String)]);
        let b = Type::object([("b", Type::String)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_tuple_order_matters() {
        let a = Type::tuple(vec![Type::String, Type::Number]);
        let b = Type::tuple(vec![Type::Number, Type::String]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_dynamic_only_equals_dynamic() {
        assert_eq!(Type::Dynamic, Type::Dynamic);
        assert_ne!(Type::Dynamic, Type::String);
    }

    #[test]
    fn test_empty_shapes() {
        assert_eq!(Type::empty_object(), Type::object(Vec::<(String, Type)>::new()));
        assert_eq!(Type::empty_tuple(), Type::tuple(vec![]));
        assert_ne!(Type::empty_object(), Type::empty_tuple());
    }
}

#[cfg(test)]
mod type_accessor_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_element_type() {
        assert_eq!(Type::list(Type::Bool).element_type(), Some(&Type::Bool));
        assert_eq!(Type::set(Type::Number).element_type(), Some(&Type::Number));
        assert_eq!(Type::String.element_type(), None);
    }

    #[test]
    fn test_attribute_order_is_declaration_order() {
        let ty = Type::object([("y", Type::String), ("m", Type::String), ("d", Type::String)]);
        let names: Vec<&str> = ty
            .attribute_types()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, vec!["y", "m", "d"]);
        assert!(ty.has_attribute("m"));
        assert!(!ty.has_attribute("x"));
    }

    #[test]
    fn test_tuple_element_types() {
        let ty = Type::tuple(vec![Type::String, Type::String]);
        assert_eq!(ty.tuple_element_types(), Some(&[Type::String, Type::String][..]));
    }

    #[test]
    fn test_predicates() {
        assert!(Type::Bool.is_primitive());
        assert!(Type::list(Type::Bool).is_collection());
        assert!(!Type::tuple(vec![]).is_collection());
        assert!(Type::tuple(vec![]).is_tuple());
        assert!(Type::empty_object().is_object());
        assert!(Type::Dynamic.is_dynamic());
    }

    #[test]
    fn test_friendly_names() {
        assert_eq!(Type::map(Type::Number).to_string(), "map of number");
        assert_eq!(Type::String.friendly_name_for_constraint(), "string");
        assert_eq!(Type::empty_object().to_string(), "object");
    }
}
