//! Function protocol contract tests
//!
//! Tests for arity and argument checks, the type phase on its own, unknown
//! short-circuiting and error attribution.

use builtins::{static_return, ArgError, Function, FunctionError, Parameter, Spec};
use core_types::{Type, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// join(sep, ...parts) -> string
fn join() -> Function {
    Function::new(
        Spec::new(static_return(Type::String), |args, _| {
            let sep = args[0].as_str().unwrap_or_default();
            let parts: Vec<&str> = args[1..].iter().filter_map(Value::as_str).collect();
            Ok(Value::string(parts.join(sep)))
        })
        .with_param(Parameter::new("separator", Type::String))
        .with_var_param(Parameter::new("parts", Type::String)),
    )
}

/// Counts how often each phase runs.
fn counting() -> (Function, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let type_calls = Arc::new(AtomicUsize::new(0));
    let impl_calls = Arc::new(AtomicUsize::new(0));
    let t = Arc::clone(&type_calls);
    let i = Arc::clone(&impl_calls);
    let f = Function::new(
        Spec::new(
            move |_| {
                t.fetch_add(1, Ordering::SeqCst);
                Ok(Type::Number)
            },
            move |_, _| {
                i.fetch_add(1, Ordering::SeqCst);
                Ok(Value::number_int(1))
            },
        )
        .with_param(Parameter::new("x", Type::Number)),
    );
    (f, type_calls, impl_calls)
}

#[test]
fn test_params_exposed() {
    let f = join();
    assert_eq!(f.params().len(), 1);
    assert_eq!(f.params()[0].name, "separator");
    assert_eq!(f.var_param().map(|p| p.name.as_str()), Some("parts"));
    assert_eq!(f.param_for(5).map(|p| p.name.as_str()), Some("parts"));
}

#[test]
fn test_variadic_call() {
    let v = join()
        .call(&[
            Value::string("-"),
            Value::string("a"),
            Value::string("b"),
            Value::string("c"),
        ])
        .unwrap();
    assert_eq!(v, Value::string("a-b-c"));
}

#[test]
fn test_variadic_arity() {
    let err = join().call(&[]).unwrap_err();
    assert!(matches!(err, FunctionError::VariadicArity { min: 1, got: 0 }));
}

#[test]
fn test_fixed_arity_too_many() {
    let (f, type_calls, _) = counting();
    let err = f
        .call(&[Value::number_int(1), Value::number_int(2)])
        .unwrap_err();
    assert!(matches!(err, FunctionError::Arity { expected: 1, got: 2 }));
    assert_eq!(type_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_type_mismatch_is_arg_error() {
    let err = join()
        .call(&[Value::string(","), Value::bool(true)])
        .unwrap_err();
    assert_eq!(err.arg_index(), Some(1));
    assert_eq!(err.to_string(), "string required");
}

#[test]
fn test_null_rejected_unless_allowed() {
    let err = join()
        .call(&[Value::null(Type::String)])
        .unwrap_err();
    assert_eq!(err.arg_index(), Some(0));
    assert_eq!(err.to_string(), "argument must not be null");

    let lenient = Function::new(
        Spec::new(static_return(Type::Bool), |args, _| Ok(Value::bool(args[0].is_null())))
            .with_param(Parameter::new("x", Type::String).allow_null()),
    );
    assert_eq!(
        lenient.call(&[Value::null(Type::String)]).unwrap(),
        Value::bool(true)
    );
}

#[test]
fn test_type_phase_never_runs_impl() {
    let (f, type_calls, impl_calls) = counting();
    let ty = f.return_type_for_values(&[Value::number_int(3)]).unwrap();
    assert_eq!(ty, Type::Number);
    assert_eq!(type_calls.load(Ordering::SeqCst), 1);
    assert_eq!(impl_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_return_type_from_types_only() {
    let (f, _, impl_calls) = counting();
    assert_eq!(f.return_type(&[Type::Number]).unwrap(), Type::Number);
    assert_eq!(impl_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_call_runs_each_phase_once() {
    let (f, type_calls, impl_calls) = counting();
    f.call(&[Value::number_int(3)]).unwrap();
    assert_eq!(type_calls.load(Ordering::SeqCst), 1);
    assert_eq!(impl_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unknown_argument_skips_impl() {
    let (f, _, impl_calls) = counting();
    let v = f.call(&[Value::unknown(Type::Number)]).unwrap();
    assert_eq!(v, Value::unknown(Type::Number));
    assert_eq!(impl_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_allow_unknown_passes_through() {
    let f = Function::new(
        Spec::new(static_return(Type::Bool), |args, _| {
            Ok(Value::bool(args[0].is_known()))
        })
        .with_param(Parameter::new("x", Type::String).allow_unknown()),
    );
    assert_eq!(
        f.call(&[Value::unknown(Type::String)]).unwrap(),
        Value::bool(false)
    );
}

#[test]
fn test_dynamic_argument_gives_dynamic_type() {
    let (f, type_calls, impl_calls) = counting();
    assert_eq!(
        f.return_type_for_values(&[Value::dynamic()]).unwrap(),
        Type::Dynamic
    );
    assert_eq!(f.call(&[Value::dynamic()]).unwrap(), Value::dynamic());
    assert_eq!(type_calls.load(Ordering::SeqCst), 0);
    assert_eq!(impl_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_dynamic_parameter_accepts_anything() {
    let f = Function::new(
        Spec::new(
            |args| Ok(args[0].ty().clone()),
            |args, _| Ok(args[0].clone()),
        )
        .with_param(Parameter::new("x", Type::Dynamic)),
    );
    let list = Value::list(vec![Value::bool(true)]);
    assert_eq!(f.call(&[list.clone()]).unwrap(), list);
}

#[test]
fn test_type_fn_error_propagates_with_index() {
    let f = Function::new(
        Spec::new(
            |_| Err(ArgError::msg(0, "bad shape").into()),
            |_, _| Ok(Value::bool(true)),
        )
        .with_param(Parameter::new("x", Type::String)),
    );
    let err = f.call(&[Value::string("a")]).unwrap_err();
    assert_eq!(err.arg_index(), Some(0));
    assert_eq!(err.to_string(), "bad shape");
}

#[test]
fn test_impl_must_honor_resolved_type() {
    let f = Function::new(
        Spec::new(static_return(Type::String), |_, _| Ok(Value::number_int(1)))
            .with_param(Parameter::new("x", Type::String)),
    );
    let err = f.call(&[Value::string("a")]).unwrap_err();
    assert_eq!(err.arg_index(), None);
    assert!(matches!(err, FunctionError::Eval(_)));
    assert_eq!(
        err.to_string(),
        "function returned number where string was expected"
    );
}

#[test]
fn test_function_clones_share_spec() {
    let (f, type_calls, _) = counting();
    let g = f.clone();
    f.return_type(&[Type::Number]).unwrap();
    g.return_type(&[Type::Number]).unwrap();
    assert_eq!(type_calls.load(Ordering::SeqCst), 2);
}
