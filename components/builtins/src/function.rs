//! Two-phase function call protocol
//!
//! A [`Spec`] declares parameters plus two callbacks:
//! - the type callback computes the result type from the arguments and must
//!   not have side effects, so callers can predict result shapes across a
//!   whole expression before evaluating any of it;
//! - the implementation callback computes the result value, given the result
//!   type the type callback already decided.
//!
//! [`Function::return_type_for_values`] runs only the first phase;
//! [`Function::call`] runs both.

use std::fmt;
use std::sync::Arc;

use core_types::{Type, Value};
use tracing::{debug, trace};

use crate::error::{ArgError, FunctionError, FunctionResult};

/// Type callback: arguments to result type.
pub type TypeFn = dyn Fn(&[Value]) -> FunctionResult<Type> + Send + Sync;

/// Implementation callback: arguments and resolved result type to result.
pub type ImplFn = dyn Fn(&[Value], &Type) -> FunctionResult<Value> + Send + Sync;

/// A declared function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Name used in diagnostics
    pub name: String,
    /// Required argument type; `Dynamic` accepts anything
    pub ty: Type,
    /// Whether a null argument is acceptable
    pub allow_null: bool,
    /// Whether the implementation wants to see unknown arguments itself
    pub allow_unknown: bool,
    /// Whether the type callback handles arguments of dynamic type itself
    pub allow_dynamic_type: bool,
}

impl Parameter {
    /// Parameter that rejects nulls and short-circuits on unknowns.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Parameter {
            name: name.into(),
            ty,
            allow_null: false,
            allow_unknown: false,
            allow_dynamic_type: false,
        }
    }

    /// Accept null arguments.
    pub fn allow_null(mut self) -> Self {
        self.allow_null = true;
        self
    }

    /// Pass unknown arguments through to the implementation.
    pub fn allow_unknown(mut self) -> Self {
        self.allow_unknown = true;
        self
    }

    /// Pass arguments of dynamic type through to the type callback.
    pub fn allow_dynamic_type(mut self) -> Self {
        self.allow_dynamic_type = true;
        self
    }
}

/// Declaration of a function: parameters plus the two phase callbacks.
pub struct Spec {
    params: Vec<Parameter>,
    var_param: Option<Parameter>,
    type_fn: Box<TypeFn>,
    impl_fn: Box<ImplFn>,
}

impl Spec {
    /// Spec with no parameters yet.
    pub fn new<T, I>(type_fn: T, impl_fn: I) -> Self
    where
        T: Fn(&[Value]) -> FunctionResult<Type> + Send + Sync + 'static,
        I: Fn(&[Value], &Type) -> FunctionResult<Value> + Send + Sync + 'static,
    {
        Spec {
            params: Vec::new(),
            var_param: None,
            type_fn: Box::new(type_fn),
            impl_fn: Box::new(impl_fn),
        }
    }

    /// Append a positional parameter.
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Set the parameter that absorbs any arguments past the positional ones.
    pub fn with_var_param(mut self, param: Parameter) -> Self {
        self.var_param = Some(param);
        self
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("params", &self.params)
            .field("var_param", &self.var_param)
            .finish_non_exhaustive()
    }
}

/// Type callback that always returns `ty`.
pub fn static_return(ty: Type) -> impl Fn(&[Value]) -> FunctionResult<Type> + Send + Sync + 'static {
    move |_| Ok(ty.clone())
}

/// A callable built from a [`Spec`]. Cheap to clone and shareable across
/// threads.
#[derive(Debug, Clone)]
pub struct Function {
    spec: Arc<Spec>,
}

impl Function {
    /// Wrap a spec.
    pub fn new(spec: Spec) -> Self {
        Function {
            spec: Arc::new(spec),
        }
    }

    /// Positional parameters.
    pub fn params(&self) -> &[Parameter] {
        &self.spec.params
    }

    /// Variadic parameter, if any.
    pub fn var_param(&self) -> Option<&Parameter> {
        self.spec.var_param.as_ref()
    }

    /// Parameter governing argument `index`.
    pub fn param_for(&self, index: usize) -> Option<&Parameter> {
        self.spec.params.get(index).or(self.spec.var_param.as_ref())
    }

    fn check_arity(&self, got: usize) -> FunctionResult<()> {
        let fixed = self.spec.params.len();
        match &self.spec.var_param {
            None if got != fixed => Err(FunctionError::Arity {
                expected: fixed,
                got,
            }),
            Some(_) if got < fixed => Err(FunctionError::VariadicArity { min: fixed, got }),
            _ => Ok(()),
        }
    }

    /// Result type for arguments of the given types, without any values.
    pub fn return_type(&self, arg_types: &[Type]) -> FunctionResult<Type> {
        let args: Vec<Value> = arg_types.iter().cloned().map(Value::unknown).collect();
        self.return_type_for_values(&args)
    }

    /// Type phase only. Never invokes the implementation callback.
    #[tracing::instrument(level = "trace", skip_all, fields(args = args.len()))]
    pub fn return_type_for_values(&self, args: &[Value]) -> FunctionResult<Type> {
        self.check_arity(args.len())?;

        for (index, arg) in args.iter().enumerate() {
            let Some(param) = self.param_for(index) else {
                continue;
            };

            if arg.is_null() && !param.allow_null {
                debug!(index, param = %param.name, "null argument rejected");
                return Err(ArgError::msg(index, "argument must not be null").into());
            }

            if arg.ty().is_dynamic() && !param.allow_dynamic_type {
                trace!(index, param = %param.name, "dynamic argument; result type is dynamic");
                return Ok(Type::Dynamic);
            }

            if !param.ty.is_dynamic() && arg.ty() != &param.ty {
                debug!(index, param = %param.name, found = %arg.ty(), "argument type mismatch");
                return Err(ArgError::msg(
                    index,
                    format!("{} required", param.ty.friendly_name_for_constraint()),
                )
                .into());
            }
        }

        (self.spec.type_fn)(args)
    }

    /// Type phase, then evaluation phase with the resolved type.
    ///
    /// If an argument is not wholly known and its parameter does not allow
    /// unknowns, the result is an unknown value of the resolved type and the
    /// implementation callback is not invoked.
    #[tracing::instrument(level = "trace", skip_all, fields(args = args.len()))]
    pub fn call(&self, args: &[Value]) -> FunctionResult<Value> {
        let result_type = self.return_type_for_values(args)?;

        for (index, arg) in args.iter().enumerate() {
            let allow_unknown = self.param_for(index).map_or(false, |p| p.allow_unknown);
            if !allow_unknown && !arg.is_whole_known() {
                debug!(index, result_type = %result_type, "unknown argument; skipping evaluation");
                return Ok(Value::unknown(result_type));
            }
        }

        let value = (self.spec.impl_fn)(args, &result_type)?;
        if !result_type.is_dynamic() && value.ty() != &result_type {
            return Err(FunctionError::eval(format!(
                "function returned {} where {} was expected",
                value.ty(),
                result_type
            )));
        }
        Ok(value)
    }
}
