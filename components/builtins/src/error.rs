//! Function call errors
//!
//! A call fails either because of a specific argument ([`ArgError`], carrying
//! the zero-based argument position) or for a reason not tied to any one
//! argument ([`FunctionError::Eval`]).

use std::error::Error as StdError;

/// Boxed error used as the cause of call failures.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error attributed to one argument of a call.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct ArgError {
    /// Zero-based argument position
    pub index: usize,
    /// What is wrong with the argument
    #[source]
    pub source: BoxError,
}

impl ArgError {
    /// Attribute `source` to argument `index`.
    pub fn new(index: usize, source: impl Into<BoxError>) -> Self {
        ArgError {
            index,
            source: source.into(),
        }
    }

    /// Attribute a plain message to argument `index`.
    pub fn msg(index: usize, message: impl Into<String>) -> Self {
        Self::new(index, message.into())
    }
}

/// Why a function call failed.
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    /// Wrong number of arguments for a function without a variadic parameter
    #[error("wrong number of arguments: expected {expected}, got {got}")]
    Arity {
        /// Declared parameter count
        expected: usize,
        /// Supplied argument count
        got: usize,
    },
    /// Too few arguments for a function with a variadic parameter
    #[error("not enough arguments: expected at least {min}, got {got}")]
    VariadicArity {
        /// Fixed parameter count
        min: usize,
        /// Supplied argument count
        got: usize,
    },
    /// A specific argument is unacceptable
    #[error(transparent)]
    Arg(#[from] ArgError),
    /// The call failed for a reason not tied to one argument
    #[error("{0}")]
    Eval(#[source] BoxError),
}

impl FunctionError {
    /// Generic failure not tied to an argument.
    pub fn eval(source: impl Into<BoxError>) -> Self {
        FunctionError::Eval(source.into())
    }

    /// Position of the offending argument, if the error names one.
    pub fn arg_index(&self) -> Option<usize> {
        match self {
            FunctionError::Arg(e) => Some(e.index),
            _ => None,
        }
    }

    /// Underlying cause, if it is an `E`.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            FunctionError::Arg(e) => e.source.downcast_ref::<E>(),
            FunctionError::Eval(e) => e.downcast_ref::<E>(),
            FunctionError::Arity { .. } | FunctionError::VariadicArity { .. } => None,
        }
    }
}

/// Result type for function calls
pub type FunctionResult<T> = Result<T, FunctionError>;
