//! Error types for the CLI

use builtins::FunctionError;

/// CLI-specific errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No subject string was given for a full call
    #[error("a STRING argument is required unless --type-only is given")]
    MissingSubject,

    /// An argument was rejected; names the parameter
    #[error("invalid value for {param}: {source}")]
    Argument {
        /// Declared parameter name
        param: String,
        /// Underlying call error
        #[source]
        source: FunctionError,
    },

    /// Any other call failure
    #[error(transparent)]
    Function(#[from] FunctionError),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
