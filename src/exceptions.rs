//! Error types for pylaunch

use crate::exit_codes::EXIT_ERROR;
use std::fmt;

/// Main error type for shim operations
#[derive(Debug)]
pub enum ShimError {
    /// Interpreter not found on the search path
    EnvironmentMissing {
        /// Interpreter name that was searched for
        interpreter: String,
    },

    /// Delegate ran and returned a non-zero status (`None` when killed by a signal)
    DelegateFailed {
        /// Exit code of the delegate, if it had one
        code: Option<i32>,
    },

    /// Interpreter was found but the delegate process could not be started
    Spawn(std::io::Error),

    /// Base directory or other launch configuration could not be resolved
    Config(String),

    /// IO error
    IoError(std::io::Error),
}

impl ShimError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}

impl fmt::Display for ShimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShimError::EnvironmentMissing { interpreter } => {
                write!(f, "Interpreter '{interpreter}' not found on search path")
            }
            ShimError::DelegateFailed { code: Some(code) } => {
                write!(f, "Delegate exited with status {code}")
            }
            ShimError::DelegateFailed { code: None } => {
                write!(f, "Delegate terminated without an exit status")
            }
            ShimError::Spawn(err) => write!(f, "Failed to spawn delegate: {err}"),
            ShimError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ShimError::IoError(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ShimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShimError::Spawn(err) | ShimError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShimError {
    fn from(err: std::io::Error) -> Self {
        ShimError::IoError(err)
    }
}

impl From<anyhow::Error> for ShimError {
    fn from(err: anyhow::Error) -> Self {
        // Keep the context chain, e.g. "Failed to enter base directory: No such file"
        ShimError::Config(format!("{err:#}"))
    }
}

/// Result type for shim operations
pub type Result<T> = std::result::Result<T, ShimError>;
