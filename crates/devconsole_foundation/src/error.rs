//! Error types for the devconsole system.
//!
//! Uses `thiserror` for ergonomic error definition. The `Display` output of
//! the user-facing kinds is exactly what the console prints.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the devconsole crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for devconsole operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a command not found error for the token the user typed.
    #[must_use]
    pub fn command_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::CommandNotFound(name.into()))
    }

    /// Creates a registration failure for a command that could not be built.
    #[must_use]
    pub fn registration_failed(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::RegistrationFailed {
            reason: reason.into(),
        })
    }

    /// Creates an execution failure for the named command.
    #[must_use]
    pub fn execution_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExecutionFailed {
            command: command.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an I/O error tied to a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: source.to_string(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No registered command answers to the given name.
    #[error("Command \"{0}\" does not exist.")]
    CommandNotFound(String),

    /// A command constructor failed during registration.
    #[error("failed to register command: {reason}")]
    RegistrationFailed {
        /// Why construction failed.
        reason: String,
    },

    /// A command returned an error or panicked while executing.
    #[error("Command \"{command}\" failed: {reason}")]
    ExecutionFailed {
        /// The command token as typed by the user.
        command: String,
        /// Why execution failed.
        reason: String,
    },

    /// A command rejected its parameters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing a file failed.
    #[error("{}: {message}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
