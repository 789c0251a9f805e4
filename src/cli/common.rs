//! Shared CLI error handling and exit codes.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for scripted use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// I/O or environment failure
    Io = 1,
    /// Invalid arguments or values
    Validation = 2,
}

/// Error kind distinguishing user mistakes from environment failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid input: unknown shape/theme, out-of-range value, empty text
    Validation,
    /// Failed file system or environment operation
    Io,
}

/// A CLI-layer error with a message and an exit code.
#[derive(Debug, Clone)]
pub struct CliError {
    /// What category of failure this is
    pub kind: CliErrorKind,
    /// Human-readable description
    pub message: String,
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// The process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::Validation,
            CliErrorKind::Io => ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), ExitCode::Validation);
        assert_eq!(CliError::io("broken").exit_code(), ExitCode::Io);
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::Io as i32, 1);
        assert_eq!(ExitCode::Validation as i32, 2);
    }
}
