//! Centralized error handling for Encore
//! Defines common error types, severity levels, and error codes

use crate::constants::errors;
use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Warning - something might be wrong but operation can continue
    Warning,
    /// Standard error - operation failed but the session can continue
    Error,
    /// Critical error - may require restarting the session
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Register name resolution errors
    Resolution,
    /// Recording state machine errors
    Recording,
    /// Playback errors
    Playback,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution => write!(f, "Resolution"),
            Self::Recording => write!(f, "Recording"),
            Self::Playback => write!(f, "Playback"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error in Encore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoreError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "E354", "NOT_RECORDING")
    pub code: String,
    /// Human-readable description, shown verbatim on the status line
    pub message: String,
}

impl EncoreError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// The register character is not a valid macro register
    #[must_use]
    pub fn invalid_register(name: char) -> Self {
        Self::new(
            ErrorType::Resolution,
            errors::INVALID_REGISTER,
            format!("E354: Invalid register name: '{name}'"),
        )
    }

    /// `@@` was invoked before any macro has been played this session
    #[must_use]
    pub fn no_previous_macro() -> Self {
        Self::new(
            ErrorType::Resolution,
            errors::NO_PREVIOUS_MACRO,
            errors::MSG_NO_PREVIOUS_MACRO,
        )
    }

    /// A recording session is already open
    #[must_use]
    pub fn already_recording() -> Self {
        Self::warning(
            ErrorType::Recording,
            errors::ALREADY_RECORDING,
            errors::MSG_ALREADY_RECORDING,
        )
    }

    /// Stop or feed was requested with no open recording session
    #[must_use]
    pub fn not_recording() -> Self {
        Self::warning(
            ErrorType::Recording,
            errors::NOT_RECORDING,
            errors::MSG_NOT_RECORDING,
        )
    }

    /// Check if the error carries the given code (useful for tests)
    #[must_use]
    pub fn is_code(&self, code: &str) -> bool {
        self.code == code
    }

    /// Check if the message contains a substring (useful for tests)
    #[must_use]
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for EncoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for EncoreError {}

/// Result alias for Encore operations
pub type Result<T> = std::result::Result<T, EncoreError>;

pub mod manager;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
