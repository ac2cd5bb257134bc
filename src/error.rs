//! Error types for the designer crate.

use thiserror::Error;

/// Errors raised by circuit model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// Placement on a lane that does not exist.
    #[error("Invalid placement: lane {qubit} is outside a {lanes}-lane circuit")]
    InvalidPlacement {
        /// Requested lane.
        qubit: usize,
        /// Current lane count.
        lanes: usize,
    },

    /// Placement on the last representable column.
    #[error("Invalid placement: step {step} is out of range")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
    },
}

/// Result type for circuit operations.
pub type CircuitResult<T> = Result<T, CircuitError>;

/// Gate name not present in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateParseError {
    #[error("Unknown gate: '{0}'")]
    UnknownGate(String),
}

/// Export dialect name not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown export dialect: '{0}' (expected 'indexed' or 'bare')")]
pub struct DialectParseError(pub String);

/// Errors produced while parsing a command script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The line does not match any command form.
    #[error("Syntax error on line {line}: '{text}'")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        text: String,
    },

    /// A command names a gate outside the catalog.
    #[error("Unknown gate '{name}' on line {line}")]
    UnknownGate {
        /// 1-based line number.
        line: usize,
        /// Gate name as written.
        name: String,
    },
}

/// Errors surfaced by the designer session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// A script command failed while being applied.
    #[error("Command on line {line} failed: {source}")]
    Command {
        /// 1-based line number.
        line: usize,
        /// Underlying model error.
        source: CircuitError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CircuitError::InvalidPlacement { qubit: 5, lanes: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid placement: lane 5 is outside a 4-lane circuit"
        );

        let err = ScriptError::Syntax {
            line: 3,
            text: "plce h 0 0".to_string(),
        };
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_command_error_wraps_source() {
        let err = SessionError::Command {
            line: 2,
            source: CircuitError::InvalidPlacement { qubit: 9, lanes: 2 },
        };
        assert!(err.to_string().starts_with("Command on line 2 failed"));
    }
}
