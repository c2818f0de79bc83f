//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Two circuits with different qubit counts were combined.
    #[error("Cannot combine circuits on {left} and {right} qubits")]
    QubitCountMismatch {
        /// Qubit count of the receiver.
        left: usize,
        /// Qubit count of the other operand.
        right: usize,
    },

    /// `append` was called with a name outside the building-operation set.
    #[error("Unknown circuit-building operation '{0}'")]
    InvalidOperationName(String),

    /// Conjugation met an opcode outside the rewrite table.
    #[error("Cannot conjugate unsupported instruction kind '{0}'")]
    UnsupportedInstructionKind(String),

    /// A line's fields do not match its opcode's arity or field types.
    #[error("Malformed '{opcode}' instruction: {reason}{}", format_line_context(.line))]
    MalformedInstruction {
        /// Opcode of the offending line (may be empty).
        opcode: String,
        /// What is wrong with it.
        reason: String,
        /// The raw line, when available.
        line: Option<String>,
    },

    /// Axis selector outside `{x, y, z}`.
    #[error(transparent)]
    InvalidAxis(#[from] qlist_gates::GateError),

    /// A qubit index is not below the circuit's qubit count.
    #[error("Qubit {qubit} out of range for a {num_bits}-qubit circuit{}", format_line_context(.line))]
    QubitOutOfRange {
        /// The offending index.
        qubit: usize,
        /// Qubit count of the circuit.
        num_bits: usize,
        /// The raw line, when available.
        line: Option<String>,
    },

    /// Slice with a zero step.
    #[error("Slice step cannot be zero")]
    InvalidSlice,

    /// Filesystem error while persisting or staging a circuit.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IrError {
    /// Build a [`IrError::MalformedInstruction`] without line context.
    pub fn malformed(opcode: impl Into<String>, reason: impl Into<String>) -> Self {
        IrError::MalformedInstruction {
            opcode: opcode.into(),
            reason: reason.into(),
            line: None,
        }
    }

    /// Attach the raw line to errors that carry line context.
    #[must_use]
    pub fn with_line(self, raw: &str) -> Self {
        match self {
            IrError::MalformedInstruction { opcode, reason, .. } => {
                IrError::MalformedInstruction {
                    opcode,
                    reason,
                    line: Some(raw.to_string()),
                }
            }
            IrError::QubitOutOfRange { qubit, num_bits, .. } => IrError::QubitOutOfRange {
                qubit,
                num_bits,
                line: Some(raw.to_string()),
            },
            other => other,
        }
    }
}

/// Helper function to format optional line context.
#[allow(clippy::ref_option)]
fn format_line_context(line: &Option<String>) -> String {
    match line {
        Some(line) => format!(" (line: {line:?})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

/// Failure of a delegated materialization call.
///
/// Collaborator errors are carried unchanged so callers can match on their
/// own error type.
#[derive(Debug, Error)]
pub enum MaterializeError<E> {
    /// The IR side failed (staging, persistence).
    #[error(transparent)]
    Ir(#[from] IrError),

    /// The external reader or simulator failed.
    #[error("Collaborator failed: {0}")]
    Collaborator(#[source] E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_context_in_message() {
        let err = IrError::malformed("ROTX", "expected 4 fields, got 2").with_line("ROTX\t30");
        let msg = err.to_string();
        assert!(msg.contains("ROTX"));
        assert!(msg.contains("expected 4 fields"));
        assert!(msg.contains("line:"));
    }

    #[test]
    fn test_mismatch_message() {
        let err = IrError::QubitCountMismatch { left: 3, right: 4 };
        assert_eq!(err.to_string(), "Cannot combine circuits on 3 and 4 qubits");
    }
}
