//! Error types for model and circuit construction.

use thiserror::Error;

/// Errors produced while building a Hamiltonian.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A size parameter was zero or otherwise unusable.
    #[error("{what} must be at least {min}, got {value}")]
    InvalidSize {
        what: &'static str,
        value: usize,
        min: usize,
    },

    /// The Hilbert space would not fit a dense matrix.
    #[error("{what} = {value} exceeds the dense limit of {max}")]
    TooLarge {
        what: &'static str,
        value: usize,
        max: usize,
    },

    /// A coupling or frequency was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Result type for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors produced while building or evaluating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CircuitError {
    #[error("gate references qubit {qubit} but circuit only has {num_qubits} qubits")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("two-qubit gate applied to qubit {0} twice")]
    RepeatedQubit(usize),

    #[error("construction needs at least {required} qubits, got {got}")]
    TooFewQubits { required: usize, got: usize },

    #[error("parameter '{0}' has no bound value")]
    UnboundParameter(String),

    #[error("dense unitary limited to {max} qubits, circuit has {num_qubits}")]
    TooWide { num_qubits: usize, max: usize },
}

/// Result type for circuit construction.
pub type CircuitResult<T> = Result<T, CircuitError>;
