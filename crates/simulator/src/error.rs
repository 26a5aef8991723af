//! Error types for the Monte Carlo engine.

use thiserror::Error;

/// Construction-time failures. A simulation that was built successfully
/// never fails afterwards.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TfimError {
    /// The lattice cannot be allocated with the requested side length.
    #[error("invalid lattice configuration: size {size} ({reason})")]
    InvalidConfig { size: usize, reason: &'static str },

    /// A physical parameter is outside its domain.
    #[error("invalid parameter {name} = {value}: expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Result type for the Monte Carlo engine.
pub type TfimResult<T> = Result<T, TfimError>;
