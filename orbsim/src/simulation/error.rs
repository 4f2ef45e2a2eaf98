//! Error kinds reported by the engine and the integrators.

use thiserror::Error;

use crate::simulation::integrator::Method;
use crate::simulation::states::Snapshot;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A step produced a non-finite position or velocity.
    /// `last_valid` is the snapshot the failing step started from.
    #[error("Numerical instability at step {step}: body '{body}' has a non-finite state")]
    NumericalInstability {
        step: usize,
        body: String,
        last_valid: Box<Snapshot>,
    },

    #[error("{method} needs {required} prior snapshot(s), got {available}")]
    InsufficientHistory {
        method: Method,
        required: usize,
        available: usize,
    },
}

impl SimError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SimError::InvalidConfiguration(reason.into())
    }
}
