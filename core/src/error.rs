//! Error type for handle generation.

use crate::kernel::KernelOpError;
use thiserror::Error;

/// Errors raised while building profiles, interpolating or lofting a handle.
#[derive(Debug, Error)]
pub enum HandleError {
    /// A precondition on the geometric inputs was violated
    /// (mismatched vertex counts, non-positive order, too few steps, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelOpError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown shape: {0}")]
    UnknownShape(String),
}

impl HandleError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Result type for handle operations.
pub type HandleResult<T> = Result<T, HandleError>;
