//! Application error taxonomy.
//!
//! The variants map onto the outcomes the core distinguishes:
//! [`AppError::Conflict`] is recoverable and drives the uniqueness retry
//! loop, [`AppError::NotFound`] and [`AppError::RetriesExhausted`] are
//! terminal, and [`AppError::BackendUnavailable`] marks infrastructure
//! failure on a fail-closed path. Fail-open paths (the rate limiter and
//! the cache read path) never return it; they log, count, and degrade.

use crate::infrastructure::fast_store::FastStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted URL failed validation or normalization.
    #[error("invalid url: {reason}")]
    Validation { reason: String },

    /// The short code already exists in the durable store.
    #[error("short code already exists: {code}")]
    Conflict { code: String },

    /// No record exists for the requested short code.
    #[error("short code not found: {code}")]
    NotFound { code: String },

    /// A backing store could not be reached on a fail-closed path.
    #[error("backend unavailable: {reason}")]
    BackendUnavailable { reason: String },

    /// Every generation attempt collided with an existing code.
    ///
    /// With the 62-symbol alphabet at the default length of 8 this is
    /// astronomically rare; it exists as a safety bound against
    /// pathological store states, and is surfaced distinctly so operators
    /// can tell keyspace exhaustion from infrastructure failure.
    #[error("failed to generate a unique code after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

impl AppError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub fn conflict(code: impl Into<String>) -> Self {
        Self::Conflict { code: code.into() }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn backend(reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            reason: reason.into(),
        }
    }
}

impl From<FastStoreError> for AppError {
    fn from(err: FastStoreError) -> Self {
        Self::BackendUnavailable {
            reason: err.to_string(),
        }
    }
}
