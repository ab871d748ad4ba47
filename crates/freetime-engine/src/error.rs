//! Error types for freetime-engine operations.

use thiserror::Error;

/// Errors raised by the interval algebra.
///
/// Both variants are caller contract violations; nothing here is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    /// `intersect` or `union` was called on two intervals that do not overlap.
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// An interval was constructed with `begin` after `end`.
    #[error("Malformed interval: begin is after end")]
    MalformedInterval,
}

pub type Result<T> = std::result::Result<T, AgendaError>;
