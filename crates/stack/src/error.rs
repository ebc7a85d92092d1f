//! Error types for the bounded stack.
//!
//! Uses thiserror for clean, idiomatic error definitions. Both conditions are
//! non-fatal: callers decide whether to recover, retry with a larger stack,
//! or abort.

use thiserror::Error;
use tracing::warn;

/// Bounded-stack errors.
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// Push attempted while the stack already holds `capacity` elements.
    #[error("stack overflow: push onto a full stack (capacity: {capacity})")]
    Overflow { capacity: usize },

    /// Pop attempted on an empty stack.
    #[error("stack underflow: pop from an empty stack")]
    Underflow,
}

impl StackError {
    /// Create an overflow error, logging the diagnostic at the failure site.
    pub(crate) fn overflow(capacity: usize) -> Self {
        warn!(capacity, "stack overflow, value discarded");
        Self::Overflow { capacity }
    }

    /// Create an underflow error, logging the diagnostic at the failure site.
    pub(crate) fn underflow() -> Self {
        warn!("stack underflow");
        Self::Underflow
    }

    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Overflow { .. } => "STACK:OVERFLOW",
            Self::Underflow => "STACK:UNDERFLOW",
        }
    }
}

/// Result alias for stack operations.
pub type StackResult<T> = Result<T, StackError>;
