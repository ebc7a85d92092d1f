//! Error types for program evaluation.

use std::io;

use thiserror::Error;

use cairn_stack::StackError;

/// Evaluation errors.
///
/// Stack misuse (underflow from an arithmetic or dump op, overflow from a
/// push) surfaces as the underlying [`StackError`]; a program that terminates
/// with values still on the stack is rejected as [`Leftover`](Self::Leftover).
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum VmError {
    #[error(transparent)]
    Stack(#[from] StackError),

    #[error("dump write failed: {0}")]
    Io(#[from] io::Error),

    /// The program finished without consuming everything it pushed.
    #[error("program finished with {depth} value(s) left on the stack")]
    Leftover { depth: usize },
}

/// Result alias for evaluation.
pub type VmResult<T> = Result<T, VmError>;
