//! # cairn-stack
//!
//! A fixed-capacity LIFO stack with explicit overflow and underflow
//! reporting.
//!
//! The classic array-and-top-index stack, re-architected as an owned value:
//! no globals, no sentinel returns. Overflow and underflow are modeled as
//! [`StackError`] variants via the [`error`] module, and each failure also
//! emits a structured `tracing` diagnostic at `warn` level so misuse shows up
//! on the error channel without aborting the process.
//!
//! ```
//! use cairn_stack::FixedStack;
//!
//! let mut stack = FixedStack::new(1024);
//! stack.push(30u64)?;
//! stack.push(38)?;
//! let a = stack.try_pop()?;
//! let b = stack.try_pop()?;
//! stack.push(a + b)?;
//! assert_eq!(stack.pop(), Some(68));
//! # Ok::<(), cairn_stack::StackError>(())
//! ```

pub mod error;
mod stack;

pub use error::{StackError, StackResult};
pub use stack::FixedStack;
