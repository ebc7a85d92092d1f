//! # cairn-vm
//!
//! A tiny stack machine tying the workspace together: programs are slices of
//! [`Op`] values evaluated by a [`Machine`] against a fixed-capacity
//! `cairn-stack` stack, with `Dump` output rendered through `cairn-numfmt`.
//!
//! The op set is deliberately small — push, add, subtract, dump. Underflow,
//! overflow, and programs that leave values on the stack are all reported as
//! [`VmError`]s rather than aborting.
//!
//! ```
//! use cairn_vm::{Machine, Op};
//!
//! let mut out = Vec::new();
//! Machine::new(1024).run(&[Op::Push(68), Op::Dump], &mut out)?;
//! assert_eq!(out, b"68\n");
//! # Ok::<(), cairn_vm::VmError>(())
//! ```

pub mod error;
mod machine;

pub use error::{VmError, VmResult};
pub use machine::{Machine, Op};
