//! Stack-machine evaluator.
//!
//! Programs are flat op slices executed against a bounded stack. Arithmetic
//! pops its operands, pushes the result, and wraps on 64-bit overflow the way
//! machine words do; `Dump` pops a value and emits it through the decimal
//! writer. A well-formed program consumes everything it pushes.

use std::io::Write;

use cairn_numfmt::dump_to;
use cairn_stack::FixedStack;

use crate::error::{VmError, VmResult};

/// One stack-machine instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Push an immediate value.
    Push(u64),
    /// Pop `a`, pop `b`, push `a + b`.
    Plus,
    /// Pop `a`, pop `b`, push `b - a`.
    Minus,
    /// Pop a value and write it, newline-terminated, to the output.
    Dump,
}

/// A stack machine bound to a fixed-capacity value stack.
///
/// # Example
/// ```
/// use cairn_vm::{Machine, Op};
///
/// let mut out = Vec::new();
/// let mut machine = Machine::new(1024);
/// machine.run(
///     &[Op::Push(30), Op::Push(38), Op::Plus, Op::Dump],
///     &mut out,
/// )?;
/// assert_eq!(out, b"68\n");
/// # Ok::<(), cairn_vm::VmError>(())
/// ```
#[derive(Debug)]
pub struct Machine {
    stack: FixedStack<u64>,
}

impl Machine {
    /// Create a machine whose stack holds at most `capacity` values.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            stack: FixedStack::new(capacity),
        }
    }

    /// Execute `program`, writing `Dump` output to `out`.
    ///
    /// Fails on stack misuse or write errors, and on programs that leave
    /// values behind; in the error case the stack keeps whatever the program
    /// had pushed so far, so callers can inspect it through
    /// [`depth`](Self::depth) before [`reset`](Self::reset).
    pub fn run<W: Write>(&mut self, program: &[Op], out: &mut W) -> VmResult<()> {
        for op in program {
            self.step(*op, out)?;
        }
        if !self.stack.is_empty() {
            return Err(VmError::Leftover {
                depth: self.stack.len(),
            });
        }
        Ok(())
    }

    fn step<W: Write>(&mut self, op: Op, out: &mut W) -> VmResult<()> {
        match op {
            Op::Push(value) => self.stack.push(value)?,
            Op::Plus => {
                let a = self.stack.try_pop()?;
                let b = self.stack.try_pop()?;
                self.stack.push(a.wrapping_add(b))?;
            }
            Op::Minus => {
                let a = self.stack.try_pop()?;
                let b = self.stack.try_pop()?;
                self.stack.push(b.wrapping_sub(a))?;
            }
            Op::Dump => {
                let value = self.stack.try_pop()?;
                dump_to(value, out)?;
            }
        }
        Ok(())
    }

    /// Number of values currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drop any values a failed program left behind.
    pub fn reset(&mut self) {
        self.stack.clear();
    }
}
