//! Demo driver: runs the `30 + 38` program on the stack machine and dumps
//! the sum to stdout as `68\n`.
//!
//! Overflow/underflow diagnostics from the stack go to stderr via the
//! tracing subscriber installed here, so they can never mix with the dump
//! output on stdout.

use anyhow::{Context as _, Result};
use cairn_vm::{Machine, Op};
use tracing_subscriber::EnvFilter;

/// Same bound the original demo used for its process-wide array.
const DEMO_CAPACITY: usize = 1024;

/// Push 30 and 38, fold them with `Plus`, dump the sum.
const DEMO_PROGRAM: &[Op] = &[Op::Push(30), Op::Push(38), Op::Plus, Op::Dump];

fn main() -> Result<()> {
    init_tracing();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut machine = Machine::new(DEMO_CAPACITY);
    machine
        .run(DEMO_PROGRAM, &mut out)
        .context("running demo program")?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
