//! # cairn-numfmt
//!
//! Decimal formatting of unsigned 64-bit integers with single-write output.
//!
//! The crate does one thing: turn a `u64` into its decimal ASCII digits plus
//! a trailing newline, and push the whole slice to a writer in one call.
//! [`DecimalBuf`] is the allocation-free formatter; [`dump_to`] and [`dump`]
//! are the write paths.
//!
//! ```
//! let mut out = Vec::new();
//! cairn_numfmt::dump_to(68, &mut out)?;
//! assert_eq!(out, b"68\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};

mod decimal;

pub use decimal::{DecimalBuf, MAX_DIGITS};

/// Write the decimal rendering of `n`, newline-terminated, to `writer`.
///
/// The output is produced with a single `write_all`; nothing is buffered or
/// flushed beyond that call.
pub fn dump_to<W: Write>(n: u64, writer: &mut W) -> io::Result<()> {
    writer.write_all(DecimalBuf::format(n).as_bytes())
}

/// Write the decimal rendering of `n`, newline-terminated, to stdout.
pub fn dump(n: u64) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    dump_to(n, &mut handle)
}
