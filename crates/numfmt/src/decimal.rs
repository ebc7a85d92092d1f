//! Fixed-buffer decimal rendering of `u64` values.
//!
//! The buffer is filled back to front so the finished text is a contiguous
//! slice ready for a single bulk write. Ownership is entirely local and
//! transient; nothing here touches the heap.

/// Maximum decimal digit count of a `u64` (`u64::MAX` has 20 digits).
pub const MAX_DIGITS: usize = 20;

/// Backing buffer length: 20 digits, one newline, margin to spare.
const BUF_LEN: usize = 32;

/// A rendered decimal number plus trailing newline.
///
/// Construction cannot fail: the longest possible rendering
/// (`u64::MAX` plus `\n`) is 21 bytes against a 32-byte buffer.
///
/// # Example
/// ```
/// use cairn_numfmt::DecimalBuf;
///
/// let text = DecimalBuf::format(68);
/// assert_eq!(text.as_bytes(), b"68\n");
/// assert_eq!(text.digits(), "68");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecimalBuf {
    buf: [u8; BUF_LEN],
    start: usize,
}

impl DecimalBuf {
    /// Render `n` as decimal digits followed by a newline.
    #[must_use]
    pub fn format(mut n: u64) -> Self {
        let mut buf = [0u8; BUF_LEN];
        let mut start = BUF_LEN - 1;
        buf[start] = b'\n';
        // Emits at least one digit, so 0 still renders as "0".
        loop {
            start -= 1;
            buf[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        Self { buf, start }
    }

    /// The digits plus the trailing newline, ready for one `write_all`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    /// The digits without the newline.
    #[must_use]
    pub fn digits(&self) -> &str {
        let digits = &self.buf[self.start..BUF_LEN - 1];
        // Only ASCII digits ever land in the used region.
        std::str::from_utf8(digits).expect("decimal buffer holds ASCII digits")
    }

    /// Number of rendered digits, newline excluded.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        BUF_LEN - 1 - self.start
    }
}
