//! Property tests for decimal rendering.
//!
//! The rendered bytes must equal the standard formatter's output plus a
//! newline for every representable value, with no leading zeros.

use cairn_numfmt::{DecimalBuf, MAX_DIGITS, dump_to};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rendering_matches_std_formatter(n in any::<u64>()) {
        let text = DecimalBuf::format(n);
        prop_assert_eq!(text.digits(), n.to_string());
        let expected = format!("{n}\n");
        prop_assert_eq!(text.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn no_leading_zeros(n in 1u64..) {
        let text = DecimalBuf::format(n);
        prop_assert_ne!(text.as_bytes()[0], b'0');
    }

    #[test]
    fn digit_count_is_bounded(n in any::<u64>()) {
        let count = DecimalBuf::format(n).digit_count();
        prop_assert!(count >= 1);
        prop_assert!(count <= MAX_DIGITS);
    }

    #[test]
    fn dump_to_is_one_newline_terminated_line(n in any::<u64>()) {
        let mut out = Vec::new();
        dump_to(n, &mut out).unwrap();
        prop_assert_eq!(out.pop(), Some(b'\n'));
        prop_assert!(out.iter().all(u8::is_ascii_digit));
    }
}
