//! Integer-prefix parsing
//!
//! `str::parse` rejects the whole input on any trailing garbage. The functions
//! here read the longest valid integer prefix instead and ignore the rest, so
//! `"42px"` yields 42 and `"  -7 apples"` yields -7.

use crate::error::{Error, Result};
use tracing::trace;

/// Parse the leading integer of `text`.
///
/// Leading whitespace other than U+0085 is skipped, a single `+` or `-` sign
/// is accepted, and a `0x`/`0X` prefix switches to hexadecimal. Parsing stops at the first
/// character that is not a digit in the active radix. Values outside the
/// `i64` range saturate.
pub fn parse_int_prefix(text: &str) -> Result<i64> {
    let trimmed = text.trim_start_matches(is_leading_space);

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        seen_digit = true;
        let digit = i64::from(digit);
        // Accumulate toward the sign so i64::MIN is reachable.
        value = if negative {
            value.saturating_mul(i64::from(radix)).saturating_sub(digit)
        } else {
            value.saturating_mul(i64::from(radix)).saturating_add(digit)
        };
    }

    if seen_digit {
        Ok(value)
    } else {
        Err(Error::NoDigits(text.to_string()))
    }
}

/// Unicode whitespace plus U+FEFF, minus NEXT LINE (U+0085)
fn is_leading_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Parse the leading integer of `text`, falling back to 0 on failure.
pub fn parse_int_or_zero(text: &str) -> i64 {
    match parse_int_prefix(text) {
        Ok(value) => value,
        Err(err) => {
            trace!("Defaulting to 0: {}", err);
            0
        }
    }
}
