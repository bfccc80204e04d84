//! Pure array transformations
//!
//! Every function borrows its input and returns a freshly allocated result.
//! None of them panic: unparseable text becomes 0.
//!
//! Numbers are `f64`. Parsed text is integral, so the parsing functions
//! return `i64`.

use super::parse::parse_int_or_zero;

/// Colors accepted by [`all_rgb`].
pub const PRIMARY_COLORS: [&str; 3] = ["red", "blue", "green"];

/// Words shorter than this many characters count as short.
pub const SHORT_WORD_LIMIT: usize = 4;

/// Return the first and last number.
///
/// An empty slice yields an empty vector and a single element is repeated.
pub fn book_end_list(numbers: &[f64]) -> Vec<f64> {
    match (numbers.first(), numbers.last()) {
        (Some(&first), Some(&last)) => vec![first, last],
        _ => Vec::new(),
    }
}

/// Multiply every number by 3.
pub fn triple_numbers(numbers: &[f64]) -> Vec<f64> {
    numbers.iter().map(|n| n * 3.0).collect()
}

/// Parse each string's integer prefix, using 0 where there is none.
pub fn strings_to_integers<S: AsRef<str>>(numbers: &[S]) -> Vec<i64> {
    numbers
        .iter()
        .map(|text| parse_int_or_zero(text.as_ref()))
        .collect()
}

/// Like [`strings_to_integers`], after dropping one leading `$`.
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<i64> {
    amounts
        .iter()
        .map(|amount| {
            let amount = amount.as_ref();
            parse_int_or_zero(amount.strip_prefix('$').unwrap_or(amount))
        })
        .collect()
}

/// Uppercase messages ending in `!` and drop messages ending in `?`.
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .map(|message| {
            let message = message.as_ref();
            if message.ends_with('!') {
                message.to_uppercase()
            } else {
                message.to_string()
            }
        })
        .filter(|message| !message.ends_with('?'))
        .collect()
}

/// Count the words shorter than [`SHORT_WORD_LIMIT`] characters.
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|word| word.as_ref().chars().count() < SHORT_WORD_LIMIT)
        .count()
}

/// Check that every color is one of [`PRIMARY_COLORS`].
///
/// Matching is exact and case-sensitive. An empty slice is vacuously true.
pub fn all_rgb<S: AsRef<str>>(colors: &[S]) -> bool {
    colors
        .iter()
        .all(|color| PRIMARY_COLORS.contains(&color.as_ref()))
}

/// Render the numbers as an addition, e.g. `[1, 2, 3]` becomes `"6=1+2+3"`.
///
/// Terms are joined verbatim, so a negative term shows up as `+-5`. An empty
/// slice renders as `"0=0"`.
pub fn make_math(addends: &[f64]) -> String {
    let addition = if addends.is_empty() {
        "0".to_string()
    } else {
        addends
            .iter()
            .map(|&n| format_number(n))
            .collect::<Vec<_>>()
            .join("+")
    };
    format!("{}={}", format_number(sum(addends)), addition)
}

/// Insert, right after the first negative number, the sum of the numbers
/// before it. Without a negative number the total is appended instead.
///
/// `[1, 9, -5, 7]` becomes `[1, 9, -5, 10, 7]` and `[1, 9, 7]` becomes
/// `[1, 9, 7, 17]`.
pub fn inject_positive(values: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(values.len() + 1);
    match values.iter().position(|&n| n < 0.0) {
        Some(index) => {
            let (before, rest) = values.split_at(index + 1);
            result.extend_from_slice(before);
            result.push(sum(&values[..index]));
            result.extend_from_slice(rest);
        }
        None => {
            result.extend_from_slice(values);
            result.push(sum(values));
        }
    }
    result
}

/// Render a number the way `make_math` prints it
///
/// Integral values print without a decimal point and negative zero prints as
/// `0`. Magnitudes of at least 1e21 or below 1e-6 use exponent notation with
/// an explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let rendered = format!("{:e}", n);
        if rendered.contains("e-") {
            return rendered;
        }
        return rendered.replacen('e', "e+", 1);
    }
    n.to_string()
}

fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |total, &n| total + n)
}
