//! Value formatting shared by every renderer and the CSV exporter.
//!
//! All formatters follow one rule: a value that is not a number passes
//! through in its plain string form, and null becomes the empty string.

use crate::chart::{CellValue, DataFormat};

/// Axis tick labels longer than this are shortened.
pub const TICK_LABEL_MAX_CHARS: usize = 20;
/// Characters kept from a shortened tick label.
pub const TICK_LABEL_KEEP_CHARS: usize = 17;
/// Table cells longer than this are shortened for display.
pub const CELL_MAX_CHARS: usize = 30;
/// Characters kept from a shortened table cell.
pub const CELL_KEEP_CHARS: usize = 27;
pub const ELLIPSIS: &str = "...";

const NUMBER_FRACTION_DIGITS: usize = 3;

/// Format a cell value with a column's format.
#[must_use]
pub fn format_value(value: &CellValue, format: Option<DataFormat>) -> String {
    let number = value.as_number();
    match (format, number) {
        (Some(DataFormat::Number), Some(n)) => format_number(n),
        (Some(DataFormat::Currency), Some(n)) => format_currency(n),
        (Some(DataFormat::Percentage), Some(n)) => format_percentage(n),
        _ => value.to_string(),
    }
}

/// en-US grouping with up to three fraction digits: `1234567.891` -> `1,234,567.891`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return plain_number(n);
    }
    let (int_part, frac_part) = round_half_away(n.abs(), NUMBER_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = group_thousands(&int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    with_sign(n, out)
}

/// Dollar amount with grouping and exactly two decimals: `-1234.5` -> `-$1,234.50`.
#[must_use]
pub fn format_currency(n: f64) -> String {
    if !n.is_finite() {
        return plain_number(n);
    }
    let (int_part, frac_part) = round_half_away(n.abs(), 2);
    with_sign(n, format!("${}.{frac_part}", group_thousands(&int_part)))
}

/// Fraction as a percentage with two decimals: `0.4567` -> `45.67%`.
#[must_use]
pub fn format_percentage(n: f64) -> String {
    if !n.is_finite() {
        return plain_number(n);
    }
    let (int_part, frac_part) = round_half_away((n * 100.0).abs(), 2);
    with_sign(n, format!("{int_part}.{frac_part}%"))
}

/// Shortest plain decimal form of a number, with no grouping.
///
/// Whole numbers print without a fraction (`1500000`), negative zero prints
/// as `0`.
#[must_use]
pub fn plain_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let name = if n > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Insert `,` every three digits from the right of an unsigned digit string.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Shorten an axis tick label: more than 20 characters keeps the first 17 plus `...`.
#[must_use]
pub fn truncate_tick_label(label: &str) -> String {
    truncate(label, TICK_LABEL_MAX_CHARS, TICK_LABEL_KEEP_CHARS)
}

/// Shorten a formatted table cell: more than 30 characters keeps the first 27 plus `...`.
#[must_use]
pub fn truncate_cell(text: &str) -> String {
    truncate(text, CELL_MAX_CHARS, CELL_KEEP_CHARS)
}

/// Round a non-negative finite number to `digits` fraction digits, ties away
/// from zero, returning the integer and fraction digit strings.
///
/// Rounds the shortest decimal form of the value, so `1.005` rounds as
/// written rather than as its binary approximation.
fn round_half_away(magnitude: f64, digits: usize) -> (String, String) {
    let text = magnitude.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if frac_part.len() <= digits {
        return (int_part.to_string(), format!("{frac_part:0<digits$}"));
    }

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    if frac_part.as_bytes()[digits] >= b'5' {
        increment_digits(&mut kept);
    }

    let rounded: String = kept.into_iter().map(char::from).collect();
    let (int_digits, frac_digits) = rounded.split_at(rounded.len() - digits);
    (int_digits.to_string(), frac_digits.to_string())
}

// Add one to an ASCII decimal digit string, growing it on overflow.
fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn truncate(text: &str, max: usize, keep: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

// Prefix `-` only when the rounded magnitude is non-zero.
fn with_sign(n: f64, magnitude: String) -> String {
    let is_zero = magnitude
        .chars()
        .filter(char::is_ascii_digit)
        .all(|ch| ch == '0');
    if n < 0.0 && !is_zero {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
