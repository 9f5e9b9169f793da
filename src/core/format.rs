//! Text conversions between raw sensor fields and gauge numbers.

use crate::core::geometry::round_half_up;

/// Lenient integer parsing in the style of a browser `parseInt`.
///
/// Leading whitespace and an optional sign are accepted, followed by the
/// longest run of decimal digits (or hexadecimal digits after `0x`). Any
/// trailing text is ignored. Returns NaN when no digit can be read.
#[must_use]
pub fn parse_int_lenient(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match rest.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value = 0.0_f64;
    let mut seen_digit = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        value = value * f64::from(radix) + f64::from(digit);
        seen_digit = true;
    }

    if !seen_digit {
        return f64::NAN;
    }
    if negative { -value } else { value }
}

/// Whole-string numeric coercion in the style of a browser `Number(text)`.
///
/// Surrounding whitespace is ignored and blank text reads as `0`. Accepts
/// signed decimal literals with an optional exponent, `Infinity`, and
/// unsigned `0x`/`0o`/`0b` integers. Everything else is NaN, including the
/// `inf`/`nan` spellings `str::parse` would take.
#[must_use]
pub fn parse_number_strict(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&trimmed[2..], radix);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let is_decimal_literal = trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0_f64;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            return f64::NAN;
        };
        value = value * f64::from(radix) + f64::from(digit);
    }
    value
}

/// Integer part of an already-numeric input, with non-finite values mapped
/// to NaN so they share the invalid-input path of `parse_int_lenient`.
#[must_use]
pub fn integer_part(value: f64) -> f64 {
    if value.is_finite() {
        value.trunc()
    } else {
        f64::NAN
    }
}

/// Formats a number as a whole integer with comma thousands separators,
/// e.g. `1234.6` becomes `"1,235"`.
#[must_use]
pub fn format_grouped_integer(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let rounded = round_half_up(value);
    if rounded == 0.0 {
        return "0".to_owned();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Shortest decimal text for labels and transform attributes: `10`, `12.5`, `-3`.
#[must_use]
pub fn format_compact_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
