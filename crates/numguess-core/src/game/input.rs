//! Lenient number extraction from typed input.
//!
//! Input is never rejected: the first run of decimal digits anywhere in
//! the line is taken and cut down to at most `max_digits` digits, so
//! "1000" read with a two-digit cap becomes 10 and "guess 7!" becomes 7.
//! Any Unicode decimal digit counts, so "٣" and "７" read as 3 and 7.

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

/// First run of up to `max_digits` digits in `input`, if any
pub fn first_number(input: &str, max_digits: usize) -> Option<u32> {
    if max_digits == 0 {
        return None;
    }
    let run = DIGIT_RUN.find(input)?.as_str();
    run.chars()
        .take(max_digits)
        .try_fold(0u32, |acc, c| acc.checked_mul(10)?.checked_add(digit_value(c)))
}

/// Menu choice from the first digit in `input`.
///
/// Menu options are the ASCII digits, so a first digit from another
/// script selects nothing.
pub fn first_choice(input: &str) -> Option<u32> {
    DIGIT_RUN.find(input)?.as_str().chars().next()?.to_digit(10)
}

/// Guess value for `input`; unreadable input counts as 0
pub fn parse_guess(input: &str, max_digits: usize) -> u32 {
    first_number(input, max_digits).unwrap_or(0)
}

fn is_decimal_digit(c: char) -> bool {
    DIGIT.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Value of a decimal digit.
///
/// Unicode encodes every decimal digit set as contiguous 0..9 blocks, so a
/// run of consecutive digit code points always starts at a zero and the
/// value is the offset from that start, mod 10.
fn digit_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }
    let mut offset = 0;
    let mut cp = c as u32;
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32)
        && is_decimal_digit(prev)
    {
        offset += 1;
        cp -= 1;
    }
    offset % 10
}
