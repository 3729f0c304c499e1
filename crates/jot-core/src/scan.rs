//! Scalar lexers: leaf routines that recognize a single numeric or quoted
//! text literal at the start of a buffer. No recursion here; the structural
//! parser owns all of that.
//!
//! # Key design decisions
//!
//! - **Anchored longest match**: [`number`] matches the longest prefix of
//!   `[+-]? ( digits ('.' digits*)? | '.' digits+ ) ( [eE] [+-]? digits+ )?`
//!   starting at byte 0. An exponent marker with no digits after it is left
//!   out of the match, so `"1e"` lexes as the integer `1` of length 1.
//! - **Integer-first conversion**: the matched text is tried as `i64`, then
//!   as `f64`. `"123"` is an integer; `"123.0"`, `"1e3"`, and out-of-range
//!   integers fall through to float.
//! - **Silent unterminated strings**: [`quoted`] reports the entire remaining
//!   buffer as consumed when no closing quote is found, rather than failing.

use crate::value::Value;

/// Lex a numeric literal at the start of `input`.
///
/// Returns the converted value and the matched byte length, or `None` when
/// the buffer does not start with a numeric literal (or, as a guard, when the
/// matched text converts to neither `i64` nor `f64`).
pub fn number(input: &str) -> Option<(Value, usize)> {
    let len = match_number(input);
    if len == 0 {
        return None;
    }
    let text = &input[..len];
    if let Ok(n) = text.parse::<i64>() {
        return Some((Value::Integer(n), len));
    }
    if let Ok(f) = text.parse::<f64>() {
        return Some((Value::Float(f), len));
    }
    None
}

/// Byte length of the longest numeric-literal prefix of `input`, 0 if none.
fn match_number(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        i += 1;
    }

    let int_digits = digit_run(&bytes[i..]);
    i += int_digits;

    if int_digits > 0 {
        // digits, optionally followed by '.' and more digits
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            i += digit_run(&bytes[i..]);
        }
    } else {
        // no integer part: '.' followed by at least one digit, or no match
        if bytes.get(i) != Some(&b'.') {
            return 0;
        }
        let frac_digits = digit_run(&bytes[i + 1..]);
        if frac_digits == 0 {
            return 0;
        }
        i += 1 + frac_digits;
    }

    // optional exponent, included only when it carries at least one digit
    if matches!(bytes.get(i), Some(&b'e') | Some(&b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(&b'+') | Some(&b'-')) {
            j += 1;
        }
        let exp_digits = digit_run(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Lex a quoted text literal. `input` must start with `"`.
///
/// Scans char by char in one of two states. Raw: a backslash switches to
/// Escaped without emitting anything, a closing quote terminates (the
/// consumed length covers both quotes), anything else is copied verbatim.
/// Escaped: the char is mapped through the fixed escape table and the state
/// returns to Raw.
///
/// If the buffer ends before a closing quote, the scan terminates at end of
/// buffer and reports the whole remaining length as consumed; an
/// unterminated literal is accepted silently, not rejected.
pub fn quoted(input: &str) -> (String, usize) {
    debug_assert!(input.starts_with('"'));
    let mut text = String::new();
    let mut escaped = false;

    for (idx, ch) in input.char_indices().skip(1) {
        if escaped {
            text.push(unescape(ch));
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            return (text, idx + 1);
        } else {
            text.push(ch);
        }
    }

    (text, input.len())
}

/// Fixed escape table. Unlisted chars map to themselves, which also covers
/// `\"`, `\\`, and `\/`.
fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'b' => '\x08',
        'f' => '\x0C',
        '0' => '\0',
        'v' => '\x0B',
        'a' => '\x07',
        other => other,
    }
}
