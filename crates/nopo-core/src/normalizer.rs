//! Normalizer: reduces a [`RawPrice`] to a canonical [`Price`].
//!
//! Normalisation is total: every input maps to a defined integer and nothing
//! here returns an error. Text is reduced to its decimal digits and parsed, so
//! `"3,500원"` becomes `3500`. Any Unicode decimal digit counts, so
//! `"８,０００원"` is `8000` too. Signs and decimal separators are stripped
//! with everything else, which means `"-5"` normalises to `5` and `"12.50"`
//! to `1250`.

use crate::types::{Price, RawPrice};
use regex::Regex;
use std::num::IntErrorKind;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\P{Nd}").expect("non-digit pattern must compile"));

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}$").expect("digit pattern must compile"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// ASCII form of a decimal digit.
///
/// Unicode assigns decimal digits in contiguous runs of ten starting at zero,
/// and adjacent runs only ever abut whole runs, so the offset from the start
/// of the enclosing run of digits gives the value.
fn fold_digit(c: char) -> char {
    if c.is_ascii_digit() {
        return c;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    // (c - start) % 10 is always < 10.
    char::from(b'0' + ((c as u32 - start) % 10) as u8)
}

/// Canonical integer form of a stored price.
///
/// - integers are returned unchanged, sign included
/// - null and empty text yield `0`
/// - text is stripped to its digits and parsed; no digits yields `0`, and a
///   value too large for [`Price`] saturates at [`Price::MAX`]
/// - any other JSON value yields `0`
pub fn normalize_price(price: &RawPrice) -> Price {
    match price {
        RawPrice::Integer(n) => *n,
        RawPrice::Text(s) => normalize_text(s),
        RawPrice::Null | RawPrice::Other(_) => 0,
    }
}

/// Canonical integer form of free text, e.g. a keyword typed into a price
/// search.
pub fn normalize_text(text: &str) -> Price {
    if text.is_empty() {
        return 0;
    }
    let digits: String = NON_DIGIT.replace_all(text, "").chars().map(fold_digit).collect();
    match digits.parse::<Price>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Price::MAX,
        Err(_) => 0,
    }
}
