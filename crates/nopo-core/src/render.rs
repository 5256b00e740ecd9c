//! Plain-text rendering of search results, used by the headless CLI.
//!
//! Layout per match:
//!
//! ```text
//! name: 우래옥
//! address: 서울 중구 창경궁로 62-29
//! - menu: 물냉면, price: 16,000원
//! ==============================
//! ```
//!
//! Addresses are printed decoded; prices are printed as stored.

use crate::search::Match;
use std::io::{self, Write};

/// Message written when a search produced nothing.
pub const NO_RESULTS: &str = "no results found";

/// Default width of the `=` separator between matches.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 30;

/// Write `matches` to `out`, or [`NO_RESULTS`] when there are none.
pub fn write_results<W: Write>(
    out: &mut W,
    matches: &[Match<'_>],
    separator_width: usize,
) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "{NO_RESULTS}");
    }

    let separator = "=".repeat(separator_width);
    for m in matches {
        writeln!(out, "name: {}", m.name())?;
        writeln!(out, "address: {}", m.decoded_address())?;
        for item in m.menu() {
            writeln!(out, "- menu: {}, price: {}", item.name, item.price)?;
        }
        writeln!(out, "{separator}")?;
    }
    Ok(())
}

/// Render to a `String`. Convenience wrapper over [`write_results`].
pub fn render_results(matches: &[Match<'_>], separator_width: usize) -> String {
    let mut buf = Vec::new();
    write_results(&mut buf, matches, separator_width).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}
