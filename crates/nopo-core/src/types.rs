//! Core types for nopo-core.
//!
//! This module defines the catalogue records shared across every layer: the
//! [`Restaurant`], its [`MenuItem`]s, and the [`RawPrice`] representation kept
//! exactly as it appears in the source document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical price, produced by [`normalize_price`](crate::normalize_price).
///
/// Signed because integer prices stored in the catalogue are passed through
/// without re-validation.
pub type Price = i64;

/// One restaurant entry in the catalogue.
///
/// Field keys follow the Korean data set; the English names are
/// accepted as aliases so hand-written fixtures stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "식당명", alias = "name")]
    pub name: String,
    /// Percent-encoded street address, as stored. Use
    /// [`Restaurant::decoded_address`] for display and matching.
    #[serde(rename = "주소", alias = "address")]
    pub address: String,
    #[serde(rename = "메뉴", alias = "menu", default)]
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Percent-decode the stored address.
    ///
    /// Byte sequences that do not decode to valid UTF-8 are replaced with
    /// U+FFFD rather than rejected. `+` is left as-is.
    pub fn decoded_address(&self) -> String {
        decode_address(&self.address)
    }
}

/// A single priced menu entry belonging to a [`Restaurant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "메뉴명", alias = "name")]
    pub name: String,
    #[serde(rename = "가격", alias = "price", default)]
    pub price: RawPrice,
}

/// A price exactly as the catalogue stores it.
///
/// Data sets mix bare integers (`8000`) with annotated text (`"8,000원"`,
/// `"시가"`). The raw form is kept for display; comparisons always go through
/// the normalizer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Integer(i64),
    Text(String),
    #[default]
    Null,
    /// Floats, booleans, arrays, objects, or integers outside `i64`.
    Other(serde_json::Value),
}

impl fmt::Display for RawPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawPrice::Integer(n) => write!(f, "{n}"),
            RawPrice::Text(s) => f.write_str(s),
            RawPrice::Null => Ok(()),
            RawPrice::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for RawPrice {
    fn from(n: i64) -> Self {
        RawPrice::Integer(n)
    }
}

impl From<&str> for RawPrice {
    fn from(s: &str) -> Self {
        RawPrice::Text(s.to_string())
    }
}

impl From<String> for RawPrice {
    fn from(s: String) -> Self {
        RawPrice::Text(s)
    }
}

pub(crate) fn decode_address(encoded: &str) -> String {
    let bytes = urlencoding::decode_binary(encoded.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
