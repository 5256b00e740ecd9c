//! Search layer: filters the catalogue by one of four [`SearchField`]s.
//!
//! Every search is a linear, order-preserving scan using case-sensitive
//! substring containment. Menu searches reshape each hit so it carries only
//! the menu items that matched; the other fields return whole records.

use crate::normalizer::{normalize_price, normalize_text};
use crate::types::{MenuItem, Price, Restaurant};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Field selector
// ---------------------------------------------------------------------------

/// Which attribute of a [`Restaurant`] a keyword is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    /// Substring of the restaurant name.
    #[default]
    Name,
    /// Substring of the percent-decoded address.
    Address,
    /// Substring of a menu item name, optionally constrained by price.
    MenuName,
    /// Exact canonical price of any menu item.
    Price,
}

impl SearchField {
    /// All selectors, in the order the UI presents them.
    pub const ALL: [SearchField; 4] = [
        SearchField::Name,
        SearchField::Address,
        SearchField::MenuName,
        SearchField::Price,
    ];

    /// Human-readable label used by the UI.
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Name => "식당명",
            SearchField::Address => "주소",
            SearchField::MenuName => "메뉴",
            SearchField::Price => "가격",
        }
    }

    /// Next selector in [`SearchField::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous selector in [`SearchField::ALL`], wrapping around.
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether this selector accepts an additional price constraint.
    pub fn takes_price(self) -> bool {
        self == SearchField::MenuName
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Name => write!(f, "name"),
            SearchField::Address => write!(f, "address"),
            SearchField::MenuName => write!(f, "menu"),
            SearchField::Price => write!(f, "price"),
        }
    }
}

/// Returned when a field selector string names none of the four fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search field {0:?} (expected name, address, menu or price)")]
pub struct ParseFieldError(pub String);

impl FromStr for SearchField {
    type Err = ParseFieldError;

    /// Accepts the English names (any ASCII case) and the Korean labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "식당명" => Ok(SearchField::Name),
            "address" | "주소" => Ok(SearchField::Address),
            "menu" | "menuname" | "menu_name" | "menu-name" | "메뉴" => {
                Ok(SearchField::MenuName)
            }
            "price" | "가격" => Ok(SearchField::Price),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// One search hit, borrowing from the catalogue.
///
/// For name, address and price searches the menu is the record's full menu.
/// For menu searches it holds only the items that matched; the rest of the
/// full menu is not reachable through the match.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    restaurant: &'a Restaurant,
    menu: Vec<&'a MenuItem>,
    reshaped: bool,
}

impl<'a> Match<'a> {
    fn whole(restaurant: &'a Restaurant) -> Self {
        Self {
            restaurant,
            menu: restaurant.menu.iter().collect(),
            reshaped: false,
        }
    }

    fn reshaped(restaurant: &'a Restaurant, menu: Vec<&'a MenuItem>) -> Self {
        Self { restaurant, menu, reshaped: true }
    }

    pub fn name(&self) -> &'a str {
        &self.restaurant.name
    }

    /// The address as stored (percent-encoded).
    pub fn address(&self) -> &'a str {
        &self.restaurant.address
    }

    pub fn decoded_address(&self) -> String {
        self.restaurant.decoded_address()
    }

    pub fn menu(&self) -> &[&'a MenuItem] {
        &self.menu
    }

    /// True when the menu was filtered down by a menu search.
    pub fn is_reshaped(&self) -> bool {
        self.reshaped
    }

    /// Owned record with the same `{name, address, menu}` shape as the match.
    pub fn to_record(&self) -> Restaurant {
        Restaurant {
            name: self.restaurant.name.clone(),
            address: self.restaurant.address.clone(),
            menu: self.menu.iter().map(|m| (*m).clone()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Filter `records` by `keyword` on `field`.
///
/// `price` constrains menu searches to items whose canonical price equals it;
/// it is ignored for every other field. An empty `keyword` matches everything,
/// so callers validate input first (see [`SearchForm`](crate::SearchForm)).
pub fn search<'a>(
    records: &'a [Restaurant],
    keyword: &str,
    field: SearchField,
    price: Option<Price>,
) -> Vec<Match<'a>> {
    let results: Vec<Match<'a>> = match field {
        SearchField::Name => records
            .iter()
            .filter(|r| r.name.contains(keyword))
            .map(Match::whole)
            .collect(),

        SearchField::Address => records
            .iter()
            .filter(|r| r.decoded_address().contains(keyword))
            .map(Match::whole)
            .collect(),

        SearchField::MenuName => records
            .iter()
            .filter_map(|r| {
                let items: Vec<&MenuItem> = r
                    .menu
                    .iter()
                    .filter(|item| {
                        item.name.contains(keyword)
                            && price.map_or(true, |p| normalize_price(&item.price) == p)
                    })
                    .collect();
                (!items.is_empty()).then(|| Match::reshaped(r, items))
            })
            .collect(),

        SearchField::Price => {
            let target = normalize_text(keyword);
            records
                .iter()
                .filter(|r| r.menu.iter().any(|item| normalize_price(&item.price) == target))
                .map(Match::whole)
                .collect()
        }
    };

    tracing::debug!(
        %field,
        keyword,
        ?price,
        scanned = records.len(),
        hits = results.len(),
        "search complete"
    );
    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawPrice;
    use pretty_assertions::assert_eq;

    fn item(name: &str, price: impl Into<RawPrice>) -> MenuItem {
        MenuItem { name: name.to_string(), price: price.into() }
    }

    fn restaurant(name: &str, address: &str, menu: Vec<MenuItem>) -> Restaurant {
        Restaurant { name: name.to_string(), address: address.to_string(), menu }
    }

    #[test]
    fn name_search_is_case_sensitive() {
        let records = vec![restaurant("Kim's BBQ", "Seoul", vec![])];
        assert_eq!(search(&records, "BBQ", SearchField::Name, None).len(), 1);
        assert!(search(&records, "bbq", SearchField::Name, None).is_empty());
    }

    #[test]
    fn address_search_decodes_first() {
        let records = vec![restaurant("a", "%EC%A4%91%EA%B5%AC", vec![])];
        let hits = search(&records, "중구", SearchField::Address, None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].address(), "%EC%A4%91%EA%B5%AC");
        assert_eq!(hits[0].decoded_address(), "중구");
        assert!(search(&records, "%EC", SearchField::Address, None).is_empty());
    }

    #[test]
    fn menu_search_with_price_reshapes() {
        let records = vec![restaurant(
            "a",
            "b",
            vec![item("Bulgogi", "8,000원"), item("Bulgogi Set", "12000")],
        )];
        let hits = search(&records, "Bulgogi", SearchField::MenuName, Some(8000));
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_reshaped());
        assert_eq!(hits[0].menu().len(), 1);
        assert_eq!(hits[0].menu()[0].name, "Bulgogi");
    }

    #[test]
    fn menu_search_without_price_keeps_all_keyword_hits() {
        let records = vec![restaurant(
            "a",
            "b",
            vec![item("Bulgogi", 8000), item("Naengmyeon", 9000), item("Bulgogi Set", 12000)],
        )];
        let hits = search(&records, "Bulgogi", SearchField::MenuName, None);
        let names: Vec<&str> = hits[0].menu().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Bulgogi", "Bulgogi Set"]);
    }

    #[test]
    fn price_search_returns_whole_record_once() {
        let records = vec![
            restaurant("a", "b", vec![item("x", "10,000원"), item("y", 10000), item("z", 500)]),
            restaurant("c", "d", vec![item("x", 9000)]),
        ];
        let hits = search(&records, "10000", SearchField::Price, None);
        assert_eq!(hits.len(), 1);
        assert!(!hits[0].is_reshaped());
        assert_eq!(hits[0].to_record(), records[0]);
    }

    #[test]
    fn full_width_price_keyword_matches() {
        let records = vec![restaurant("a", "b", vec![item("x", "8,000원"), item("y", "시가")])];
        assert_eq!(search(&records, "８,０００원", SearchField::Price, None).len(), 1);
    }

    #[test]
    fn oversized_price_keyword_does_not_match_market_price() {
        let records = vec![restaurant("a", "b", vec![item("x", "시가"), item("y", RawPrice::Null)])];
        assert!(search(&records, "99999999999999999999", SearchField::Price, None).is_empty());
    }

    #[test]
    fn price_is_ignored_outside_menu_search() {
        let records = vec![restaurant("Kim's BBQ", "Seoul", vec![item("x", 1)])];
        assert_eq!(search(&records, "Kim", SearchField::Name, Some(999)).len(), 1);
    }

    #[test]
    fn field_round_trips_through_display() {
        for field in SearchField::ALL {
            assert_eq!(field.to_string().parse::<SearchField>(), Ok(field));
            assert_eq!(field.label().parse::<SearchField>(), Ok(field));
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = "rating".parse::<SearchField>().unwrap_err();
        assert_eq!(err, ParseFieldError("rating".to_string()));
        assert!(err.to_string().contains("rating"));
    }

    #[test]
    fn field_cycling_wraps() {
        assert_eq!(SearchField::Price.next(), SearchField::Name);
        assert_eq!(SearchField::Name.prev(), SearchField::Price);
        assert!(SearchField::MenuName.takes_price());
        assert!(!SearchField::Price.takes_price());
    }
}
