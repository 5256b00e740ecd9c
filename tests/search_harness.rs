//! Search layer integration harness.
//!
//! # What this covers
//!
//! - **Each field**: name, decoded address, menu name (with and without a
//!   price constraint) and exact price, against the shipped sample catalogue.
//! - **Reshaping**: menu searches carry only the matching items; every other
//!   field returns whole records.
//! - **Price normalisation in search**: text prices, integer prices and
//!   non-numeric prices compare through the normalizer.
//! - **Case sensitivity**: substring matching is exact, including ASCII case.
//! - **Property: results are an ordered sub-sequence of the catalogue**: no
//!   result is fabricated and catalogue order is preserved.
//! - **Property: menu reshaping**: every item carried by a menu match
//!   contains the keyword and satisfies the price constraint.
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;
use nopo_core::{normalize_price, search, RawPrice, Restaurant, SearchField};
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Name / address
// ---------------------------------------------------------------------------

#[test]
fn name_substring_keeps_catalogue_order() {
    let catalog = sample_catalog();
    let matches = catalog.search("옥", SearchField::Name, None);
    assert_names!(matches, ["우래옥", "을지면옥", "청진옥", "용금옥"]);
    assert!(matches.iter().all(|m| !m.is_reshaped()));
}

#[rstest]
#[case::ward("중구", &["우래옥", "을지면옥", "하동관", "용금옥"])]
#[case::district("종로구", &["이문설렁탕", "청진옥"])]
#[case::city("부산", &["부산 할매국밥"])]
#[case::road_number("62-29", &["우래옥"])]
fn address_matches_decoded_text(#[case] keyword: &str, #[case] expected: &[&str]) {
    let catalog = sample_catalog();
    let names: Vec<&str> = catalog
        .search(keyword, SearchField::Address, None)
        .iter()
        .map(|m| m.name())
        .collect();
    pretty_assertions::assert_eq!(names, expected);
}

#[test]
fn address_does_not_match_encoded_form() {
    let catalog = sample_catalog();
    assert_no_matches!(catalog.search("%EC", SearchField::Address, None));
}

#[test]
fn whole_records_keep_full_menu() {
    let catalog = sample_catalog();
    let matches = catalog.search("하동관", SearchField::Name, None);
    assert_menu!(matches[0], ["곰탕", "수육", "특곰탕"]);
}

// ---------------------------------------------------------------------------
// Menu name
// ---------------------------------------------------------------------------

#[test]
fn menu_search_reshapes_records() {
    let catalog = sample_catalog();
    let matches = catalog.search("냉면", SearchField::MenuName, None);
    assert_names!(matches, ["우래옥", "을지면옥"]);
    assert_menu!(matches[0], ["물냉면", "비빔냉면"]);
    assert!(matches.iter().all(|m| m.is_reshaped()));
}

#[rstest]
#[case::text_price(13000, &["을지면옥"])]
#[case::other_text_price(16000, &["우래옥"])]
#[case::no_item_at_price(9999, &[])]
fn menu_search_with_price(#[case] price: i64, #[case] expected: &[&str]) {
    let catalog = sample_catalog();
    let names: Vec<&str> = catalog
        .search("냉면", SearchField::MenuName, Some(price))
        .iter()
        .map(|m| m.name())
        .collect();
    pretty_assertions::assert_eq!(names, expected);
}

#[test]
fn menu_search_price_narrows_items_not_just_records() {
    let catalog = sample_catalog();
    let matches = catalog.search("수육", SearchField::MenuName, Some(30000));
    assert_names!(matches, ["을지면옥"]);
    assert_menu!(matches[0], ["수육"]);
}

#[test]
fn market_price_normalises_to_zero() {
    let catalog = sample_catalog();
    let matches = catalog.search("수육", SearchField::MenuName, Some(0));
    assert_names!(matches, ["이문설렁탕"]);
}

#[test]
fn menu_search_leaves_catalogue_untouched() {
    let catalog = sample_catalog();
    let before = catalog.clone();
    let _ = catalog.search("냉면", SearchField::MenuName, None);
    pretty_assertions::assert_eq!(catalog, before);
}

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

#[rstest]
#[case::annotated_keyword("13,000원", &["을지면옥", "전주 한국관"])]
#[case::bare_keyword("12000", &["이문설렁탕", "용금옥", "부산 할매국밥"])]
#[case::integer_price("36000", &["우래옥"])]
#[case::null_and_market_price("0", &["우래옥", "이문설렁탕"])]
#[case::full_width_keyword("１３,０００원", &["을지면옥", "전주 한국관"])]
#[case::oversized_keyword("99999999999999999999", &[])]
fn price_search_compares_canonical_values(#[case] keyword: &str, #[case] expected: &[&str]) {
    let catalog = sample_catalog();
    let names: Vec<&str> = catalog
        .search(keyword, SearchField::Price, None)
        .iter()
        .map(|m| m.name())
        .collect();
    pretty_assertions::assert_eq!(names, expected);
}

#[test]
fn price_search_returns_whole_records() {
    let catalog = sample_catalog();
    let matches = catalog.search("36000", SearchField::Price, None);
    assert_menu!(matches[0], ["물냉면", "비빔냉면", "불고기", "전골"]);
    assert!(!matches[0].is_reshaped());
}

#[test]
fn price_argument_ignored_outside_menu_search() {
    let catalog = sample_catalog();
    let with = catalog.search("옥", SearchField::Name, Some(1));
    let without = catalog.search("옥", SearchField::Name, None);
    pretty_assertions::assert_eq!(with, without);
}

// ---------------------------------------------------------------------------
// Matching rules
// ---------------------------------------------------------------------------

#[test]
fn matching_is_case_sensitive() {
    let catalog = catalog_of([
        RestaurantBuilder::new("Kim's BBQ").address("Seoul").item("Pork", 1000),
    ]);
    assert_names!(catalog.search("BBQ", SearchField::Name, None), ["Kim's BBQ"]);
    assert_no_matches!(catalog.search("bbq", SearchField::Name, None));
    assert_no_matches!(catalog.search("pork", SearchField::MenuName, None));
}

#[test]
fn invalid_utf8_address_still_searchable() {
    let catalog = catalog_of([
        RestaurantBuilder::new("broken").raw_address("%FF%20Seoul"),
    ]);
    assert_names!(catalog.search("Seoul", SearchField::Address, None), ["broken"]);
}

#[test]
fn empty_catalogue_yields_nothing() {
    let catalog = nopo_core::Catalog::new(Vec::new());
    for field in SearchField::ALL {
        assert_no_matches!(catalog.search("옥", field, None));
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_restaurant() -> impl Strategy<Value = Restaurant> {
    (
        "[a-c가나]{1,4}",
        "[a-c ]{0,6}",
        prop::collection::vec(("[a-c가]{1,3}", 0i64..4), 0..4),
    )
        .prop_map(|(name, address, items)| {
            let mut b = RestaurantBuilder::new(name).address(&address);
            for (item, price) in items {
                b = b.item_raw(item, RawPrice::Integer(price * 1000));
            }
            b.build()
        })
}

proptest! {
    /// Whole-record searches equal a plain filter over the catalogue.
    #[test]
    fn whole_record_results_are_ordered_subsequence(
        records in prop::collection::vec(arb_restaurant(), 0..12),
        keyword in "[a-c가]{1,2}",
    ) {
        let by_name: Vec<&Restaurant> = records.iter().filter(|r| r.name.contains(&keyword)).collect();
        let got: Vec<Restaurant> = search(&records, &keyword, SearchField::Name, None)
            .iter()
            .map(|m| m.to_record())
            .collect();
        prop_assert_eq!(got.iter().collect::<Vec<_>>(), by_name);

        let by_addr: Vec<&Restaurant> = records
            .iter()
            .filter(|r| r.decoded_address().contains(&keyword))
            .collect();
        let got: Vec<Restaurant> = search(&records, &keyword, SearchField::Address, None)
            .iter()
            .map(|m| m.to_record())
            .collect();
        prop_assert_eq!(got.iter().collect::<Vec<_>>(), by_addr);
    }

    /// Menu matches carry exactly the qualifying items, in menu order.
    #[test]
    fn menu_matches_carry_only_qualifying_items(
        records in prop::collection::vec(arb_restaurant(), 0..12),
        keyword in "[a-c가]{1,2}",
        price in prop::option::of((0i64..4).prop_map(|p| p * 1000)),
    ) {
        let matches = search(&records, &keyword, SearchField::MenuName, price);
        let mut expected_names = Vec::new();
        for r in &records {
            let items: Vec<_> = r
                .menu
                .iter()
                .filter(|i| i.name.contains(&keyword) && price.map_or(true, |p| normalize_price(&i.price) == p))
                .collect();
            if !items.is_empty() {
                expected_names.push((r.name.as_str(), items));
            }
        }
        prop_assert_eq!(matches.len(), expected_names.len());
        for (m, (name, items)) in matches.iter().zip(expected_names) {
            prop_assert_eq!(m.name(), name);
            prop_assert_eq!(m.menu(), items.as_slice());
        }
    }

    /// A price search hit always has at least one item at the target price.
    #[test]
    fn price_hits_contain_target(
        records in prop::collection::vec(arb_restaurant(), 0..12),
        target in (0i64..4).prop_map(|p| p * 1000),
    ) {
        let keyword = target.to_string();
        let matches = search(&records, &keyword, SearchField::Price, None);
        let expected = records
            .iter()
            .filter(|r| r.menu.iter().any(|i| normalize_price(&i.price) == target))
            .count();
        prop_assert_eq!(matches.len(), expected);
        for m in &matches {
            prop_assert!(m.menu().iter().any(|i| normalize_price(&i.price) == target));
        }
    }
}
