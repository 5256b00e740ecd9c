//! Domain-specific assertion macros for nopo harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that make it clear
//! which search result was wrong.

/// Assert the exact, ordered restaurant names of a result list.
///
/// ```rust
/// assert_names!(catalog.search("옥", SearchField::Name, None), ["우래옥", "청진옥"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($matches:expr, [$($name:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $matches.iter().map(|m| m.name()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_names! failed: result names differ from expected"
        );
    }};
}

/// Assert the ordered menu item names carried by a single match.
#[macro_export]
macro_rules! assert_menu {
    ($m:expr, [$($item:expr),* $(,)?]) => {{
        let m = &$m;
        let actual: Vec<&str> = m.menu().iter().map(|i| i.name.as_str()).collect();
        let expected: Vec<&str> = vec![$($item),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_menu! failed for restaurant {:?}", m.name()
        );
    }};
}

/// Assert that a result list is empty, showing what was returned otherwise.
#[macro_export]
macro_rules! assert_no_matches {
    ($matches:expr) => {{
        let matches = &$matches;
        if !matches.is_empty() {
            let names: Vec<&str> = matches.iter().map(|m| m.name()).collect();
            panic!("assert_no_matches! failed: got {} match(es): {:?}", names.len(), names);
        }
    }};
}
