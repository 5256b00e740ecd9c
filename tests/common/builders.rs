//! Test builders: ergonomic constructors for catalogue records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use nopo_core::{Catalog, MenuItem, RawPrice, Restaurant};

// ---------------------------------------------------------------------------
// RestaurantBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Restaurant`] fixtures.
///
/// ```rust
/// let r = RestaurantBuilder::new("우래옥")
///     .address("서울 중구 창경궁로 62-29")
///     .item("물냉면", "16,000원")
///     .item("불고기", 36000)
///     .build();
/// ```
pub struct RestaurantBuilder {
    name: String,
    address: String,
    menu: Vec<MenuItem>,
}

impl RestaurantBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            menu: Vec::new(),
        }
    }

    /// Set the address from plain text; it is percent-encoded on build, the
    /// way the catalogue stores it.
    pub fn address(mut self, plain: &str) -> Self {
        self.address = encode(plain);
        self
    }

    /// Set the stored address verbatim.
    pub fn raw_address(mut self, encoded: impl Into<String>) -> Self {
        self.address = encoded.into();
        self
    }

    pub fn item(mut self, name: impl Into<String>, price: impl Into<RawPrice>) -> Self {
        self.menu.push(MenuItem { name: name.into(), price: price.into() });
        self
    }

    pub fn item_raw(mut self, name: impl Into<String>, price: RawPrice) -> Self {
        self.menu.push(MenuItem { name: name.into(), price });
        self
    }

    pub fn build(self) -> Restaurant {
        Restaurant { name: self.name, address: self.address, menu: self.menu }
    }
}

/// Build a [`Catalog`] from builders in one call.
pub fn catalog_of(builders: impl IntoIterator<Item = RestaurantBuilder>) -> Catalog {
    Catalog::new(builders.into_iter().map(RestaurantBuilder::build).collect())
}

/// Percent-encode an address the way the catalogue stores it.
pub fn encode(plain: &str) -> String {
    urlencoding::encode(plain).into_owned()
}
