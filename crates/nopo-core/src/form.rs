//! Search form validation: turns raw user input into a runnable [`Query`].
//!
//! The presentation layer owns the text being edited; this module decides
//! whether it is fit to search with. Rejected input never reaches the search
//! layer.

use crate::search::{search, Match, SearchField};
use crate::types::{Price, Restaurant};

/// User-facing input errors. The `Display` text is shown inline as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("search keyword required")]
    EmptyKeyword,
    #[error("price must be numeric")]
    NonNumericPrice,
}

/// Raw contents of the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub field: SearchField,
    pub keyword: String,
    /// Only consulted when `field` is [`SearchField::MenuName`].
    pub price: String,
}

impl SearchForm {
    pub fn new(field: SearchField, keyword: impl Into<String>) -> Self {
        Self { field, keyword: keyword.into(), price: String::new() }
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Validate the form.
    ///
    /// The keyword is taken verbatim (no trimming) but must not be empty. The
    /// price, when relevant and non-blank, must parse as an integer; leading
    /// and trailing whitespace is tolerated.
    pub fn submit(&self) -> Result<Query, InputError> {
        if self.keyword.is_empty() {
            return Err(InputError::EmptyKeyword);
        }

        let price = if self.field.takes_price() {
            parse_price(&self.price)?
        } else {
            None
        };

        Ok(Query { field: self.field, keyword: self.keyword.clone(), price })
    }
}

fn parse_price(input: &str) -> Result<Option<Price>, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Price>()
        .map(Some)
        .map_err(|_| InputError::NonNumericPrice)
}

/// A validated search, ready to run against the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub field: SearchField,
    pub keyword: String,
    pub price: Option<Price>,
}

impl Query {
    pub fn run<'a>(&self, records: &'a [Restaurant]) -> Vec<Match<'a>> {
        tracing::info!(field = %self.field, keyword = %self.keyword, price = ?self.price, "running search");
        search(records, &self.keyword, self.field, self.price)
    }
}
