//! nopo-core: catalogue types, price normalisation and search for nopo.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► Form ──► Search ──► Render / UI
//!                        │
//!                        └──► Normalizer (per menu price)
//! ```
//!
//! The catalogue is loaded once at startup and only ever borrowed afterwards.
//! Every search is a synchronous linear scan; nothing here spawns threads or
//! performs I/O beyond the initial load.

pub mod catalog;
pub mod config;
pub mod form;
pub mod normalizer;
pub mod render;
pub mod search;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use form::{InputError, Query, SearchForm};
pub use normalizer::normalize_price;
pub use search::{search, Match, ParseFieldError, SearchField};
pub use types::{MenuItem, Price, RawPrice, Restaurant};
