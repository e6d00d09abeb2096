//! Artwork Catalog Browser Common Library
//!
//! CLI・デスクトップ・Web(WASM)で共有される型と選択ロジック

pub mod types;
pub mod layout;
pub mod error;
pub mod catalog;
pub mod selection;
pub mod controller;

pub use types::{ArtworkId, ArtworkRecord, PageResult};
pub use layout::{ColumnDef, COLUMNS, ROWS_PER_PAGE};
pub use error::{FetchError, Result};
pub use catalog::{page_url, parse_page_response, CatalogResponse, Pagination, ARTWORKS_ENDPOINT};
pub use selection::SelectionSet;
pub use controller::{LoadOutcome, LoadState, PageRequest, ViewController};
