//! Pattern catalog wiring.
//!
//! The built-in catalog is static data declared in `model`; `PatternIndex`
//! resolves positions and previous/next neighbors over it, and `document`
//! moves it in and out of JSON with schema validation.

pub mod document;
pub mod identity;
pub mod index;
pub mod model;

pub use document::{
    CATALOG_SCHEMA_VERSION, CatalogDocument, catalog_schema, load_catalog_document,
    validate_catalog_value, write_catalog_document,
};
pub use identity::{CategoryInfo, CategoryParseError, PatternCategory};
pub use index::{Neighbors, PatternIndex, index_of, neighbors_of};
pub use model::{PatternEntry, patterns};
