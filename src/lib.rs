//! Shared library for the patternalysis pattern explorer.
//!
//! The crate exposes the pattern catalog (the fixed, ordered list of
//! Gang-of-Four patterns), navigation over it, the page routes built on that
//! navigation, and one runnable demo per pattern. The `patternalysis` binary
//! is a thin CLI over these modules; everything it prints comes from the
//! public functions re-exported here.

pub mod catalog;
pub mod demo;
pub mod logging;
pub mod route;

pub use catalog::{
    CATALOG_SCHEMA_VERSION, CatalogDocument, CategoryInfo, CategoryParseError, Neighbors,
    PatternCategory, PatternEntry, PatternIndex, index_of, load_catalog_document, neighbors_of,
    patterns, write_catalog_document,
};
pub use demo::{
    Action, ActionSpec, Demo, DemoConfig, DemoError, DemoLog, DemoSession, Panel, RESET_ACTION,
};
pub use route::{HomePage, Link, PatternPage, Route, pattern_path};
