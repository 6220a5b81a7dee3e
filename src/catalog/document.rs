//! Portable JSON form of the pattern catalog.
//!
//! The built-in catalog is the source of truth; documents exist so other
//! tooling can consume it and so an exported copy can be checked for drift.
//! Loading is strict: schema validation runs first and reports every
//! violation, then the version and identifier uniqueness are enforced.

use crate::catalog::identity::{CategoryInfo, PatternCategory};
use crate::catalog::index::PatternIndex;
use crate::catalog::model::{PatternEntry, patterns};
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

pub const CATALOG_SCHEMA_VERSION: &str = "patternalysis_catalog_v1";

const CATALOG_SCHEMA_SOURCE: &str = include_str!("../../schema/pattern_catalog.schema.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Catalog as written to and read from disk.
pub struct CatalogDocument {
    pub schema_version: String,
    pub categories: Vec<CategoryInfo>,
    pub patterns: Vec<PatternEntry>,
}

impl CatalogDocument {
    /// Snapshot of the built-in catalog.
    pub fn canonical() -> Self {
        Self {
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            categories: PatternCategory::ALL.iter().map(PatternCategory::info).collect(),
            patterns: patterns().to_vec(),
        }
    }

    pub fn index(&self) -> Result<PatternIndex<'_>> {
        PatternIndex::checked(&self.patterns)
    }

    /// Differences between this document and the built-in catalog.
    ///
    /// Only navigation-relevant fields are compared (identifier, order,
    /// title, category); intent text may be edited freely.
    pub fn diff_against_canonical(&self) -> Vec<String> {
        let canonical = PatternIndex::canonical();
        let local = PatternIndex::new(&self.patterns);
        let mut drift = Vec::new();

        for (position, expected) in canonical.entries().iter().enumerate() {
            let Some(found_at) = local.index_of(&expected.identifier) else {
                drift.push(format!("missing pattern '{}'", expected.identifier));
                continue;
            };
            if found_at != position {
                drift.push(format!(
                    "pattern '{}' at position {found_at}, expected {position}",
                    expected.identifier
                ));
            }
            let found = &self.patterns[found_at];
            if found.title != expected.title {
                drift.push(format!(
                    "pattern '{}' titled '{}', expected '{}'",
                    expected.identifier, found.title, expected.title
                ));
            }
            if found.category != expected.category {
                drift.push(format!(
                    "pattern '{}' in category {}, expected {}",
                    expected.identifier, found.category, expected.category
                ));
            }
        }

        for entry in &self.patterns {
            if canonical.index_of(&entry.identifier).is_none() {
                drift.push(format!("unexpected pattern '{}'", entry.identifier));
            }
        }

        drift
    }
}

/// Read, schema-check and parse a catalog document.
pub fn load_catalog_document(path: &Path) -> Result<CatalogDocument> {
    let file = File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing catalog {}", path.display()))?;

    validate_catalog_value(&value)
        .with_context(|| format!("validating catalog {}", path.display()))?;

    let document: CatalogDocument = serde_json::from_value(value)
        .with_context(|| format!("decoding catalog {}", path.display()))?;
    if document.schema_version != CATALOG_SCHEMA_VERSION {
        bail!(
            "schema_version '{}' not supported (expected {CATALOG_SCHEMA_VERSION})",
            document.schema_version
        );
    }
    document.index()?;
    Ok(document)
}

/// Write a document as pretty JSON.
pub fn write_catalog_document(document: &CatalogDocument, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json + "\n").with_context(|| format!("writing {}", path.display()))
}

/// Validate an arbitrary JSON value against the catalog schema.
pub fn validate_catalog_value(value: &Value) -> Result<()> {
    let schema = compiled_catalog_schema()?;
    if let Err(errors) = schema.validate(value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog failed schema validation:\n{details}");
    }
    Ok(())
}

/// The embedded catalog schema as JSON.
pub fn catalog_schema() -> Result<&'static Value> {
    static RAW: OnceLock<Value> = OnceLock::new();
    if let Some(raw) = RAW.get() {
        return Ok(raw);
    }
    let parsed: Value =
        serde_json::from_str(CATALOG_SCHEMA_SOURCE).context("parsing embedded catalog schema")?;
    Ok(RAW.get_or_init(|| parsed))
}

fn compiled_catalog_schema() -> Result<&'static JSONSchema> {
    static COMPILED: OnceLock<JSONSchema> = OnceLock::new();
    if let Some(compiled) = COMPILED.get() {
        return Ok(compiled);
    }
    let compiled = JSONSchema::compile(catalog_schema()?)
        .map_err(|err| anyhow!("compiling embedded catalog schema: {err}"))?;
    Ok(COMPILED.get_or_init(|| compiled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(value: &Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        serde_json::to_writer(&mut file, value).expect("write json");
        file.flush().expect("flush");
        file
    }

    #[test]
    fn canonical_document_passes_schema_and_has_no_drift() {
        let document = CatalogDocument::canonical();
        let value = serde_json::to_value(&document).unwrap();
        validate_catalog_value(&value).expect("canonical document must validate");
        assert!(document.diff_against_canonical().is_empty());
        assert_eq!(document.categories.len(), 3);
    }

    #[test]
    fn load_round_trips_an_exported_document() {
        let document = CatalogDocument::canonical();
        let file = NamedTempFile::new().unwrap();
        write_catalog_document(&document, file.path()).unwrap();
        let loaded = load_catalog_document(file.path()).expect("load exported catalog");
        assert_eq!(loaded, document);
    }

    #[test]
    fn schema_violations_are_reported_together() {
        let file = write_temp(&json!({
            "schema_version": CATALOG_SCHEMA_VERSION,
            "categories": [],
            "patterns": [
                {"identifier": "Not A Slug", "title": "Bad", "category": "creational"},
                {"identifier": "ok", "title": "", "category": "architectural"}
            ]
        }));
        let err = load_catalog_document(file.path()).expect_err("invalid document");
        let message = format!("{err:#}");
        assert!(message.contains("schema validation"), "{message}");
        assert!(message.contains("Not A Slug"), "{message}");
        assert!(message.contains("architectural"), "{message}");
    }

    #[test]
    fn unexpected_schema_version_is_rejected() {
        let mut value = serde_json::to_value(CatalogDocument::canonical()).unwrap();
        value["schema_version"] = json!("patternalysis_catalog_v0");
        let file = write_temp(&value);
        let err = load_catalog_document(file.path()).expect_err("old version");
        assert!(err.to_string().contains("patternalysis_catalog_v0"));
    }

    #[test]
    fn duplicate_identifiers_are_rejected_after_schema_check() {
        let file = write_temp(&json!({
            "schema_version": CATALOG_SCHEMA_VERSION,
            "categories": [],
            "patterns": [
                {"identifier": "state", "title": "State", "category": "behavioral"},
                {"identifier": "state", "title": "State", "category": "behavioral"}
            ]
        }));
        let err = load_catalog_document(file.path()).expect_err("duplicate ids");
        assert!(err.to_string().contains("duplicate pattern identifier state"));
    }

    #[test]
    fn diff_reports_missing_moved_changed_and_extra_entries() {
        let mut document = CatalogDocument::canonical();
        document.patterns.retain(|entry| entry.identifier != "proxy");
        document.patterns.swap(0, 1);
        document.patterns[2].title = "Abstract Factory Kit".into();
        document
            .patterns
            .push(PatternEntry::new("null-object", "Null Object", PatternCategory::Behavioral));

        let drift = document.diff_against_canonical();
        assert!(drift.contains(&"missing pattern 'proxy'".to_string()), "{drift:?}");
        assert!(
            drift.contains(&"pattern 'singleton' at position 1, expected 0".to_string()),
            "{drift:?}"
        );
        assert!(
            drift.iter().any(|line| line.contains("Abstract Factory Kit")),
            "{drift:?}"
        );
        assert!(drift.contains(&"unexpected pattern 'null-object'".to_string()), "{drift:?}");
    }
}
