//! Navigation view over an ordered slice of pattern entries.
//!
//! Lookups are a linear scan. Catalogs are a couple dozen entries and the
//! order of the slice is the contract, so no derived map is kept. Unknown
//! identifiers are never an error here: they resolve to "no position" and
//! "no neighbors", which the page shell renders as the end of the list.

use crate::catalog::identity::PatternCategory;
use crate::catalog::model::{PatternEntry, patterns};
use anyhow::{Result, bail};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug)]
/// Borrowed index over a catalog in navigation order.
pub struct PatternIndex<'a> {
    entries: &'a [PatternEntry],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
/// Previous/next entries around a pattern; `None` marks an end of the list.
pub struct Neighbors<'a> {
    pub previous: Option<&'a PatternEntry>,
    pub next: Option<&'a PatternEntry>,
}

impl PatternIndex<'static> {
    /// Index over the built-in catalog.
    pub fn canonical() -> Self {
        Self::new(patterns())
    }
}

impl<'a> PatternIndex<'a> {
    pub fn new(entries: &'a [PatternEntry]) -> Self {
        Self { entries }
    }

    /// Index an externally supplied catalog, rejecting empty or duplicate
    /// identifiers so neighbor resolution stays unambiguous.
    pub fn checked(entries: &'a [PatternEntry]) -> Result<Self> {
        if entries.is_empty() {
            bail!("catalog contains no patterns");
        }
        let mut seen = BTreeSet::new();
        for entry in entries {
            if entry.identifier.trim().is_empty() {
                bail!("encountered pattern with no identifier");
            }
            if !seen.insert(&*entry.identifier) {
                bail!("duplicate pattern identifier {}", entry.identifier);
            }
        }
        Ok(Self::new(entries))
    }

    /// Zero-based position of `identifier`, or `None` when it is not listed.
    ///
    /// Matching is exact; the first match wins.
    pub fn index_of(&self, identifier: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.identifier == identifier)
    }

    /// Adjacent entries for previous/next links.
    ///
    /// Both sides are `None` for an identifier that is not in the catalog.
    pub fn neighbors_of(&self, identifier: &str) -> Neighbors<'a> {
        let Some(index) = self.index_of(identifier) else {
            tracing::debug!(identifier, "no catalog position; navigation disabled");
            return Neighbors::default();
        };
        let previous = index
            .checked_sub(1)
            .and_then(|prev| self.entries.get(prev));
        Neighbors {
            previous,
            next: self.entries.get(index + 1),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&'a PatternEntry> {
        self.index_of(identifier).map(|index| &self.entries[index])
    }

    pub fn entries(&self) -> &'a [PatternEntry] {
        self.entries
    }

    /// Entries of one category, in catalog order.
    pub fn by_category(
        &self,
        category: PatternCategory,
    ) -> impl Iterator<Item = &'a PatternEntry> + use<'a> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Position of `identifier` in the built-in catalog.
pub fn index_of(identifier: &str) -> Option<usize> {
    PatternIndex::canonical().index_of(identifier)
}

/// Previous/next entries around `identifier` in the built-in catalog.
pub fn neighbors_of(identifier: &str) -> Neighbors<'static> {
    PatternIndex::canonical().neighbors_of(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(neighbors: &Neighbors<'_>) -> (Option<String>, Option<String>) {
        (
            neighbors.previous.map(|e| e.identifier.to_string()),
            neighbors.next.map(|e| e.identifier.to_string()),
        )
    }

    #[test]
    fn first_entry_has_no_previous() {
        let neighbors = neighbors_of("singleton");
        assert!(neighbors.previous.is_none());
        let next = neighbors.next.expect("singleton has a successor");
        assert_eq!(next.identifier, "factory-method");
        assert_eq!(next.title, "Factory Method");
        assert_eq!(next.category, PatternCategory::Creational);
    }

    #[test]
    fn last_entry_has_no_next() {
        let neighbors = neighbors_of("visitor");
        assert_eq!(ids(&neighbors), (Some("template-method".into()), None));
    }

    #[test]
    fn interior_entries_link_both_ways() {
        let neighbors = neighbors_of("composite");
        assert_eq!(
            ids(&neighbors),
            (Some("bridge".into()), Some("decorator".into()))
        );

        let index = PatternIndex::canonical();
        let entries = index.entries();
        for i in 1..entries.len() - 1 {
            let neighbors = index.neighbors_of(&entries[i].identifier);
            assert_eq!(neighbors.previous, Some(&entries[i - 1]));
            assert_eq!(neighbors.next, Some(&entries[i + 1]));
        }
    }

    #[test]
    fn unknown_identifiers_have_no_neighbors() {
        for probe in ["not-a-real-pattern", "", "Singleton", " singleton", "/patterns/state"] {
            assert_eq!(index_of(probe), None, "{probe:?}");
            assert_eq!(neighbors_of(probe), Neighbors::default(), "{probe:?}");
        }
    }

    #[test]
    fn observer_position_matches_canonical_order() {
        assert_eq!(index_of("observer"), Some(18));
        assert_eq!(index_of("singleton"), Some(0));
        assert_eq!(index_of("visitor"), Some(22));
    }

    #[test]
    fn lookups_are_repeatable() {
        let first = (index_of("memento"), neighbors_of("memento"));
        for _ in 0..3 {
            assert_eq!((index_of("memento"), neighbors_of("memento")), first);
        }
    }

    #[test]
    fn by_category_preserves_order() {
        let structural: Vec<&str> = PatternIndex::canonical()
            .by_category(PatternCategory::Structural)
            .map(PatternEntry::identifier)
            .collect();
        assert_eq!(
            structural,
            ["adapter", "bridge", "composite", "decorator", "facade", "flyweight", "proxy"]
        );
    }

    #[test]
    fn checked_rejects_duplicates_and_empty_catalogs() {
        let duplicated = vec![
            PatternEntry::new("state", "State", PatternCategory::Behavioral),
            PatternEntry::new("state", "State Again", PatternCategory::Behavioral),
        ];
        let err = PatternIndex::checked(&duplicated).expect_err("duplicates must fail");
        assert!(err.to_string().contains("duplicate pattern identifier state"));

        assert!(PatternIndex::checked(&[]).is_err());

        let single = vec![PatternEntry::new("state", "State", PatternCategory::Behavioral)];
        let index = PatternIndex::checked(&single).expect("single entry is valid");
        assert_eq!(index.neighbors_of("state"), Neighbors::default());
        assert_eq!(index.index_of("state"), Some(0));
    }
}
