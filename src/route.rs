//! Routing surface for the pattern pages.
//!
//! Paths follow the site layout: `/` is the home page and
//! `/patterns/<identifier>` is a pattern page. Views here carry the text a
//! page shell needs (headings, links, navigation) and nothing about markup.

use crate::catalog::{Neighbors, PatternCategory, PatternEntry, PatternIndex};
use serde::Serialize;

const PATTERNS_PREFIX: &str = "/patterns/";

pub const HOME_PATH: &str = "/";
pub const SITE_TITLE: &str = "Patternalysis";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route<'a> {
    Home,
    Pattern(&'a PatternEntry),
    NotFound,
}

impl Route<'static> {
    /// Resolve a request path against the built-in catalog.
    pub fn parse(path: &str) -> Self {
        Self::parse_in(PatternIndex::canonical(), path)
    }
}

impl<'a> Route<'a> {
    pub fn parse_in(index: PatternIndex<'a>, path: &str) -> Self {
        let path = strip_query(path);
        if path.is_empty() || path == HOME_PATH {
            return Route::Home;
        }
        let Some(rest) = path.strip_prefix(PATTERNS_PREFIX) else {
            return Route::NotFound;
        };
        let identifier = rest.strip_suffix('/').unwrap_or(rest);
        if identifier.is_empty() || identifier.contains('/') {
            return Route::NotFound;
        }
        match index.get(identifier) {
            Some(entry) => Route::Pattern(entry),
            None => Route::NotFound,
        }
    }
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Path of the page for `identifier`.
pub fn pattern_path(identifier: &str) -> String {
    format!("{PATTERNS_PREFIX}{identifier}")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

impl Link {
    fn to_pattern(entry: &PatternEntry) -> Self {
        Self {
            href: pattern_path(&entry.identifier),
            label: entry.title.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Everything the layout around a pattern demo shows.
pub struct PatternPage {
    pub identifier: String,
    pub heading: String,
    pub category: PatternCategory,
    pub intent: String,
    pub back: Link,
    pub previous: Option<Link>,
    pub next: Option<Link>,
}

impl PatternPage {
    pub fn new(entry: &PatternEntry, neighbors: Neighbors<'_>) -> Self {
        Self {
            identifier: entry.identifier.to_string(),
            heading: format!("{} Pattern", entry.title),
            category: entry.category,
            intent: entry.intent.to_string(),
            back: Link {
                href: HOME_PATH.to_string(),
                label: "← Back to Home".to_string(),
            },
            previous: neighbors.previous.map(Link::to_pattern),
            next: neighbors.next.map(Link::to_pattern),
        }
    }

    /// Page for a catalog identifier, if it exists.
    pub fn for_identifier(index: PatternIndex<'_>, identifier: &str) -> Option<Self> {
        let entry = index.get(identifier)?;
        Some(Self::new(entry, index.neighbors_of(identifier)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategorySection {
    pub category: PatternCategory,
    pub title: String,
    pub description: String,
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Landing page: call-to-action links plus one section per category.
pub struct HomePage {
    pub title: String,
    pub calls_to_action: Vec<Link>,
    pub sections: Vec<CategorySection>,
}

impl HomePage {
    pub fn new(index: PatternIndex<'_>) -> Self {
        let sections = PatternCategory::ALL
            .iter()
            .map(|category| CategorySection {
                category: *category,
                title: category.title().to_string(),
                description: category.description().to_string(),
                // Grid labels are the slug with dashes turned into spaces.
                links: index
                    .by_category(*category)
                    .map(|entry| Link {
                        href: pattern_path(&entry.identifier),
                        label: entry.identifier.replace('-', " "),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: SITE_TITLE.to_string(),
            calls_to_action: vec![
                Link {
                    href: pattern_path("singleton"),
                    label: "🚀 Start with Singleton".to_string(),
                },
                Link {
                    href: pattern_path("observer"),
                    label: "👀 Try Observer Pattern".to_string(),
                },
            ],
            sections,
        }
    }
}
