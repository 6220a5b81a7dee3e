use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gang-of-Four grouping a pattern belongs to.
///
/// The set is closed: catalogs that name any other category are rejected
/// rather than carried through as an opaque string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PatternCategory {
    Creational,
    Structural,
    Behavioral,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown pattern category '{0}' (expected creational, structural or behavioral)")]
pub struct CategoryParseError(pub String);

/// Display metadata for one category section of the home page.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: PatternCategory,
    pub title: String,
    pub description: String,
}

impl PatternCategory {
    /// Categories in the order the home page lists them.
    pub const ALL: [PatternCategory; 3] = [
        PatternCategory::Creational,
        PatternCategory::Structural,
        PatternCategory::Behavioral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::Creational => "creational",
            PatternCategory::Structural => "structural",
            PatternCategory::Behavioral => "behavioral",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PatternCategory::Creational => "Creational Patterns",
            PatternCategory::Structural => "Structural Patterns",
            PatternCategory::Behavioral => "Behavioral Patterns",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PatternCategory::Creational => "Deal with object creation mechanisms",
            PatternCategory::Structural => "Deal with object composition and relationships",
            PatternCategory::Behavioral => {
                "Deal with communication between objects and responsibilities"
            }
        }
    }

    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            id: *self,
            title: self.title().to_string(),
            description: self.description().to_string(),
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternCategory {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "creational" => Ok(PatternCategory::Creational),
            "structural" => Ok(PatternCategory::Structural),
            "behavioral" => Ok(PatternCategory::Behavioral),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

impl Serialize for PatternCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PatternCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
