#![forbid(unsafe_code)]

//! Pattern records as stored in the catalog data file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three classic pattern families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Behavioral,
    Structural,
    Creational,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Behavioral => "Behavioral",
            Self::Structural => "Structural",
            Self::Creational => "Creational",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The narrative that introduces a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub context: String,
    pub problem: String,
    pub solution: String,
    pub dialogue: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepDive {
    pub reason: String,
    pub problem_detail: String,
    pub key_benefit: String,
}

/// Before and after code listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub bad: String,
    pub good: String,
}

/// Which interactive demo to mount for a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRef {
    #[serde(rename = "type")]
    pub demo_type: String,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub tagline: String,
    pub story: Story,
    pub deep_dive: DeepDive,
    pub code: CodeSample,
    #[serde(default)]
    pub use_cases: Vec<String>,
    pub demo: DemoRef,
}

impl Pattern {
    /// The only field the demo engine reads.
    #[must_use]
    pub fn demo_type(&self) -> &str {
        &self.demo.demo_type
    }

    /// Case-insensitive substring match on name or category.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}
