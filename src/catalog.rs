//! Course catalogue loaded from the asset directory.
//!
//! The catalogue is read once at startup from a TOML file of `[[course]]`
//! tables and never changes afterwards. Listing order is file order.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Course difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single course entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Course {
    /// URL segment under `/courses/`
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub level: Level,
    pub duration_minutes: u64,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    course: Vec<Course>,
}

/// Immutable, ordered set of courses
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;

        if file.course.is_empty() {
            return Err(CatalogError::Validation(
                "catalogue contains no [[course]] entries".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for course in &file.course {
            if !is_valid_slug(&course.slug) {
                return Err(CatalogError::Validation(format!(
                    "invalid course slug \"{}\" (use lowercase letters, digits and '-')",
                    course.slug
                )));
            }
            if !seen.insert(course.slug.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate course slug \"{}\"",
                    course.slug
                )));
            }
        }

        Ok(Self {
            courses: file.course,
        })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find(&self, slug: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalogue: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalogue: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid catalogue: {0}")]
    Validation(String),
}
