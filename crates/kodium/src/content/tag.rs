use std::fmt;

use serde::{Deserialize, Serialize};

/// A label used to classify items, and the key of a tag's index page.
///
/// Tags compare, hash, and sort by their label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the URL-safe form of the label.
    ///
    /// Labels with nothing to slugify (e.g., `#`) fall back to `tag-` followed
    /// by the hex-encoded bytes of the label, so the slug is never empty.
    pub fn slug(&self) -> String {
        let slug = slug::slugify(&self.0);
        if !slug.is_empty() {
            return slug;
        }

        self.0
            .bytes()
            .fold(String::from("tag-"), |mut slug, byte| {
                slug.push_str(&format!("{byte:02x}"));
                slug
            })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
