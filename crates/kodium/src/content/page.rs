use std::collections::BTreeSet;

use crate::content::Tag;

/// The home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub title: String,
    pub description: String,
}

/// A standalone page that does not belong to any section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub slug: String,
    pub path: String,
    pub title: String,
    pub description: String,
    /// The rendered body of the page.
    pub body: String,
}

/// The page listing every tag in use on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagListPage {
    pub tags: BTreeSet<Tag>,
}

/// The page listing the items carrying a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDetailsPage {
    pub tag: Tag,
}
