use chrono::NaiveDate;

use crate::content::{SectionId, Tag};

/// A dated piece of content belonging to a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<S> {
    pub section_id: S,
    pub slug: String,
    pub path: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub tags: Vec<Tag>,
    /// The rendered body of the item.
    pub body: String,
}

impl<S: SectionId> Item<S> {
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}
