use crate::content::{Item, SectionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<S> {
    pub id: S,
    pub title: String,
    pub path: String,
    pub items: Vec<Item<S>>,
}

impl<S: SectionId> Section<S> {
    /// Returns an empty section titled after its identifier.
    pub fn empty(id: S, path: impl Into<String>) -> Self {
        Self {
            id,
            title: id.default_title(),
            path: path.into(),
            items: Vec::new(),
        }
    }
}
