use std::collections::HashMap;

use crate::content::{Section, SectionId};

/// The sections of a site, one for every [`SectionId`].
#[derive(Debug)]
pub struct Sections<S>(HashMap<S, Section<S>>);

impl<S: SectionId> Sections<S> {
    /// Collects the given sections, filling in an empty section for every
    /// identifier without one.
    pub fn new(
        sections: impl IntoIterator<Item = Section<S>>,
        empty_section: impl Fn(S) -> Section<S>,
    ) -> Self {
        let mut sections = sections
            .into_iter()
            .map(|section| (section.id, section))
            .collect::<HashMap<_, _>>();

        for id in S::ALL {
            sections.entry(*id).or_insert_with(|| empty_section(*id));
        }

        Self(sections)
    }

    /// Returns the section with the given identifier.
    pub fn section(&self, id: S) -> &Section<S> {
        // Every identifier is filled in on construction.
        &self.0[&id]
    }

    /// Returns the sections in navigation order.
    pub fn in_order(&self) -> impl Iterator<Item = &Section<S>> {
        S::ALL.iter().map(|id| self.section(*id))
    }
}
