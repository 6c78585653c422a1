use std::collections::BTreeSet;

use crate::content::{
    sort_items_by_date, Index, Item, Page, Section, SectionId, Sections, Site, SortOrder, Tag,
    TagDetailsPage, TagListPage,
};

/// Everything known about a site at publishing time.
///
/// The context is an immutable snapshot: the theme only ever reads from it.
#[derive(Debug)]
pub struct PublishingContext<S> {
    pub site: Site,
    pub index: Index,
    sections: Sections<S>,
    pub pages: Vec<Page>,
}

impl<S: SectionId> PublishingContext<S> {
    /// Returns a new [`PublishingContext`].
    ///
    /// Any [`SectionId`] without a corresponding section gets an empty one.
    pub fn new(
        site: Site,
        index: Index,
        sections: impl IntoIterator<Item = Section<S>>,
        pages: Vec<Page>,
    ) -> Self {
        let sections = Sections::new(sections, |id| Section::empty(id, site.section_path(id)));

        Self {
            site,
            index,
            sections,
            pages,
        }
    }

    pub fn section(&self, id: S) -> &Section<S> {
        self.sections.section(id)
    }

    /// Returns the sections in navigation order.
    pub fn sections(&self) -> impl Iterator<Item = &Section<S>> {
        self.sections.in_order()
    }

    /// Returns every item on the site, section by section.
    pub fn all_items(&self) -> impl Iterator<Item = &Item<S>> {
        self.sections().flat_map(|section| section.items.iter())
    }

    /// Returns every tag in use, without duplicates and sorted by label.
    pub fn all_tags(&self) -> BTreeSet<Tag> {
        self.all_items()
            .flat_map(|item| item.tags.iter().cloned())
            .collect()
    }

    /// Returns the items carrying the given tag, sorted by date.
    pub fn items_tagged_with(&self, tag: &Tag, order: SortOrder) -> Vec<&Item<S>> {
        let mut items = self
            .all_items()
            .filter(|item| item.has_tag(tag))
            .collect::<Vec<_>>();

        sort_items_by_date(&mut items, order);

        items
    }

    pub fn tag_list_page(&self) -> TagListPage {
        TagListPage {
            tags: self.all_tags(),
        }
    }

    /// Returns a details page for every tag in use.
    pub fn tag_details_pages(&self) -> Vec<TagDetailsPage> {
        self.all_tags()
            .into_iter()
            .map(|tag| TagDetailsPage { tag })
            .collect()
    }
}
