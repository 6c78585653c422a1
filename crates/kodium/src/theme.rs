pub mod components;
pub mod head;
pub mod pages;

use kodium_markup::Document;

use crate::content::{
    Index, Item, Page, PublishingContext, Section, SectionId, TagDetailsPage, TagListPage,
};

pub type RenderIndex<S> = fn(&Index, &PublishingContext<S>) -> Document;

pub type RenderSection<S> = fn(&Section<S>, &PublishingContext<S>) -> Document;

pub type RenderItem<S> = fn(&Item<S>, &PublishingContext<S>) -> Document;

pub type RenderPage<S> = fn(&Page, &PublishingContext<S>) -> Document;

pub type RenderTagList<S> = fn(&TagListPage, &PublishingContext<S>) -> Option<Document>;

pub type RenderTagDetails<S> = fn(&TagDetailsPage, &PublishingContext<S>) -> Option<Document>;

/// A static file shipped with a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// The path the file is published at, relative to the output directory.
    pub path: &'static str,
    pub contents: &'static str,
}

/// The set of page mappers used to turn a site's content into documents,
/// along with the resources those documents depend on.
pub struct Theme<S> {
    index: RenderIndex<S>,
    section: RenderSection<S>,
    item: RenderItem<S>,
    page: RenderPage<S>,
    tag_list: RenderTagList<S>,
    tag_details: RenderTagDetails<S>,
    resources: Vec<Resource>,
}

impl<S: SectionId> Theme<S> {
    /// The Kodium theme.
    pub fn kodium() -> Self {
        Self {
            index: pages::index_html,
            section: pages::section_html,
            item: pages::item_html,
            page: pages::page_html,
            tag_list: pages::tag_list_html,
            tag_details: pages::tag_details_html,
            resources: vec![Resource {
                path: "styles.css",
                contents: include_str!("../assets/styles.css"),
            }],
        }
    }

    pub fn render_index(&self, index: &Index, context: &PublishingContext<S>) -> Document {
        (self.index)(index, context)
    }

    pub fn render_section(&self, section: &Section<S>, context: &PublishingContext<S>) -> Document {
        (self.section)(section, context)
    }

    pub fn render_item(&self, item: &Item<S>, context: &PublishingContext<S>) -> Document {
        (self.item)(item, context)
    }

    pub fn render_page(&self, page: &Page, context: &PublishingContext<S>) -> Document {
        (self.page)(page, context)
    }

    pub fn render_tag_list(
        &self,
        page: &TagListPage,
        context: &PublishingContext<S>,
    ) -> Option<Document> {
        (self.tag_list)(page, context)
    }

    pub fn render_tag_details(
        &self,
        page: &TagDetailsPage,
        context: &PublishingContext<S>,
    ) -> Option<Document> {
        (self.tag_details)(page, context)
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}
