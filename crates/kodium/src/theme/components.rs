use kodium_markup::*;

use crate::content::{Item, PublishingContext, SectionId, Site};

/// Wraps its content in the layout container.
pub struct Wrapper {
    content: Vec<Node>,
}

impl Wrapper {
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into().into_nodes(),
        }
    }
}

impl Component for Wrapper {
    fn render(&self) -> Node {
        div()
            .class("wrapper")
            .children(self.content.iter().cloned())
            .into()
    }
}

/// The site name and, for sites with more than one section, the section navigation.
pub struct SiteHeader<'a, S> {
    context: &'a PublishingContext<S>,
    selected_section_id: Option<S>,
}

impl<'a, S: SectionId> SiteHeader<'a, S> {
    pub fn new(context: &'a PublishingContext<S>, selected_section_id: Option<S>) -> Self {
        Self {
            context,
            selected_section_id,
        }
    }

    fn navigation(&self) -> Element {
        nav().child(ul().child(Content::each(self.context.sections(), |section| {
            let is_selected = Some(section.id) == self.selected_section_id;

            li().child(
                a().href(section.path.as_str())
                    .class(is_selected.then_some("selected"))
                    .child(section.title.as_str()),
            )
        })))
    }
}

impl<S: SectionId> Component for SiteHeader<'_, S> {
    fn render(&self) -> Node {
        let site = &self.context.site;

        header()
            .child(
                Wrapper::new(content![
                    a().href("/").class("site-name").child(site.name.as_str()),
                    Content::when(S::ALL.len() > 1, self.navigation()),
                ])
                .render(),
            )
            .into()
    }
}

pub struct SiteFooter;

impl Component for SiteFooter {
    fn render(&self) -> Node {
        footer()
            .child(p().child(content![
                "Generated using ",
                a().href("https://www.rust-lang.org").child("Rust"),
            ]))
            .child(p().child(a().href("/feed.rss").child("RSS feed")))
            .into()
    }
}

/// Lists items in the order they are given.
pub struct ItemList<'a, S> {
    items: Vec<&'a Item<S>>,
    site: &'a Site,
}

impl<'a, S: SectionId> ItemList<'a, S> {
    pub fn new(items: impl IntoIterator<Item = &'a Item<S>>, site: &'a Site) -> Self {
        Self {
            items: items.into_iter().collect(),
            site,
        }
    }
}

impl<S: SectionId> Component for ItemList<'_, S> {
    fn render(&self) -> Node {
        ul().class("item-list")
            .child(Content::each(&self.items, |item| {
                li().child(article().child(content![
                    h1().child(a().href(item.path.as_str()).child(item.title.as_str())),
                    ItemTagList::new(item, self.site).render(),
                    p().child(item.description.as_str()),
                ]))
            }))
            .into()
    }
}

/// Links to the tags of a single item, in the item's own order.
pub struct ItemTagList<'a, S> {
    item: &'a Item<S>,
    site: &'a Site,
}

impl<'a, S: SectionId> ItemTagList<'a, S> {
    pub fn new(item: &'a Item<S>, site: &'a Site) -> Self {
        Self { item, site }
    }
}

impl<S: SectionId> Component for ItemTagList<'_, S> {
    fn render(&self) -> Node {
        ul().class("tag-list")
            .child(Content::each(&self.item.tags, |tag| {
                li().child(a().href(self.site.tag_path(tag)).child(tag.as_str()))
            }))
            .into()
    }
}
