use kodium_markup::*;

use crate::content::{
    Index, Item, Page, PublishingContext, Section, SectionId, SortOrder, TagDetailsPage, TagListPage,
};
use crate::theme::components::{ItemList, ItemTagList, SiteFooter, SiteHeader, Wrapper};
use crate::theme::head::{head_for, Location};

/// Assembles a document from the page's head, the site header, the given body content,
/// and the site footer.
fn document<S: SectionId>(
    location: &impl Location,
    context: &PublishingContext<S>,
    selected_section_id: Option<S>,
    body: Element,
    content: Node,
) -> Document {
    let site = &context.site;

    Document::new(
        site.language.as_str(),
        head_for(location, site),
        body.child(content![
            SiteHeader::new(context, selected_section_id).render(),
            content,
            SiteFooter.render(),
        ]),
    )
}

pub fn index_html<S: SectionId>(index: &Index, context: &PublishingContext<S>) -> Document {
    let site = &context.site;
    let home = &site.home;

    document(
        index,
        context,
        None,
        body(),
        Wrapper::new(content![
            h1().child(index.title.as_str()),
            p().class("description").child(site.description.as_str()),
            Content::when(!home.introduction.is_empty(), h2().child("Introduction")),
            Content::each(&home.introduction, |paragraph| {
                p().class("description").child(paragraph)
            }),
            home.contact_email.as_deref().map(contact),
        ])
        .render(),
    )
}

fn contact(email: &str) -> Content {
    content![
        h2().child("Contact"),
        p().child(content![
            "Write us at ",
            a().href(format!("mailto:{email}")).child(email),
        ]),
    ]
}

pub fn section_html<S: SectionId>(
    section: &Section<S>,
    context: &PublishingContext<S>,
) -> Document {
    document(
        section,
        context,
        Some(section.id),
        body(),
        Wrapper::new(content![
            h1().child(section.title.as_str()),
            ItemList::new(&section.items, &context.site).render(),
        ])
        .render(),
    )
}

pub fn item_html<S: SectionId>(item: &Item<S>, context: &PublishingContext<S>) -> Document {
    document(
        item,
        context,
        Some(item.section_id),
        body().class("item-page"),
        Wrapper::new(article().child(content![
            div().class("content").child(Node::raw(item.body.as_str())),
            span().child("Tagged with: "),
            ItemTagList::new(item, &context.site).render(),
        ]))
        .render(),
    )
}

pub fn page_html<S: SectionId>(page: &Page, context: &PublishingContext<S>) -> Document {
    document(
        page,
        context,
        None,
        body(),
        Wrapper::new(Node::raw(page.body.as_str())).render(),
    )
}

pub fn tag_list_html<S: SectionId>(
    page: &TagListPage,
    context: &PublishingContext<S>,
) -> Option<Document> {
    let site = &context.site;

    Some(document(
        page,
        context,
        None,
        body(),
        Wrapper::new(content![
            h1().child("Browse all tags"),
            ul().class("all-tags").child(Content::each(&page.tags, |tag| {
                li().class("tag")
                    .child(a().href(site.tag_path(tag)).child(tag.as_str()))
            })),
        ])
        .render(),
    ))
}

/// Returns `None` when no item carries the page's tag.
pub fn tag_details_html<S: SectionId>(
    page: &TagDetailsPage,
    context: &PublishingContext<S>,
) -> Option<Document> {
    let site = &context.site;
    let items = context.items_tagged_with(&page.tag, SortOrder::Descending);

    if items.is_empty() {
        return None;
    }

    Some(document(
        page,
        context,
        None,
        body(),
        Wrapper::new(content![
            h1().child(content![
                "Tagged with ",
                span().class("tag").child(page.tag.as_str()),
            ]),
            a().href(site.tag_list_path())
                .class("browse-all")
                .child("Browse all tags"),
            ItemList::new(items, site).render(),
        ])
        .render(),
    ))
}
