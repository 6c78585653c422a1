use chrono::NaiveDate;

use crate::content::{Index, Item, Page, PublishingContext, Section, SectionId, Site, Tag};

pub fn make_site() -> Site {
    let mut site = Site::new(
        "http://kodium.mk".parse().unwrap(),
        "Kodium",
        "Mobile Software Engineering at it's best!",
    );
    site.home.introduction = vec![
        "Welcome to Kodium, where innovation meets mobility!".to_string(),
        "Kodium specializes in creating visually stunning mobile apps.".to_string(),
    ];
    site.home.contact_email = Some("kodium.mk@gmail.com".to_string());
    site
}

pub fn make_item<S: SectionId>(id: S, slug: &str, date: &str, tags: &[&str]) -> Item<S> {
    Item {
        section_id: id,
        slug: slug.to_string(),
        path: format!("/{}/{slug}", id.as_str()),
        title: format!("Title of {slug}"),
        description: format!("Description of {slug}"),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        tags: tags.iter().map(|tag| Tag::new(*tag)).collect(),
        body: format!("<p>Body of {slug}</p>"),
    }
}

pub fn make_section<S: SectionId>(id: S, items: Vec<Item<S>>) -> Section<S> {
    Section {
        id,
        title: id.default_title(),
        path: format!("/{}", id.as_str()),
        items,
    }
}

pub fn make_page(slug: &str) -> Page {
    Page {
        slug: slug.to_string(),
        path: format!("/{slug}"),
        title: format!("Title of {slug}"),
        description: String::new(),
        body: format!("<p>Body of {slug}</p>"),
    }
}

pub fn make_context<S: SectionId>(
    sections: Vec<Section<S>>,
    pages: Vec<Page>,
) -> PublishingContext<S> {
    let site = make_site();
    let index = Index {
        title: site.name.clone(),
        description: site.description.clone(),
    };

    PublishingContext::new(site, index, sections, pages)
}
