use kodium_markup::*;

use crate::content::{Index, Item, Page, Section, SectionId, Site, TagDetailsPage, TagListPage};

/// A location on the site that can be published as its own document.
pub trait Location {
    fn title(&self) -> String;

    fn description(&self) -> String {
        String::new()
    }

    /// The site-relative path the location is published at.
    fn path(&self, site: &Site) -> String;

    fn image_path(&self) -> Option<&str> {
        None
    }
}

impl Location for Index {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn path(&self, _site: &Site) -> String {
        "/".to_string()
    }
}

impl<S: SectionId> Location for Section<S> {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn path(&self, _site: &Site) -> String {
        self.path.clone()
    }
}

impl<S: SectionId> Location for Item<S> {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn path(&self, _site: &Site) -> String {
        self.path.clone()
    }
}

impl Location for Page {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn path(&self, _site: &Site) -> String {
        self.path.clone()
    }
}

impl Location for TagListPage {
    fn title(&self) -> String {
        "Browse all tags".to_string()
    }

    fn path(&self, site: &Site) -> String {
        site.tag_list_path()
    }
}

impl Location for TagDetailsPage {
    fn title(&self) -> String {
        format!("Tagged with {}", self.tag)
    }

    fn path(&self, site: &Site) -> String {
        site.tag_path(&self.tag)
    }
}

/// Builds the document head for the given location.
pub fn head_for(location: &impl Location, site: &Site) -> Element {
    let title = match location.title() {
        title if title.is_empty() || title == site.name => site.name.clone(),
        title => format!("{title} | {}", site.name),
    };

    let description = match location.description() {
        description if description.is_empty() => site.description.clone(),
        description => description,
    };

    let url = site
        .permalink(&location.path(site))
        .ok()
        .map(|permalink| permalink.to_string());

    let image_url = location
        .image_path()
        .or(site.image_path.as_deref())
        .and_then(|path| site.permalink(path).ok())
        .map(|permalink| permalink.to_string());

    head().child(content![
        meta().charset("UTF-8"),
        meta().property("og:site_name").content(site.name.as_str()),
        url.map(|url| meta().property("og:url").content(url)),
        title_element(&title),
        meta().property("og:title").content(title.as_str()),
        meta().name("description").content(description.as_str()),
        meta().property("og:description").content(description.as_str()),
        image_url.map(|url| meta().property("og:image").content(url)),
        meta()
            .name("viewport")
            .content("width=device-width, initial-scale=1.0"),
        link().rel("stylesheet").href("/styles.css").attr("type", "text/css"),
        link()
            .rel("alternate")
            .href(site.feed_path())
            .attr("type", "application/rss+xml")
            .title("Subscribe"),
    ])
}

fn title_element(text: &str) -> Element {
    title().child(text)
}
