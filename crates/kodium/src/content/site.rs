use serde::Deserialize;
use url::Url;

use crate::content::{SectionId, Tag};
use crate::permalink::Permalink;

/// The site-wide configuration and content shared by every page.
#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub url: Url,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub home: HomeContent,
}

/// The prose shown on the home page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeContent {
    #[serde(default)]
    pub introduction: Vec<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

fn default_language() -> String {
    "en".to_string()
}

impl Site {
    pub fn new(url: Url, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url,
            name: name.into(),
            description: description.into(),
            language: default_language(),
            image_path: None,
            home: HomeContent::default(),
        }
    }

    pub fn section_path<S: SectionId>(&self, id: S) -> String {
        format!("/{}", id.as_str())
    }

    pub fn item_path<S: SectionId>(&self, id: S, slug: &str) -> String {
        format!("/{}/{slug}", id.as_str())
    }

    pub fn page_path(&self, slug: &str) -> String {
        format!("/{slug}")
    }

    pub fn tag_list_path(&self) -> String {
        "/tags".to_string()
    }

    pub fn tag_path(&self, tag: &Tag) -> String {
        format!("{}/{}", self.tag_list_path(), tag.slug())
    }

    pub fn feed_path(&self) -> String {
        "/feed.rss".to_string()
    }

    /// Returns the absolute URL of the given site-relative path.
    pub fn permalink(&self, path: &str) -> Result<Permalink, url::ParseError> {
        Permalink::from_path(&self.url, path)
    }
}
