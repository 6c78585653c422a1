use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kodium_markup::renderer::XmlRenderer;
use kodium_markup::Document;
use thiserror::Error;

use crate::content::{PublishingContext, SectionId};
use crate::feed::rss_feed_template;
use crate::sitemap::{sitemap_entries, sitemap_template};
use crate::storage::{index_file_for, Store};
use crate::theme::Theme;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("'{first}' and '{second}' are both published to '{}'", .filepath.display())]
    PathCollision {
        filepath: PathBuf,
        first: String,
        second: String,
    },

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// What a publishing run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PublishSummary {
    /// Documents rendered and stored.
    pub documents: usize,
    /// Pages whose subject had no content, so no document was produced.
    pub skipped: usize,
    /// Other files stored (feed, sitemap, theme resources).
    pub files: usize,
}

/// Renders every location of a site with a theme and stores the results.
pub struct Publisher<'a, S> {
    theme: &'a Theme<S>,
    context: &'a PublishingContext<S>,
}

impl<'a, S: SectionId> Publisher<'a, S> {
    pub fn new(theme: &'a Theme<S>, context: &'a PublishingContext<S>) -> Self {
        Self { theme, context }
    }

    /// Renders and stores the whole site.
    ///
    /// Nothing is stored when two locations would be published to the same file.
    pub fn publish(&self, storage: &impl Store) -> Result<PublishSummary, PublishError> {
        let theme = self.theme;
        let context = self.context;
        let site = &context.site;
        let mut summary = PublishSummary::default();

        let documents = self.render_documents();
        check_collisions(&documents)?;

        for (location_path, document) in documents {
            let Some(document) = document else {
                tracing::debug!(path = %location_path, "Nothing to publish");
                summary.skipped += 1;
                continue;
            };

            let rendered = document.render()?;
            store(storage, &index_file_for(&location_path), &rendered)?;
            tracing::debug!(path = %location_path, "Published document");
            summary.documents += 1;
        }

        let feed = XmlRenderer::new().render_document(&rss_feed_template(context)?)?;
        self.store_file(storage, site.feed_path().trim_start_matches('/'), &feed, &mut summary)?;

        let sitemap =
            XmlRenderer::new().render_document(&sitemap_template(sitemap_entries(context)?))?;
        self.store_file(storage, "sitemap.xml", &sitemap, &mut summary)?;

        for resource in theme.resources() {
            self.store_file(storage, resource.path, resource.contents, &mut summary)?;
        }

        tracing::info!(
            documents = summary.documents,
            skipped = summary.skipped,
            files = summary.files,
            "Published site"
        );

        Ok(summary)
    }

    /// Renders every location, paired with the path it is published at.
    fn render_documents(&self) -> Vec<(String, Option<Document>)> {
        let theme = self.theme;
        let context = self.context;
        let site = &context.site;
        let mut documents = Vec::new();

        documents.push((
            "/".to_string(),
            Some(theme.render_index(&context.index, context)),
        ));

        for section in context.sections() {
            documents.push((
                section.path.clone(),
                Some(theme.render_section(section, context)),
            ));

            for item in &section.items {
                documents.push((item.path.clone(), Some(theme.render_item(item, context))));
            }
        }

        for page in &context.pages {
            documents.push((page.path.clone(), Some(theme.render_page(page, context))));
        }

        documents.push((
            site.tag_list_path(),
            theme.render_tag_list(&context.tag_list_page(), context),
        ));

        for page in context.tag_details_pages() {
            documents.push((
                site.tag_path(&page.tag),
                theme.render_tag_details(&page, context),
            ));
        }

        documents
    }

    fn store_file(
        &self,
        storage: &impl Store,
        path: &str,
        contents: &str,
        summary: &mut PublishSummary,
    ) -> Result<(), PublishError> {
        store(storage, &PathBuf::from(path), contents)?;
        summary.files += 1;

        Ok(())
    }
}

/// Fails if two documents that will be stored map to the same file.
fn check_collisions(documents: &[(String, Option<Document>)]) -> Result<(), PublishError> {
    let mut seen = HashMap::new();

    for (location_path, _) in documents.iter().filter(|(_, document)| document.is_some()) {
        let filepath = index_file_for(location_path);

        if let Some(first) = seen.insert(filepath.clone(), location_path) {
            return Err(PublishError::PathCollision {
                filepath,
                first: first.clone(),
                second: location_path.clone(),
            });
        }
    }

    Ok(())
}

fn store<T: Store>(storage: &T, path: &Path, contents: &str) -> Result<(), PublishError> {
    storage
        .store(path, contents)
        .map_err(|err| PublishError::Storage(Box::new(err)))
}
