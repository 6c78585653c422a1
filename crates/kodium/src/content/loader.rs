use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::content::{
    sort_items_for_section, split_front_matter, Index, IndexFrontMatter, Item, ItemFrontMatter,
    Page, PageFrontMatter, PublishingContext, Section, SectionFrontMatter, SectionId, Site,
};
use crate::markdown::render_markdown;

#[derive(Error, Debug)]
pub enum LoadContentError {
    #[error("failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read content: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing front matter in '{filepath}'")]
    MissingFrontMatter { filepath: PathBuf },

    #[error("invalid front matter in '{filepath}': {source}")]
    InvalidFrontMatter {
        filepath: PathBuf,
        source: toml::de::Error,
    },
}

/// Loads a content directory laid out as:
///
/// ```text
/// content/
///   index.md          home page title and description
///   about.md          a standalone page
///   posts/
///     _index.md       section title
///     hello-world.md  an item in the `posts` section
/// ```
pub struct ContentLoader {
    content_path: PathBuf,
}

impl ContentLoader {
    /// Returns a new [`ContentLoader`] reading from the given directory.
    pub fn new(content_path: impl Into<PathBuf>) -> Self {
        Self {
            content_path: content_path.into(),
        }
    }

    pub fn load<S: SectionId>(&self, site: Site) -> Result<PublishingContext<S>, LoadContentError> {
        let index = self.load_index(&site)?;

        let sections = S::ALL
            .iter()
            .map(|id| self.load_section(&site, *id))
            .collect::<Result<Vec<_>, _>>()?;

        let pages = self.load_pages(&site)?;

        tracing::info!(
            sections = sections.len(),
            items = sections.iter().map(|section| section.items.len()).sum::<usize>(),
            pages = pages.len(),
            "Loaded content"
        );

        Ok(PublishingContext::new(site, index, sections, pages))
    }

    fn load_index(&self, site: &Site) -> Result<Index, LoadContentError> {
        let index_path = self.content_path.join("index.md");

        let front_matter = if index_path.is_file() {
            let text = fs::read_to_string(&index_path)?;
            parse_optional_front_matter::<IndexFrontMatter>(&text, &index_path)?
        } else {
            tracing::debug!(path = %index_path.display(), "No index content, using site defaults");
            IndexFrontMatter::default()
        };

        Ok(Index {
            title: front_matter.title.unwrap_or_else(|| site.name.clone()),
            description: front_matter
                .description
                .unwrap_or_else(|| site.description.clone()),
        })
    }

    fn load_section<S: SectionId>(
        &self,
        site: &Site,
        id: S,
    ) -> Result<Section<S>, LoadContentError> {
        let section_path = self.content_path.join(id.as_str());
        let mut section = Section::empty(id, site.section_path(id));

        if !section_path.is_dir() {
            tracing::debug!(section = id.as_str(), "No content directory for section");
            return Ok(section);
        }

        let index_path = section_path.join("_index.md");
        if index_path.is_file() {
            let text = fs::read_to_string(&index_path)?;
            let front_matter =
                parse_optional_front_matter::<SectionFrontMatter>(&text, &index_path)?;

            if let Some(title) = front_matter.title {
                section.title = title;
            }
        }

        for path in markdown_files(&section_path)? {
            if path.file_name().map_or(false, |name| name == "_index.md") {
                continue;
            }

            let text = fs::read_to_string(&path)?;
            section.items.push(parse_item(site, id, &text, &path)?);
        }

        sort_items_for_section(&mut section.items);

        Ok(section)
    }

    fn load_pages(&self, site: &Site) -> Result<Vec<Page>, LoadContentError> {
        if !self.content_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut pages = Vec::new();

        for path in markdown_files(&self.content_path)? {
            if path.file_name().map_or(false, |name| name == "index.md") {
                continue;
            }

            let text = fs::read_to_string(&path)?;
            pages.push(parse_page(site, &text, &path)?);
        }

        Ok(pages)
    }
}

/// Returns the Markdown files directly inside `dir`, sorted by file name.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, LoadContentError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let Some(filename) = entry.file_name().to_str() else {
            continue;
        };

        if !entry.file_type().is_file() || filename.starts_with('.') || !filename.ends_with(".md")
        {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

fn parse_front_matter<'a, T>(text: &'a str, filepath: &Path) -> Result<(T, &'a str), LoadContentError>
where
    T: serde::de::DeserializeOwned,
{
    let (front_matter, content) =
        split_front_matter(text).ok_or_else(|| LoadContentError::MissingFrontMatter {
            filepath: filepath.to_owned(),
        })?;

    let front_matter = front_matter
        .deserialize()
        .map_err(|source| LoadContentError::InvalidFrontMatter {
            filepath: filepath.to_owned(),
            source,
        })?;

    Ok((front_matter, content))
}

fn parse_optional_front_matter<T>(text: &str, filepath: &Path) -> Result<T, LoadContentError>
where
    T: serde::de::DeserializeOwned + Default,
{
    match parse_front_matter(text, filepath) {
        Ok((front_matter, _content)) => Ok(front_matter),
        Err(LoadContentError::MissingFrontMatter { .. }) => Ok(T::default()),
        Err(err) => Err(err),
    }
}

fn file_slug(filepath: &Path) -> String {
    filepath
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

pub fn parse_item<S: SectionId>(
    site: &Site,
    section_id: S,
    text: &str,
    filepath: &Path,
) -> Result<Item<S>, LoadContentError> {
    let (front_matter, content) = parse_front_matter::<ItemFrontMatter>(text, filepath)?;

    let slug = front_matter.slug.unwrap_or_else(|| file_slug(filepath));

    Ok(Item {
        section_id,
        path: site.item_path(section_id, &slug),
        slug,
        title: front_matter.title,
        description: front_matter.description,
        date: front_matter.date,
        tags: front_matter.tags,
        body: render_markdown(content),
    })
}

pub fn parse_page(site: &Site, text: &str, filepath: &Path) -> Result<Page, LoadContentError> {
    let (front_matter, content) = parse_front_matter::<PageFrontMatter>(text, filepath)?;

    let slug = front_matter.slug.unwrap_or_else(|| file_slug(filepath));

    Ok(Page {
        path: site.page_path(&slug),
        slug,
        title: front_matter.title,
        description: front_matter.description,
        body: render_markdown(content),
    })
}
