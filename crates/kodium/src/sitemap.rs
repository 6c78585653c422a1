use std::collections::BTreeSet;

use chrono::NaiveDate;
use kodium_markup::*;

use crate::content::{PublishingContext, SectionId};
use crate::permalink::Permalink;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SitemapEntry {
    pub permalink: Permalink,
    pub updated_at: Option<NaiveDate>,
}

/// Collects an entry for every location published for the site, sorted by permalink.
pub fn sitemap_entries<S: SectionId>(
    context: &PublishingContext<S>,
) -> Result<Vec<SitemapEntry>, url::ParseError> {
    let site = &context.site;
    let mut entries = BTreeSet::new();

    let mut add = |path: &str, updated_at: Option<NaiveDate>| -> Result<(), url::ParseError> {
        entries.insert(SitemapEntry {
            permalink: site.permalink(path)?,
            updated_at,
        });
        Ok(())
    };

    add("/", None)?;

    for section in context.sections() {
        add(&section.path, section.items.iter().map(|item| item.date).max())?;
    }

    for item in context.all_items() {
        add(&item.path, Some(item.date))?;
    }

    for page in &context.pages {
        add(&page.path, None)?;
    }

    add(&site.tag_list_path(), None)?;

    for tag in &context.all_tags() {
        add(&site.tag_path(tag), None)?;
    }

    Ok(entries.into_iter().collect())
}

pub fn sitemap_template(entries: Vec<SitemapEntry>) -> Element {
    urlset()
        .attr("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9")
        .children(entries.into_iter().map(|entry| {
            url().child(loc().child(entry.permalink.as_str())).child(
                entry
                    .updated_at
                    .map(|updated_at| lastmod().child(updated_at.format("%Y-%m-%d").to_string())),
            )
        }))
}

fn urlset() -> Element {
    Element::new("urlset")
}

fn url() -> Element {
    Element::new("url")
}

fn loc() -> Element {
    Element::new("loc")
}

fn lastmod() -> Element {
    Element::new("lastmod")
}

#[cfg(test)]
mod tests {
    use kodium_markup::renderer::XmlRenderer;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::section_id::test_sections::OneSection;
    use crate::test_support::*;

    #[test]
    fn test_sitemap_entries() {
        let context = make_context(
            vec![make_section(
                OneSection::Posts,
                vec![
                    make_item(OneSection::Posts, "hello", "2023-01-01", &["swift"]),
                    make_item(OneSection::Posts, "world", "2023-06-01", &[]),
                ],
            )],
            vec![make_page("about")],
        );

        let entries = sitemap_entries(&context).unwrap();

        assert_eq!(
            entries
                .iter()
                .map(|entry| (entry.permalink.as_str(), entry.updated_at))
                .collect::<Vec<_>>(),
            vec![
                ("http://kodium.mk/", None),
                ("http://kodium.mk/about/", None),
                ("http://kodium.mk/posts/", NaiveDate::from_ymd_opt(2023, 6, 1)),
                ("http://kodium.mk/posts/hello/", NaiveDate::from_ymd_opt(2023, 1, 1)),
                ("http://kodium.mk/posts/world/", NaiveDate::from_ymd_opt(2023, 6, 1)),
                ("http://kodium.mk/tags/", None),
                ("http://kodium.mk/tags/swift/", None),
            ]
        );
    }

    #[test]
    fn test_sitemap_lists_tag_index_without_tags() {
        let context = make_context(
            vec![make_section(
                OneSection::Posts,
                vec![make_item(OneSection::Posts, "hello", "2023-01-01", &[])],
            )],
            Vec::new(),
        );

        let entries = sitemap_entries(&context).unwrap();

        assert_eq!(
            entries
                .iter()
                .map(|entry| entry.permalink.as_str())
                .collect::<Vec<_>>(),
            vec![
                "http://kodium.mk/",
                "http://kodium.mk/posts/",
                "http://kodium.mk/posts/hello/",
                "http://kodium.mk/tags/",
            ]
        );
    }

    #[test]
    fn test_sitemap_template() {
        let entries = vec![SitemapEntry {
            permalink: Permalink::from_path(&"http://kodium.mk".parse().unwrap(), "/posts/hello")
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2023, 1, 1),
        }];

        let rendered = XmlRenderer::new()
            .render_to_string(&sitemap_template(entries))
            .unwrap();

        assert_eq!(
            rendered,
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>http://kodium.mk/posts/hello/</loc><lastmod>2023-01-01</lastmod></url></urlset>"#
        );
    }
}
