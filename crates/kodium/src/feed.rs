use chrono::NaiveDate;
use kodium_markup::*;

use crate::content::{sort_items_by_date, PublishingContext, SectionId, SortOrder};

/// The number of items included in the feed.
pub const MAX_FEED_ITEMS: usize = 20;

/// Builds an RSS 2.0 feed of the site's most recent items.
pub fn rss_feed_template<S: SectionId>(
    context: &PublishingContext<S>,
) -> Result<Element, url::ParseError> {
    let site = &context.site;

    let mut items = context.all_items().collect::<Vec<_>>();
    sort_items_by_date(&mut items, SortOrder::Descending);
    items.truncate(MAX_FEED_ITEMS);

    let feed_url = site.permalink(&site.feed_path())?;
    let site_url = site.permalink("/")?;

    let entries = items
        .iter()
        .map(|item| -> Result<Element, url::ParseError> {
            let permalink = site.permalink(&item.path)?;

            Ok(Element::new("item")
                .child(Element::new("guid").child(permalink.as_str()))
                .child(title().child(item.title.as_str()))
                .child(Element::new("description").child(item.description.as_str()))
                .child(link().child(permalink.as_str()))
                .child(Element::new("pubDate").child(rfc_2822(item.date)))
                .child(Element::new("content:encoded").child(Node::raw(item.body.as_str()))))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Element::new("rss")
        .attr("version", "2.0")
        .attr("xmlns:atom", "http://www.w3.org/2005/Atom")
        .attr("xmlns:content", "http://purl.org/rss/1.0/modules/content/")
        .child(
            Element::new("channel")
                .child(title().child(site.name.as_str()))
                .child(Element::new("description").child(site.description.as_str()))
                .child(link().child(site_url.as_str()))
                .child(Element::new("language").child(site.language.as_str()))
                .child(
                    items
                        .first()
                        .map(|item| Element::new("lastBuildDate").child(rfc_2822(item.date))),
                )
                .child(
                    Element::new("atom:link")
                        .attr("href", feed_url.as_str())
                        .attr("rel", "self")
                        .attr("type", "application/rss+xml"),
                )
                .children(entries),
        ))
}

fn rfc_2822(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y 00:00:00 +0000").to_string()
}

#[cfg(test)]
mod tests {
    use kodium_markup::renderer::XmlRenderer;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::section_id::test_sections::OneSection;
    use crate::test_support::*;

    #[test]
    fn test_feed_lists_newest_items_first() {
        let context = make_context(
            vec![make_section(
                OneSection::Posts,
                vec![
                    make_item(OneSection::Posts, "older", "2023-01-01", &[]),
                    make_item(OneSection::Posts, "newer", "2023-06-01", &[]),
                ],
            )],
            Vec::new(),
        );

        let feed = rss_feed_template(&context).unwrap();

        let guids = feed
            .find_all("guid")
            .into_iter()
            .map(Element::text)
            .collect::<Vec<_>>();
        assert_eq!(
            guids,
            vec![
                "http://kodium.mk/posts/newer/",
                "http://kodium.mk/posts/older/"
            ]
        );
        assert_eq!(
            feed.find_all("lastBuildDate")[0].text(),
            "Thu, 01 Jun 2023 00:00:00 +0000"
        );
    }

    #[test]
    fn test_feed_is_capped() {
        let items = (1..=25)
            .map(|day| {
                make_item(
                    OneSection::Posts,
                    &format!("post-{day}"),
                    &format!("2023-01-{day:02}"),
                    &[],
                )
            })
            .collect();
        let context = make_context(vec![make_section(OneSection::Posts, items)], Vec::new());

        let feed = rss_feed_template(&context).unwrap();

        assert_eq!(feed.find_all("item").len(), MAX_FEED_ITEMS);
    }

    #[test]
    fn test_empty_feed() {
        let context = make_context(vec![make_section(OneSection::Posts, Vec::new())], Vec::new());

        let feed = rss_feed_template(&context).unwrap();
        let rendered = XmlRenderer::new().render_document(&feed).unwrap();

        assert!(feed.find_all("item").is_empty());
        assert!(feed.find_all("lastBuildDate").is_empty());
        assert!(rendered.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(rendered.contains("<title>Kodium</title>"));
    }
}
