use std::fmt::Write;

use crate::element::Element;
use crate::elements::is_void;
use crate::visitor::Visitor;

/// A renderer for [`Element`]s to a string of HTML.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    html: String,
}

impl HtmlRenderer {
    /// Returns a new [`HtmlRenderer`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the given [`Element`] to a string of HTML.
    pub fn render_to_string(mut self, element: &Element) -> Result<String, std::fmt::Error> {
        self.visit(element)?;

        Ok(self.html)
    }
}

impl Visitor for HtmlRenderer {
    type Error = std::fmt::Error;

    fn visit(&mut self, element: &Element) -> Result<(), Self::Error> {
        if element.tag_name == "html" {
            write!(&mut self.html, "<!DOCTYPE html>")?;
        }

        write!(&mut self.html, "<{}", element.tag_name)?;

        for (name, value) in &element.attrs {
            self.visit_attr(name, value)?;
        }

        write!(&mut self.html, ">")?;

        if is_void(element) {
            return Ok(());
        }

        self.visit_children(&element.children)?;

        write!(&mut self.html, "</{}>", element.tag_name)?;

        Ok(())
    }

    fn visit_text(&mut self, text: &str) -> Result<(), Self::Error> {
        write!(&mut self.html, "{}", escape_text(text))
    }

    fn visit_raw(&mut self, markup: &str) -> Result<(), Self::Error> {
        write!(&mut self.html, "{markup}")
    }

    fn visit_attr(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        write!(&mut self.html, " {name}")?;

        if !value.is_empty() {
            write!(&mut self.html, r#"="{}""#, escape_attr(value))?;
        }

        Ok(())
    }
}

/// A renderer for [`Element`]s to a string of XML.
///
/// Childless elements are self-closed, so the output stays well-formed XML.
#[derive(Debug, Default)]
pub struct XmlRenderer {
    xml: String,
}

impl XmlRenderer {
    /// Returns a new [`XmlRenderer`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the given [`Element`] to a string of XML, preceded by the XML prolog.
    pub fn render_document(mut self, element: &Element) -> Result<String, std::fmt::Error> {
        const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

        writeln!(&mut self.xml, "{XML_PROLOG}")?;
        self.visit(element)?;

        Ok(self.xml)
    }

    /// Renders the given [`Element`] to a string of XML.
    pub fn render_to_string(mut self, element: &Element) -> Result<String, std::fmt::Error> {
        self.visit(element)?;

        Ok(self.xml)
    }
}

impl Visitor for XmlRenderer {
    type Error = std::fmt::Error;

    fn visit(&mut self, element: &Element) -> Result<(), Self::Error> {
        write!(&mut self.xml, "<{}", element.tag_name)?;

        for (name, value) in &element.attrs {
            self.visit_attr(name, value)?;
        }

        if element.children.is_empty() {
            write!(&mut self.xml, "/>")?;
            return Ok(());
        }

        write!(&mut self.xml, ">")?;

        self.visit_children(&element.children)?;

        write!(&mut self.xml, "</{}>", element.tag_name)?;

        Ok(())
    }

    fn visit_text(&mut self, text: &str) -> Result<(), Self::Error> {
        write!(&mut self.xml, "{}", escape_text(text))
    }

    fn visit_raw(&mut self, markup: &str) -> Result<(), Self::Error> {
        write!(&mut self.xml, "{}", escape_text(markup))
    }

    fn visit_attr(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        write!(&mut self.xml, r#" {name}="{}""#, escape_attr(value))
    }
}

pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value)
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::element::Node;
    use crate::elements::*;

    #[test]
    fn test_render_nested() {
        let element = div()
            .class("outer")
            .child(div().class("inner").child(h1().class("heading").child("Hi")));

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<div class="outer"><div class="inner"><h1 class="heading">Hi</h1></div></div>"#
        );
    }

    #[test]
    fn test_render_document_root() {
        let element = html().lang("en").child(head().child(meta().charset("UTF-8")));

        assert_eq!(
            HtmlRenderer::new().render_to_string(&element).unwrap(),
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"></head></html>"#
        );
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let element = a()
            .href("/search?a=1&b=\"2\"")
            .child("Tom & Jerry <3");

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<a href="/search?a=1&amp;b=&quot;2&quot;">Tom &amp; Jerry &lt;3</a>"#
        );
    }

    #[test]
    fn test_raw_markup_is_verbatim() {
        let element = div().child(Node::raw("<p>Already <em>rendered</em></p>"));

        assert_eq!(
            element.render_to_string().unwrap(),
            "<div><p>Already <em>rendered</em></p></div>"
        );
    }

    #[test]
    fn test_empty_attribute_value() {
        let element = a().class("").child("Posts");

        assert_eq!(element.render_to_string().unwrap(), "<a class>Posts</a>");
    }

    #[test]
    fn test_xml_document() {
        let element = Element::new("urlset")
            .attr("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9")
            .child(
                Element::new("url")
                    .child(Element::new("loc").child("http://kodium.mk/"))
                    .child(Element::new("lastmod")),
            );

        assert_eq!(
            XmlRenderer::new().render_document(&element).unwrap(),
            indoc! {r#"
                <?xml version="1.0" encoding="UTF-8"?>
                <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>http://kodium.mk/</loc><lastmod/></url></urlset>"#}
        );
    }

    #[test]
    fn test_xml_escapes_raw_markup() {
        let element = Element::new("description").child(Node::raw("<p>Hi</p>"));

        assert_eq!(
            XmlRenderer::new().render_to_string(&element).unwrap(),
            "<description>&lt;p&gt;Hi&lt;/p&gt;</description>"
        );
    }
}
