use std::fmt;

use crate::element::Element;
use crate::elements::html;
use crate::renderer::HtmlRenderer;

/// A root element plus the language it is written in, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub language: String,
    pub root: Element,
}

impl Document {
    /// Returns a new [`Document`] whose root `html` element holds the given head and body.
    pub fn new(language: impl Into<String>, head: Element, body: Element) -> Self {
        let language = language.into();
        let root = html().lang(language.as_str()).child(head).child(body);

        Self { language, root }
    }

    pub fn head(&self) -> Option<&Element> {
        self.root.child_elements().find(|element| element.tag_name == "head")
    }

    pub fn body(&self) -> Option<&Element> {
        self.root.child_elements().find(|element| element.tag_name == "body")
    }

    pub fn render(&self) -> Result<String, fmt::Error> {
        HtmlRenderer::new().render_to_string(&self.root)
    }
}
