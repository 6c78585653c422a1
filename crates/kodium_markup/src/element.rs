use std::fmt;

use indexmap::IndexMap;

use crate::content::Content;
use crate::renderer::HtmlRenderer;

/// A node in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),

    /// Plain text, escaped when serialized.
    Text(String),

    /// Markup that has already been rendered elsewhere and is emitted verbatim.
    Raw(String),
}

impl Node {
    /// Returns a [`Node::Raw`] containing the given pre-rendered markup.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) | Self::Raw(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag_name: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag_name: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets the attribute with the given name.
    ///
    /// Passing `None` removes the attribute instead.
    pub fn attr(mut self, name: impl Into<String>, value: impl AttributeValue) -> Self {
        let name = name.into();
        match value.into_attribute_value() {
            Some(value) => {
                *self.attrs.entry(name).or_default() = value;
            }
            None => {
                self.attrs.shift_remove(&name);
            }
        }

        self
    }

    /// Appends the given content to this element's children.
    pub fn child(mut self, child: impl Into<Content>) -> Self {
        child.into().flatten_into(&mut self.children);
        self
    }

    /// Appends each piece of content, in order, to this element's children.
    pub fn children<C>(mut self, children: impl IntoIterator<Item = C>) -> Self
    where
        C: Into<Content>,
    {
        for child in children {
            child.into().flatten_into(&mut self.children);
        }

        self
    }

    /// Returns an iterator over the child elements, skipping text and raw nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Returns every element in this subtree (including `self`) with the given tag name,
    /// in document order.
    pub fn find_all<'a>(&'a self, tag_name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_tag(tag_name, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag_name: &str, found: &mut Vec<&'a Element>) {
        if self.tag_name == tag_name {
            found.push(self);
        }

        for child in self.child_elements() {
            child.collect_by_tag(tag_name, found);
        }
    }

    /// Returns every element in this subtree carrying the given class.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            found.push(self);
        }

        for child in self.child_elements() {
            child.collect_by_class(class, found);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attrs
            .get("class")
            .map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Returns the concatenated text of this subtree, ignoring raw markup.
    pub fn text(&self) -> String {
        let mut text = String::new();

        for child in &self.children {
            match child {
                Node::Element(element) => text.push_str(&element.text()),
                Node::Text(value) => text.push_str(value),
                Node::Raw(_) => {}
            }
        }

        text
    }

    pub fn render_to_string(&self) -> Result<String, fmt::Error> {
        HtmlRenderer::new().render_to_string(self)
    }
}

/// A value that can be assigned to an attribute, where `None` means "absent".
pub trait AttributeValue {
    fn into_attribute_value(self) -> Option<String>;
}

impl AttributeValue for &str {
    fn into_attribute_value(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl AttributeValue for String {
    fn into_attribute_value(self) -> Option<String> {
        Some(self)
    }
}

impl AttributeValue for &String {
    fn into_attribute_value(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: AttributeValue> AttributeValue for Option<T> {
    fn into_attribute_value(self) -> Option<String> {
        self.and_then(AttributeValue::into_attribute_value)
    }
}

macro_rules! attr_methods {
    ($($method_name:ident : $attr_name:expr),*) => {
        impl Element {
            $(
                pub fn $method_name(self, value: impl AttributeValue) -> Self {
                    self.attr($attr_name, value)
                }
            )*
        }
    }
}

attr_methods! {
    id: "id",
    class: "class",
    title: "title",
    href: "href",
    lang: "lang",
    rel: "rel",
    name: "name",
    content: "content",
    charset: "charset",
    property: "property"
}

/// Builds an [`Element`] from a tag name, ordered attribute pairs, and its children.
pub fn element<K, V>(
    tag: impl Into<String>,
    attrs: impl IntoIterator<Item = (K, V)>,
    children: impl Into<Content>,
) -> Element
where
    K: Into<String>,
    V: Into<String>,
{
    let element = attrs
        .into_iter()
        .fold(Element::new(tag), |element, (name, value)| {
            element.attr(name, Into::<String>::into(value))
        });

    element.child(children)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::elements::*;

    #[test]
    fn test_attribute_order_is_preserved() {
        let element = a().href("/posts").class("selected").id("nav-posts");

        assert_eq!(
            element.attrs.keys().collect::<Vec<_>>(),
            vec!["href", "class", "id"]
        );
    }

    #[test]
    fn test_setting_attribute_again_keeps_position() {
        let element = a().class("first").href("/").class("second");

        assert_eq!(
            element.attrs.iter().collect::<Vec<_>>(),
            vec![
                (&"class".to_string(), &"second".to_string()),
                (&"href".to_string(), &"/".to_string())
            ]
        );
    }

    #[test]
    fn test_none_removes_attribute() {
        let element = a().class("selected").class(None::<String>);
        assert!(element.attrs.is_empty());

        let element = a().class(false.then_some("selected")).href(Some("/"));
        assert_eq!(element, a().href("/"));
    }

    #[test]
    fn test_element_function() {
        let element = element("a", [("href", "/"), ("class", "site-name")], "Kodium");

        assert_eq!(
            element,
            a().href("/").class("site-name").child("Kodium")
        );
    }

    #[test]
    fn test_child_order_is_preserved() {
        let element = div().child(h1().child("one")).child("two").child(p());

        assert_eq!(
            element.children,
            vec![
                Node::Element(h1().child("one")),
                Node::Text("two".to_string()),
                Node::Element(p())
            ]
        );
    }

    #[test]
    fn test_find_helpers() {
        let element = div()
            .class("wrapper")
            .child(ul().class("tag-list").child(li().child(a().child("swift"))))
            .child(p().child("description"));

        assert_eq!(element.find_all("a").len(), 1);
        assert_eq!(element.find_by_class("tag-list").len(), 1);
        assert_eq!(element.text(), "swiftdescription");
    }
}
