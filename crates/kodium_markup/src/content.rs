use crate::element::{Element, Node};

/// A specification of zero or more child nodes.
///
/// Content is flattened into its parent's children in the order it was authored.
/// [`Content::Empty`] contributes nothing, which lets optional data be composed
/// without branching at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    Node(Node),
    Many(Vec<Content>),
    #[default]
    Empty,
}

impl Content {
    /// Includes `content` only when `condition` holds.
    ///
    /// The content is built before the condition is checked.
    pub fn when(condition: bool, content: impl Into<Content>) -> Self {
        if condition {
            content.into()
        } else {
            Self::Empty
        }
    }

    /// Maps each value to content, preserving order.
    pub fn each<T, C>(values: impl IntoIterator<Item = T>, f: impl FnMut(T) -> C) -> Self
    where
        C: Into<Content>,
    {
        Self::Many(values.into_iter().map(f).map(Into::into).collect())
    }

    /// Returns a piece of raw, pre-rendered markup.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Node(Node::raw(markup))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Node(_) => false,
            Self::Many(contents) => contents.iter().all(Content::is_empty),
            Self::Empty => true,
        }
    }

    /// Returns the nodes this content stands for, in order.
    pub fn into_nodes(self) -> Vec<Node> {
        let mut nodes = Vec::new();
        self.flatten_into(&mut nodes);
        nodes
    }

    pub(crate) fn flatten_into(self, nodes: &mut Vec<Node>) {
        match self {
            Self::Node(node) => nodes.push(node),
            Self::Many(contents) => {
                for content in contents {
                    content.flatten_into(nodes);
                }
            }
            Self::Empty => {}
        }
    }
}

impl From<Node> for Content {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

impl From<Element> for Content {
    fn from(value: Element) -> Self {
        Self::Node(Node::Element(value))
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Node(Node::Text(value.to_string()))
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Node(Node::Text(value))
    }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self {
        Self::Node(Node::Text(value.clone()))
    }
}

impl<T> From<Option<T>> for Content
where
    T: Into<Content>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T> From<Vec<T>> for Content
where
    T: Into<Content>,
{
    fn from(value: Vec<T>) -> Self {
        Self::Many(value.into_iter().map(Into::into).collect())
    }
}

/// Builds a [`Content`] out of any number of values convertible into content.
///
/// ```
/// use kodium_markup::*;
///
/// let show_subtitle = false;
/// let header = div().child(content![
///     h1().child("Kodium"),
///     Content::when(show_subtitle, p().child("Subtitle")),
///     "trailing text",
/// ]);
///
/// assert_eq!(header.children.len(), 2);
/// ```
#[macro_export]
macro_rules! content {
    () => {
        $crate::Content::Empty
    };
    ($($child:expr),+ $(,)?) => {
        $crate::Content::Many(vec![$($crate::Content::from($child)),+])
    };
}
