use crate::element::{Element, Node};

/// A visitor over a markup tree.
pub trait Visitor {
    type Error;

    fn visit(&mut self, element: &Element) -> Result<(), Self::Error>;

    fn visit_text(&mut self, text: &str) -> Result<(), Self::Error>;

    fn visit_raw(&mut self, markup: &str) -> Result<(), Self::Error>;

    fn visit_attr(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;

    fn visit_node(&mut self, node: &Node) -> Result<(), Self::Error> {
        match node {
            Node::Element(element) => self.visit(element),
            Node::Text(text) => self.visit_text(text),
            Node::Raw(markup) => self.visit_raw(markup),
        }
    }

    fn visit_children(&mut self, children: &[Node]) -> Result<(), Self::Error> {
        for child in children {
            self.visit_node(child)?;
        }

        Ok(())
    }
}
