use crate::element::Node;

/// A reusable unit of markup.
///
/// Components hold the data they need to render and have no other behavior;
/// any sorting or filtering of that data is the caller's responsibility.
pub trait Component {
    fn render(&self) -> Node;
}
