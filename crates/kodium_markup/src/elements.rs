use crate::element::Element;

macro_rules! elements {
    ($($name:ident),*) => {
        $(
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    }
}

elements! {
    html, head, body, header, footer, nav, article,
    div, p, span, a,
    ul, li,
    h1, h2,
    meta, link, title
}

/// Tag names of elements that have no closing tag in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

pub fn is_void(element: &Element) -> bool {
    VOID_ELEMENTS.contains(&element.tag_name.as_str())
}
