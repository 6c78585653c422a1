use pulldown_cmark::{self as md, html};

/// Renders Markdown text to an HTML string.
pub fn render_markdown(text: &str) -> String {
    let mut options = md::Options::empty();
    options.insert(md::Options::ENABLE_TABLES);
    options.insert(md::Options::ENABLE_FOOTNOTES);
    options.insert(md::Options::ENABLE_STRIKETHROUGH);
    options.insert(md::Options::ENABLE_TASKLISTS);
    options.insert(md::Options::ENABLE_HEADING_ATTRIBUTES);

    let parser = md::Parser::new_ext(text, options);

    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);

    rendered
}
