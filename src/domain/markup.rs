//! Markdown to HTML conversion

use pulldown_cmark::{html, Options, Parser};

/// Convert markdown source to display HTML.
///
/// Pure and stateless: the same input always produces the same output.
/// Any input string is valid; text that is not well-formed markup passes
/// through as literal text per pulldown-cmark's own rules.
pub fn render(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
