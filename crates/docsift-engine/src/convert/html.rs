//! Markup (HTML) to block-tree conversion.
//!
//! Upstream Word-to-HTML converters emit a flat sequence of headings,
//! paragraphs, lists and tables; this maps that vocabulary onto
//! [`BlockKind`]s and drops everything invisible.

use scraper::{ElementRef, Html, Node};

use super::{ConvertError, DocumentConverter};
use crate::markup::{BlockKind, MarkupTree, TreeBuilder};

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlConverter;

impl DocumentConverter for HtmlConverter {
    fn convert(&self, bytes: Vec<u8>) -> Result<MarkupTree, ConvertError> {
        let markup = String::from_utf8(bytes)?;
        if markup.trim().is_empty() {
            return Err(ConvertError::Empty);
        }
        Ok(convert_markup(&markup))
    }
}

/// Parses markup into a block tree. Never fails: the HTML parser recovers from anything.
pub fn convert_markup(markup: &str) -> MarkupTree {
    let html = Html::parse_document(markup);
    let mut builder = TreeBuilder::new();
    visit(html.root_element(), &mut builder);
    builder.finish()
}

enum Mapping {
    Block(BlockKind),
    /// Walk the children without a block of its own.
    Transparent,
    LineBreak,
    Skip,
}

fn mapping(tag: &str) -> Mapping {
    match tag {
        "h1" => Mapping::Block(BlockKind::Heading { level: 1 }),
        "h2" => Mapping::Block(BlockKind::Heading { level: 2 }),
        "h3" => Mapping::Block(BlockKind::Heading { level: 3 }),
        "h4" => Mapping::Block(BlockKind::Heading { level: 4 }),
        "h5" => Mapping::Block(BlockKind::Heading { level: 5 }),
        "h6" => Mapping::Block(BlockKind::Heading { level: 6 }),
        "p" | "li" | "pre" | "blockquote" | "dt" | "dd" | "caption" => {
            Mapping::Block(BlockKind::Paragraph)
        }
        "div" | "section" | "article" | "main" | "header" | "footer" | "aside" | "nav"
        | "ul" | "ol" | "dl" => Mapping::Block(BlockKind::Div),
        "span" | "strong" | "b" | "em" | "i" | "u" | "a" | "sup" | "sub" | "mark" | "small"
        | "code" => Mapping::Block(BlockKind::Span),
        "table" => Mapping::Block(BlockKind::Table),
        "tr" => Mapping::Block(BlockKind::TableRow),
        "td" | "th" => Mapping::Block(BlockKind::TableCell),
        "br" => Mapping::LineBreak,
        "head" | "script" | "style" | "template" | "noscript" | "img" | "svg" => Mapping::Skip,
        _ => Mapping::Transparent,
    }
}

fn visit(element: ElementRef<'_>, builder: &mut TreeBuilder) {
    match mapping(element.value().name()) {
        Mapping::Block(kind) => {
            builder.open(kind);
            walk_children(element, builder);
            builder.close();
        }
        Mapping::Transparent => walk_children(element, builder),
        Mapping::LineBreak => builder.push_text("\n"),
        Mapping::Skip => {}
    }
}

fn walk_children(element: ElementRef<'_>, builder: &mut TreeBuilder) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text: &str = text;
                builder.push_text(&collapse_whitespace(text));
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    visit(child, builder);
                }
            }
            _ => {}
        }
    }
}

/// Source formatting whitespace becomes a single space, as a browser would render it.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
