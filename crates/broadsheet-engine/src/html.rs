//! HTML fragments for rendered blocks.
//!
//! The dialect never produces raw HTML: all span text is escaped, so markup
//! typed into a paragraph shows up literally.

use std::fmt::Write;

use crate::editing::Document;
use crate::parsing::{InlineSpan, blocks::Block, render_blocks};

/// Renders blocks as HTML, one block per line.
pub fn render_html(blocks: &[Block]) -> String {
    blocks.iter().map(block_html).collect::<Vec<_>>().join("\n")
}

/// Renders a whole document: one `<section>` per non-empty paragraph, then the
/// pull quote if there is one.
pub fn render_document_html(doc: &Document) -> String {
    let mut out = String::new();
    for paragraph in doc.paragraphs() {
        let blocks = render_blocks(paragraph);
        if blocks.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "<section class=\"paragraph\">\n{}\n</section>",
            render_html(&blocks)
        );
    }
    if let Some(quote) = doc.pull_quote.as_deref().filter(|q| !q.trim().is_empty()) {
        let _ = writeln!(
            out,
            "<aside class=\"pull-quote\">{}</aside>",
            html_escape::encode_text(quote)
        );
    }
    out
}

fn block_html(block: &Block) -> String {
    match block {
        Block::Paragraph(spans) => format!("<p>{}</p>", inline_html(spans)),
        Block::BlockQuote(spans) => format!("<blockquote>{}</blockquote>", inline_html(spans)),
        Block::List { kind, items } => {
            let tag = if kind.is_ordered() { "ol" } else { "ul" };
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", inline_html(item)))
                .collect();
            format!("<{tag}>{items}</{tag}>")
        }
    }
}

fn inline_html(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        let text = html_escape::encode_text(&span.text);
        match (span.emphasis.bold, span.emphasis.italic) {
            (true, true) => {
                let _ = write!(out, "<strong><em>{text}</em></strong>");
            }
            (true, false) => {
                let _ = write!(out, "<strong>{text}</strong>");
            }
            (false, true) => {
                let _ = write!(out, "<em>{text}</em>");
            }
            (false, false) => out.push_str(&text),
        }
    }
    out
}
