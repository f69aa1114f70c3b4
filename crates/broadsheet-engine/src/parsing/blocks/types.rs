use serde::Serialize;

use crate::parsing::inline::InlineSpan;

use super::kinds::ListKind;

/// A rendering-time structural unit. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// A single plain line.
    Paragraph(Vec<InlineSpan>),
    /// A single `> ` line with the prefix stripped.
    BlockQuote(Vec<InlineSpan>),
    /// A run of adjacent list items of one kind, in source order.
    List {
        kind: ListKind,
        items: Vec<Vec<InlineSpan>>,
    },
}

impl Block {
    /// Text content without styling. List items are joined with newlines.
    pub fn plain_text(&self) -> String {
        fn join(spans: &[InlineSpan]) -> String {
            spans.iter().map(|s| s.text.as_str()).collect()
        }

        match self {
            Block::Paragraph(spans) | Block::BlockQuote(spans) => join(spans),
            Block::List { items, .. } => items
                .iter()
                .map(|item| join(item))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
