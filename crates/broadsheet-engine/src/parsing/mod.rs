//! # Markup Rendering
//!
//! Two stateless renderers for the article dialect:
//!
//! - **`blocks`**: splits a paragraph blob into lines, classifies each line and
//!   groups them into [`Block`]s (paragraphs, blockquotes, lists)
//! - **`inline`**: rewrites `**bold**` and `_italic_` pairs inside one line into
//!   styled [`InlineSpan`]s
//!
//! Both are pure functions of their input and are safe to call on every render.

pub mod blocks;
pub mod inline;

use blocks::{Block, BlockBuilder, LineClassifier};

pub use inline::{InlineSpan, render_inline};

/// Renders a paragraph blob into an ordered sequence of blocks.
///
/// Blank lines only separate blocks; they never produce one. An empty string
/// renders to no blocks.
pub fn render_blocks(content: &str) -> Vec<Block> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    if content.is_empty() {
        return builder.finish();
    }

    for line in content.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}
