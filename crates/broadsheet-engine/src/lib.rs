pub mod editing;
pub mod html;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use editing::*;
pub use html::{render_document_html, render_html};
pub use parsing::{
    blocks::{Block, ListKind},
    inline::{Emphasis, InlineSpan},
    render_blocks, render_inline,
};
