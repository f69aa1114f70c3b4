//! # Inline Rendering
//!
//! Cursor-based rewriting of marker pairs inside a single line.
//!
//! ## Evaluation Order
//!
//! Bold (`**…**`) pairs are resolved first over the raw line. Italic (`_…_`)
//! pairs are then resolved over what remains once the bold markers have been
//! removed, so an italic pair may open inside bold text and close outside it.
//!
//! Pairing is non-recursive and non-greedy: an opening marker pairs with the
//! nearest following marker of the same kind. An opening marker with no
//! partner stays in the output as literal text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and its `Emphasis`
//! - **`kinds`**: marker-owning types (`Bold`, `Italic`)
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `render_inline()` entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::render_inline;
pub use types::{Emphasis, InlineSpan};
