//! # Block Rendering
//!
//! Two-phase block rendering.
//!
//! 1. **Line Classification** (`classify`): each line is classified on its own
//!    into a [`LineClass`] (blank, blockquote, list item or plain) with its
//!    prefix already stripped
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] keeps at most one
//!    open list and emits [`Block`]s as lines arrive
//!
//! ## Key Invariants
//!
//! - Adjacent list items of the same kind always share one `List` block
//! - A blank line or a list-kind change always closes the open list
//! - Blocks never nest

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use kinds::{BlockQuote, ListKind};
pub use types::Block;
