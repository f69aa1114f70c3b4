//! # Inline Kinds
//!
//! Inline marker types that own their delimiters.
//!
//! - **`Bold`**: `MARKER = "**"`
//! - **`Italic`**: `MARKER = "_"`
//!
//! The parser, the format toggler and active-format detection all read these
//! constants; none of them hardcode `**` or `_`.

pub mod bold;
pub mod italic;

pub use bold::Bold;
pub use italic::Italic;
