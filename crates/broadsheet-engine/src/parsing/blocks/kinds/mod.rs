pub mod block_quote;
pub mod list;

pub use block_quote::BlockQuote;
pub use list::ListKind;
