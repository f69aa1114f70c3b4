/// Blockquote line type with owned prefix constant.
///
/// All blockquote syntax knowledge lives here, not in the classifier or the
/// format toggler.
pub struct BlockQuote;

impl BlockQuote {
    /// The start-anchored blockquote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Strips the blockquote prefix, returning the quoted text.
    ///
    /// Only a single level is recognised: `"> > x"` yields `"> x"`.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn strip_requires_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), None);
    }

    #[test]
    fn strip_keeps_nested_marker_literal() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), Some("> hello"));
    }
}
