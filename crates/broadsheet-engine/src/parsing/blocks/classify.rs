use super::kinds::{BlockQuote, ListKind};

/// The kind of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only. Closes any open list.
    Blank,
    /// `> ` prefixed.
    BlockQuote,
    /// `• ` or `<digits>. ` prefixed.
    ListItem(ListKind),
    /// Anything else.
    Plain,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block rendering: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub kind: LineKind,
    /// Line text with the kind's prefix stripped. Blank and plain lines keep
    /// their text verbatim.
    pub content: &'a str,
}

/// Classifies individual lines for the block rendering phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence is blank, then blockquote, then bullet, then ordered.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.trim().is_empty() {
            return LineClass {
                kind: LineKind::Blank,
                content: line,
            };
        }

        if let Some(rest) = BlockQuote::strip_prefix(line) {
            return LineClass {
                kind: LineKind::BlockQuote,
                content: rest,
            };
        }

        if let Some((kind, rest)) = ListKind::detect(line) {
            return LineClass {
                kind: LineKind::ListItem(kind),
                content: rest,
            };
        }

        LineClass {
            kind: LineKind::Plain,
            content: line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineKind::Blank, "")]
    #[case("   \t", LineKind::Blank, "   \t")]
    #[case("> quoted", LineKind::BlockQuote, "quoted")]
    #[case("• item", LineKind::ListItem(ListKind::Bullet), "item")]
    #[case("3. item", LineKind::ListItem(ListKind::Ordered), "item")]
    #[case("just text", LineKind::Plain, "just text")]
    #[case(">no space", LineKind::Plain, ">no space")]
    #[case("•no space", LineKind::Plain, "•no space")]
    fn classify_lines(#[case] line: &str, #[case] kind: LineKind, #[case] content: &str) {
        let lc = LineClassifier.classify(line);
        assert_eq!(lc.kind, kind);
        assert_eq!(lc.content, content);
    }

    #[test]
    fn blockquote_wins_over_ordered() {
        let lc = LineClassifier.classify("> 1. quoted item");
        assert_eq!(lc.kind, LineKind::BlockQuote);
        assert_eq!(lc.content, "1. quoted item");
    }

    #[test]
    fn bare_prefix_is_not_blank() {
        // "> " trims to ">" so it is a blockquote with empty content
        let lc = LineClassifier.classify("> ");
        assert_eq!(lc.kind, LineKind::BlockQuote);
        assert_eq!(lc.content, "");
    }
}
