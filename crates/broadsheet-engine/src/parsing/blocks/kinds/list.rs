use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// The two groupable list kinds, with their owned prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListKind {
    /// `• item`
    Bullet,
    /// `1. item`, any run of ASCII digits
    Ordered,
}

impl ListKind {
    /// Prefix that marks a bullet line.
    pub const BULLET_PREFIX: &'static str = "• ";
    /// Prefix inserted when a selection is turned into an ordered item.
    pub const ORDERED_INSERT: &'static str = "1. ";

    /// Prefix inserted by the format toggler for this kind.
    pub fn insert_prefix(self) -> &'static str {
        match self {
            ListKind::Bullet => Self::BULLET_PREFIX,
            ListKind::Ordered => Self::ORDERED_INSERT,
        }
    }

    pub fn is_ordered(self) -> bool {
        matches!(self, ListKind::Ordered)
    }

    /// Strips this kind's prefix from `line`, returning the item text.
    pub fn strip_prefix(self, line: &str) -> Option<&str> {
        match self {
            ListKind::Bullet => line.strip_prefix(Self::BULLET_PREFIX),
            ListKind::Ordered => ordered_prefix_len(line).map(|n| &line[n..]),
        }
    }

    /// Detects which list kind `line` opens, if any, and strips its prefix.
    pub fn detect(line: &str) -> Option<(ListKind, &str)> {
        [ListKind::Bullet, ListKind::Ordered]
            .into_iter()
            .find_map(|kind| kind.strip_prefix(line).map(|rest| (kind, rest)))
    }
}

/// Byte length of a leading `<digits>.<whitespace>` prefix.
pub fn ordered_prefix_len(s: &str) -> Option<usize> {
    static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = ORDERED_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid ordered list regex"));
    re.find(s).map(|m| m.end())
}
