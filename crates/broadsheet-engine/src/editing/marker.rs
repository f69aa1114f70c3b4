use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parsing::{
    blocks::{BlockQuote, ListKind},
    inline::kinds::{Bold, Italic},
};

/// A named format operation offered by the editor toolbar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Bold,
    Italic,
    BlockQuote,
    Bullet,
    Ordered,
}

/// What a marker inserts around a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap {
    pub open: &'static str,
    pub close: &'static str,
    /// Only applies when the selection starts at column 0 of a line.
    pub line_start_only: bool,
}

impl Marker {
    pub const ALL: [Marker; 5] = [
        Marker::Bold,
        Marker::Italic,
        Marker::BlockQuote,
        Marker::Bullet,
        Marker::Ordered,
    ];

    pub fn wrap(self) -> Wrap {
        match self {
            Marker::Bold => Wrap {
                open: Bold::MARKER,
                close: Bold::MARKER,
                line_start_only: false,
            },
            Marker::Italic => Wrap {
                open: Italic::MARKER,
                close: Italic::MARKER,
                line_start_only: false,
            },
            // Not line-start guarded, unlike the list markers.
            Marker::BlockQuote => Wrap {
                open: BlockQuote::PREFIX,
                close: "",
                line_start_only: false,
            },
            Marker::Bullet => Wrap {
                open: ListKind::Bullet.insert_prefix(),
                close: "",
                line_start_only: true,
            },
            Marker::Ordered => Wrap {
                open: ListKind::Ordered.insert_prefix(),
                close: "",
                line_start_only: true,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Marker::Bold => "bold",
            Marker::Italic => "italic",
            Marker::BlockQuote => "blockquote",
            Marker::Bullet => "bullet",
            Marker::Ordered => "ordered",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown marker '{0}' (expected bold, italic, blockquote, bullet or ordered)")]
pub struct UnknownMarker(pub String);

impl FromStr for Marker {
    type Err = UnknownMarker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bold" => Ok(Marker::Bold),
            "italic" => Ok(Marker::Italic),
            "blockquote" | "quote" => Ok(Marker::BlockQuote),
            "bullet" => Ok(Marker::Bullet),
            "ordered" | "number" => Ok(Marker::Ordered),
            _ => Err(UnknownMarker(s.to_string())),
        }
    }
}
