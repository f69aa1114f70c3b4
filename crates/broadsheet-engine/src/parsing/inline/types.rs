use serde::Serialize;

/// Styling applied to a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Emphasis {
    pub bold: bool,
    pub italic: bool,
}

impl Emphasis {
    pub const PLAIN: Emphasis = Emphasis {
        bold: false,
        italic: false,
    };
    pub const BOLD: Emphasis = Emphasis {
        bold: true,
        italic: false,
    };
    pub const ITALIC: Emphasis = Emphasis {
        bold: false,
        italic: true,
    };
    pub const BOLD_ITALIC: Emphasis = Emphasis {
        bold: true,
        italic: true,
    };

    pub fn is_plain(self) -> bool {
        self == Self::PLAIN
    }
}

/// A run of text sharing one [`Emphasis`], with markers already removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    pub text: String,
    pub emphasis: Emphasis,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::PLAIN)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::BOLD)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::ITALIC)
    }
}
