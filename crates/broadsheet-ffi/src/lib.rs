//! UniFFI bindings for broadsheet editor hosts
//!
//! Exposes one editing session per handle. The host forwards selection
//! changes and toolbar commands, writes back the returned text and, after its
//! next redraw, asks for the selection to restore.

use broadsheet_engine::{
    Block, Document, EditorSession, FormatEdit, InlineSpan, Marker, SelectionRange, SessionError,
};
use std::sync::{Mutex, MutexGuard};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid paragraph: {reason}")]
    InvalidParagraph { reason: String },
    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: String },
}

impl From<SessionError> for FfiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Document(e) => FfiError::InvalidParagraph {
                reason: e.to_string(),
            },
            SessionError::Selection(e) => FfiError::InvalidSelection {
                reason: e.to_string(),
            },
        }
    }
}

// ============ Enums ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FormatMarker {
    Bold,
    Italic,
    BlockQuote,
    Bullet,
    Ordered,
}

impl From<FormatMarker> for Marker {
    fn from(m: FormatMarker) -> Self {
        match m {
            FormatMarker::Bold => Marker::Bold,
            FormatMarker::Italic => Marker::Italic,
            FormatMarker::BlockQuote => Marker::BlockQuote,
            FormatMarker::Bullet => Marker::Bullet,
            FormatMarker::Ordered => Marker::Ordered,
        }
    }
}

impl From<Marker> for FormatMarker {
    fn from(m: Marker) -> Self {
        match m {
            Marker::Bold => FormatMarker::Bold,
            Marker::Italic => FormatMarker::Italic,
            Marker::BlockQuote => FormatMarker::BlockQuote,
            Marker::Bullet => FormatMarker::Bullet,
            Marker::Ordered => FormatMarker::Ordered,
        }
    }
}

// ============ Editor Handle ============

/// A handle to one editing session.
#[derive(uniffi::Object)]
pub struct EditorHandle {
    inner: Mutex<EditorSession>,
}

impl EditorHandle {
    fn session(&self) -> MutexGuard<'_, EditorSession> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl EditorHandle {
    /// Create a session over the given paragraphs.
    #[uniffi::constructor]
    pub fn new(paragraphs: Vec<String>, pull_quote: Option<String>) -> Self {
        let mut doc = Document::new(paragraphs);
        doc.pull_quote = pull_quote;
        Self {
            inner: Mutex::new(EditorSession::new(doc)),
        }
    }

    /// Current paragraph texts in reading order.
    pub fn paragraphs(&self) -> Vec<String> {
        self.session().document().paragraphs().to_vec()
    }

    /// Forward a selection-change notification from a paragraph's text field.
    pub fn select(&self, paragraph: u32, start: u32, end: u32) -> Result<(), FfiError> {
        self.session()
            .select(paragraph as usize, start as usize, end as usize)?;
        Ok(())
    }

    /// Replace a paragraph's text after the user typed into it.
    pub fn set_paragraph(&self, paragraph: u32, text: String) -> Result<(), FfiError> {
        self.session().set_paragraph(paragraph as usize, text)?;
        Ok(())
    }

    pub fn insert_paragraph_after(&self, paragraph: u32) -> Result<u32, FfiError> {
        let index = self.session().insert_paragraph_after(paragraph as usize)?;
        u32::try_from(index).map_err(|_| FfiError::InvalidParagraph {
            reason: format!("paragraph index {index} does not fit in u32"),
        })
    }

    pub fn remove_paragraph(&self, paragraph: u32) -> Result<(), FfiError> {
        self.session().remove_paragraph(paragraph as usize)?;
        Ok(())
    }

    /// Apply a toolbar command at the paragraph's last reported selection.
    pub fn apply_format(
        &self,
        paragraph: u32,
        marker: FormatMarker,
    ) -> Result<FormatEditDto, FfiError> {
        let edit = self
            .session()
            .apply_format(paragraph as usize, marker.into())?;
        FormatEditDto::from_engine(edit)
    }

    pub fn active_formats(&self, paragraph: u32) -> Vec<FormatMarker> {
        self.session()
            .active_formats(paragraph as usize)
            .iter()
            .map(FormatMarker::from)
            .collect()
    }

    /// Report that `paragraph` has been redrawn; returns the selection to
    /// restore, at most once per format command.
    pub fn render_committed(&self, paragraph: u32) -> Result<Option<RangeDto>, FfiError> {
        self.session()
            .on_render_committed(paragraph as usize)
            .map(RangeDto::from_engine)
            .transpose()
    }

    /// Rendered blocks for one paragraph; empty if it does not exist.
    pub fn render(&self, paragraph: u32) -> Vec<BlockDto> {
        self.session()
            .render(paragraph as usize)
            .unwrap_or_default()
            .into_iter()
            .map(BlockDto::from_engine)
            .collect()
    }
}

// ============ DTOs ============

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct RangeDto {
    pub start: u32,
    pub end: u32,
}

impl RangeDto {
    fn from_engine(range: SelectionRange) -> Result<Self, FfiError> {
        let offset = |at: usize| {
            u32::try_from(at).map_err(|_| FfiError::InvalidSelection {
                reason: format!("offset {at} does not fit in u32"),
            })
        };
        Ok(Self {
            start: offset(range.start)?,
            end: offset(range.end)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FormatEditDto {
    pub text: String,
    pub range: RangeDto,
    pub applied: bool,
}

impl FormatEditDto {
    fn from_engine(edit: FormatEdit) -> Result<Self, FfiError> {
        Ok(Self {
            range: RangeDto::from_engine(edit.range)?,
            text: edit.text,
            applied: edit.applied,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct SpanDto {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl SpanDto {
    fn from_engine(span: InlineSpan) -> Self {
        Self {
            text: span.text,
            bold: span.emphasis.bold,
            italic: span.emphasis.italic,
        }
    }

    fn line(spans: Vec<InlineSpan>) -> Vec<Self> {
        spans.into_iter().map(Self::from_engine).collect()
    }
}

/// A rendered block. `kind` is "paragraph", "blockquote", "bullet_list" or
/// "ordered_list"; non-list blocks carry exactly one item.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct BlockDto {
    pub kind: String,
    pub items: Vec<Vec<SpanDto>>,
}

impl BlockDto {
    fn from_engine(block: Block) -> Self {
        match block {
            Block::Paragraph(spans) => Self {
                kind: "paragraph".to_string(),
                items: vec![SpanDto::line(spans)],
            },
            Block::BlockQuote(spans) => Self {
                kind: "blockquote".to_string(),
                items: vec![SpanDto::line(spans)],
            },
            Block::List { kind, items } => Self {
                kind: if kind.is_ordered() {
                    "ordered_list"
                } else {
                    "bullet_list"
                }
                .to_string(),
                items: items.into_iter().map(SpanDto::line).collect(),
            },
        }
    }
}
