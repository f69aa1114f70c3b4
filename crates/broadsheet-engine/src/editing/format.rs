use serde::Serialize;

use super::{Marker, SelectionRange, utf16_len};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error(
        "selection {}..{} does not fit a paragraph of {len} UTF-16 units",
        .range.start,
        .range.end
    )]
    RangeOutOfBounds { range: SelectionRange, len: usize },
}

/// Result of a format toggle: the text to write back and the range to restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatEdit {
    pub text: String,
    pub range: SelectionRange,
    /// `false` when the toggle was a no-op and `text` equals the input.
    pub applied: bool,
}

impl FormatEdit {
    pub fn unchanged(text: &str, range: SelectionRange) -> Self {
        Self {
            text: text.to_string(),
            range,
            applied: false,
        }
    }
}

/// Inserts `marker` around the `range` of `text`.
///
/// This only ever inserts; it never strips an existing marker. The returned
/// range keeps its start and grows its end by the UTF-16 length of the
/// inserted markers, so it covers the selected text plus the markers.
///
/// `Bullet` and `Ordered` only apply when `range.start` is at the start of a
/// line; otherwise the input comes back unchanged with `applied == false`.
pub fn apply_format(
    text: &str,
    range: SelectionRange,
    marker: Marker,
) -> Result<FormatEdit, FormatError> {
    let bytes = range
        .byte_range(text)
        .ok_or_else(|| FormatError::RangeOutOfBounds {
            range,
            len: utf16_len(text),
        })?;

    let wrap = marker.wrap();
    if wrap.line_start_only && !is_line_start(text, bytes.start) {
        log::debug!(
            "{marker} ignored: selection start {} is not at a line start",
            range.start
        );
        return Ok(FormatEdit::unchanged(text, range));
    }

    let mut out = String::with_capacity(text.len() + wrap.open.len() + wrap.close.len());
    out.push_str(&text[..bytes.start]);
    out.push_str(wrap.open);
    out.push_str(&text[bytes.clone()]);
    out.push_str(wrap.close);
    out.push_str(&text[bytes.end..]);

    let grown = utf16_len(wrap.open) + utf16_len(wrap.close);
    Ok(FormatEdit {
        text: out,
        range: SelectionRange {
            start: range.start,
            end: range.end + grown,
        },
        applied: true,
    })
}

/// [`apply_format`] for a selection that may never have been reported.
///
/// A missing selection is a recoverable caller error: the text comes back
/// unchanged with a caret at its end.
pub fn toggle_tracked(
    text: &str,
    range: Option<SelectionRange>,
    marker: Marker,
) -> Result<FormatEdit, FormatError> {
    match range {
        Some(range) => apply_format(text, range, marker),
        None => {
            log::debug!("{marker} ignored: no tracked selection");
            Ok(FormatEdit::unchanged(
                text,
                SelectionRange::caret(utf16_len(text)),
            ))
        }
    }
}

fn is_line_start(text: &str, byte: usize) -> bool {
    byte == 0 || text[..byte].ends_with('\n')
}
