use crate::parsing::{blocks::Block, render_blocks};

use super::{
    ActiveFormats, Document, DocumentError, FormatEdit, Marker, SelectionError, SelectionRange,
    SelectionRestore, SelectionTracker, active_formats, apply_format, utf16_len,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// One editing session over a document.
///
/// Owns the paragraphs, the per-paragraph selection tracker and the pending
/// selection restore. Hosts forward three kinds of input (text changes,
/// selection notifications, format commands) and read rendered blocks back.
#[derive(Debug, Default)]
pub struct EditorSession {
    document: Document,
    selections: SelectionTracker,
    restore: SelectionRestore,
}

impl EditorSession {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selections: SelectionTracker::new(),
            restore: SelectionRestore::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn selections(&self) -> &SelectionTracker {
        &self.selections
    }

    pub fn restore(&self) -> &SelectionRestore {
        &self.restore
    }

    /// Records a selection-change notification from the host's text field.
    pub fn select(&mut self, index: usize, start: usize, end: usize) -> Result<(), SessionError> {
        let text = self.paragraph(index)?;
        let range = SelectionRange::within(text, start, end)?;
        self.selections.record(index, range);
        Ok(())
    }

    /// Replaces a paragraph's text from the host side.
    ///
    /// A length change makes the tracked selection stale, so it is dropped
    /// together with any restore still pending for the paragraph.
    pub fn set_paragraph(&mut self, index: usize, text: impl Into<String>) -> Result<(), SessionError> {
        let text = text.into();
        let new_len = utf16_len(&text);
        let old = self.document.set(index, text)?;
        if utf16_len(&old) == new_len {
            return Ok(());
        }
        if self.selections.forget(index).is_some() {
            log::debug!("paragraph {index} changed length; dropped its selection");
        }
        if let Some(pending) = self.restore.pending()
            && pending.paragraph == index
        {
            self.restore.cancel(pending.ticket);
            log::debug!("paragraph {index} changed length; cancelled its selection restore");
        }
        Ok(())
    }

    /// Applies `marker` to paragraph `index` at its tracked selection.
    ///
    /// Writes the new text back and schedules the new range to be restored
    /// after the next render. The tracked range is only read here. New text
    /// makes it stale like any other length change, and the paragraph is
    /// tracked again once [`Self::on_render_committed`] hands the range back.
    /// A missing or stale selection is a no-op that returns the text unchanged.
    pub fn apply_format(&mut self, index: usize, marker: Marker) -> Result<FormatEdit, SessionError> {
        let text = self.paragraph(index)?;

        let Some(range) = self.selections.get(index) else {
            log::debug!("{marker} on paragraph {index} ignored: no tracked selection");
            return Ok(FormatEdit::unchanged(
                text,
                SelectionRange::caret(utf16_len(text)),
            ));
        };

        let edit = match apply_format(text, range, marker) {
            Ok(edit) => edit,
            Err(e) => {
                log::warn!("{marker} on paragraph {index} ignored: {e}");
                let unchanged =
                    FormatEdit::unchanged(text, SelectionRange::caret(utf16_len(text)));
                self.selections.forget(index);
                return Ok(unchanged);
            }
        };

        if edit.applied {
            self.document.set(index, edit.text.clone())?;
            self.selections.forget(index);
        }
        self.restore.schedule(index, edit.range);
        Ok(edit)
    }

    pub fn active_formats(&self, index: usize) -> ActiveFormats {
        match (self.document.get(index), self.selections.get(index)) {
            (Some(text), Some(range)) if !text.is_empty() => active_formats(text, range),
            _ => ActiveFormats::default(),
        }
    }

    /// Called by the host once paragraph `index` has been redrawn.
    ///
    /// Returns the range the host should select. Applying it makes the field
    /// report that selection, so it is recorded as the paragraph's tracked
    /// selection here. A range that no longer fits the text is dropped.
    pub fn on_render_committed(&mut self, index: usize) -> Option<SelectionRange> {
        let range = self.restore.on_render_committed(index)?;
        let text = self.document.get(index)?;
        if !range.fits(text) {
            log::warn!("restore for paragraph {index} no longer fits its text; dropped");
            return None;
        }
        self.selections.record(index, range);
        Some(range)
    }

    pub fn render(&self, index: usize) -> Option<Vec<Block>> {
        self.document.get(index).map(render_blocks)
    }

    pub fn render_all(&self) -> Vec<Vec<Block>> {
        self.document.render()
    }

    /// Inserts an empty paragraph after `index`.
    ///
    /// Indices after the insertion point shift, so every tracked selection and
    /// any pending restore are discarded.
    pub fn insert_paragraph_after(&mut self, index: usize) -> Result<usize, SessionError> {
        let new_index = self.document.insert_after(index)?;
        self.reset_positions();
        Ok(new_index)
    }

    /// Removes paragraph `index`; the last paragraph cannot be removed.
    pub fn remove_paragraph(&mut self, index: usize) -> Result<String, SessionError> {
        let removed = self.document.remove(index)?;
        self.reset_positions();
        Ok(removed)
    }

    pub fn set_pull_quote(&mut self, quote: Option<String>) {
        self.document.pull_quote = quote;
    }

    fn paragraph(&self, index: usize) -> Result<&str, DocumentError> {
        self.document
            .get(index)
            .ok_or(DocumentError::NoSuchParagraph {
                index,
                len: self.document.len(),
            })
    }

    fn reset_positions(&mut self) {
        self.selections.clear();
        self.restore.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(paragraphs: &[&str]) -> EditorSession {
        EditorSession::new(Document::new(
            paragraphs.iter().map(|p| p.to_string()).collect(),
        ))
    }

    #[test]
    fn select_then_bold() {
        let mut s = session(&["hello world"]);
        s.select(0, 0, 5).unwrap();

        let edit = s.apply_format(0, Marker::Bold).unwrap();

        assert_eq!(edit.text, "**hello** world");
        assert_eq!(s.document().get(0), Some("**hello** world"));
        assert_eq!(s.selections().get(0), None);
        assert_eq!(
            s.on_render_committed(0),
            Some(SelectionRange { start: 0, end: 9 })
        );
        assert_eq!(s.selections().get(0), Some(SelectionRange { start: 0, end: 9 }));
    }

    #[test]
    fn host_edit_that_changes_length_cancels_pending_restore() {
        let mut s = session(&["hello world"]);
        s.select(0, 0, 11).unwrap();
        s.apply_format(0, Marker::Bold).unwrap();

        s.set_paragraph(0, "hi").unwrap();

        assert_eq!(s.restore().pending(), None);
        assert_eq!(s.on_render_committed(0), None);
        assert_eq!(s.selections().get(0), None);
    }

    #[test]
    fn host_edit_elsewhere_keeps_pending_restore() {
        let mut s = session(&["one", "two"]);
        s.select(0, 0, 3).unwrap();
        s.apply_format(0, Marker::Italic).unwrap();

        s.set_paragraph(1, "three").unwrap();

        assert_eq!(
            s.on_render_committed(0),
            Some(SelectionRange { start: 0, end: 5 })
        );
    }

    #[test]
    fn restore_that_no_longer_fits_is_dropped() {
        let mut s = session(&["abc"]);
        s.select(0, 1, 2).unwrap();
        s.apply_format(0, Marker::Bold).unwrap();
        // Same length as "a**b**c", but offset 1 now splits the first emoji.
        s.set_paragraph(0, "😀😀😀x").unwrap();
        assert_eq!(s.on_render_committed(0), None);
        assert_eq!(s.restore().pending(), None);
    }

    #[test]
    fn no_selection_is_a_no_op() {
        let mut s = session(&["hello"]);
        let edit = s.apply_format(0, Marker::Italic).unwrap();
        assert!(!edit.applied);
        assert_eq!(s.document().get(0), Some("hello"));
        assert_eq!(s.restore().pending(), None);
    }

    #[test]
    fn missing_paragraph_is_an_error() {
        let mut s = session(&["hello"]);
        assert_eq!(
            s.apply_format(2, Marker::Bold),
            Err(SessionError::Document(DocumentError::NoSuchParagraph {
                index: 2,
                len: 1
            }))
        );
    }

    #[test]
    fn select_validates_range() {
        let mut s = session(&["abc"]);
        assert!(matches!(
            s.select(0, 0, 10),
            Err(SessionError::Selection(SelectionError::OutOfBounds { .. }))
        ));
        assert!(matches!(
            s.select(0, 2, 1),
            Err(SessionError::Selection(SelectionError::Inverted { .. }))
        ));
    }

    #[test]
    fn host_edit_that_changes_length_drops_selection() {
        let mut s = session(&["abc"]);
        s.select(0, 0, 3).unwrap();
        s.set_paragraph(0, "abcd").unwrap();
        assert_eq!(s.selections().get(0), None);

        s.select(0, 0, 2).unwrap();
        s.set_paragraph(0, "wxyz").unwrap();
        assert_eq!(s.selections().get(0), Some(SelectionRange { start: 0, end: 2 }));
    }

    #[test]
    fn guarded_toggle_still_restores_selection() {
        let mut s = session(&["mid text"]);
        s.select(0, 4, 8).unwrap();
        let edit = s.apply_format(0, Marker::Bullet).unwrap();
        assert!(!edit.applied);
        assert_eq!(s.document().get(0), Some("mid text"));
        assert_eq!(
            s.on_render_committed(0),
            Some(SelectionRange { start: 4, end: 8 })
        );
    }

    #[test]
    fn toggle_before_render_commit_is_a_no_op() {
        let mut s = session(&["word"]);
        s.select(0, 0, 4).unwrap();
        s.apply_format(0, Marker::Bold).unwrap();
        let edit = s.apply_format(0, Marker::Italic).unwrap();
        assert!(!edit.applied);
        assert_eq!(s.document().get(0), Some("**word**"));
        // The first toggle's restore is still the one pending.
        assert_eq!(
            s.on_render_committed(0),
            Some(SelectionRange { start: 0, end: 8 })
        );
    }

    #[test]
    fn repeated_toggles_chain_ranges() {
        let mut s = session(&["word"]);
        s.select(0, 0, 4).unwrap();
        s.apply_format(0, Marker::Bold).unwrap();
        s.on_render_committed(0);
        let edit = s.apply_format(0, Marker::Italic).unwrap();
        assert_eq!(edit.text, "_**word**_");
        assert_eq!(edit.range, SelectionRange { start: 0, end: 10 });
        s.on_render_committed(0);
        assert!(s.active_formats(0).contains(Marker::Italic));
    }

    #[test]
    fn structural_edits_clear_selections() {
        let mut s = session(&["a", "b"]);
        s.select(0, 0, 1).unwrap();
        s.select(1, 0, 1).unwrap();
        s.apply_format(1, Marker::Bold).unwrap();

        s.insert_paragraph_after(0).unwrap();
        assert!(s.selections().is_empty());
        assert_eq!(s.restore().pending(), None);
        assert_eq!(s.document().paragraphs(), &["a", "", "**b**"]);

        s.remove_paragraph(1).unwrap();
        assert_eq!(s.document().len(), 2);
    }

    #[test]
    fn active_formats_for_empty_paragraph() {
        let mut s = session(&[""]);
        s.select(0, 0, 0).unwrap();
        assert!(s.active_formats(0).is_empty());
    }

    #[test]
    fn render_paragraph() {
        let s = session(&["> quoted"]);
        assert!(matches!(
            s.render(0).as_deref(),
            Some([Block::BlockQuote(_)])
        ));
        assert_eq!(s.render(1), None);
    }
}
