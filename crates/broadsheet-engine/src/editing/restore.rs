use serde::Serialize;

use super::SelectionRange;

/// Identifies one scheduled restore so a stale cancel cannot drop a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RestoreTicket(u64);

/// A focus/selection restore waiting for the render that shows the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingRestore {
    pub paragraph: usize,
    pub range: SelectionRange,
    pub ticket: RestoreTicket,
}

/// Single-shot "restore selection after next render commit".
///
/// Writing new text into a field invalidates its selection, so the range
/// computed by a toggle can only be applied once the host has redrawn. At most
/// one restore is pending; scheduling another supersedes it.
#[derive(Debug, Default)]
pub struct SelectionRestore {
    pending: Option<PendingRestore>,
    issued: u64,
}

impl SelectionRestore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a restore, cancelling any restore still pending.
    pub fn schedule(&mut self, paragraph: usize, range: SelectionRange) -> RestoreTicket {
        self.issued += 1;
        let ticket = RestoreTicket(self.issued);
        if let Some(old) = self.pending.replace(PendingRestore {
            paragraph,
            range,
            ticket,
        }) {
            log::debug!(
                "restore for paragraph {} superseded by paragraph {paragraph}",
                old.paragraph
            );
        }
        ticket
    }

    /// Cancels the restore identified by `ticket` if it is still pending.
    pub fn cancel(&mut self, ticket: RestoreTicket) -> bool {
        if self.pending.is_some_and(|p| p.ticket == ticket) {
            self.pending = None;
            return true;
        }
        false
    }

    /// Cancels whatever is pending.
    pub fn cancel_all(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<PendingRestore> {
        self.pending
    }

    /// Called by the host after it has redrawn `paragraph`.
    ///
    /// Fires at most once: returns the range to apply and clears the pending
    /// restore, or `None` if nothing is pending for that paragraph.
    pub fn on_render_committed(&mut self, paragraph: usize) -> Option<SelectionRange> {
        match self.pending {
            Some(p) if p.paragraph == paragraph => {
                self.pending = None;
                Some(p.range)
            }
            _ => None,
        }
    }

    /// Takes the pending restore regardless of paragraph.
    pub fn take(&mut self) -> Option<PendingRestore> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_commit() {
        let mut restore = SelectionRestore::new();
        restore.schedule(2, SelectionRange { start: 0, end: 9 });

        assert_eq!(restore.on_render_committed(1), None);
        assert_eq!(
            restore.on_render_committed(2),
            Some(SelectionRange { start: 0, end: 9 })
        );
        assert_eq!(restore.on_render_committed(2), None);
    }

    #[test]
    fn newer_schedule_supersedes() {
        let mut restore = SelectionRestore::new();
        let first = restore.schedule(0, SelectionRange::caret(1));
        let second = restore.schedule(0, SelectionRange::caret(5));
        assert_ne!(first, second);

        // Cancelling the superseded ticket leaves the newer restore alone.
        assert!(!restore.cancel(first));
        assert_eq!(
            restore.on_render_committed(0),
            Some(SelectionRange::caret(5))
        );
    }

    #[test]
    fn cancel_current_ticket() {
        let mut restore = SelectionRestore::new();
        let ticket = restore.schedule(0, SelectionRange::caret(1));
        assert!(restore.cancel(ticket));
        assert_eq!(restore.pending(), None);
        assert_eq!(restore.on_render_committed(0), None);
    }

    #[test]
    fn take_ignores_paragraph() {
        let mut restore = SelectionRestore::new();
        restore.schedule(4, SelectionRange::caret(2));
        let pending = restore.take().unwrap();
        assert_eq!(pending.paragraph, 4);
        assert_eq!(restore.take(), None);
    }
}
