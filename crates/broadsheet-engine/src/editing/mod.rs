/*!
 * # Editing
 *
 * Selection-stable formatting for a document made of independent paragraphs.
 *
 * ## Flow
 *
 * 1. The host reports every selection change of a paragraph's text field;
 *    the [`SelectionTracker`] keeps the latest range per paragraph index.
 * 2. A toolbar command arrives later, decoupled from the field's live cursor.
 *    [`apply_format`] reads the tracked range, inserts the marker and returns
 *    the new text together with the range to restore.
 * 3. Writing new text invalidates the field's selection, so the range is
 *    handed to [`SelectionRestore`] and applied once the host reports that
 *    the new text has been rendered. The host's field then reports the
 *    restored range like any other selection change, and that is when it is
 *    tracked again.
 *
 * [`EditorSession`] wires the three together over a [`Document`].
 *
 * ## Module Structure
 *
 * - **`selection`**: `SelectionRange` (UTF-16 offsets) and `SelectionTracker`
 * - **`marker`**: `Marker` and the text each one inserts
 * - **`format`**: `apply_format`, insert-only toggling
 * - **`active`**: `active_formats`, the read-only detection path
 * - **`restore`**: single-shot deferred selection restore
 * - **`document`**: paragraph arena with add/remove
 * - **`session`**: `EditorSession`
 */

pub mod active;
pub mod document;
pub mod format;
pub mod marker;
pub mod restore;
pub mod selection;
pub mod session;

pub use active::{ActiveFormats, active_formats};
pub use document::{Document, DocumentError};
pub use format::{FormatEdit, FormatError, apply_format, toggle_tracked};
pub use marker::{Marker, UnknownMarker, Wrap};
pub use restore::{PendingRestore, RestoreTicket, SelectionRestore};
pub use selection::{SelectionError, SelectionRange, SelectionTracker, utf16_len};
pub use session::{EditorSession, SessionError};
