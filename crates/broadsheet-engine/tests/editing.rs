use broadsheet_engine::{
    Block, Document, EditorSession, FormatEdit, Marker, SelectionRange, active_formats,
    apply_format, render_blocks,
};
use pretty_assertions::assert_eq;

#[test]
fn bold_toggle_end_to_end() {
    let edit = apply_format("hello world", SelectionRange::new(0, 5).unwrap(), Marker::Bold)
        .unwrap();
    assert_eq!(edit.text, "**hello** world");
    assert_eq!(edit.range, SelectionRange { start: 0, end: 9 });
}

#[test]
fn bullet_guard_returns_input_unchanged() {
    let range = SelectionRange::new(4, 8).unwrap();
    let edit = apply_format("mid text", range, Marker::Bullet).unwrap();
    assert_eq!(edit, FormatEdit::unchanged("mid text", range));
}

#[test]
fn active_format_detection() {
    let active = active_formats("**bold**", SelectionRange::new(0, 8).unwrap());
    assert!(active.contains(Marker::Bold));
}

#[test]
fn formatted_text_renders_with_styles() {
    let mut session = EditorSession::new(Document::new(vec![
        "Headline fact\nmilk\neggs".to_string(),
    ]));

    session.select(0, 0, 8).unwrap();
    session.apply_format(0, Marker::Bold).unwrap();

    // "**Headline** fact\nmilk\neggs": "milk" starts at 18
    session.select(0, 18, 22).unwrap();
    session.apply_format(0, Marker::Bullet).unwrap();
    session.select(0, 25, 29).unwrap();
    session.apply_format(0, Marker::Bullet).unwrap();

    assert_eq!(
        session.document().get(0),
        Some("**Headline** fact\n• milk\n• eggs")
    );

    let blocks = session.render(0).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].plain_text(), "Headline fact");
    assert!(matches!(&blocks[1], Block::List { items, .. } if items.len() == 2));
}

#[test]
fn selection_is_restored_once_after_render() {
    let mut session = EditorSession::new(Document::new(vec!["quote me".to_string()]));
    session.select(0, 0, 8).unwrap();
    let edit = session.apply_format(0, Marker::BlockQuote).unwrap();

    // Host writes the text, re-renders, then asks for the range to restore.
    let _ = render_blocks(&edit.text);
    assert_eq!(
        session.on_render_committed(0),
        Some(SelectionRange { start: 0, end: 10 })
    );
    assert_eq!(session.on_render_committed(0), None);
}

#[test]
fn newer_toggle_supersedes_pending_restore() {
    let mut session =
        EditorSession::new(Document::new(vec!["one".to_string(), "two".to_string()]));
    session.select(0, 0, 3).unwrap();
    session.select(1, 0, 3).unwrap();

    session.apply_format(0, Marker::Italic).unwrap();
    session.apply_format(1, Marker::Bold).unwrap();

    assert_eq!(session.on_render_committed(0), None);
    assert_eq!(
        session.on_render_committed(1),
        Some(SelectionRange { start: 0, end: 7 })
    );
}

#[test]
fn selections_are_per_paragraph() {
    let mut session =
        EditorSession::new(Document::new(vec!["alpha".to_string(), "beta".to_string()]));
    session.select(0, 0, 5).unwrap();

    let edit = session.apply_format(1, Marker::Bold).unwrap();
    assert!(!edit.applied);
    assert_eq!(session.document().get(1), Some("beta"));
}

#[test]
fn emoji_offsets_follow_host_utf16_units() {
    let mut session = EditorSession::new(Document::new(vec!["😀 hi there".to_string()]));

    // "hi" spans code units 3..5; the emoji before it takes two.
    session.select(0, 3, 5).unwrap();
    let edit = session.apply_format(0, Marker::Bold).unwrap();

    assert_eq!(edit.text, "😀 **hi** there");
    assert_eq!(edit.range, SelectionRange { start: 3, end: 9 });
    assert_eq!(session.on_render_committed(0), Some(edit.range));
    assert!(session.active_formats(0).contains(Marker::Bold));
}

#[test]
fn restore_is_cancelled_when_host_rewrites_paragraph() {
    let mut session = EditorSession::new(Document::new(vec!["hello world".to_string()]));
    session.select(0, 0, 11).unwrap();
    session.apply_format(0, Marker::Bold).unwrap();

    session.set_paragraph(0, "hi").unwrap();

    assert_eq!(session.on_render_committed(0), None);
}
