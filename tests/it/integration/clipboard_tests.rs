//! Clipboard integration tests: copy, paste, cascade.

use crate::helpers::{
    assert_item_count, ctrl_key, editor_with_images, first_item_id, item_position, plain_key,
    pointer, TestEditorBuilder,
};
use worldcanvas::input::Key;

#[test]
fn test_paste_offsets_and_selects_clone() {
    let mut editor = editor_with_images(1);
    let original = first_item_id(&editor);

    editor.handle_pointer_down(pointer(100.0, 100.0));
    editor.handle_pointer_up();
    editor.handle_key_down(ctrl_key(Key::C));
    editor.handle_key_down(ctrl_key(Key::V));

    assert_item_count(&editor, 2);
    let clone = editor.board.items[1].id;
    assert_ne!(clone, original);
    assert_eq!(item_position(&editor, clone), (112.0, 112.0));
    assert!(editor.selection.contains(clone));
    assert!(!editor.selection.contains(original));
}

#[test]
fn test_consecutive_pastes_cascade() {
    let mut editor = editor_with_images(1);
    editor.handle_pointer_down(pointer(100.0, 100.0));
    editor.handle_pointer_up();
    editor.handle_key_down(ctrl_key(Key::C));

    editor.handle_key_down(ctrl_key(Key::V));
    editor.handle_key_down(ctrl_key(Key::V));
    editor.handle_key_down(ctrl_key(Key::V));

    assert_item_count(&editor, 4);
    let positions: Vec<(f32, f32)> =
        editor.board.items.iter().map(|item| item.position).collect();
    assert_eq!(
        positions,
        vec![(80.0, 80.0), (112.0, 112.0), (144.0, 144.0), (176.0, 176.0)]
    );
}

#[test]
fn test_pasted_items_land_on_top() {
    let mut editor = editor_with_images(2);
    let top_layer = editor.board.items.iter().map(|i| i.layer).max().unwrap();

    editor.handle_pointer_down(pointer(90.0, 85.0));
    editor.handle_pointer_up();
    editor.copy_selection();
    editor.paste_clipboard();

    let pasted = editor.board.items.last().unwrap();
    assert!(pasted.layer > top_layer);
}

#[test]
fn test_copy_survives_deleting_the_source() {
    let mut editor = editor_with_images(1);
    editor.handle_pointer_down(pointer(100.0, 100.0));
    editor.handle_pointer_up();
    editor.handle_key_down(ctrl_key(Key::C));

    editor.handle_key_down(plain_key(Key::Delete));
    assert_item_count(&editor, 0);

    editor.handle_key_down(ctrl_key(Key::V));
    assert_item_count(&editor, 1);
}

#[test]
fn test_empty_clipboard_paste_is_a_no_op() {
    let mut editor = TestEditorBuilder::new().build();
    let depth = editor.history.undo_len();

    editor.paste_clipboard();
    assert_item_count(&editor, 0);
    assert_eq!(editor.history.undo_len(), depth);
}

#[test]
fn test_copying_nothing_keeps_previous_contents() {
    let mut editor = editor_with_images(1);
    editor.handle_pointer_down(pointer(100.0, 100.0));
    editor.handle_pointer_up();
    editor.copy_selection();
    assert_eq!(editor.clipboard.len(), 1);

    editor.selection.clear();
    editor.copy_selection();
    assert_eq!(editor.clipboard.len(), 1);

    editor.paste_clipboard();
    assert_item_count(&editor, 2);
}

#[test]
fn test_paste_is_undoable() {
    let mut editor = editor_with_images(1);
    editor.handle_pointer_down(pointer(100.0, 100.0));
    editor.handle_pointer_up();
    editor.copy_selection();
    editor.paste_clipboard();
    assert_item_count(&editor, 2);

    editor.undo();
    assert_item_count(&editor, 1);
}
