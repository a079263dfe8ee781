// Property-based tests using proptest
// These tests use random generation to find edge cases that unit tests miss

mod common;

use atto::buffer::Buffer;
use atto::command::Command;
use atto::editor::Editor;
use atto::input::Key;
use atto::mode::Mode;
use common::validation;
use proptest::prelude::*;

fn movement(op: u8) -> Command {
    match op % 4 {
        0 => Command::MoveLeft,
        1 => Command::MoveRight,
        2 => Command::MoveUp,
        _ => Command::MoveDown,
    }
}

// Property: navigation from any clamped start never leaves the buffer
proptest! {
    #[test]
    fn cursor_positions_stay_valid(
        text in "[a-z\\n]{0,60}",
        start_line in 0usize..20,
        start_col in 0usize..20,
        ops in prop::collection::vec(any::<u8>(), 1..80)
    ) {
        let mut editor = common::boundary::create_editor_with_text(&text);
        editor.cursor.line = start_line;
        editor.cursor.col = start_col;
        editor.cursor.clamp(&editor.buffer);

        for op in ops {
            editor.execute_command(movement(op));
            prop_assert!(editor.cursor.line < editor.buffer.line_count());
            prop_assert!(editor.cursor.col <= editor.buffer.line_length(editor.cursor.line));
        }
    }
}

// Property: split then merge reconstructs the original line
proptest! {
    #[test]
    fn split_then_merge_round_trips(line in "[a-zA-Z0-9 ]{0,40}", split_at in 0usize..41) {
        let mut buffer = Buffer::from_text(&line);
        let col = split_at.min(buffer.line_length(0));

        buffer.split_line(0, col).unwrap();
        prop_assert_eq!(buffer.line_count(), 2);
        buffer.merge_with_previous(1).unwrap();

        prop_assert_eq!(buffer.line_count(), 1);
        prop_assert_eq!(buffer.line_text(0).unwrap(), line);
    }
}

// Property: no sequence of backspaces empties the buffer
proptest! {
    #[test]
    fn backspace_never_empties_buffer(
        text in "[a-z\\n]{1,30}",
        presses in 1usize..80
    ) {
        let mut editor = common::boundary::create_editor_with_text(&text);
        editor.mode = Mode::Insert;
        let last = editor.buffer.line_count() - 1;
        editor.cursor.line = last;
        editor.cursor.col = editor.buffer.line_length(last);

        for _ in 0..presses {
            editor.handle_input(Key::Backspace);
            prop_assert!(editor.buffer.line_count() >= 1);
            validation::assert_cursor_valid(&editor);
        }
    }
}

// Property: random typing keeps the cursor valid and on screen
proptest! {
    #[test]
    fn editing_keeps_cursor_visible(
        rows in 1usize..8,
        cols in 1usize..12,
        keys in prop::collection::vec(
            prop::sample::select(vec![
                Key::Char('a'),
                Key::Char('z'),
                Key::Enter,
                Key::Backspace,
                Key::Up,
                Key::Down,
                Key::Left,
                Key::Right,
            ]),
            1..120
        )
    ) {
        let mut editor = Editor::default();
        editor.resize_viewport(rows, cols);
        editor.handle_input(Key::Char('i'));

        for key in keys {
            editor.handle_input(key);
            validation::assert_cursor_valid(&editor);
            validation::assert_cursor_visible(&editor);
        }
    }
}

#[test]
fn single_char_buffer_deletes_down_to_one_empty_line() {
    let mut buffer = Buffer::from_text("x");
    buffer.delete_char_before(0, 1).unwrap();
    assert!(buffer.delete_char_before(0, 0).is_err());
    assert!(buffer.merge_with_previous(0).is_err());
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line_text(0).unwrap(), "");
}
