use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::search::QueryInput;
use crate::core::textarea_engine::TextAreaEngine;

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies keys, then extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn restore_textarea_from_snapshot(textarea: &mut TextArea<'_>, snapshot: &QueryInput) {
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(CursorMove::Jump(0, snapshot.cursor as u16));
    }

    fn is_line_break(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r'))
            || (key.code == KeyCode::Char('m')
                && key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL))
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &QueryInput, keys: &[KeyEvent]) -> QueryInput {
        let mut textarea = TextArea::default();
        Self::restore_textarea_from_snapshot(&mut textarea, snapshot);
        let mut last_valid = snapshot.clone();
        for key in keys.iter().filter(|key| !Self::is_line_break(key)) {
            textarea.input(Event::Key(*key));
            let content = textarea.lines().join("");
            if content.chars().count() > QueryInput::CHAR_LIMIT {
                break;
            }
            last_valid = QueryInput::new(content, textarea.cursor().1);
        }
        last_valid
    }
}
