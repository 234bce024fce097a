use crossterm::event::KeyEvent;

use crate::core::state::search::QueryInput;

/// Applies editing keys to a query snapshot without holding widget state in
/// `AppState`.
pub trait TextAreaEngine {
    fn apply_keys(&self, snapshot: &QueryInput, keys: &[KeyEvent]) -> QueryInput;
}
