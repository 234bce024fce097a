//! Status bar component
//!
//! Displays the info line at the bottom of the search page.
//! This is a pure, stateless component that renders status data from AppState.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

/// Status bar component
///
/// Shows the last error, if any. It's a stateless component following the
/// Elm architecture pattern.
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    /// Create a new status bar component
    pub fn new() -> Self {
        Self
    }

    /// Render the info line into `area` (one row)
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let message = state.system.status_message().cloned().unwrap_or_default();
        let line = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).expect("terminal");
        terminal
            .draw(|f| StatusBarComponent::new().view(state, f, f.area()))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_status_bar_shows_error() {
        let mut state = AppState::default();
        state.system.status_message = Some("no pages found".to_string());
        assert_eq!(render(&state), "no pages found      ");
    }

    #[test]
    fn test_status_bar_empty() {
        assert_eq!(render(&AppState::default()), " ".repeat(20));
    }
}
