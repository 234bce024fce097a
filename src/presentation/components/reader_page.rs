//! Reader page component
//!
//! Header with the article title, the scrolled body and a footer with the
//! scroll position.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{reader::ReaderState, AppState},
    domain::wikitext::StyleKind,
};

pub const RETURN_NOTE: &str = "Return to search ← ";

#[derive(Debug, Clone, Default)]
pub struct ReaderPage;

impl ReaderPage {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(area);

        let reader = &state.reader;
        frame.render_widget(Paragraph::new(header(reader, area.width)), layout[0]);

        let body = reader.visible_lines(layout[1].height as usize).to_vec();
        frame.render_widget(Paragraph::new(body), layout[1]);

        let note_style = state
            .config
            .config
            .styles
            .get(&StyleKind::Note)
            .copied()
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(footer(reader, area.width, note_style)),
            layout[2],
        );
    }
}

fn header(reader: &ReaderState, width: u16) -> Line<'static> {
    let title = format!("wki - {} ", reader.title());
    let fill = "─".repeat((width as usize).saturating_sub(title.width()));
    Line::from(vec![Span::raw(title), Span::raw(fill)])
}

fn footer(reader: &ReaderState, width: u16, note_style: Style) -> Line<'static> {
    let percent = format!(" {:>3}%", reader.scroll_percent());
    let fill = "─".repeat(
        (width as usize).saturating_sub(RETURN_NOTE.width() + percent.width()),
    );
    Line::from(vec![
        Span::styled(RETURN_NOTE, note_style),
        Span::raw(fill),
        Span::raw(percent),
    ])
}
