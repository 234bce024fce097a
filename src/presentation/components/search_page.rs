//! Search page component
//!
//! Query input, result list and navigation help.

use ratatui::{prelude::*, widgets::*};
use thousands::Separable;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{search::QueryInput, AppState},
    domain::{article::Article, wikitext::StyleKind},
    presentation::{components::status_bar::StatusBarComponent, widgets::ansi_text},
};

pub const TITLE: &str = "wki - Search Wikipedia";
pub const HELP: &str = "Navigate: ←↑↓→ ↲. Quit: ESC.";
const PROMPT: &str = "> ";

#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    status_bar: StatusBarComponent,
}

impl SearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(2), // title + gap
                Constraint::Length(1), // query input
                Constraint::Length(1), // hit count
                Constraint::Min(0),    // results
                Constraint::Length(1), // help
                Constraint::Length(1), // info line
            ],
        )
        .split(area);

        frame.render_widget(Paragraph::new(TITLE), layout[0]);
        self.view_input(&state.search.input, frame, layout[1]);

        if let Some(total) = state.search.total_hits {
            let hits = Span::styled(
                format!("{} results", total.separate_with_commas()),
                Style::default().fg(Color::DarkGray),
            );
            frame.render_widget(Paragraph::new(hits), layout[2]);
        }

        let title_style = state
            .config
            .config
            .styles
            .get(&StyleKind::Link)
            .copied()
            .unwrap_or_default();
        let items: Vec<Line> = state
            .search
            .articles
            .iter()
            .enumerate()
            .map(|(i, article)| result_line(article, i == state.search.selected, title_style))
            .collect();
        frame.render_widget(
            Paragraph::new(items).wrap(Wrap { trim: false }),
            layout[3],
        );

        frame.render_widget(Paragraph::new(HELP), layout[4]);
        self.status_bar.view(state, frame, layout[5]);
    }

    fn view_input(&self, input: &QueryInput, frame: &mut Frame, area: Rect) {
        let line = if input.content.is_empty() {
            Line::from(vec![
                Span::raw(PROMPT),
                Span::styled(QueryInput::PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![Span::raw(PROMPT), Span::raw(input.content.as_str())])
        };
        frame.render_widget(Paragraph::new(line), area);

        let before_cursor: String = input.content.chars().take(input.cursor).collect();
        let x = area.x as usize + PROMPT.width() + before_cursor.width();
        if x < (area.x + area.width) as usize {
            frame.set_cursor_position((x as u16, area.y));
        }
    }
}

fn result_line(article: &Article, selected: bool, title_style: Style) -> Line<'static> {
    let cursor = if selected { "*" } else { " " };
    let mut spans = vec![
        Span::raw(format!("{cursor} ")),
        Span::styled(article.title.clone(), title_style),
        Span::raw(" — "),
    ];
    for (i, line) in ansi_text::parse(&article.description).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.extend(line.spans);
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal
            .draw(|f| SearchPage::new().view(state, f, f.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_initial_page() {
        let lines = render(&AppState::default(), 40, 9);
        assert_eq!(
            lines,
            vec![
                TITLE,
                "",
                "> Giraffe",
                "",
                "* ... — type something!",
                "",
                "",
                HELP,
                "",
            ]
        );
    }

    #[test]
    fn test_results_with_hit_count() {
        let mut state = AppState::default().with_topic("fork");
        state.search.articles = vec![
            Article::new("Fork", "An \u{1b}[1mutensil\u{1b}[0m", ""),
            Article::new("Spork", "A hybrid", ""),
        ];
        state.search.total_hits = Some(12345);
        state.search.selected = 1;
        state.system.status_message = Some("couldn't decode JSON response".to_string());

        let lines = render(&state, 40, 9);
        assert_eq!(
            lines,
            vec![
                TITLE,
                "",
                "> fork",
                "12,345 results",
                "  Fork — An utensil",
                "* Spork — A hybrid",
                "",
                HELP,
                "couldn't decode JSON response",
            ]
        );
    }
}
