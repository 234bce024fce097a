use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Test-oriented TUI implementation backed by ratatui::backend::TestBackend.
/// - enter/exit are no-ops (no raw mode / alternate screen).
/// - next() returns events from an internal queue (non-blocking, immediate).
/// - draw() increments an internal counter for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Rendered screen content, one string per terminal row.
    pub fn screen_lines(&self) -> Vec<String> {
        let buffer = self.term.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
                    .collect::<String>()
            })
            .collect()
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    fn size(&self) -> Result<Rect> {
        let size = self.term.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_events_are_replayed_in_order() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick, Event::Resize(20, 4)])?;
        assert_eq!(tui.next().await, Some(Event::Tick));
        assert_eq!(tui.next().await, Some(Event::Resize(20, 4)));
        assert_eq!(tui.next().await, None);
        Ok(())
    }

    #[test]
    fn test_draw_is_counted_and_visible() -> Result<()> {
        let mut tui = TestTui::new(5, 1)?;
        tui.draw(&mut |frame| {
            frame.render_widget(ratatui::widgets::Paragraph::new("wki"), frame.area());
        })?;
        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen_lines(), vec!["wki  ".to_string()]);
        Ok(())
    }
}
