use ratatui::text::Line;

use crate::core::{cmd::Cmd, msg::reader::ReaderMsg};
use crate::domain::article::Article;
use crate::presentation::widgets::ansi_text;

pub const WAITING_FOR_CONTENT: &str = "Waiting for content...";

/// Rows taken by the reader header and footer
const CHROME_HEIGHT: u16 = 2;

/// Reader page state: the open article and the scroll position of its body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReaderState {
    pub article: Option<Article>,
    /// Title of the article whose content is still in flight
    pub waiting_for: Option<String>,
    pub scroll: usize,
    pub width: u16,
    pub height: u16,
    /// Body wrapped to `width`, rebuilt only on open and resize
    lines: Vec<Line<'static>>,
}

impl ReaderState {
    pub fn open(&mut self, article: Article) {
        self.waiting_for = None;
        self.article = Some(article);
        self.scroll = 0;
        self.recount();
    }

    pub fn wait_for(&mut self, article: Article) {
        self.waiting_for = Some(article.title.clone());
        self.article = Some(article);
        self.scroll = 0;
        self.recount();
    }

    pub fn is_waiting_for(&self, title: &str) -> bool {
        self.waiting_for.as_deref() == Some(title)
    }

    pub fn close(&mut self) {
        self.waiting_for = None;
        self.article = None;
        self.scroll = 0;
        self.lines.clear();
    }

    pub fn title(&self) -> &str {
        self.article.as_ref().map(|a| a.title.as_str()).unwrap_or_default()
    }

    /// Display text of the body, ANSI decorations included.
    pub fn body(&self) -> &str {
        match &self.article {
            Some(_) if self.waiting_for.is_some() => WAITING_FOR_CONTENT,
            Some(article) => &article.content,
            None => "",
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.recount();
    }

    pub fn body_height(&self) -> usize {
        self.height.saturating_sub(CHROME_HEIGHT) as usize
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Wrapped body rows from the current scroll position on.
    pub fn visible_lines(&self, height: usize) -> &[Line<'static>] {
        let start = self.scroll.min(self.lines.len());
        let end = start.saturating_add(height).min(self.lines.len());
        &self.lines[start..end]
    }

    pub fn max_scroll(&self) -> usize {
        self.line_count().saturating_sub(self.body_height())
    }

    /// Percentage of the body scrolled past, 100 when everything fits.
    pub fn scroll_percent(&self) -> usize {
        match self.max_scroll() {
            0 => 100,
            max => self.scroll.min(max) * 100 / max,
        }
    }

    fn recount(&mut self) {
        let lines = ansi_text::wrap_styled(ansi_text::parse(self.body()), self.width as usize);
        self.lines = lines;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn scroll_by(&mut self, delta: isize) {
        let next = self.scroll.saturating_add_signed(delta);
        self.scroll = next.min(self.max_scroll());
    }

    /// Reader-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ReaderMsg) -> Vec<Cmd> {
        let page = self.body_height().max(1) as isize;
        match msg {
            ReaderMsg::ScrollUp => self.scroll_by(-1),
            ReaderMsg::ScrollDown => self.scroll_by(1),
            ReaderMsg::PageUp => self.scroll_by(-page),
            ReaderMsg::PageDown => self.scroll_by(page),
            ReaderMsg::ScrollToTop => self.scroll = 0,
            ReaderMsg::ScrollToBottom => self.scroll = self.max_scroll(),

            ReaderMsg::ContentLoaded { requested, article } => {
                if self.is_waiting_for(&requested) {
                    self.open(article);
                }
            }

            // Page switches are handled by the top-level update.
            ReaderMsg::Back | ReaderMsg::LoadFailed { .. } => {}
        }
        vec![]
    }
}
