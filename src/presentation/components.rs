//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::{AppState, Page};

pub mod reader_page;
pub mod search_page;
pub mod status_bar;

pub use reader_page::ReaderPage;
pub use search_page::SearchPage;
pub use status_bar::StatusBarComponent;

/// Collection of all components
///
/// Components are stateless and receive state as parameters during render.
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub search: SearchPage,
    pub reader: ReaderPage,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the page that is currently on screen
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        match state.page {
            Page::Search => self.search.view(state, frame, area),
            Page::Reader => self.reader.view(state, frame, area),
        }
    }
}
