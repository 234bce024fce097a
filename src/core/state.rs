pub mod reader;
pub mod search;
pub mod system;

use crate::infrastructure::config::Config;
use reader::ReaderState;
use search::{QueryInput, SearchState};
use system::SystemState;

/// Which page is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Search,
    Reader,
}

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub page: Page,
    pub search: SearchState,
    pub reader: ReaderState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Prefills the query input, e.g. with a topic given on the command line.
    /// The caller is expected to issue the matching search.
    pub fn with_topic(mut self, topic: &str) -> Self {
        self.search.input = QueryInput::with_content(topic);
        self
    }
}
