use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::infrastructure::wikipedia::SearchResults;

/// Messages specific to SearchState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchMsg {
    /// A key meant for the query input (editing or cursor movement)
    Input(KeyEvent),
    SelectPrevious,
    SelectNext,
    OpenSelected,
    ResultsReceived {
        query: String,
        results: SearchResults,
    },
}
