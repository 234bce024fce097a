use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::article::Article;
use crate::infrastructure::wikipedia::SearchResults;

/// Raw messages from external sources (terminal input, API responses, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // API responses, tagged with the request that produced them
    SearchCompleted {
        query: String,
        results: SearchResults,
    },
    SearchFailed {
        query: String,
        error: String,
    },
    ArticleLoaded {
        requested: String,
        article: Article,
    },
    ArticleFailed {
        requested: String,
        error: String,
    },

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
    }

    #[test]
    fn test_raw_msg_serialization() -> Result<()> {
        let msg = RawMsg::ArticleLoaded {
            requested: "Fork".to_string(),
            article: Article::from_title("Fork"),
        };
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
