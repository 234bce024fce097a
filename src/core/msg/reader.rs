use serde::{Deserialize, Serialize};

use crate::domain::article::Article;

/// Messages specific to ReaderState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReaderMsg {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    Back,
    ContentLoaded { requested: String, article: Article },
    LoadFailed { requested: String, error: String },
}
