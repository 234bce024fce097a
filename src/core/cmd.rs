use serde::{Deserialize, Serialize};

use crate::domain::article::Article;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects requested by `update`; results come back as `RawMsg`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Wikipedia API
    SearchArticles { query: String },
    LoadArticle { article: Article },

    // UI-related commands
    Tui(TuiCommand),

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::SearchArticles { .. } | Cmd::LoadArticle { .. } => true,
            Cmd::Tui(..) | Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }
}
