use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::wikipedia::ArticleSource,
};

/// Command executor that turns Elm commands into background tasks.
/// Every task reports back through the raw message channel.
#[derive(Clone)]
pub struct CmdExecutor {
    source: Arc<dyn ArticleSource>,
    raw_sender: mpsc::UnboundedSender<RawMsg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new(source: Arc<dyn ArticleSource>, raw_sender: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            source,
            raw_sender,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command. API calls are spawned and must run inside a
    /// tokio runtime.
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::SearchArticles { query } => {
                let source = Arc::clone(&self.source);
                let sender = self.raw_sender.clone();
                let query = query.clone();
                tokio::spawn(async move {
                    let raw = match source.search(&query).await {
                        Ok(results) => RawMsg::SearchCompleted { query, results },
                        Err(e) => RawMsg::SearchFailed {
                            query,
                            error: e.to_string(),
                        },
                    };
                    if sender.send(raw).is_err() {
                        log::debug!("search finished after shutdown");
                    }
                });
            }

            Cmd::LoadArticle { article } => {
                let source = Arc::clone(&self.source);
                let sender = self.raw_sender.clone();
                let requested = article.title.clone();
                let article = article.clone();
                tokio::spawn(async move {
                    let raw = match source.load_article(article).await {
                        Ok(article) => RawMsg::ArticleLoaded { requested, article },
                        Err(e) => RawMsg::ArticleFailed {
                            requested,
                            error: e.to_string(),
                        },
                    };
                    if sender.send(raw).is_err() {
                        log::debug!("article load finished after shutdown");
                    }
                });
            }

            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(tx) => tx.send(tui_cmd.clone())?,
                None => log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}"),
            },

            Cmd::Batch(commands) => self.execute_commands(commands)?,
        }
        Ok(())
    }

    /// Execute multiple commands in order, stopping at the first failure
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<()> {
        commands
            .iter()
            .try_for_each(|cmd| self.execute_command(cmd))
    }
}
