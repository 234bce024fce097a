use crate::core::{cmd::Cmd, msg::search::SearchMsg};
use crate::domain::article::Article;
use crate::infrastructure::wikipedia::SearchResults;

/// Snapshot of the single-line query input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryInput {
    pub content: String,
    /// Cursor column, in characters
    pub cursor: usize,
}

impl QueryInput {
    pub const CHAR_LIMIT: usize = 156;
    pub const PLACEHOLDER: &'static str = "Giraffe";

    pub fn new(content: impl Into<String>, cursor: usize) -> Self {
        let content = content.into();
        let cursor = cursor.min(content.chars().count());
        Self { content, cursor }
    }

    /// Input holding `content` with the cursor at its end, clipped to
    /// [`Self::CHAR_LIMIT`].
    pub fn with_content(content: &str) -> Self {
        let content: String = content.chars().take(Self::CHAR_LIMIT).collect();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Search page state: query, current result list and selection
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub input: QueryInput,
    pub articles: Vec<Article>,
    pub selected: usize,
    pub total_hits: Option<u64>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            input: QueryInput::default(),
            articles: vec![Article::placeholder()],
            selected: 0,
            total_hits: None,
        }
    }
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.input.content
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }

    /// Replaces the input snapshot. A changed, non-blank query yields a
    /// search command; a blank one resets the list to the placeholder.
    pub fn set_input(&mut self, input: QueryInput) -> Vec<Cmd> {
        let changed = input.content != self.input.content;
        self.input = input;
        if self.input.is_blank() {
            self.reset_results();
            return vec![];
        }
        if changed {
            vec![Cmd::SearchArticles {
                query: self.input.content.clone(),
            }]
        } else {
            vec![]
        }
    }

    pub fn reset_results(&mut self) {
        self.articles = vec![Article::placeholder()];
        self.selected = 0;
        self.total_hits = None;
    }

    /// Keeps a fully loaded article so that reopening it needs no request.
    pub fn store_loaded(&mut self, requested: &str, article: &Article) {
        if let Some(entry) = self.articles.iter_mut().find(|a| a.title == requested) {
            *entry = article.clone();
        }
    }

    /// Search-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SearchMsg) -> Vec<Cmd> {
        match msg {
            SearchMsg::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
                vec![]
            }

            SearchMsg::SelectNext => {
                if self.selected + 1 < self.articles.len() {
                    self.selected += 1;
                }
                vec![]
            }

            SearchMsg::ResultsReceived { query, results } => {
                if query != self.input.content || self.input.is_blank() {
                    log::debug!("dropping stale results for {query:?}");
                    return vec![];
                }
                self.articles = results.articles;
                self.total_hits = results.total_hits;
                self.selected = self.selected.min(self.articles.len().saturating_sub(1));
                vec![]
            }

            // Input editing and opening need the text engine and the page
            // switch; both are handled by the top-level update.
            SearchMsg::Input(_) | SearchMsg::OpenSelected => vec![],
        }
    }
}
