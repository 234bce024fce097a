use serde::{Deserialize, Serialize};

/// Title of the placeholder entry shown while nothing has been searched yet.
pub const PLACEHOLDER_TITLE: &str = "...";
const PLACEHOLDER_DESCRIPTION: &str = "type something!";

/// One encyclopedia article, as listed by a search and later loaded in full.
///
/// `description` and `content` hold display text; `content` stays empty
/// until the article has been fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
}

impl Article {
    pub fn new(title: impl Into<String>, description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content: String::new(),
            url: url.into(),
        }
    }

    /// An article known only by title, e.g. one requested from the command line.
    pub fn from_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn placeholder() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            ..Default::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.title == PLACEHOLDER_TITLE
    }

    pub fn is_loaded(&self) -> bool {
        !self.content.is_empty()
    }
}

/// Public page URL for `title` below `wiki_url`, e.g. `https://en.wikipedia.org/wiki/Fork_(disambiguation)`.
pub fn article_url(wiki_url: &str, title: &str) -> String {
    format!("{wiki_url}/{}", title.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_placeholder() {
        let article = Article::placeholder();
        assert!(article.is_placeholder());
        assert!(!article.is_loaded());
        assert_eq!(article.description, "type something!");
        assert!(!Article::from_title("Fork").is_placeholder());
    }

    #[test]
    fn test_article_url() {
        assert_eq!(
            article_url("https://en.wikipedia.org/wiki", "Fork (disambiguation)"),
            "https://en.wikipedia.org/wiki/Fork_(disambiguation)"
        );
    }
}
