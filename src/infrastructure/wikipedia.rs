//! MediaWiki API client
//!
//! Two read-only queries: a full-text title search and a single-article
//! revision fetch. Both responses are decoded in full before anything is
//! handed to the wikitext renderer.

use color_eyre::eyre::{eyre, Result};
use futures::future::BoxFuture;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::article::{article_url, Article};
use crate::domain::wikitext::Renderer;

pub const DEFAULT_WIKI_BASE: &str = "wikipedia.org/wiki";
pub const DEFAULT_API_BASE: &str = "wikipedia.org/w/api.php?";
pub const SEARCH_LIMIT: usize = 6;

/// Characters left unescaped in query values, as in form encoding.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub articles: Vec<Article>,
    pub total_hits: Option<u64>,
}

/// Where articles come from. The app only talks to this seam so tests can
/// swap in canned data.
pub trait ArticleSource: Send + Sync {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<SearchResults>>;
    fn load_article(&self, article: Article) -> BoxFuture<'_, Result<Article>>;
}

#[derive(Debug, Clone)]
pub struct WikipediaClient {
    lang: String,
    wiki_url: String,
    api_url: String,
    http: reqwest::Client,
    renderer: Renderer,
}

impl WikipediaClient {
    pub fn new(lang: &str, renderer: Renderer) -> Result<Self> {
        Self::with_base_urls(lang, renderer, DEFAULT_WIKI_BASE, DEFAULT_API_BASE)
    }

    /// Builds `https://{lang}.{base}` endpoints. The language must be one the
    /// renderer knows.
    pub fn with_base_urls(
        lang: &str,
        renderer: Renderer,
        wiki_base: &str,
        api_base: &str,
    ) -> Result<Self> {
        if !renderer.options().is_language(lang) {
            return Err(eyre!("wikipedia language {lang} does not exist"));
        }
        Self::with_endpoints(
            lang,
            renderer,
            format!("https://{lang}.{wiki_base}"),
            format!("https://{lang}.{api_base}"),
        )
    }

    /// Uses fully formed endpoints as given. `api_url` must end where query
    /// parameters begin.
    pub fn with_endpoints(
        lang: &str,
        renderer: Renderer,
        wiki_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("wki/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            lang: lang.to_string(),
            wiki_url: wiki_url.into(),
            api_url: api_url.into(),
            http,
            renderer,
        })
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn wiki_url(&self) -> &str {
        &self.wiki_url
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn fetch<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.api_url, encode_params(params));
        log::debug!("GET {url}");

        let response = self.http.get(&url).send().await.map_err(|e| {
            log::warn!("request to {url} failed: {e}");
            eyre!("couldn't fetch data from Wikipedia API")
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(eyre!("unexpected HTTP status: {status}"));
        }

        let body = response
            .bytes()
            .await
            .map_err(|_| eyre!("couldn't read response body"))?;
        serde_json::from_slice(&body).map_err(|e| {
            log::warn!("malformed response from {url}: {e}");
            eyre!("couldn't decode JSON response")
        })
    }

    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        if query.trim().is_empty() {
            return Ok(SearchResults::default());
        }

        let limit = SEARCH_LIMIT.to_string();
        let result: SearchResponse = self
            .fetch(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("utf8", ""),
                ("format", "json"),
                ("srlimit", limit.as_str()),
                ("srprop", "snippet"),
            ])
            .await?;

        let articles = result
            .query
            .search
            .into_iter()
            .map(|hit| Article {
                url: article_url(&self.wiki_url, &hit.title),
                description: self.renderer.render(&hit.snippet),
                content: String::new(),
                title: hit.title,
            })
            .collect::<Vec<_>>();
        log::info!("search {query:?}: {} result(s)", articles.len());

        Ok(SearchResults {
            articles,
            total_hits: result.query.searchinfo.and_then(|info| info.totalhits),
        })
    }

    pub async fn load_article(&self, mut article: Article) -> Result<Article> {
        let result: PageResponse = self
            .fetch(&[
                ("action", "query"),
                ("formatversion", "2"),
                ("prop", "revisions"),
                ("rvprop", "content"),
                ("rvslots", "*"),
                ("titles", article.title.as_str()),
                ("format", "json"),
            ])
            .await?;

        let page = result
            .query
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| eyre!("no pages found"))?;
        let content = page
            .revisions
            .into_iter()
            .next()
            .map(|revision| revision.slots.main.content)
            .ok_or_else(|| eyre!("no pages found"))?;

        if !page.title.is_empty() {
            article.title = page.title;
        }
        if article.url.is_empty() {
            article.url = article_url(&self.wiki_url, &article.title);
        }
        article.content = self.renderer.render(&content);
        log::info!("loaded {:?} ({} bytes)", article.title, article.content.len());
        Ok(article)
    }
}

impl ArticleSource for WikipediaClient {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<SearchResults>> {
        Box::pin(WikipediaClient::search(self, query))
    }

    fn load_article(&self, article: Article) -> BoxFuture<'_, Result<Article>> {
        Box::pin(WikipediaClient::load_article(self, article))
    }
}

fn encode_params(params: &[(&str, &str)]) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    sorted
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_VALUE),
                utf8_percent_encode(value, QUERY_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: SearchQuery,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    searchinfo: Option<SearchInfo>,
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchInfo {
    #[serde(default)]
    totalhits: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Debug, Default, Deserialize)]
struct PageResponse {
    #[serde(default)]
    query: PageQuery,
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Default, Deserialize)]
struct Page {
    #[serde(default)]
    title: String,
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Debug, Default, Deserialize)]
struct Revision {
    #[serde(default)]
    slots: Slots,
}

#[derive(Debug, Default, Deserialize)]
struct Slots {
    #[serde(default)]
    main: Slot,
}

#[derive(Debug, Default, Deserialize)]
struct Slot {
    #[serde(default)]
    content: String,
}
