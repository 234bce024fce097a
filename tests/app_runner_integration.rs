use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::future::BoxFuture;
use pretty_assertions::assert_eq;

use wki::core::state::{reader::WAITING_FOR_CONTENT, AppState, Page};
use wki::domain::article::Article;
use wki::infrastructure::config::Config;
use wki::infrastructure::tui::{test::TestTui, Event};
use wki::infrastructure::wikipedia::{ArticleSource, SearchResults};
use wki::integration::app_runner::AppRunner;

/// Article source answering from memory and counting requests
#[derive(Default)]
struct FakeSource {
    searches: AtomicUsize,
    loads: AtomicUsize,
}

impl ArticleSource for FakeSource {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<SearchResults>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            let articles = ["Fork", "Spork", "Broken"]
                .iter()
                .filter(|title| title.to_lowercase().contains(&query.to_lowercase()))
                .map(|title| Article::new(*title, format!("all about {title}"), ""))
                .collect::<Vec<_>>();
            Ok(SearchResults {
                total_hits: Some(articles.len() as u64),
                articles,
            })
        })
    }

    fn load_article(&self, mut article: Article) -> BoxFuture<'_, Result<Article>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            if article.title == "Broken" {
                return Err(eyre!("no pages found"));
            }
            article.content = (1..=40)
                .map(|i| format!("{} paragraph {i}", article.title))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(article)
        })
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

fn initial_state() -> Result<AppState> {
    let empty_dir = std::env::temp_dir().join("wki-app-runner-no-config");
    Ok(AppState::new_with_config(Config::from_dir(&empty_dir)?))
}

async fn run(
    state: AppState,
    events: Vec<Event>,
) -> Result<(AppRunner<TestTui>, Arc<FakeSource>)> {
    let source = Arc::new(FakeSource::default());
    let tui = TestTui::with_events(60, 20, events)?;
    let mut runner = AppRunner::new(state, Arc::clone(&source) as Arc<dyn ArticleSource>, tui);
    runner.run().await?;
    Ok((runner, source))
}

#[tokio::test]
async fn test_typing_searches_and_lists_results() -> Result<()> {
    let mut events = typed("ork");
    events.push(Event::Tick);
    let (runner, source) = run(initial_state()?, events).await?;

    let state = runner.runtime().state();
    assert_eq!(state.search.query(), "ork");
    let titles: Vec<&str> = state.search.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Fork", "Spork"]);
    assert_eq!(source.searches.load(Ordering::SeqCst), 3);

    let screen = runner.tui().screen_lines();
    assert!(screen[2].starts_with("> ork"), "{screen:?}");
    assert!(screen.iter().any(|l| l.starts_with("* Fork — all about Fork")), "{screen:?}");
    assert!(runner.tui().draw_count() > 0);
    Ok(())
}

#[tokio::test]
async fn test_open_article_and_scroll() -> Result<()> {
    let mut events = typed("ork");
    events.extend([Event::Tick, key(KeyCode::Down), key(KeyCode::Enter), Event::Tick]);
    events.extend([key(KeyCode::Char('j')), key(KeyCode::Char('j'))]);
    let (runner, _source) = run(initial_state()?, events).await?;

    let state = runner.runtime().state();
    assert_eq!(state.page, Page::Reader);
    assert_eq!(state.reader.title(), "Spork");
    assert_eq!(state.reader.scroll, 2);

    let screen = runner.tui().screen_lines();
    assert!(screen[0].starts_with("wki - Spork ─"), "{screen:?}");
    assert!(screen[1].starts_with("Spork paragraph 3"), "{screen:?}");
    assert!(screen[19].starts_with("Return to search ←"), "{screen:?}");
    Ok(())
}

#[tokio::test]
async fn test_reopening_uses_cache() -> Result<()> {
    let mut events = typed("fork");
    events.extend([Event::Tick, key(KeyCode::Enter), Event::Tick]);
    events.extend([key(KeyCode::Left), key(KeyCode::Enter)]);
    let (runner, source) = run(initial_state()?, events).await?;

    let state = runner.runtime().state();
    assert_eq!(state.page, Page::Reader);
    assert!(state.reader.body().starts_with("Fork paragraph 1"));
    assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_waiting_for_content_before_load_arrives() -> Result<()> {
    let mut events = typed("fork");
    events.extend([Event::Tick, key(KeyCode::Enter)]);
    let (runner, _source) = run(initial_state()?, events).await?;

    let screen = runner.tui().screen_lines();
    let state = runner.runtime().state();
    assert_eq!(state.page, Page::Reader);
    // The load result is only picked up on the next loop iteration.
    assert_eq!(screen[1].trim_end(), WAITING_FOR_CONTENT);
    Ok(())
}

#[tokio::test]
async fn test_load_failure_shows_error_on_search_page() -> Result<()> {
    let mut events = typed("broken");
    events.extend([Event::Tick, key(KeyCode::Enter), Event::Tick]);
    let (runner, _source) = run(initial_state()?, events).await?;

    let state = runner.runtime().state();
    assert_eq!(state.page, Page::Search);
    assert_eq!(
        state.system.status_message().map(String::as_str),
        Some("no pages found")
    );
    let screen = runner.tui().screen_lines();
    assert!(screen[19].starts_with("no pages found"), "{screen:?}");
    Ok(())
}

#[tokio::test]
async fn test_initial_topic_is_searched() -> Result<()> {
    let (runner, source) = run(initial_state()?.with_topic("spork"), vec![Event::Tick]).await?;

    let state = runner.runtime().state();
    assert_eq!(source.searches.load(Ordering::SeqCst), 1);
    assert_eq!(
        state.search.articles.first().map(|a| a.title.as_str()),
        Some("Spork")
    );
    Ok(())
}

#[tokio::test]
async fn test_placeholder_is_not_openable() -> Result<()> {
    let (runner, source) = run(initial_state()?, vec![key(KeyCode::Enter), Event::Tick]).await?;
    assert_eq!(runner.runtime().state().page, Page::Search);
    assert_eq!(source.loads.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn test_escape_quits_and_stops_reading_events() -> Result<()> {
    let mut events = vec![key(KeyCode::Esc)];
    events.extend(typed("fork"));
    let (runner, source) = run(initial_state()?, events).await?;

    assert!(runner.runtime().state().system.should_quit);
    assert_eq!(runner.runtime().state().search.query(), "");
    assert_eq!(source.searches.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn test_resize_reaches_reader_layout() -> Result<()> {
    let (runner, _source) = run(initial_state()?, vec![Event::Resize(100, 30)]).await?;
    let reader = &runner.runtime().state().reader;
    assert_eq!((reader.width, reader.height), (100, 30));
    Ok(())
}
