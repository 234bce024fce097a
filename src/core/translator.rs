use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::config::keybindings::Action;
use crate::core::{
    msg::{reader::ReaderMsg, search::SearchMsg, system::SystemMsg, Msg},
    raw_msg::RawMsg,
    state::{AppState, Page},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // API responses
        RawMsg::SearchCompleted { query, results } => {
            vec![Msg::Search(SearchMsg::ResultsReceived { query, results })]
        }
        RawMsg::SearchFailed { query, error } => {
            // Errors for queries the user has already moved past are noise.
            if query == state.search.query() {
                vec![Msg::System(SystemMsg::ShowError(error))]
            } else {
                log::debug!("ignoring failure of stale search {query:?}: {error}");
                vec![]
            }
        }
        RawMsg::ArticleLoaded { requested, article } => {
            vec![Msg::Reader(ReaderMsg::ContentLoaded { requested, article })]
        }
        RawMsg::ArticleFailed { requested, error } => {
            vec![Msg::Reader(ReaderMsg::LoadFailed { requested, error })]
        }

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let mut msgs = Vec::new();
    // Any key press dismisses the info line.
    if state.system.status_message.is_some() {
        msgs.push(Msg::System(SystemMsg::ClearStatusMessage));
    }

    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Esc, ..
        } => {
            msgs.push(Msg::System(SystemMsg::Quit));
            return msgs;
        }
        _ => {}
    }

    match state.page {
        Page::Search => msgs.extend(translate_search_keys(key)),
        Page::Reader => msgs.extend(translate_reader_keys(key, state)),
    }
    msgs
}

/// Key bindings on the search page; everything unbound goes to the query input
fn translate_search_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Up => vec![Msg::Search(SearchMsg::SelectPrevious)],
        KeyCode::Down => vec![Msg::Search(SearchMsg::SelectNext)],
        KeyCode::Enter => vec![Msg::Search(SearchMsg::OpenSelected)],
        _ => vec![Msg::Search(SearchMsg::Input(key))],
    }
}

/// Key bindings on the reader page, taken from the configuration
fn translate_reader_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.config.config.keybindings.action_for(&key) {
        Some(action) => vec![translate_action_to_msg(action)],
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action) -> Msg {
    match action {
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::ScrollUp => Msg::Reader(ReaderMsg::ScrollUp),
        Action::ScrollDown => Msg::Reader(ReaderMsg::ScrollDown),
        Action::PageUp => Msg::Reader(ReaderMsg::PageUp),
        Action::PageDown => Msg::Reader(ReaderMsg::PageDown),
        Action::ScrollToTop => Msg::Reader(ReaderMsg::ScrollToTop),
        Action::ScrollToBottom => Msg::Reader(ReaderMsg::ScrollToBottom),
        Action::Back => Msg::Reader(ReaderMsg::Back),
    }
}
