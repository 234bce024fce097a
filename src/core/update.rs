use crate::{
    core::{
        cmd::Cmd,
        msg::{reader::ReaderMsg, search::SearchMsg, system::SystemMsg, Msg},
        state::{AppState, Page},
        textarea_engine::TextAreaEngine,
    },
    infrastructure::textarea_engine::TuiTextAreaEngine,
};

/// Collaborators `update` needs but does not own
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
    update_with_context(msg, state, &UpdateContext { text_area: &ENGINE })
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(SystemMsg::Resize(width, height)) => {
            state.reader.resize(width, height);
            let commands = state.system.update(SystemMsg::Resize(width, height));
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Search(SearchMsg::Input(key)) => {
            let input = ctx.text_area.apply_keys(&state.search.input, &[key]);
            let commands = state.search.set_input(input);
            (state, commands)
        }

        Msg::Search(SearchMsg::OpenSelected) => {
            let commands = open_selected(&mut state);
            (state, commands)
        }

        // Search messages (delegated to SearchState)
        Msg::Search(search_msg) => {
            let commands = state.search.update(search_msg);
            (state, commands)
        }

        Msg::Reader(ReaderMsg::Back) => {
            state.page = Page::Search;
            state.reader.close();
            (state, vec![])
        }

        Msg::Reader(ReaderMsg::ContentLoaded { requested, article }) => {
            state.search.store_loaded(&requested, &article);
            let commands = state
                .reader
                .update(ReaderMsg::ContentLoaded { requested, article });
            (state, commands)
        }

        Msg::Reader(ReaderMsg::LoadFailed { requested, error }) => {
            if state.reader.is_waiting_for(&requested) {
                state.reader.close();
                state.page = Page::Search;
            }
            let commands = state.system.update(SystemMsg::ShowError(error));
            (state, commands)
        }

        // Reader messages (delegated to ReaderState)
        Msg::Reader(reader_msg) => {
            let commands = state.reader.update(reader_msg);
            (state, commands)
        }
    }
}

fn open_selected(state: &mut AppState) -> Vec<Cmd> {
    let Some(article) = state.search.selected_article().cloned() else {
        return vec![];
    };
    if article.is_placeholder() {
        return vec![];
    }

    state.page = Page::Reader;
    if article.is_loaded() {
        log::debug!("showing cached {:?}", article.title);
        state.reader.open(article);
        vec![]
    } else {
        state.reader.wait_for(article.clone());
        vec![Cmd::LoadArticle { article }]
    }
}
