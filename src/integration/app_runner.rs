use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        tui::{Event, TuiLike},
        wikipedia::ArticleSource,
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Runner that drives the Elm runtime against a terminal.
///
/// The terminal is injected so tests can run the full loop on a `TestTui`.
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: T,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    components: Components,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(initial_state: AppState, source: Arc<dyn ArticleSource>, tui: T) -> Self {
        let initial_query = (!initial_state.search.input.is_blank())
            .then(|| initial_state.search.query().to_string());

        let mut runtime = Runtime::new_with_source(initial_state, source);
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx);
        if let Some(query) = initial_query {
            runtime.enqueue_cmd(Cmd::SearchArticles { query });
        }

        Self {
            runtime,
            tui,
            tui_rx,
            components: Components::new(),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    /// Run the main loop until the state asks to quit or the terminal stops
    /// producing events.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let size = self.tui.size()?;
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));

        let result = self.run_loop().await;
        self.tui.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        loop {
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            while let Ok(cmd) = self.tui_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui.resize(Rect::new(0, 0, width, height))?;
                    }
                }
            }

            self.render()?;

            if self.runtime.state().system.should_quit {
                break;
            }

            // Let spawned API tasks report before blocking on the terminal.
            tokio::task::yield_now().await;

            let Some(event) = self.tui.next().await else {
                break;
            };
            for raw in translate_event(event) {
                self.runtime.send_raw_msg(raw);
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui.draw(&mut |f| components.render(f, state))
    }
}

fn translate_event(event: Event) -> Vec<RawMsg> {
    match event {
        Event::Quit | Event::Closed => vec![RawMsg::Quit],
        Event::Tick => vec![RawMsg::Tick],
        Event::Render => vec![RawMsg::Render],
        Event::Resize(w, h) => vec![RawMsg::Resize(w, h)],
        Event::Key(key) => vec![RawMsg::Key(key)],
        // Pasted text is typed into whatever has focus, one key at a time.
        Event::Paste(s) => s
            .chars()
            .filter(|c| !c.is_control())
            .map(|c| RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
            .collect(),
        Event::Error => {
            log::warn!("terminal reported an input error");
            vec![]
        }
        Event::Init | Event::FocusGained | Event::FocusLost | Event::Mouse(_) => vec![],
    }
}
