use std::collections::VecDeque;
use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::{textarea_engine::TuiTextAreaEngine, wikipedia::ArticleSource},
};

/// Drives the Elm loop: queues raw and domain messages, runs `update`, and
/// hands the resulting commands to the executor.
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without a command executor; commands only queue up
    pub fn new(initial_state: AppState) -> Self {
        static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose commands run against `source`
    pub fn new_with_source(initial_state: AppState, source: Arc<dyn ArticleSource>) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(source, runtime.raw_msg_tx.clone()));
        runtime
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) -> bool {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_tui_sender(tui_sender);
                true
            }
            None => false,
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Queue a command as if `update` had produced it
    pub fn enqueue_cmd(&mut self, cmd: Cmd) {
        self.cmd_queue.push_back(cmd);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<usize> {
        let Some(executor) = &self.cmd_executor else {
            return Ok(0);
        };
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        executor.execute_commands(&commands)?;
        Ok(commands.len())
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &self.ctx);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Locally queued raw messages first, then those from background tasks
        let mut raw_msgs: Vec<RawMsg> = self.raw_msg_queue.drain(..).collect();
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            raw_msgs.push(raw_msg);
        }

        // Translation sees the state as updated by earlier messages.
        for raw_msg in raw_msgs {
            if !raw_msg.is_frequent() {
                log::trace!("raw: {raw_msg:?}");
            }
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            for msg in domain_msgs {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<usize> {
        self.process_all_messages();
        self.execute_pending_commands()
    }
}
