//! # wki - Wikipedia at your fingertips
//!
//! A terminal client for reading Wikipedia articles, built with Rust and Ratatui.
//! Article source (wikitext) is turned into readable, optionally decorated
//! terminal text by a fixed sequence of rewriting passes.
//!
//! ## Architecture Overview
//!
//! The interactive part follows the Elm architecture:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (API requests, terminal resizes)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use wki::domain::wikitext::Renderer;
//!
//! let text = Renderer::plain().render("A '''fork''' is a [[cutlery|utensil]].");
//! assert_eq!(text, "A fork is a utensil.");
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Articles and the wikitext renderer
//! - [`core`] - Elm architecture state, messages and update logic
//! - [`infrastructure`] - CLI, configuration, terminal and Wikipedia API client
//! - [`integration`] - Runtime and main loop wiring
//! - [`presentation`] - UI components, widgets, keybindings and styles
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};
pub use domain::wikitext::{render, Renderer};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
