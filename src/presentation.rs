//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Elm-based page components
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
