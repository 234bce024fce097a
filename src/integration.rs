//! Integration layer
//!
//! Connects the Elm core to the terminal and the article source.

pub mod app_runner;
pub mod runtime;
