//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Wikipedia API access

pub mod cli;
pub mod config;
pub mod textarea_engine;
pub mod tui;
pub mod wikipedia;
