//! Modern reusable UI widgets
//!
//! This module contains reusable widgets that can be used
//! across different components.

pub mod ansi_text;
