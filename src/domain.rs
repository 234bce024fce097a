//! Domain logic
//!
//! This module contains the I/O-free core of the reader:
//! - Wikitext rendering
//! - Article model

pub mod article;
pub mod wikitext;
