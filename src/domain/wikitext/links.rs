use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::style::{StyleKind, StyleTable};

lazy_static! {
    static ref WIKILINK: Regex = Regex::new(r"(?s)\[\[(.*?)\]\]").expect("valid wikilink pattern");
}

/// Turns `[[target|display]]` into the decorated display text and any other
/// `[[...]]` into the decorated inner content.
pub fn resolve_links(text: &str, styles: &StyleTable) -> String {
    WIKILINK
        .replace_all(text, |caps: &Captures| {
            let inner = &caps[1];
            let parts: Vec<&str> = inner.split('|').collect();
            match parts.as_slice() {
                [_target, display] => styles.decorate(StyleKind::Link, display),
                _ => styles.decorate(StyleKind::Link, inner),
            }
        })
        .into_owned()
}
