//! Wikitext to terminal text
//!
//! Article source is rewritten by a fixed sequence of text passes rather than
//! parsed. Each pass is a total function over strings: malformed or unbalanced
//! markup is either left as-is or dropped, never reported.
//!
//! Pass order matters:
//! 1. citation blocks (`<ref>...</ref>`)
//! 2. the first infobox template
//! 3. remaining `{{...}}` templates
//! 4. `[[File:...]]` lines
//! 5. `[[...]]` links (after file lines, before tag stripping)
//! 6. HTML tags
//! 7. character entities
//! 8. quote emphasis
//! 9. runs of blank lines

pub mod emphasis;
pub mod entities;
pub mod files;
pub mod html;
pub mod infobox;
pub mod links;
pub mod options;
pub mod references;
pub mod style;
pub mod templates;
pub mod whitespace;

pub use options::{RenderOptions, RenderTablesConfig};
pub use style::{Decorator, StyleKind, StyleTable};

/// Renders raw wikitext into display text decorated through `styles`.
pub fn render(raw: &str, options: &RenderOptions, styles: &StyleTable) -> String {
    let text = references::strip_references(raw);
    let text = infobox::remove_infobox(&text);
    let text = templates::resolve_templates(&text, options, styles);
    let text = files::drop_file_lines(&text);
    let text = links::resolve_links(&text, styles);
    let text = html::strip_html_tags(&text);
    let text = entities::replace_entities(&text, &options.entities);
    let text = emphasis::resolve_emphasis(&text, styles);
    whitespace::collapse_newlines(&text)
}

/// Lookup tables and decorations bundled for repeated use.
///
/// Holds no mutable state; clones can be handed to concurrent tasks.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
    styles: StyleTable,
}

impl Renderer {
    pub fn new(options: RenderOptions, styles: StyleTable) -> Self {
        Self { options, styles }
    }

    pub fn plain() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn render(&self, raw: &str) -> String {
        render(raw, &self.options, &self.styles)
    }
}
