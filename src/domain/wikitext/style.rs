use std::{collections::HashMap, fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Decoration categories the renderer can apply to a span of text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum StyleKind {
    Link,
    Description,
    Bold,
    Italic,
    BoldItalic,
    Note,
}

pub type Decorator = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Read-only mapping from [`StyleKind`] to a decoration function.
///
/// Kinds without an entry are rendered undecorated, so `StyleTable::default()`
/// is the plain-text table.
#[derive(Clone, Default)]
pub struct StyleTable {
    decorators: HashMap<StyleKind, Decorator>,
}

impl StyleTable {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn with<F>(mut self, kind: StyleKind, decorate: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.decorators.insert(kind, Arc::new(decorate));
        self
    }

    pub fn decorate(&self, kind: StyleKind, text: &str) -> String {
        match self.decorators.get(&kind) {
            Some(decorate) => decorate(text),
            None => text.to_string(),
        }
    }
}

impl fmt::Debug for StyleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<StyleKind> = StyleKind::iter()
            .filter(|kind| self.decorators.contains_key(kind))
            .collect();
        f.debug_struct("StyleTable").field("decorated", &kinds).finish()
    }
}
