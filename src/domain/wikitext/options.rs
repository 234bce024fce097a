use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// Language codes whose `{{xx|...}}` templates pass their argument through.
pub const DEFAULT_LANGUAGES: [&str; 3] = ["en", "de", "fr"];

/// IPA transcription templates whose argument is kept verbatim.
pub const DEFAULT_IPA_TEMPLATES: [&str; 5] = ["IPA", "IPAc-cmn", "IPAc-yue", "IPAc-hu", "IPAc-pl"];

/// Character entities that wikitext source may contain literally.
/// `@` and `©` are not listed: wikitext allows them as-is.
pub const DEFAULT_ENTITIES: [(&str, &str); 2] = [("&nbsp;", " "), ("&quot;", "\"")];

/// Lookup tables consulted by the template and entity stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub languages: BTreeSet<String>,
    pub ipa_templates: BTreeSet<String>,
    pub entities: BTreeMap<String, String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            ipa_templates: DEFAULT_IPA_TEMPLATES.iter().map(|s| s.to_string()).collect(),
            entities: DEFAULT_ENTITIES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl RenderOptions {
    pub fn is_language(&self, code: &str) -> bool {
        self.languages.contains(code)
    }

    pub fn is_ipa_template(&self, name: &str) -> bool {
        self.ipa_templates.contains(name)
    }

    /// Adds user-supplied entries on top of the current tables.
    pub fn extend(&mut self, extra: &RenderTablesConfig) {
        self.languages.extend(extra.languages.iter().cloned());
        self.ipa_templates.extend(extra.ipa_templates.iter().cloned());
        self.entities
            .extend(extra.entities.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

/// The configurable part of [`RenderOptions`], as it appears in config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RenderTablesConfig {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub ipa_templates: Vec<String>,
    #[serde(default)]
    pub entities: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_tables() {
        let options = RenderOptions::default();
        assert!(options.is_language("de"));
        assert!(!options.is_language("ja"));
        assert!(options.is_ipa_template("IPAc-yue"));
        assert!(!options.is_ipa_template("ipa"));
        assert_eq!(options.entities.get("&nbsp;").map(String::as_str), Some(" "));
    }

    #[test]
    fn test_extend_keeps_defaults() {
        let mut options = RenderOptions::default();
        options.extend(&RenderTablesConfig {
            languages: vec!["ja".into()],
            ipa_templates: vec!["IPA-de".into()],
            entities: BTreeMap::from([("&ndash;".to_string(), "-".to_string())]),
        });
        assert!(options.is_language("ja"));
        assert!(options.is_language("en"));
        assert!(options.is_ipa_template("IPA-de"));
        assert_eq!(options.entities.len(), 3);
    }
}
