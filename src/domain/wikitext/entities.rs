use std::collections::BTreeMap;

/// Replaces every occurrence of each entity with its literal text.
pub fn replace_entities(text: &str, entities: &BTreeMap<String, String>) -> String {
    entities
        .iter()
        .fold(text.to_string(), |acc, (entity, literal)| {
            acc.replace(entity.as_str(), literal)
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::domain::wikitext::options::RenderOptions;

    #[rstest]
    #[case("", "")]
    #[case("a&nbsp;b", "a b")]
    #[case("&quot;fork&quot;", "\"fork\"")]
    #[case("&amp; &lt;", "&amp; &lt;")]
    #[case("&nbsp&nbsp;", "&nbsp ")]
    fn test_replace_default_entities(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(replace_entities(input, &RenderOptions::default().entities), expected);
    }

    #[test]
    fn test_extended_table() {
        let mut entities = RenderOptions::default().entities;
        entities.insert("&ndash;".to_string(), "–".to_string());
        assert_eq!(replace_entities("1&ndash;2&nbsp;m", &entities), "1–2 m");
    }
}
