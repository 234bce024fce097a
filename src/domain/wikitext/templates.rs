use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::{
    options::RenderOptions,
    style::{StyleKind, StyleTable},
};

lazy_static! {
    // Ends at the nearest `}}`, so a template containing another template is
    // cut short at the inner close.
    static ref TEMPLATE: Regex = Regex::new(r"(?s)\{\{(.*?)\}\}").expect("valid template pattern");
}

/// Replaces every `{{...}}` span with its resolution, see [`resolve_template`].
pub fn resolve_templates(text: &str, options: &RenderOptions, styles: &StyleTable) -> String {
    TEMPLATE
        .replace_all(text, |caps: &Captures| {
            resolve_template(&caps[1], options, styles)
        })
        .into_owned()
}

/// Resolves the inner content of one template. The first matching rule wins:
///
/// 1. `short description|...`: the text after the pipe, as a description
/// 2. no pipe at all: dropped
/// 3. known language code: its argument
/// 4. IPA transcription template: its argument
/// 5. `transliteration`: the last argument
/// 6. names shorter than four characters: dropped
/// 7. `lang*` templates: the phrase argument
/// 8. anything else: dropped
pub fn resolve_template(inner: &str, options: &RenderOptions, styles: &StyleTable) -> String {
    if let Some(description) = short_description(inner) {
        return styles.decorate(StyleKind::Description, description);
    }

    let Some((name, rest)) = inner.split_once('|') else {
        return String::new();
    };

    if options.is_language(name) || options.is_ipa_template(name) {
        return rest.to_string();
    }

    if name == "transliteration" {
        return inner.rsplit('|').next().unwrap_or_default().to_string();
    }

    if name.chars().count() < 4 {
        return String::new();
    }

    let prefix: String = name.chars().take(4).collect::<String>().to_lowercase();
    if prefix == "lang" {
        return lang_phrase(inner, rest);
    }

    String::new()
}

fn short_description(inner: &str) -> Option<&str> {
    let (word, rest) = inner.split_once(' ')?;
    if !word.eq_ignore_ascii_case("short") {
        return None;
    }
    let (name, description) = match rest.split_once('|') {
        Some((name, description)) => (name, description),
        None => (rest, ""),
    };
    name.trim()
        .eq_ignore_ascii_case("description")
        .then_some(description)
}

/// `{{lang|fr|phrase}}` and `{{lang-fr|phrase}}` both yield `phrase`.
fn lang_phrase(inner: &str, rest: &str) -> String {
    if let Some((_, phrase)) = rest.split_once('|') {
        return phrase.to_string();
    }
    inner.split('|').nth(1).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn resolve(text: &str) -> String {
        resolve_templates(text, &RenderOptions::default(), &StyleTable::identity())
    }

    #[rstest]
    #[case("", "")]
    #[case("{{Short description|Eating utensil}}", "Eating utensil")]
    #[case("{{short description|Eating utensil}}", "Eating utensil")]
    #[case("{{SHORT DESCRIPTION|Eating utensil}}", "Eating utensil")]
    #[case("{{Short description}}", "")]
    #[case("{{Use dmy dates}}", "")]
    #[case("{{en|English}}", "English")]
    #[case("{{de|Gabel}}", "Gabel")]
    #[case("{{ja|fork}}", "")]
    #[case("{{IPA|/fɔːk/}}", "/fɔːk/")]
    #[case("{{IPAc-cmn|ch|a}}", "ch|a")]
    #[case("{{transliteration|ru|Moskva}}", "Moskva")]
    #[case("{{transliteration|Moskva}}", "Moskva")]
    #[case("{{cn|date=May 2024}}", "")]
    #[case("{{lang|fr|fourchette}}", "fourchette")]
    #[case("{{Lang-fr|fourchette}}", "fourchette")]
    #[case("{{langx|fr|fourchette|lit=fork}}", "fourchette|lit=fork")]
    #[case("{{lang|fr}}", "fr")]
    #[case("{{citation needed|date=May 2024}}", "")]
    #[case("a {{lang|fr|b}} c {{cn|x}} d", "a b c  d")]
    fn test_resolve_templates(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(resolve(input), expected);
    }

    #[test]
    fn test_short_description_is_decorated() {
        let styles = StyleTable::identity().with(StyleKind::Description, |s| format!("**{s}**"));
        let actual = resolve_templates(
            "{{Short description|Eating utensil}}",
            &RenderOptions::default(),
            &styles,
        );
        assert_eq!(actual, "**Eating utensil**");
    }

    #[test]
    fn test_short_prefix_without_description_is_not_a_description() {
        let styles = StyleTable::identity().with(StyleKind::Description, |s| format!("**{s}**"));
        let actual =
            resolve_templates("{{Short film|x}}", &RenderOptions::default(), &styles);
        assert_eq!(actual, "");
    }

    #[test]
    fn test_nested_template_closes_at_first_inner_brace_pair() {
        // The outer template ends at the inner `}}`; the outer close is left over.
        assert_eq!(resolve("a{{cite web|ref={{harvid|x}}|y=z}}b"), "a|y=z}}b");
        assert_eq!(resolve("{{lang|fr|{{en|x}}}}"), "{{en|x}}");
    }

    #[test]
    fn test_multibyte_template_names() {
        assert_eq!(resolve("{{ñañ|x}}"), "");
        assert_eq!(resolve("{{Ĺang|x}}"), "");
        assert_eq!(resolve("{{LÁNG|x}}"), "");
    }

    #[test]
    fn test_extended_language_table() {
        let mut options = RenderOptions::default();
        options.languages.insert("ja".to_string());
        let actual = resolve_templates("{{ja|フォーク}}", &options, &StyleTable::identity());
        assert_eq!(actual, "フォーク");
    }

    #[test]
    fn test_unterminated_template_is_left_alone() {
        assert_eq!(resolve("a {{lang|fr|b"), "a {{lang|fr|b");
    }
}
