use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Comments, element tags and declarations. A bare `<` that does not start
    // a tag name (`a < b`) is text. Quoted attribute values may hold `<` or `>`.
    static ref HTML_TAG: Regex = Regex::new(
        r#"(?s)<!--.*?-->|</?[A-Za-z](?:[^<>"']|"[^"]*"|'[^']*')*>|<![^<>]*>"#
    )
    .expect("valid tag pattern");
}

/// Removes residual HTML markup, keeping the text between tags.
pub fn strip_html_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}
