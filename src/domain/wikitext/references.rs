use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `<ref>` or `<ref attrs>` up to the nearest `</ref>`. Self-closing
    // `<ref name=x/>` never opens a span.
    static ref REFERENCE: Regex =
        Regex::new(r"(?s)<ref(?:\s[^>]*[^>/])?\s*>.*?</ref>").expect("valid reference pattern");
}

/// Removes every paired `<ref ...>...</ref>` citation block.
///
/// Unclosed opening tags are left in place.
pub fn strip_references(text: &str) -> String {
    REFERENCE.replace_all(text, "").into_owned()
}
