use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::style::{StyleKind, StyleTable};

lazy_static! {
    static ref BOLD_ITALIC: Regex = Regex::new(r"(?s)'''''(.*?)'''''").expect("valid pattern");
    static ref BOLD: Regex = Regex::new(r"(?s)'''(.*?)'''").expect("valid pattern");
    static ref ITALIC: Regex = Regex::new(r"(?s)''(.*?)''").expect("valid pattern");
}

/// Resolves quote emphasis, longest delimiter first.
pub fn resolve_emphasis(text: &str, styles: &StyleTable) -> String {
    [
        (&*BOLD_ITALIC, StyleKind::BoldItalic),
        (&*BOLD, StyleKind::Bold),
        (&*ITALIC, StyleKind::Italic),
    ]
    .into_iter()
    .fold(text.to_string(), |acc, (pattern, kind)| {
        pattern
            .replace_all(&acc, |caps: &Captures| styles.decorate(kind, &caps[1]))
            .into_owned()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn tagged() -> StyleTable {
        StyleTable::identity()
            .with(StyleKind::BoldItalic, |s| format!("<bi>{s}</bi>"))
            .with(StyleKind::Bold, |s| format!("<b>{s}</b>"))
            .with(StyleKind::Italic, |s| format!("<i>{s}</i>"))
    }

    #[rstest]
    #[case("", "")]
    #[case("it's", "it's")]
    #[case("'''''both'''''", "<bi>both</bi>")]
    #[case("'''bold'''", "<b>bold</b>")]
    #[case("''italic''", "<i>italic</i>")]
    #[case("A '''fork''' is ''not'' a '''''spoon'''''.", "A <b>fork</b> is <i>not</i> a <bi>spoon</bi>.")]
    #[case("''across\nlines''", "<i>across\nlines</i>")]
    #[case("'''unclosed", "'''unclosed")]
    #[case("''''''", "<b></b>")]
    fn test_resolve_emphasis(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(resolve_emphasis(input, &tagged()), expected);
    }
}
