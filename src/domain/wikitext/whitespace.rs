use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXCESS_NEWLINES: Regex = Regex::new(r"\n{4,}").expect("valid newline pattern");
}

/// Collapses any run of four or more newlines to exactly three.
pub fn collapse_newlines(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text, "\n\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("", "")]
    #[case("a\nb", "a\nb")]
    #[case("a\n\n\nb", "a\n\n\nb")]
    #[case("a\n\n\n\nb", "a\n\n\nb")]
    #[case("a\n\n\n\n\n\n\n\nb\n\n\n\n", "a\n\n\nb\n\n\n")]
    #[case("a\r\n\r\n\r\n\r\nb", "a\r\n\r\n\r\n\r\nb")]
    fn test_collapse_newlines(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(collapse_newlines(input), expected);
    }
}
