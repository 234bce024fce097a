use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // {{Infobox ..., {{Taxobox ..., {{Automatic taxobox ...
    static ref INFOBOX_OPENER: Regex =
        Regex::new(r"\{\{[a-zA-Z0-9_-]+(?:\s[a-zA-Z0-9_-]+)?box").expect("valid infobox pattern");
}

/// Deletes the first `{{...box` template together with everything nested in it.
///
/// Only one block is removed per call. If the opener is never balanced the
/// text is returned unchanged.
pub fn remove_infobox(text: &str) -> String {
    let Some(opener) = INFOBOX_OPENER.find(text) else {
        return text.to_string();
    };
    let start = opener.start();

    match closing_brace(text, start) {
        Some(end) => format!("{}{}", &text[..start], &text[end..]),
        None => text.to_string(),
    }
}

/// Byte offset just past the `}` that brings the brace depth back to zero.
fn closing_brace(text: &str, start: usize) -> Option<usize> {
    let mut depth: usize = 0;
    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(start + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}
