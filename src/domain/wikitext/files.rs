const FILE_PREFIX: &str = "[[File:";

/// Drops every line that, once trimmed, starts with `[[File:`.
pub fn drop_file_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().starts_with(FILE_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}
