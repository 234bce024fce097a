//! ANSI-decorated display text to ratatui text
//!
//! Article bodies carry SGR escape sequences produced by the configured
//! style table. Only SGR (`ESC [ ... m`) is interpreted; any other escape
//! sequence is dropped.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthChar;

const ESC: char = '\u{1b}';

/// Parses `s` into lines of styled spans. Styles carry over line breaks.
pub fn parse(s: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut style = Style::default();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                flush(&mut spans, &mut current, style);
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            ESC => {
                if chars.peek() != Some(&'[') {
                    chars.next();
                    continue;
                }
                chars.next();
                let mut params = String::new();
                let mut terminator = None;
                for c in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&c) {
                        terminator = Some(c);
                        break;
                    }
                    params.push(c);
                }
                if terminator == Some('m') {
                    flush(&mut spans, &mut current, style);
                    style = apply_sgr(style, &params);
                }
            }
            c => current.push(c),
        }
    }
    flush(&mut spans, &mut current, style);
    lines.push(Line::from(spans));
    lines
}

fn flush(spans: &mut Vec<Span<'static>>, current: &mut String, style: Style) {
    if !current.is_empty() {
        spans.push(Span::styled(std::mem::take(current), style));
    }
}

fn apply_sgr(mut style: Style, params: &str) -> Style {
    let codes: Vec<u16> = if params.is_empty() {
        vec![0]
    } else {
        params
            .split(';')
            .map(|p| p.parse().unwrap_or(0))
            .collect()
    };

    let mut codes = codes.into_iter();
    while let Some(code) = codes.next() {
        style = match code {
            0 => Style::default(),
            1 => style.add_modifier(Modifier::BOLD),
            2 => style.add_modifier(Modifier::DIM),
            3 => style.add_modifier(Modifier::ITALIC),
            4 => style.add_modifier(Modifier::UNDERLINED),
            5 => style.add_modifier(Modifier::SLOW_BLINK),
            6 => style.add_modifier(Modifier::RAPID_BLINK),
            7 => style.add_modifier(Modifier::REVERSED),
            8 => style.add_modifier(Modifier::HIDDEN),
            9 => style.add_modifier(Modifier::CROSSED_OUT),
            21 | 22 => style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            23 => style.remove_modifier(Modifier::ITALIC),
            24 => style.remove_modifier(Modifier::UNDERLINED),
            25 => style.remove_modifier(Modifier::SLOW_BLINK | Modifier::RAPID_BLINK),
            27 => style.remove_modifier(Modifier::REVERSED),
            28 => style.remove_modifier(Modifier::HIDDEN),
            29 => style.remove_modifier(Modifier::CROSSED_OUT),
            30..=37 => style.fg(Color::Indexed((code - 30) as u8)),
            90..=97 => style.fg(Color::Indexed((code - 90 + 8) as u8)),
            40..=47 => style.bg(Color::Indexed((code - 40) as u8)),
            100..=107 => style.bg(Color::Indexed((code - 100 + 8) as u8)),
            38 => match extended_color(&mut codes) {
                Some(color) => style.fg(color),
                None => style,
            },
            48 => match extended_color(&mut codes) {
                Some(color) => style.bg(color),
                None => style,
            },
            39 => Style { fg: None, ..style },
            49 => Style { bg: None, ..style },
            _ => style,
        };
    }
    style
}

fn extended_color(codes: &mut impl Iterator<Item = u16>) -> Option<Color> {
    match codes.next()? {
        5 => Some(Color::Indexed(codes.next()? as u8)),
        2 => {
            let r = codes.next()? as u8;
            let g = codes.next()? as u8;
            let b = codes.next()? as u8;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Hard-wraps styled lines to `width` columns, breaking between characters.
/// Double-width characters never straddle a row boundary.
pub fn wrap_styled(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }

    let mut wrapped = Vec::new();
    for line in lines {
        let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new()];
        let mut current_width = 0;
        for span in line.spans {
            for c in span.content.chars() {
                let char_width = c.width().unwrap_or(0);
                if current_width + char_width > width && current_width > 0 {
                    rows.push(Vec::new());
                    current_width = 0;
                }
                current_width += char_width;
                if let Some(row) = rows.last_mut() {
                    push_char(row, c, span.style);
                }
            }
        }
        wrapped.extend(rows.into_iter().map(Line::from));
    }
    wrapped
}

fn push_char(row: &mut Vec<Span<'static>>, c: char, style: Style) {
    match row.last_mut() {
        Some(last) if last.style == style => last.content.to_mut().push(c),
        _ => row.push(Span::styled(c.to_string(), style)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(
            parse("a\nb"),
            vec![Line::from(vec![Span::raw("a")]), Line::from(vec![Span::raw("b")])]
        );
        assert_eq!(parse(""), vec![Line::from(Vec::<Span>::new())]);
    }

    #[test]
    fn test_bold_span() {
        let lines = parse("a \u{1b}[1mfork\u{1b}[0m!");
        assert_eq!(
            lines,
            vec![Line::from(vec![
                Span::raw("a "),
                Span::styled("fork", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("!"),
            ])]
        );
    }

    #[rstest]
    #[case("38;2;4;181;117", Style::default().fg(Color::Rgb(4, 181, 117)))]
    #[case("38;5;208", Style::default().fg(Color::Indexed(208)))]
    #[case("31", Style::default().fg(Color::Indexed(1)))]
    #[case("1;3", Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC))]
    #[case(
        "1;22",
        Style::default()
            .add_modifier(Modifier::BOLD)
            .remove_modifier(Modifier::BOLD | Modifier::DIM)
    )]
    #[case("38;2", Style::default())]
    fn test_apply_sgr(#[case] params: &str, #[case] expected: Style) {
        assert_eq!(apply_sgr(Style::default(), params), expected);
    }

    #[test]
    fn test_style_carries_across_lines() {
        let italic = Style::default().add_modifier(Modifier::ITALIC);
        let lines = parse("\u{1b}[3mone\ntwo\u{1b}[23m");
        assert_eq!(
            lines,
            vec![
                Line::from(vec![Span::styled("one", italic)]),
                Line::from(vec![Span::styled("two", italic)]),
            ]
        );
    }

    #[test]
    fn test_non_sgr_sequences_are_dropped() {
        assert_eq!(
            parse("a\u{1b}[2Kb\u{1b}7c"),
            vec![Line::from(vec![Span::raw("abc")])]
        );
    }

    #[test]
    fn test_wrap_styled_keeps_styles() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![Line::from(vec![Span::raw("ab"), Span::styled("cde", bold)])];
        assert_eq!(
            wrap_styled(lines, 3),
            vec![
                Line::from(vec![Span::raw("ab"), Span::styled("c", bold)]),
                Line::from(vec![Span::styled("de", bold)]),
            ]
        );
    }

    #[rstest]
    #[case("hello, world!", 13, vec!["hello, world!"])]
    #[case("hello, world!", 4, vec!["hell", "o, w", "orld", "!"])]
    #[case("ab\n\ncdef", 2, vec!["ab", "", "cd", "ef"])]
    #[case("こんにちは、世界！", 7, vec!["こんに", "ちは、", "世界！"])]
    #[case("🥳🍉🐶🥳🍉🐶", 5, vec!["🥳🍉", "🐶🥳", "🍉🐶"])]
    #[case("\u{1b}[1mbold text\u{1b}[0m", 10, vec!["bold text"])]
    #[case("", 10, vec![""])]
    #[case("hello", 0, vec![])]
    fn test_wrap_styled_rows(
        #[case] text: &str,
        #[case] width: usize,
        #[case] expected: Vec<&str>,
    ) {
        let rows: Vec<String> = wrap_styled(parse(text), width)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert_eq!(rows, expected);
    }
}
