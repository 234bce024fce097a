use std::collections::HashMap;
use std::str::FromStr;

use crossterm::style::{Attribute, Attributes, Color as CColor, ContentStyle};
use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use crate::domain::wikitext::{StyleKind, StyleTable};

/// Per-decoration styles, configured as strings such as `"bold #04B575"`
/// or `"italic white on blue"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<StyleKind, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(kind, style)| {
                let kind = StyleKind::from_str(&kind)
                    .map_err(|_| format!("Unknown style `{kind}`"))?;
                parse_style(&style).map(|style| (kind, style))
            })
            .map(|entry| entry.map_err(serde::de::Error::custom))
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Builds renderer decorators that wrap text in the matching ANSI
    /// sequences. Kinds without a configured style stay undecorated.
    pub fn style_table(&self) -> StyleTable {
        let mut table = StyleTable::identity();
        for (kind, style) in self.iter() {
            let content_style = content_style(*style);
            table = table.with(*kind, move |text| content_style.apply(text).to_string());
        }
        table
    }
}

pub fn parse_style(line: &str) -> Result<Style, String> {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None if lower.trim_start().starts_with("on ") => ("", lower.trim_start().get(3..)),
        None => (lower.as_str(), None),
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => style = style.add_modifier(modifier),
            None => style = style.fg(parse_color(word)?),
        }
    }
    if let Some(background) = background {
        let background = background.trim();
        if background.is_empty() {
            return Err(format!("Missing background color in `{line}`"));
        }
        style = style.bg(parse_color(background)?);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reversed" | "reverse" => Some(Modifier::REVERSED),
        "hidden" => Some(Modifier::HIDDEN),
        "crossed_out" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

fn parse_color(word: &str) -> Result<Color, String> {
    let indexed = word
        .strip_prefix("color")
        .or_else(|| word.strip_prefix("index"))
        .and_then(|n| n.parse::<u8>().ok());
    if let Some(index) = indexed {
        return Ok(Color::Indexed(index));
    }
    Color::from_str(word).map_err(|_| format!("Unable to parse color `{word}`"))
}

fn content_style(style: Style) -> ContentStyle {
    let mut attributes = Attributes::default();
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::SLOW_BLINK, Attribute::SlowBlink),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::HIDDEN, Attribute::Hidden),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ] {
        if style.add_modifier.contains(modifier) {
            attributes.set(attribute);
        }
    }
    ContentStyle {
        foreground_color: style.fg.and_then(to_crossterm_color),
        background_color: style.bg.and_then(to_crossterm_color),
        underline_color: None,
        attributes,
    }
}

fn to_crossterm_color(color: Color) -> Option<CColor> {
    let color = match color {
        Color::Reset => return None,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    };
    Some(color)
}
