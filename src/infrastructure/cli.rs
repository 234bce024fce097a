use clap::Parser;

use crate::utils::version;

const EXTENDED_HELP: &str = "\
Type into the search bar to search for articles.
- Move cursor `*`:             up and down arrow keys
- Open the selected article:   enter
- Navigate the article reader: arrow keys or vim/less controls
- Return to search page:       left arrow key
- Quit:                        escape or Ctrl+C";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    author,
    version = version(),
    about = "wki - Wikipedia at your fingertips",
    after_help = EXTENDED_HELP
)]
pub struct Cli {
    /// Optional starting topic to search, e.g. `wki -t Lions`
    #[arg(short, long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Wikipedia language edition (overrides the config file)
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Print one article to stdout instead of starting the TUI
    #[arg(short, long, value_name = "TITLE")]
    pub print: Option<String>,

    /// Disable text decorations
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Tick rate, i.e. number of ticks per second
    #[arg(long, value_name = "FLOAT", default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(long, value_name = "FLOAT", default_value_t = 30.0)]
    pub frame_rate: f64,
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, CommandFactory};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wki"]).expect("no arguments is valid");
        assert_eq!(cli.topic, None);
        assert_eq!(cli.lang, None);
        assert!(!cli.plain);
        assert_eq!(cli.tick_rate, 4.0);
    }

    #[test]
    fn test_topic_and_print() {
        let cli = Cli::try_parse_from(["wki", "-t", "Lions", "--print", "Fork", "--plain"])
            .expect("valid arguments");
        assert_eq!(cli.topic.as_deref(), Some("Lions"));
        assert_eq!(cli.print.as_deref(), Some("Fork"));
        assert!(cli.plain);
    }

    #[test]
    fn test_stray_arguments_are_rejected() {
        let err = Cli::try_parse_from(["wki", "garbage"]).expect_err("positional args are invalid");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
