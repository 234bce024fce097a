use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use wki::{
    core::state::AppState,
    domain::{
        article::Article,
        wikitext::{Renderer, StyleTable},
    },
    infrastructure::{
        cli::Cli, config::Config, tui::real::RealTui, wikipedia::WikipediaClient,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based, all keys optional)
    let config = Config::new()?;

    let lang = args.lang.clone().unwrap_or_else(|| config.lang.clone());
    let styles = if args.plain {
        StyleTable::identity()
    } else {
        config.styles.style_table()
    };
    let renderer = Renderer::new(config.render_options(), styles);
    let client = WikipediaClient::new(&lang, renderer)?;
    log::info!("using {} for {} ({})", client.api_url(), client.lang(), client.wiki_url());

    if let Some(title) = args.print {
        let article = client.load_article(Article::from_title(title)).await?;
        println!("{}", article.content);
        return Ok(());
    }

    let mut state = AppState::new_with_config(config);
    if let Some(topic) = &args.topic {
        state = state.with_topic(topic);
    }

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate)
        .paste(true);
    let mut runner = AppRunner::new(state, Arc::new(client), tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
