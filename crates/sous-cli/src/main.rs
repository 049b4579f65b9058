//! Sous CLI Application
//!
//! Terminal front end for the sous recipe assistant: one-shot commands for
//! generating, inspecting and cooking recipes, and an interactive mode when
//! no command is given.

mod app;
mod args;
mod cli;
mod cooking;
mod renderer;

use anyhow::{Context, Result};
use app::App;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use sous_core::Config;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        api_key,
        no_color,
        mute,
        command,
    } = Args::parse();

    let config = Config::load(config.as_deref())
        .context("Failed to load configuration")?
        .with_api_key(api_key);

    let cli = Cli::new(config, TerminalRenderer::new(!no_color), mute);

    info!("Sous started");

    match command {
        Some(Generate(args)) => cli.generate(&args).await,
        Some(Search(args)) => cli.search(&args).await,
        Some(Show(args)) => cli.show(&args),
        Some(Substitutes(args)) => cli.substitutes(&args).await,
        Some(Analyze(args)) => cli.analyze(&args).await,
        Some(Cook(args)) => cli.cook(&args).await,
        Some(Feedback(args)) => cli.feedback(&args),
        Some(About) => cli.about(),
        None => App::new(&cli).run().await,
    }
}
