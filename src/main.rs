use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use game2048::cli::args::Args;
use game2048::io::TerminalIO;
use game2048::services::game::Game;
use game2048::services::scores::ScoreSync;
use game2048::store::{JsonFileStore, MemoryStore, ScoreStore};
use game2048::ui::presenters::LeaderboardPresenter;
use game2048::GameEngine;

fn init_tracing(default_filter: &str) {
    // RUST_LOG takes precedence over --log.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);

    let config = args.resolve_config().context("invalid configuration")?;

    let local: Box<dyn ScoreStore> = match &config.store_path {
        Some(path) => Box::new(
            JsonFileStore::open(path)
                .with_context(|| format!("opening score file {}", path.display()))?,
        ),
        None => Box::new(MemoryStore::new()),
    };
    let remote: Option<Box<dyn ScoreStore>> = match &config.remote_path {
        Some(path) => match JsonFileStore::open(path) {
            Ok(store) => Some(Box::new(store)),
            Err(err) => {
                // Remote scores are optional; play offline.
                tracing::warn!("remote score file {} unavailable: {}", path.display(), err);
                None
            }
        },
        None => None,
    };
    let scores = ScoreSync::new(local, remote, config.user.clone())
        .with_display_name(config.display_name.clone());

    if args.leaderboard {
        let entries = scores.leaderboard(game2048::models::constants::LEADERBOARD_LIMIT)?;
        let mut output = TerminalIO;
        LeaderboardPresenter::show_leaderboard(&entries, config.user.as_deref(), &mut output);
        return Ok(());
    }

    println!("*** 2048 ***");
    println!("JOIN THE TILES, GET TO {}!", config.win_value);
    println!();

    let engine = GameEngine::with_config(&config);
    let mut game = Game::new(engine, scores, TerminalIO, TerminalIO);
    game.run()?;
    Ok(())
}
