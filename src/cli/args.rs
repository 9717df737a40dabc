use std::path::PathBuf;

use clap::Parser;

use crate::config::GameConfig;
use crate::models::errors::GameResult;

/// Slide tiles, merge equal neighbours, reach 2048.
#[derive(Parser, Debug)]
#[command(name = "game2048", version)]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Board side length
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Tile value that wins the game
    #[arg(long, value_name = "VALUE")]
    pub win: Option<u32>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Local best-score file
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Shared score file used for the leaderboard
    #[arg(long, value_name = "FILE")]
    pub remote: Option<PathBuf>,

    /// User identity scores are recorded under
    #[arg(short, long)]
    pub user: Option<String>,

    /// Name shown on the leaderboard
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Print the leaderboard and exit
    #[arg(long)]
    pub leaderboard: bool,

    /// Log filter, e.g. "game2048=debug"
    #[arg(long, default_value = "warn")]
    pub log: String,
}

impl Args {
    /// Load the config file if given, then apply command-line overrides.
    pub fn resolve_config(&self) -> GameResult<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_toml(path)?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(win) = self.win {
            config.win_value = win;
        }
        if let Some(store) = &self.store {
            config.store_path = Some(store.clone());
        }
        if let Some(remote) = &self.remote {
            config.remote_path = Some(remote.clone());
        }
        if let Some(user) = &self.user {
            config.user = Some(user.clone());
        }
        if let Some(name) = &self.name {
            config.display_name = Some(name.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::GameError;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "game2048", "--seed", "5", "--size", "6", "-u", "ada", "--name", "Ada L.",
        ]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.board_size, 6);
        assert_eq!(config.user.as_deref(), Some("ada"));
        assert_eq!(config.display_name.as_deref(), Some("Ada L."));
        assert_eq!(config.win_value, 2048);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "board_size = 5\nwin_value = 1024\n").unwrap();
        let args = Args::parse_from([
            "game2048",
            "--config",
            path.to_str().unwrap(),
            "--win",
            "256",
        ]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.win_value, 256);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let args = Args::parse_from(["game2048", "--size", "1"]);
        assert!(matches!(args.resolve_config(), Err(GameError::InvalidConfig(_))));
    }
}
