//! Game configuration
//!
//! Values come from defaults, then an optional TOML file, then command-line
//! overrides applied by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::constants::{DEFAULT_BOARD_SIZE, FOUR_PROBABILITY, MIN_BOARD_SIZE, WIN_VALUE};
use crate::models::errors::{GameError, GameResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length N of the square board.
    pub board_size: usize,
    /// Tile value that triggers the win event.
    pub win_value: u32,
    /// Probability that a spawned tile is a 4.
    pub four_probability: f64,
    /// RNG seed. A random seed is drawn when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Path of the local best-score file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    /// Path of the shared (remote) score file backing the leaderboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_path: Option<PathBuf>,
    /// User identity scores are recorded under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Leaderboard name. Defaults to the user identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            win_value: WIN_VALUE,
            four_probability: FOUR_PROBABILITY,
            seed: None,
            store_path: None,
            remote_path: None,
            user: None,
            display_name: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "board_size must be at least {}, got {}",
                MIN_BOARD_SIZE, self.board_size
            )));
        }
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(GameError::InvalidConfig(format!(
                "win_value must be a power of two >= 4, got {}",
                self.win_value
            )));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::InvalidConfig(format!(
                "four_probability must be within [0, 1], got {}",
                self.four_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 4);
        assert_eq!(config.win_value, 2048);
        assert!((config.four_probability - 0.1).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("board_size = 5\nseed = 7\n").unwrap();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.win_value, 2048);
        assert_eq!(config.user, None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cases = [
            "board_size = 1",
            "win_value = 1000",
            "win_value = 2",
            "four_probability = 1.5",
        ];
        for text in &cases {
            assert!(
                matches!(GameConfig::from_toml_str(text), Err(GameError::InvalidConfig(_))),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_toml_str("board_size = \"four\""),
            Err(GameError::ConfigParse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        fs::write(&path, "win_value = 512\nuser = \"ada\"\ndisplay_name = \"Ada L.\"\n").unwrap();
        let config = GameConfig::from_toml(&path).unwrap();
        assert_eq!(config.win_value, 512);
        assert_eq!(config.user.as_deref(), Some("ada"));
        assert_eq!(config.display_name.as_deref(), Some("Ada L."));
    }
}
