pub const DEFAULT_BOARD_SIZE: usize = 4;
pub const MIN_BOARD_SIZE: usize = 2;

/// Tile value that wins the game.
pub const WIN_VALUE: u32 = 2048;

/// Number of tiles placed on an empty board at session start.
pub const INITIAL_TILES: usize = 2;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

pub const SMALL_TILE: u32 = 2;
pub const LARGE_TILE: u32 = 4;

pub const LEADERBOARD_LIMIT: usize = 10;

/// Store key for scores recorded without a signed-in user.
pub const ANONYMOUS_KEY: &str = "local";
