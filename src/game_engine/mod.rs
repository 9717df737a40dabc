//! Game state machine
//!
//! Owns the board and score bookkeeping for one session and runs the
//! per-input pipeline: move, spawn, record score, check win, check game over.
//! The engine performs no I/O. Everything the caller has to react to is
//! reported through a [`GameObserver`].

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::models::board::Board;
use crate::models::constants::INITIAL_TILES;
use crate::models::direction::Direction;
use crate::models::tile::{Tile, TileIdAllocator};
use crate::services::movement::slide;
use crate::services::spawn::spawn_tile;

/// Callbacks from the engine to the presentation layer. All methods default
/// to no-ops so observers only implement what they need.
pub trait GameObserver {
    /// The board changed after an accepted move or a spawn.
    fn on_board_changed(&mut self, _board: &Board) {}
    /// The session just became unwinnable. Fired once per session.
    fn on_game_over(&mut self, _final_score: u32) {}
    /// A tile reached the win value for the first time. Fired once per session.
    fn on_won(&mut self, _score_at_win: u32) {}
    /// The best score was raised and should be persisted.
    fn on_best_score(&mut self, _best_score: u32) {}
}

/// Observer that ignores every event.
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub changed: bool,
    pub score_delta: u32,
}

impl MoveResult {
    pub const UNCHANGED: MoveResult = MoveResult {
        changed: false,
        score_delta: 0,
    };
}

/// What the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Won and the player has not chosen to keep going yet.
    Won,
    Over,
}

/// Core game engine for a single session
pub struct GameEngine {
    board: Board,
    current_score: u32,
    best_score: u32,
    is_over: bool,
    has_won: bool,
    continue_after_win: bool,
    win_value: u32,
    four_probability: f64,
    ids: TileIdAllocator,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine with the classic rules on a 4x4 board
    ///
    /// # Arguments
    ///
    /// * `seed` - Random number generator seed for tile spawns
    ///
    /// The board is empty until [`GameEngine::start`] is called.
    pub fn new(seed: u64) -> Self {
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        };
        Self::with_config(&config)
    }

    /// Creates an engine from a validated configuration. Draws a random seed
    /// when the configuration has none.
    pub fn with_config(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!("engine seeded with {}", seed);
        Self {
            board: Board::new(config.board_size),
            current_score: 0,
            best_score: 0,
            is_over: false,
            has_won: false,
            continue_after_win: false,
            win_value: config.win_value,
            four_probability: config.four_probability,
            ids: TileIdAllocator::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // ========== Accessor Methods ==========

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn continue_after_win(&self) -> bool {
        self.continue_after_win
    }

    pub fn win_value(&self) -> u32 {
        self.win_value
    }

    /// Which overlay, if any, applies to the current session
    pub fn state(&self) -> GameState {
        if self.is_over {
            GameState::Over
        } else if self.has_won && !self.continue_after_win {
            GameState::Won
        } else {
            GameState::Playing
        }
    }

    // ========== Session Lifecycle ==========

    /// Start a new session, discarding the previous one.
    ///
    /// Clears the board, zeroes the score and flags, adopts
    /// `initial_best_score` and spawns the opening tiles.
    pub fn start(&mut self, initial_best_score: u32, observer: &mut dyn GameObserver) {
        self.board.clear();
        self.current_score = 0;
        self.best_score = initial_best_score;
        self.is_over = false;
        self.has_won = false;
        self.continue_after_win = false;

        for _ in 0..INITIAL_TILES {
            self.spawn(observer);
        }
        tracing::info!("new {0}x{0} game, best score {1}", self.size(), self.best_score);
    }

    /// Keep playing after a win. Only affects [`GameEngine::state`].
    pub fn continue_play(&mut self) {
        self.continue_after_win = true;
    }

    /// Raise the best score if `score` beats it.
    ///
    /// Returns true and notifies the observer when the best score changed.
    pub fn record_score(&mut self, score: u32, observer: &mut dyn GameObserver) -> bool {
        if score <= self.best_score {
            return false;
        }
        self.best_score = score;
        tracing::info!("new best score {}", score);
        observer.on_best_score(score);
        true
    }

    // ========== Input Pipeline ==========

    /// Process one directional input end to end.
    ///
    /// Order: move, then on change spawn and record the score, then check
    /// for a win and for game over. A no-op move spawns nothing.
    pub fn submit_direction(
        &mut self,
        direction: Direction,
        observer: &mut dyn GameObserver,
    ) -> MoveResult {
        if self.is_over {
            return MoveResult::UNCHANGED;
        }

        let result = self.apply_move(direction);
        if result.changed {
            observer.on_board_changed(&self.board);
            self.spawn(observer);
            if result.score_delta > 0 {
                self.record_score(self.current_score, observer);
            }
        }

        self.check_win_condition(observer);
        self.check_game_over(observer);
        result
    }

    /// Slide the board toward `direction` without spawning.
    ///
    /// A move that changes nothing leaves the board and score untouched.
    /// Always a no-op once the session is over.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if self.is_over {
            return MoveResult::UNCHANGED;
        }

        let outcome = slide(&self.board, direction, &mut self.ids);
        if !outcome.changed {
            tracing::debug!("move {} rejected: nothing to slide", direction);
            return MoveResult::UNCHANGED;
        }

        self.board = outcome.board;
        self.current_score += outcome.score_delta;
        tracing::debug!(
            "move {}: {} merges, +{} (score {})",
            direction,
            outcome.merges,
            outcome.score_delta,
            self.current_score
        );

        MoveResult {
            changed: true,
            score_delta: outcome.score_delta,
        }
    }

    /// Spawn one tile on a random empty cell. No-op on a full board.
    pub fn spawn(&mut self, observer: &mut dyn GameObserver) -> Option<Tile> {
        let tile = spawn_tile(&mut self.board, &mut self.rng, &mut self.ids, self.four_probability)?;
        tracing::trace!("spawned {} at ({}, {}) = {}", tile.id, tile.x, tile.y, tile.value);
        self.board.debug_assert_valid();
        observer.on_board_changed(&self.board);
        Some(tile)
    }

    pub fn has_possible_moves(&self) -> bool {
        self.board.has_possible_moves()
    }

    /// Mark the session over if no move is possible.
    ///
    /// # Returns
    ///
    /// Whether the session is over. The observer hears about the
    /// transition only once.
    pub fn check_game_over(&mut self, observer: &mut dyn GameObserver) -> bool {
        if self.is_over {
            return true;
        }
        if self.has_possible_moves() {
            return false;
        }

        self.is_over = true;
        tracing::info!("game over with score {}", self.current_score);
        self.record_score(self.current_score, observer);
        observer.on_game_over(self.current_score);
        true
    }

    /// Mark the session won if any tile reached the win value.
    ///
    /// # Returns
    ///
    /// Whether the session has been won. The observer hears about the
    /// first win only.
    pub fn check_win_condition(&mut self, observer: &mut dyn GameObserver) -> bool {
        if self.has_won {
            return true;
        }
        if self.board.max_value() < self.win_value {
            return false;
        }

        self.has_won = true;
        tracing::info!("reached {} with score {}", self.win_value, self.current_score);
        observer.on_won(self.current_score);
        true
    }

    /// Replace the board, e.g. to set up a position in tests or tooling.
    ///
    /// Flags and score are kept. Future tile ids are kept clear of the ids
    /// already on `board`.
    pub fn load_board(&mut self, board: Board) {
        board.debug_assert_valid();
        if let Some(max_id) = board.tiles().iter().map(|t| t.id).max() {
            self.ids.reserve_past(max_id);
        }
        self.board = board;
    }
}
