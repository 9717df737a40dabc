//! 2048 Game Engine
//!
//! A Rust implementation of the 2048 sliding-tile puzzle with persisted
//! best scores and a leaderboard.
//!
//! # Overview
//!
//! The [`GameEngine`] is a synchronous state machine over a sparse board.
//! Each directional input runs a fixed pipeline: slide and merge, spawn a
//! tile if anything moved, raise the best score, then check for a win and
//! for game over. The engine performs no I/O; callers observe it through
//! [`GameObserver`] and persist scores through a [`store::ScoreStore`].
//!
//! # Modules
//!
//! - [`game_engine`] - Session state machine and observer callbacks
//! - [`models`] - Domain models (Board, Tile, Direction, etc.)
//! - [`services`] - Slide/merge, spawning, score sync and the terminal driver
//! - [`store`] - Best-score persistence backends
//! - [`config`] - Game configuration
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of boards, scores and overlays
//!
//! # Example
//!
//! ```rust
//! use game2048::{Direction, GameEngine, NullObserver};
//!
//! let mut engine = GameEngine::new(42);
//! engine.start(0, &mut NullObserver);
//! let result = engine.submit_direction(Direction::Left, &mut NullObserver);
//! println!("changed: {}, score: {}", result.changed, engine.current_score());
//! ```

pub mod cli;
pub mod config;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use config::GameConfig;
pub use game_engine::{GameEngine, GameObserver, GameState, MoveResult, NullObserver};
pub use models::board::Board;
pub use models::direction::Direction;
pub use models::errors::{GameError, GameResult, StoreError, StoreResult};
pub use models::tile::{Tile, TileId};
