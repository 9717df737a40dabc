//! Game services
//!
//! Slide/merge and spawn rules used by the engine, best-score
//! synchronisation, and the terminal game driver.

pub mod game;
pub mod movement;
pub mod scores;
pub mod spawn;
