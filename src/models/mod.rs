//! Domain models
//!
//! This module contains the board, tile and direction types the engine
//! operates on. Models are pure data structures with minimal logic.

pub mod board;
pub mod constants;
pub mod direction;
pub mod errors;
pub mod position;
pub mod tile;
