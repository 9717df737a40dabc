//! Slide and merge
//!
//! Each line orthogonal to the motion is compacted toward the leading edge
//! and equal neighbours are merged in a single pass from that edge. A merged
//! tile is a new tile with a fresh id; both source ids are consumed.

use crate::models::board::Board;
use crate::models::direction::Direction;
use crate::models::position::Position;
use crate::models::tile::{Tile, TileId, TileIdAllocator};

/// Outcome of sliding a board in one direction.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub board: Board,
    /// Any tile changed position or any merge happened.
    pub changed: bool,
    /// Sum of the values of all tiles created by merges.
    pub score_delta: u32,
    pub merges: usize,
}

/// A slot of a line after merging, counted from the leading edge.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Kept(Tile),
    Merged { value: u32, consumed: [TileId; 2] },
}

/// Merge a compacted line ordered from the leading edge.
/// After a merge the scan skips past both consumed tiles.
fn merge_line(line: &[Tile]) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(line.len());
    let mut i = 0;
    while i < line.len() {
        match line.get(i + 1) {
            Some(next) if next.value == line[i].value => {
                slots.push(Slot::Merged {
                    value: line[i].value * 2,
                    consumed: [line[i].id, next.id],
                });
                i += 2;
            }
            _ => {
                slots.push(Slot::Kept(line[i]));
                i += 1;
            }
        }
    }
    slots
}

/// Slide every line of `board` toward `direction`.
///
/// # Arguments
///
/// * `board` - The board before the move. It is not modified.
/// * `direction` - Direction the tiles travel in
/// * `ids` - Allocator for the tiles created by merges
///
/// # Returns
///
/// The resulting board together with the change flag and score delta.
/// When `changed` is false the returned board equals the input.
pub fn slide(board: &Board, direction: Direction, ids: &mut TileIdAllocator) -> MoveOutcome {
    let size = board.size();
    let horizontal = direction.is_horizontal();
    let reversed = direction.toward_high_edge();

    let mut tiles = Vec::with_capacity(board.len());
    let mut changed = false;
    let mut score_delta = 0;
    let mut merges = 0;

    for index in 0..size {
        // Extraction drops the gaps, so the line is already compacted.
        let mut line = board.line(index, horizontal);
        if reversed {
            line.reverse();
        }

        for (slot_index, slot) in merge_line(&line).into_iter().enumerate() {
            let along = if reversed { size - 1 - slot_index } else { slot_index };
            let target = if horizontal {
                Position::new(index, along)
            } else {
                Position::new(along, index)
            };

            match slot {
                Slot::Kept(tile) => {
                    if tile.position() != target {
                        changed = true;
                    }
                    tiles.push(tile.moved_to(target));
                }
                Slot::Merged { value, consumed } => {
                    changed = true;
                    score_delta += value;
                    merges += 1;
                    let tile = Tile::new(ids.next_id(), target, value);
                    tracing::trace!(
                        "merged {} + {} into {} ({})",
                        consumed[0],
                        consumed[1],
                        tile.id,
                        value
                    );
                    tiles.push(tile);
                }
            }
        }
    }

    let board = if changed {
        Board::from_tiles(size, tiles)
    } else {
        board.clone()
    };

    MoveOutcome {
        board,
        changed,
        score_delta,
        merges,
    }
}

/// Whether sliding toward `direction` would change the board.
pub fn can_slide(board: &Board, direction: Direction) -> bool {
    let size = board.size();
    let horizontal = direction.is_horizontal();
    let reversed = direction.toward_high_edge();

    (0..size).any(|index| {
        let mut line = board.line(index, horizontal);
        if reversed {
            line.reverse();
        }
        line.windows(2).any(|pair| pair[0].value == pair[1].value)
            || line.iter().enumerate().any(|(slot, tile)| {
                let along = if horizontal { tile.y } else { tile.x };
                let target = if reversed { size - 1 - slot } else { slot };
                along != target
            })
    })
}
