use std::fmt;

use super::position::Position;

/// Identity of a tile, stable across moves until the tile is merged away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out tile ids in increasing order. Ids are never reused.
#[derive(Debug, Clone, Default)]
pub struct TileIdAllocator {
    next: u64,
}

impl TileIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }

    /// Make sure future ids do not collide with `id`.
    pub fn reserve_past(&mut self, id: TileId) {
        self.next = self.next.max(id.0 + 1);
    }
}

/// An occupied cell carrying a power-of-two value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub x: usize,
    pub y: usize,
    pub value: u32,
}

impl Tile {
    pub fn new(id: TileId, position: Position, value: u32) -> Self {
        debug_assert!(
            value >= 2 && value.is_power_of_two(),
            "tile value {} is not a power of two >= 2",
            value
        );
        Tile {
            id,
            x: position.x,
            y: position.y,
            value,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Same tile relocated to `position`.
    pub fn moved_to(self, position: Position) -> Self {
        Tile {
            x: position.x,
            y: position.y,
            ..self
        }
    }
}
