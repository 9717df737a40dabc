use super::position::Position;
use super::tile::{Tile, TileIdAllocator};

/// The N x N playing field, stored sparsely as a set of tiles.
/// No two tiles share a position.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            tiles: Vec::with_capacity(size * size),
        }
    }

    /// Build a board from an existing tile set.
    pub fn from_tiles(size: usize, tiles: Vec<Tile>) -> Self {
        let board = Board { size, tiles };
        board.debug_assert_valid();
        board
    }

    /// Build a square board from rows of values, 0 meaning empty.
    pub fn from_values<const N: usize>(rows: &[[u32; N]], ids: &mut TileIdAllocator) -> Self {
        let size = rows.len();
        debug_assert_eq!(size, N, "board must be square");
        let mut board = Board::new(size);
        for (x, row) in rows.iter().enumerate() {
            for (y, &value) in row.iter().enumerate() {
                if value != 0 {
                    board.insert(Tile::new(ids.next_id(), Position::new(x, y), value));
                }
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() == self.size * self.size
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.position() == pos)
    }

    pub fn value_at(&self, pos: Position) -> Option<u32> {
        self.tile_at(pos).map(|t| t.value)
    }

    /// Add a tile. The target cell must be free and on the board.
    pub fn insert(&mut self, tile: Tile) {
        debug_assert!(
            tile.position().in_bounds(self.size),
            "tile {} at {:?} is off a {}x{} board",
            tile.id,
            tile.position(),
            self.size,
            self.size
        );
        debug_assert!(
            self.tile_at(tile.position()).is_none(),
            "cell {:?} is already occupied",
            tile.position()
        );
        self.tiles.push(tile);
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        let grid = self.grid();
        let mut empty = Vec::new();
        for (x, row) in grid.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    empty.push(Position::new(x, y));
                }
            }
        }
        empty
    }

    /// Dense view of the board. Internal 0-based indexing: grid[x][y].
    pub fn grid(&self) -> Vec<Vec<Option<u32>>> {
        let mut grid = vec![vec![None; self.size]; self.size];
        for tile in &self.tiles {
            grid[tile.x][tile.y] = Some(tile.value);
        }
        grid
    }

    /// Dense view with 0 for empty cells.
    pub fn values(&self) -> Vec<Vec<u32>> {
        self.grid()
            .into_iter()
            .map(|row| row.into_iter().map(|v| v.unwrap_or(0)).collect())
            .collect()
    }

    pub fn max_value(&self) -> u32 {
        self.tiles.iter().map(|t| t.value).max().unwrap_or(0)
    }

    /// Tiles of one line, ordered by ascending index along the line.
    /// `index` is the row for horizontal lines and the column otherwise.
    pub fn line(&self, index: usize, horizontal: bool) -> Vec<Tile> {
        let mut line: Vec<Tile> = self
            .tiles
            .iter()
            .filter(|t| if horizontal { t.x == index } else { t.y == index })
            .copied()
            .collect();
        if horizontal {
            line.sort_by_key(|t| t.y);
        } else {
            line.sort_by_key(|t| t.x);
        }
        line
    }

    /// True if an empty cell exists or two orthogonal neighbours share a value.
    pub fn has_possible_moves(&self) -> bool {
        if !self.is_full() {
            return true;
        }

        let grid = self.grid();
        for x in 0..self.size {
            for y in 0..self.size {
                let current = grid[x][y];
                if y + 1 < self.size && current == grid[x][y + 1] {
                    return true;
                }
                if x + 1 < self.size && current == grid[x + 1][y] {
                    return true;
                }
            }
        }
        false
    }

    /// Assert positions are in bounds and unique, and values are powers of two.
    pub fn debug_assert_valid(&self) {
        if cfg!(debug_assertions) {
            let mut seen = vec![vec![false; self.size]; self.size];
            for tile in &self.tiles {
                assert!(
                    tile.position().in_bounds(self.size),
                    "tile {} out of bounds at {:?}",
                    tile.id,
                    tile.position()
                );
                assert!(
                    !seen[tile.x][tile.y],
                    "duplicate tile position {:?}",
                    tile.position()
                );
                assert!(
                    tile.value >= 2 && tile.value.is_power_of_two(),
                    "tile {} has invalid value {}",
                    tile.id,
                    tile.value
                );
                seen[tile.x][tile.y] = true;
            }
        }
    }
}
