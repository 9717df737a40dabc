/// A cell on the board. Values range 0..N.
/// `x` is the row (top to bottom), `y` is the column (left to right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        self.x < size && self.y < size
    }
}
