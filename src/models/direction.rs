use std::fmt;
use std::str::FromStr;

use super::errors::GameError;

/// One of the four cardinal swipe directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Left/right moves operate on rows; up/down on columns.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when tiles travel toward the high index of their line.
    pub fn toward_high_edge(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Accepts full names and WASD keys, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_keys() {
        let cases = [
            ("up", Direction::Up),
            ("W", Direction::Up),
            ("Down", Direction::Down),
            ("s", Direction::Down),
            ("LEFT", Direction::Left),
            ("a", Direction::Left),
            (" right ", Direction::Right),
            ("d", Direction::Right),
        ];
        for (input, expected) in &cases {
            assert_eq!(input.parse::<Direction>().unwrap(), *expected, "input {:?}", input);
        }
    }

    #[test]
    fn rejects_non_cardinal_input() {
        for input in ["", "north", "upleft", "x", "5", "u"] {
            assert!(matches!(
                input.parse::<Direction>(),
                Err(GameError::InvalidDirection(_))
            ));
        }
    }

    #[test]
    fn axis_helpers() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(Direction::Down.toward_high_edge());
        assert!(!Direction::Up.toward_high_edge());
    }
}
