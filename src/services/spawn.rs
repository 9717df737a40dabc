use rand::Rng;

use crate::models::board::Board;
use crate::models::constants::{LARGE_TILE, SMALL_TILE};
use crate::models::tile::{Tile, TileIdAllocator};

/// Place a new tile on a uniformly chosen empty cell.
///
/// The tile is a 4 with probability `four_probability`, otherwise a 2.
/// Returns `None` without touching the board when no cell is empty.
pub fn spawn_tile<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    ids: &mut TileIdAllocator,
    four_probability: f64,
) -> Option<Tile> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }

    let position = empty[rng.gen_range(0..empty.len())];
    let value = if rng.gen::<f64>() < four_probability {
        LARGE_TILE
    } else {
        SMALL_TILE
    };

    let tile = Tile::new(ids.next_id(), position, value);
    board.insert(tile);
    Some(tile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::position::Position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_only_on_empty_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let mut ids = TileIdAllocator::new();
            let mut board = Board::from_values(
                &[[2, 4, 2, 4], [4, 0, 4, 2], [2, 4, 2, 4], [4, 2, 0, 2]],
                &mut ids,
            );
            let tile = spawn_tile(&mut board, &mut rng, &mut ids, 0.1).unwrap();
            assert!(
                tile.position() == Position::new(1, 1) || tile.position() == Position::new(3, 2),
                "spawned on occupied cell {:?}",
                tile.position()
            );
            assert_eq!(board.len(), 15);
        }
    }

    #[test]
    fn full_board_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ids = TileIdAllocator::new();
        let mut board = Board::from_values(
            &[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
            &mut ids,
        );
        let before = board.clone();
        assert!(spawn_tile(&mut board, &mut rng, &mut ids, 0.1).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn value_distribution_is_roughly_nine_to_one() {
        let mut rng = StdRng::seed_from_u64(2048);
        let trials = 10_000;
        let mut fours = 0;
        for _ in 0..trials {
            let mut ids = TileIdAllocator::new();
            let mut board = Board::new(4);
            let tile = spawn_tile(&mut board, &mut rng, &mut ids, 0.1).unwrap();
            match tile.value {
                4 => fours += 1,
                2 => {}
                other => panic!("unexpected spawn value {}", other),
            }
        }
        let ratio = fours as f64 / trials as f64;
        assert!((0.08..0.12).contains(&ratio), "four ratio {}", ratio);
    }

    #[test]
    fn spawned_ids_are_fresh() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut ids = TileIdAllocator::new();
        let mut board = Board::new(3);
        let mut seen = std::collections::HashSet::new();
        while let Some(tile) = spawn_tile(&mut board, &mut rng, &mut ids, 0.1) {
            assert!(seen.insert(tile.id));
        }
        assert!(board.is_full());
        assert_eq!(seen.len(), 9);
    }
}
