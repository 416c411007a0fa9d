//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::grid::BlockColor;

    /// Generate playfield dimensions large enough for a cursor
    pub fn grid_dims() -> impl Strategy<Value = (usize, usize)> {
        (2usize..10, 2usize..14)
    }

    /// Generate a block color
    pub fn block_color() -> impl Strategy<Value = BlockColor> {
        prop_oneof![
            Just(BlockColor::Red),
            Just(BlockColor::Green),
            Just(BlockColor::Blue),
            Just(BlockColor::Yellow),
            Just(BlockColor::Purple),
        ]
    }

    /// Generate an RNG seed
    pub fn seed() -> impl Strategy<Value = u64> {
        any::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::core::cursor::Cursor;
    use crate::core::grid::Grid;
    use crate::core::session::Session;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn random_deal_never_starts_with_matches(
            (width, height) in grid_dims(),
            seed in seed(),
        ) {
            let mut grid = Grid::new(width, height);
            grid.fill_random(&mut StdRng::seed_from_u64(seed));
            prop_assert!(!grid.has_matches());
        }

        #[test]
        fn gravity_preserves_block_count(
            (width, height) in grid_dims(),
            seed in seed(),
        ) {
            let mut grid = Grid::new(width, height);
            grid.fill_random(&mut StdRng::seed_from_u64(seed));
            let before = grid.block_count();
            grid.apply_gravity();
            prop_assert_eq!(grid.block_count(), before);
        }

        #[test]
        fn cursor_stays_in_bounds(
            (width, height) in grid_dims(),
            moves in prop::collection::vec((-3isize..=3, -3isize..=3), 0..40),
        ) {
            let mut cursor = Cursor::new(0, 0);
            for (dx, dy) in moves {
                cursor.move_by(dx, dy, width, height);
                prop_assert!(cursor.x <= width - 2);
                prop_assert!(cursor.y <= height - 1);
            }
        }

        #[test]
        fn sessions_with_equal_seeds_agree(
            (width, height) in grid_dims(),
            seed in seed(),
        ) {
            let mut a = Session::new(width, height, seed);
            let mut b = Session::new(width, height, seed);
            a.swap();
            b.swap();
            a.raise();
            b.raise();
            prop_assert_eq!(a.score(), b.score());
            prop_assert_eq!(a.is_game_over(), b.is_game_over());
        }
    }
}
