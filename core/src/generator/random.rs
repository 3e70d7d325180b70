use alloc::vec::Vec;

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Uniformly random layout, every mine on a distinct cell.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, size: Coord2, count: CellCount) -> Vec<Coord2> {
        let (width, height) = size;
        let total_cells = usize::from(mult(width, height));
        let mut count = usize::from(count);

        // cannot place more mines than cells
        if count > total_cells {
            log::warn!(
                "Minefield already full, generated anyway, requested {} but only fits {}",
                count,
                total_cells
            );
            count = total_cells;
        }

        let width = usize::from(width);
        index::sample(&mut self.rng, total_cells, count)
            .into_iter()
            .map(|i| ((i % width) as Coord, (i / width) as Coord))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_distinct_mines() {
        let mut generator = RandomMineGenerator::new(7);

        let mut mines = generator.generate((31, 15), 46);
        assert_eq!(mines.len(), 46);
        assert!(mines.iter().all(|&(x, y)| x < 31 && y < 15));

        mines.sort_unstable();
        mines.dedup();
        assert_eq!(mines.len(), 46);
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let first = RandomMineGenerator::new(42).generate((9, 5), 4);
        let second = RandomMineGenerator::new(42).generate((9, 5), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn overfull_request_fills_the_board() {
        let mines = RandomMineGenerator::new(1).generate((2, 2), 9);
        assert_eq!(mines.len(), 4);
    }
}
