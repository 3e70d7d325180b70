use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Strategy that decides where the mines of a new board go.
pub trait MineGenerator {
    /// Picks positions for up to `count` mines on a board of `size`.
    fn generate(&mut self, size: Coord2, count: CellCount) -> Vec<Coord2>;
}

/// Places mines at a fixed list of positions regardless of the requested count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, size: Coord2, count: CellCount) -> Vec<Coord2> {
        if usize::from(count) != self.mines.len() {
            log::debug!(
                "Fixed layout has {} mines, {} requested on {:?}",
                self.mines.len(),
                count,
                size
            );
        }
        self.mines.clone()
    }
}

impl<G: MineGenerator + ?Sized> MineGenerator for &mut G {
    fn generate(&mut self, size: Coord2, count: CellCount) -> Vec<Coord2> {
        (**self).generate(size, count)
    }
}
