use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The minefield together with what the player has uncovered and marked.
///
/// All three layers are `(height, width)` arrays in standard layout, so the cell at `(x, y)` sits at
/// linear index `y * width + x`. They are allocated once when the board is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord2,
    cells: Array2<Cell>,
    revealed: Array2<bool>,
    markers: Array2<Marker>,
    mine_count: CellCount,
}

impl Board {
    /// Blank board without mines, sized after `config`.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let shape = config.size.to_nd_index();
        Ok(Self {
            size: config.size,
            cells: Array2::default(shape),
            revealed: Array2::default(shape),
            markers: Array2::default(shape),
            mine_count: 0,
        })
    }

    /// Board with mines at exactly `mines`, adjacency counts derived as in [`Board::setup`].
    ///
    /// # Panics
    ///
    /// Panics if a mine lies outside of `size`.
    pub fn with_mines(size: Coord2, mines: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(&GameConfig::new_unchecked(size, 0))?;
        board.lay_mines(mines);
        Ok(board)
    }

    /// Scatters `floor(width * height * mine_percent / 100)` mines using `generator` and derives the
    /// adjacency counts. Any previous layout is replaced; visibility and markers are untouched.
    ///
    /// # Panics
    ///
    /// Panics if the generator returns a position outside of the board.
    pub fn setup(&mut self, mine_percent: u8, mut generator: impl MineGenerator) {
        let requested = mines_for_density(self.total_cells(), mine_percent.min(100));
        let mines = generator.generate(self.size, requested);
        self.lay_mines(&mines);
        log::debug!(
            "Board {:?} set up with {} mines ({}% requested {})",
            self.size,
            self.mine_count,
            mine_percent,
            requested
        );
    }

    fn lay_mines(&mut self, mines: &[Coord2]) {
        self.cells.fill(Cell::Empty);
        for &coords in mines {
            let index = self.checked_index(coords);
            self.cells[index] = Cell::Mine;
        }

        let mut mine_count = 0;
        let (width, height) = self.size;
        for y in 0..height {
            for x in 0..width {
                if !self.cells[(x, y).to_nd_index()].is_mine() {
                    continue;
                }
                mine_count += 1;
                for neighbor in self.iter_neighbors((x, y)) {
                    self.cells[neighbor.to_nd_index()].add_adjacent_mine();
                }
            }
        }
        self.mine_count = mine_count;
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Mines actually on the board.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Hidden cells currently carrying a flag.
    pub fn flag_count(&self) -> CellCount {
        self.markers
            .iter()
            .zip(self.revealed.iter())
            .filter(|&(&marker, &revealed)| marker == Marker::Flagged && !revealed)
            .count() as CellCount
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed.iter().filter(|&&revealed| revealed).count() as CellCount
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        x < self.size.0 && y < self.size.1
    }

    /// Linear `y * width + x` index of `coords`.
    pub fn index_of(&self, coords: Coord2) -> usize {
        let [row, column] = self.checked_index(coords);
        row * usize::from(self.size.0) + column
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[self.checked_index(coords)]
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[self.checked_index(coords)]
    }

    pub fn marker_at(&self, coords: Coord2) -> Marker {
        self.markers[self.checked_index(coords)]
    }

    /// Row-major view of the cell layer.
    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Row-major view of the visibility layer.
    pub fn revealed(&self) -> &Array2<bool> {
        &self.revealed
    }

    /// Toggles the "mine" marker.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside of the board.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        self.toggle_marker(coords, Marker::Flagged)
    }

    /// Toggles the question marker.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside of the board.
    pub fn toggle_question(&mut self, coords: Coord2) -> MarkOutcome {
        self.toggle_marker(coords, Marker::QuestionMarked)
    }

    fn toggle_marker(&mut self, coords: Coord2, toggle: Marker) -> MarkOutcome {
        let index = self.checked_index(coords);
        if self.revealed[index] {
            return MarkOutcome::NoChange;
        }
        let marker = self.markers[index].toggled(toggle);
        log::debug!("Marker at {:?}: {:?} -> {:?}", coords, self.markers[index], marker);
        self.markers[index] = marker;
        MarkOutcome::Changed
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }

    pub(crate) fn set_revealed(&mut self, coords: Coord2) {
        self.revealed[coords.to_nd_index()] = true;
    }

    /// # Panics
    ///
    /// Panics if `coords` is outside of the board.
    pub(crate) fn checked_index(&self, coords: Coord2) -> [usize; 2] {
        assert!(
            self.contains(coords),
            "coordinates {coords:?} outside of {:?} board",
            self.size
        );
        coords.to_nd_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::with_mines(size, mines).unwrap()
    }

    #[test]
    fn linear_index_is_row_major() {
        let board = board((4, 3), &[]);
        assert_eq!(board.index_of((0, 0)), 0);
        assert_eq!(board.index_of((3, 0)), 3);
        assert_eq!(board.index_of((0, 1)), 4);
        assert_eq!(board.index_of((2, 2)), 10);
        assert_eq!(board.cells().as_slice().map(<[Cell]>::len), Some(12));
    }

    #[test]
    fn counts_surround_single_mine() {
        let board = board((3, 3), &[(1, 1)]);
        for y in 0..3 {
            for x in 0..3 {
                let expected = if (x, y) == (1, 1) {
                    Cell::Mine
                } else {
                    Cell::Adjacent(1)
                };
                assert_eq!(board.cell_at((x, y)), expected, "at {:?}", (x, y));
            }
        }
        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn mine_in_first_column_does_not_touch_previous_row_end() {
        let board = board((3, 3), &[(0, 1)]);
        assert_eq!(board.cell_at((2, 0)), Cell::Empty);
        assert_eq!(board.cell_at((2, 1)), Cell::Empty);
        assert_eq!(board.cell_at((1, 0)), Cell::Adjacent(1));
        assert_eq!(board.cell_at((1, 2)), Cell::Adjacent(1));
    }

    #[test]
    fn mine_in_last_column_does_not_touch_next_row_start() {
        let board = board((3, 3), &[(2, 1)]);
        assert_eq!(board.cell_at((0, 2)), Cell::Empty);
        assert_eq!(board.cell_at((0, 1)), Cell::Empty);
        assert_eq!(board.cell_at((1, 2)), Cell::Adjacent(1));
    }

    #[test]
    fn adjacent_mines_are_not_counted_up() {
        let board = board((3, 1), &[(0, 0), (1, 0)]);
        assert_eq!(board.cell_at((0, 0)), Cell::Mine);
        assert_eq!(board.cell_at((1, 0)), Cell::Mine);
        assert_eq!(board.cell_at((2, 0)), Cell::Adjacent(1));
    }

    #[test]
    fn setup_uses_floored_density() {
        let mut board = Board::new(&GameConfig::new((7, 3), 50).unwrap()).unwrap();
        board.setup(50, RandomMineGenerator::new(3));
        assert_eq!(board.mine_count(), 10);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn setup_leaves_visibility_and_markers_alone() {
        let mut board = board((4, 4), &[]);
        board.toggle_flag((3, 3));
        board.set_revealed((0, 0));

        board.setup(0, RandomMineGenerator::new(3));

        assert!(board.is_revealed((0, 0)));
        assert_eq!(board.marker_at((3, 3)), Marker::Flagged);
    }

    #[test]
    fn toggles_switch_and_clear_markers() {
        let mut board = board((2, 2), &[]);

        assert_eq!(board.toggle_flag((1, 0)), MarkOutcome::Changed);
        assert_eq!(board.marker_at((1, 0)), Marker::Flagged);
        assert_eq!(board.flag_count(), 1);

        assert_eq!(board.toggle_question((1, 0)), MarkOutcome::Changed);
        assert_eq!(board.marker_at((1, 0)), Marker::QuestionMarked);
        assert_eq!(board.flag_count(), 0);

        assert_eq!(board.toggle_question((1, 0)), MarkOutcome::Changed);
        assert_eq!(board.marker_at((1, 0)), Marker::None);
    }

    #[test]
    fn markers_ignore_revealed_cells() {
        let mut board = board((2, 2), &[]);
        board.set_revealed((0, 0));

        assert_eq!(board.toggle_flag((0, 0)), MarkOutcome::NoChange);
        assert_eq!(board.marker_at((0, 0)), Marker::None);
    }

    #[test]
    #[should_panic(expected = "outside of")]
    fn out_of_range_access_panics() {
        let board = board((2, 2), &[]);
        board.cell_at((2, 0));
    }

    #[test]
    fn oversized_board_is_an_error() {
        assert!(matches!(
            Board::with_mines((80, 2), &[]),
            Err(GameError::BoardTooLarge { .. })
        ));
    }
}
