use alloc::collections::VecDeque;

use hashbrown::HashSet;

use crate::*;

impl Board {
    /// Reveals the cell at `coords`, flooding outwards through empty cells.
    ///
    /// The flood moves horizontally and vertically only and stops at numbered cells and mines, which
    /// get revealed themselves but do not spread. Markers do not stop the flood.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is outside of the board.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.is_revealed(coords) {
            return RevealOutcome::NoChange;
        }

        let mut scheduled: HashSet<Coord2> = HashSet::new();
        scheduled.insert(coords);
        let mut to_visit = VecDeque::from([coords]);
        let mut cells: CellCount = 0;

        while let Some(visit_coords) = to_visit.pop_front() {
            self.set_revealed(visit_coords);
            cells += 1;

            let cell = self.cell_at(visit_coords);
            log::trace!("Revealed {:?} at {:?}", cell, visit_coords);
            if !cell.is_empty() {
                continue;
            }

            for neighbor in orthogonal_neighbors(visit_coords, self.size()) {
                if !self.is_revealed(neighbor) && scheduled.insert(neighbor) {
                    to_visit.push_back(neighbor);
                }
            }
        }

        log::debug!("Reveal at {:?} opened {} cells", coords, cells);
        RevealOutcome::Revealed { cells }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn layout(size: Coord2, mines: &[Coord2]) -> Board {
        Board::with_mines(size, mines).unwrap()
    }

    fn revealed_cells(board: &Board) -> Vec<Coord2> {
        let (width, height) = board.size();
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&coords| board.is_revealed(coords))
            .collect()
    }

    #[test]
    fn empty_board_floods_completely() {
        let mut board = layout((4, 4), &[]);

        let outcome = board.reveal((2, 1));

        assert_eq!(outcome, RevealOutcome::Revealed { cells: 16 });
        assert_eq!(board.revealed_count(), 16);
        assert!(board.is_won());
    }

    #[test]
    fn numbered_cell_reveals_alone() {
        let mut board = layout((2, 2), &[(0, 0)]);

        let outcome = board.reveal((1, 1));

        assert_eq!(outcome, RevealOutcome::Revealed { cells: 1 });
        assert_eq!(board.cell_at((1, 1)), Cell::Adjacent(1));
        assert_eq!(revealed_cells(&board), vec![(1, 1)]);
        assert!(!board.is_lost());
        assert!(!board.is_won());
    }

    #[test]
    fn flood_does_not_wrap_across_rows() {
        // . 1 M
        // . 1 1
        // . . .
        let mut board = layout((3, 3), &[(2, 0)]);

        board.reveal((0, 0));

        assert!(!board.is_revealed((2, 0)));
        assert_eq!(
            revealed_cells(&board),
            vec![
                (0, 0),
                (1, 0),
                (0, 1),
                (1, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
        assert!(board.is_won());
    }

    #[test]
    fn flood_from_row_end_does_not_jump_to_next_row_start() {
        // M 1 .
        // 2 2 .
        // M 1 .
        let mut board = layout((3, 3), &[(0, 0), (0, 2)]);

        board.reveal((2, 0));

        assert!(!board.is_revealed((0, 1)));
        assert_eq!(
            revealed_cells(&board),
            vec![(1, 0), (2, 0), (1, 1), (2, 1), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn flood_moves_orthogonally_only() {
        // . 1 M
        // 1 2 1
        // M 1 .
        let mut board = layout((3, 3), &[(2, 0), (0, 2)]);

        board.reveal((0, 0));

        assert_eq!(revealed_cells(&board), vec![(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn revealing_a_mine_loses() {
        let mut board = layout((2, 2), &[(0, 0)]);

        let outcome = board.reveal((0, 0));

        assert_eq!(outcome, RevealOutcome::Revealed { cells: 1 });
        assert!(board.is_lost());
        assert!(!board.is_won());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut board = layout((3, 3), &[(2, 2)]);
        board.toggle_question((2, 2));
        board.reveal((0, 0));
        let before = board.clone();

        assert_eq!(board.reveal((0, 0)), RevealOutcome::NoChange);
        assert_eq!(board.reveal((1, 1)), RevealOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn markers_do_not_block_the_flood() {
        let mut board = layout((3, 1), &[]);
        board.toggle_flag((2, 0));

        board.reveal((0, 0));

        assert!(board.is_revealed((2, 0)));
        assert_eq!(board.flag_count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside of")]
    fn reveal_out_of_range_panics() {
        let mut board = layout((2, 2), &[]);
        board.reveal((0, 5));
    }
}
