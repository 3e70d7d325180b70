use serde::{Deserialize, Serialize};

/// What a board cell holds, fixed once the board is set up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Mine,
    /// Number of mines among the up-to-8 neighbors, always `1..=8`.
    Adjacent(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Adjacent mine count, zero for empty cells and `None` for mines.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Mine => None,
            Self::Adjacent(count) => Some(count),
        }
    }

    /// Records one more mine next to this cell, mines stay untouched.
    pub(crate) fn add_adjacent_mine(&mut self) {
        *self = match *self {
            Self::Empty => Self::Adjacent(1),
            Self::Adjacent(count) => Self::Adjacent(count + 1),
            Self::Mine => Self::Mine,
        };
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

/// Player annotation on a hidden cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    None,
    /// "This is a mine", toggled with `x`.
    Flagged,
    /// "Not sure / probably safe", toggled with `o`.
    QuestionMarked,
}

impl Marker {
    /// Marker left after applying `toggle`: same marker clears, any other overwrites.
    pub const fn toggled(self, toggle: Marker) -> Marker {
        match (self, toggle) {
            (Self::Flagged, Self::Flagged) => Self::None,
            (Self::QuestionMarked, Self::QuestionMarked) => Self::None,
            (_, toggle) => toggle,
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_count_grows_from_empty() {
        let mut cell = Cell::Empty;
        cell.add_adjacent_mine();
        cell.add_adjacent_mine();
        assert_eq!(cell, Cell::Adjacent(2));
        assert_eq!(cell.count(), Some(2));
    }

    #[test]
    fn mine_ignores_neighbor_mines() {
        let mut cell = Cell::Mine;
        cell.add_adjacent_mine();
        assert_eq!(cell, Cell::Mine);
        assert_eq!(cell.count(), None);
    }

    #[test]
    fn toggling_overwrites_other_marker() {
        assert_eq!(Marker::None.toggled(Marker::Flagged), Marker::Flagged);
        assert_eq!(Marker::Flagged.toggled(Marker::Flagged), Marker::None);
        assert_eq!(
            Marker::Flagged.toggled(Marker::QuestionMarked),
            Marker::QuestionMarked
        );
        assert_eq!(
            Marker::QuestionMarked.toggled(Marker::Flagged),
            Marker::Flagged
        );
    }
}
