use serde::{Deserialize, Serialize};

use crate::*;

/// Where a board stands after the last move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Ongoing,
    Lost,
    Won,
}

impl Verdict {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Board {
    /// A mine has been revealed.
    pub fn is_lost(&self) -> bool {
        self.cells()
            .iter()
            .zip(self.revealed().iter())
            .any(|(cell, &revealed)| revealed && cell.is_mine())
    }

    /// Every safe cell is revealed and every mine is still hidden.
    pub fn is_won(&self) -> bool {
        self.cells()
            .iter()
            .zip(self.revealed().iter())
            .all(|(cell, &revealed)| revealed != cell.is_mine())
    }

    /// Loss is checked first, so a board can never read as both lost and won.
    pub fn verdict(&self) -> Verdict {
        if self.is_lost() {
            Verdict::Lost
        } else if self.is_won() {
            Verdict::Won
        } else {
            Verdict::Ongoing
        }
    }
}
