use serde::{Deserialize, Serialize};

use crate::*;

/// Selected cell, kept inside the board it was created for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    x: Coord,
    y: Coord,
}

impl Cursor {
    pub const fn position(self) -> Coord2 {
        (self.x, self.y)
    }

    /// Moves by `(dx, dy)`. Each axis only moves when its new value stays inside `bounds`, so a
    /// diagonal move against an edge still slides along the other axis.
    pub fn move_by(&mut self, (dx, dy): (i8, i8), (width, height): Coord2) {
        if let Some(x) = self.x.checked_add_signed(dx).filter(|&x| x < width) {
            self.x = x;
        }
        if let Some(y) = self.y.checked_add_signed(dy).filter(|&y| y < height) {
            self.y = y;
        }
        log::trace!("Cursor at {:?}", self.position());
    }
}
