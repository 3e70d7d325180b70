use serde::{Deserialize, Serialize};

/// Abstract input symbol, one per turn of the control loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    /// Select a menu entry or reveal the cell under the cursor.
    Activate,
    /// Flag-A, the question marker.
    ToggleQuestion,
    /// Flag-B, the mine marker.
    ToggleFlag,
    Escape,
    /// The terminal changed size, only a redraw is needed.
    Resize,
    /// Leave the program from wherever it is.
    Quit,
}

impl Input {
    /// Cursor displacement for arrow inputs.
    pub const fn direction(self) -> Option<(i8, i8)> {
        use Input::*;
        match self {
            Up => Some((0, -1)),
            Down => Some((0, 1)),
            Left => Some((-1, 0)),
            Right => Some((1, 0)),
            _ => None,
        }
    }
}
