use serde::{Deserialize, Serialize};

/// Entry highlighted in the pause menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseSelection {
    #[default]
    Resume,
    NewGame,
    Manual,
    Quit,
}

impl PauseSelection {
    pub const ALL: [PauseSelection; 4] = [Self::Resume, Self::NewGame, Self::Manual, Self::Quit];

    pub const fn label(self) -> &'static str {
        use PauseSelection::*;
        match self {
            Resume => "Resume",
            NewGame => "New Game",
            Manual => "Manual",
            Quit => "Quit",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Modal layer drawn over the game that takes every input while shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Pause(PauseSelection),
    /// Key bindings page opened from the pause menu.
    Manual,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_selection_wraps() {
        assert_eq!(PauseSelection::Quit.next(), PauseSelection::Resume);
        assert_eq!(PauseSelection::Resume.prev(), PauseSelection::Quit);
        assert_eq!(PauseSelection::NewGame.next(), PauseSelection::Manual);
    }
}
