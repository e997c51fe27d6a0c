// Shared enums and constants used by the game state machine

/// Logical screen size; the host scales this to the window
pub const LOGICAL_WIDTH: u32 = 320;
pub const LOGICAL_HEIGHT: u32 = 240;

/// Top-level mode; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    Playing,
}

/// What the host loop should do after an update
///
/// `Terminate` is a normal shutdown request, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    NewGame,
    Exit,
}

impl MainMenuOption {
    pub fn all() -> [Self; 2] {
        [Self::NewGame, Self::Exit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NewGame => "NEW GAME",
            Self::Exit => "EXIT",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}
