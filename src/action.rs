/// Buttons of the actions grid in the left pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    DecreaseSize,
    IncreaseSize,
    Clear,
    Undo,
}

/// Grid slots of the actions pane; the three before Undo stay empty
pub const ACTION_SLOTS: usize = 7;

impl Action {
    pub const ALL: [Action; 4] = [
        Action::DecreaseSize,
        Action::IncreaseSize,
        Action::Clear,
        Action::Undo,
    ];

    /// Position in the two-column actions grid
    pub fn slot(self) -> usize {
        match self {
            Self::DecreaseSize => 0,
            Self::IncreaseSize => 1,
            Self::Clear => 2,
            Self::Undo => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DecreaseSize => "-",
            Self::IncreaseSize => "+",
            Self::Clear => "C",
            Self::Undo => "U",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Self::DecreaseSize => "Decrease brush size",
            Self::IncreaseSize => "Increase brush size",
            Self::Clear => "Clear canvas",
            Self::Undo => "Undo",
        }
    }

    /// Hovering the size buttons shows the current brush ghost
    pub fn previews_brush(self) -> bool {
        matches!(self, Self::DecreaseSize | Self::IncreaseSize)
    }
}
