use serde::{Deserialize, Serialize};

/// Per-position player state. The mine bit is deliberately kept out of here
/// and lives in the [`MineLayout`](crate::MineLayout) mask, so a cell that was
/// never touched is just the all-false default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The player flagged this cell as a suspected mine.
    pub marked: bool,
    /// The player excavated this cell.
    pub dug: bool,
}

/// Display state exported to renderers. `Dug(0)` is the empty cleared cell,
/// `Dug(n)` a numbered boundary cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Dug(u8),
}

impl CellView {
    /// Whether the cell still hides its content from the player.
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}
