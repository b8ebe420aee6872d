use crossterm::style::{Color, Stylize};
use scava_core::CellView;

/// Presentation configuration for one rendering target, passed into the
/// render step instead of living in process globals. `plain` is used when
/// stdout is not a terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    colored: bool,
}

impl Theme {
    pub const fn colored() -> Self {
        Self { colored: true }
    }

    pub const fn plain() -> Self {
        Self { colored: false }
    }

    /// One-character glyph for a cell, colorized when the theme allows it.
    pub fn cell(self, view: CellView) -> String {
        let (glyph, color) = match view {
            CellView::Hidden => ("?".to_string(), Color::Blue),
            CellView::Flagged => ("F".to_string(), Color::Green),
            CellView::Dug(0) => (" ".to_string(), Color::Reset),
            CellView::Dug(count) => (count.to_string(), Color::Yellow),
        };

        if self.colored {
            glyph.with(color).to_string()
        } else {
            glyph
        }
    }
}
