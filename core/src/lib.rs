use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Construction-time board parameters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// A board must keep at least one safe cell, otherwise mine placement
    /// cannot terminate.
    pub fn validate(self) -> Result<Self> {
        if self.mines >= self.total_cells() {
            Err(GameError::TooManyMines)
        } else {
            Ok(self)
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub const fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size.0 && coords.1 < self.size.1
    }
}

/// Where the mines are: a dense mask plus the cached mine count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mask: Array2<bool>,
    count: CellCount,
}

impl MineLayout {
    pub fn from_mask(mask: Array2<bool>) -> Self {
        let count = mask.iter().filter(|&&mine| mine).count() as CellCount;
        Self { mask, count }
    }

    /// Builds a layout from explicit mine positions; the deterministic path
    /// used by tests and replays.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mask(mask))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mask.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mines in the 8 cells around `coords`. Out-of-bounds neighbors are
    /// skipped by the iterator and so contribute nothing.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_unplaceable_mine_counts() {
        assert_eq!(
            GameConfig::new((3, 3), 9).validate(),
            Err(GameError::TooManyMines)
        );
        assert_eq!(
            GameConfig::new((3, 3), 10).validate(),
            Err(GameError::TooManyMines)
        );
        assert!(GameConfig::new((3, 3), 8).validate().is_ok());
    }

    #[test]
    fn config_cell_counts() {
        let config = GameConfig::new((20, 20), 80);
        assert_eq!(config.total_cells(), 400);
        assert_eq!(config.safe_cells(), 320);
        assert!(config.contains((19, 19)));
        assert!(!config.contains((20, 0)));
        assert!(!config.contains((0, 20)));
    }

    #[test]
    fn layout_from_coords_counts_distinct_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2), (0, 0)]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert!(layout.contains_mine((0, 0)));
        assert!(layout.contains_mine((2, 2)));
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn adjacency_counts_around_an_l_shape() {
        let layout = MineLayout::from_mine_coords((9, 9), &[(0, 0), (1, 0), (0, 1)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((1, 1)), 3);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 1);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 1);
        assert_eq!(layout.adjacent_mine_count((2, 2)), 0);
    }
}
