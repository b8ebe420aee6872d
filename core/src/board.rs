use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine placement lifecycle. Placement is deferred until the first dig so the
/// first-dug cell can be excluded, and the transition happens exactly once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
enum MinePlacement {
    Pending { seed: u64 },
    Placed(MineLayout),
}

/// Outcome of a dig.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DigOutcome {
    Safe,
    Exploded,
}

impl DigOutcome {
    pub const fn is_safe(self) -> bool {
        matches!(self, Self::Safe)
    }
}

/// The whole game state: mine layout, per-cell player state, and the running
/// counts the win check compares.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    placement: MinePlacement,
    grid: Array2<Cell>,
    flag_count: CellCount,
    dug_count: CellCount,
}

impl Board {
    /// Create an ungenerated board; mines are placed on the first dig, using
    /// `seed` for the placement draw.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            placement: MinePlacement::Pending { seed },
            grid: Array2::default(config.size.to_nd_index()),
            flag_count: 0,
            dug_count: 0,
        })
    }

    /// Build a board over an already known layout, skipping lazy generation.
    /// Used by tests and replays; the first dig on such a board can lose.
    pub fn with_layout(layout: MineLayout) -> Result<Self> {
        let config = GameConfig::new(layout.size(), layout.mine_count()).validate()?;
        Ok(Self {
            config,
            grid: Array2::default(config.size.to_nd_index()),
            placement: MinePlacement::Placed(layout),
            flag_count: 0,
            dug_count: 0,
        })
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn dug_count(&self) -> CellCount {
        self.dug_count
    }

    /// How many mines have not been flagged yet; negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        self.config.mines as isize - self.flag_count as isize
    }

    /// The layout, once the first dig has placed it.
    pub fn mine_layout(&self) -> Option<&MineLayout> {
        match &self.placement {
            MinePlacement::Placed(layout) => Some(layout),
            MinePlacement::Pending { .. } => None,
        }
    }

    pub fn mines_placed(&self) -> bool {
        matches!(self.placement, MinePlacement::Placed(_))
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.config.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Toggle the suspected-mine flag at `coords`, keeping `flag_count` in
    /// step. Marking a dug cell is allowed and meaningless.
    pub fn mark(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.grid[coords.to_nd_index()];
        if cell.marked {
            self.flag_count -= 1;
        } else {
            self.flag_count += 1;
        }
        cell.marked = !cell.marked;
        Ok(())
    }

    /// Dig at `coords`. The first dig places the mines, excluding `coords`.
    /// A marked cell cannot be dug accidentally and reports `Safe` without
    /// changing anything. Hitting a mine reports `Exploded` and also changes
    /// nothing. Anything else starts a flood-fill reveal.
    pub fn dig(&mut self, coords: Coord2) -> Result<DigOutcome> {
        let coords = self.validate_coords(coords)?;

        if let MinePlacement::Pending { seed } = self.placement {
            let layout = RandomMineGenerator::new(seed, coords).generate(self.config);
            self.placement = MinePlacement::Placed(layout);
        }
        let MinePlacement::Placed(layout) = &self.placement else {
            unreachable!("placement happens before any dig proceeds");
        };

        if self.grid[coords.to_nd_index()].marked {
            return Ok(DigOutcome::Safe);
        }
        if layout.contains_mine(coords) {
            return Ok(DigOutcome::Exploded);
        }

        log::debug!("digging at {:?}", coords);
        let bounds = self.config.size;
        let mut visited = HashSet::from([coords]);
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit) = to_visit.pop_front() {
            let cell = &mut self.grid[visit.to_nd_index()];
            if !cell.dug {
                cell.dug = true;
                self.dug_count += 1;
            }

            let count = layout.adjacent_mine_count(visit);
            if count > 0 {
                // numbered boundary cells stop the cascade
                continue;
            }

            // mark visited on enqueue so a cell is never queued twice; a
            // neighbor of a zero-count cell can never be a mine
            to_visit.extend(neighbors(visit, bounds).filter(|&pos| visited.insert(pos)));
        }

        Ok(DigOutcome::Safe)
    }

    /// Count-only win rule: the number of flags must equal the number of
    /// mines and every safe cell must be dug. Flags are not required to sit
    /// on actual mines.
    pub fn check_win(&self) -> bool {
        self.flag_count == self.config.mines && self.dug_count == self.config.safe_cells()
    }

    /// Display state at `coords`. Digging wins over marking, since a cascade
    /// can overrun a flagged cell.
    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;

        let cell = self.grid[coords.to_nd_index()];
        Ok(if cell.dug {
            let count = match &self.placement {
                MinePlacement::Placed(layout) => layout.adjacent_mine_count(coords),
                // nothing can be dug before placement
                MinePlacement::Pending { .. } => 0,
            };
            CellView::Dug(count)
        } else if cell.marked {
            CellView::Flagged
        } else {
            CellView::Hidden
        })
    }
}
