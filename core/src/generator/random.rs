use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform mine placement without replacement. The excluded cell is the one
/// the player dug first and never receives a mine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    exclude: Coord2,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, exclude: Coord2) -> Self {
        Self { seed, exclude }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let (width, height) = config.size;

        let mut candidates: Vec<Coord2> = Vec::with_capacity(config.total_cells() as usize);
        for y in 0..height {
            for x in 0..width {
                if (x, y) != self.exclude {
                    candidates.push((x, y));
                }
            }
        }

        let mines = usize::from(config.mines).min(candidates.len());
        if mines < usize::from(config.mines) {
            log::warn!(
                "requested {} mines but only {} cells are available",
                config.mines,
                candidates.len()
            );
        }

        let mut mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for _ in 0..mines {
            let picked = candidates.swap_remove(rng.random_range(0..candidates.len()));
            mask[picked.to_nd_index()] = true;
        }

        log::debug!(
            "placed {} mines on {}x{}, start cell {:?} kept clear",
            mines,
            width,
            height,
            self.exclude
        );
        MineLayout::from_mask(mask)
    }
}
