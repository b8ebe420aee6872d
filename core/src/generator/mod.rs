use crate::*;
pub use random::*;

mod random;

/// Strategy producing a finished mine layout for a board configuration.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}
