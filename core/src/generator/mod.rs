use crate::*;
pub use random::*;

mod random;

/// Strategy for placing mines on an empty board.
pub trait MineLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}
