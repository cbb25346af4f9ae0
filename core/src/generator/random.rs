use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement without replacement: shuffle the first `mines` cell indices into place and take them.
///
/// Unlike rejection sampling this always finishes in one pass, even when the board is nearly full.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomLayoutGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomLayoutGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MineLayoutGenerator for RandomLayoutGenerator<R> {
    fn generate(mut self, config: GameConfig) -> MineLayout {
        let total_cells = config.total_cells();
        let (_, height) = config.size;

        // optimize for full boards
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Board already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            return MineLayout::from_mine_mask(Array2::from_elem(config.size.to_nd_index(), true));
        }

        let mut indices: Vec<usize> = (0..total_cells as usize).collect();
        let (chosen, _) = indices.partial_shuffle(&mut self.rng, config.mines as usize);

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let height = usize::from(height);
        for &index in chosen.iter() {
            mine_mask[[index / height, index % height]] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::debug!(
            "Generated {} mines on a {}x{} board",
            layout.mine_count(),
            config.size.0,
            config.size.1
        );
        layout
    }
}
