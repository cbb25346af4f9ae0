use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Difficulty tier, each mapping to a fixed mine density.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Fraction of the board's cells that hold mines.
    pub const fn density(self) -> f64 {
        use Difficulty::*;
        match self {
            Easy => 0.10,
            Medium => 0.15,
            Hard => 0.20,
            Expert => 0.225,
        }
    }

    pub const fn key(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
            Expert => "expert",
        }
    }

    pub fn mine_count(self, width: Coord, height: Coord) -> CellCount {
        mine_count_for(width, height, self.density())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::InvalidDifficulty(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// `floor(width * height * density)`, with `density` clamped into `[0, 1]`.
pub fn mine_count_for(width: Coord, height: Coord, density: f64) -> CellCount {
    let total = mult(width, height);
    let clamped = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    if clamped != density {
        log::warn!("Mine density {density} out of range, using {clamped}");
    }

    // no_std has no f64::floor, truncation is floor for non-negative values
    let count = (f64::from(total) * clamped) as CellCount;
    count.min(total)
}
