use serde::{Deserialize, Serialize};

use crate::*;

/// A discrete player action, already detached from whatever device produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Select { x: i64, y: i64 },
    ToggleFlagMode,
}

impl Command {
    /// Dispatches this command into `session`.
    pub fn apply(self, session: &mut GameSession) -> Result<ActionOutcome> {
        match self {
            Self::Select { x, y } => session.primary_action(x, y),
            Self::ToggleFlagMode => {
                session.toggle_flag_mode();
                Ok(ActionOutcome::Ignored)
            }
        }
    }
}

/// Space and `f` switch between revealing and flagging.
pub fn command_for_key(key: char) -> Option<Command> {
    match key {
        ' ' | 'f' | 'F' => Some(Command::ToggleFlagMode),
        _ => None,
    }
}

/// Pointer position in surface pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Cell index under the pointer, `floor(pixel / cell_size)` on each axis.
    ///
    /// The result is not bounds checked, it may be negative or past the board edge.
    pub fn cell_index(self, cell_size: f64) -> (i64, i64) {
        (
            floor_div(self.x, cell_size),
            floor_div(self.y, cell_size),
        )
    }

    pub fn resolve_on(self, board: &Board, cell_size: f64) -> Option<Coord2> {
        let (x, y) = self.cell_index(cell_size);
        board.validate_coords(x, y).ok()
    }

    pub fn select(self, cell_size: f64) -> Command {
        let (x, y) = self.cell_index(cell_size);
        Command::Select { x, y }
    }
}

pub fn resolve_pointer(px: f64, py: f64, cell_size: f64) -> (i64, i64) {
    Pointer::new(px, py).cell_index(cell_size)
}

fn floor_div(pixel: f64, cell_size: f64) -> i64 {
    let quotient = pixel / cell_size;
    // `as` saturates and maps NaN to zero
    let truncated = quotient as i64;
    if (truncated as f64) > quotient {
        truncated - 1
    } else {
        truncated
    }
}
