use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// A mine that has been revealed.
    Mine,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Full state of a board cell, including whether it hides a mine.
///
/// Mutators never fail and never check preconditions; the session decides which transitions are legal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mine: bool,
    flagged: bool,
    revealed: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of mines around this cell, meaningless for a mine.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub fn set_mine(&mut self) {
        self.mine = true;
    }

    pub fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub fn flag(&mut self) {
        self.flagged = true;
    }

    pub fn unflag(&mut self) {
        self.flagged = false;
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub const fn view(&self) -> CellView {
        match (self.revealed, self.mine, self.flagged) {
            (true, true, _) => CellView::Mine,
            (true, false, _) => CellView::Revealed(self.adjacent_mines),
            (false, _, true) => CellView::Flagged,
            (false, _, false) => CellView::Hidden,
        }
    }
}
