use core::num::Saturating;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size grid of cells with its mines already laid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
}

impl Board {
    /// Random board with the mine density of `difficulty`.
    pub fn new<R: Rng>(
        width: Coord,
        height: Coord,
        difficulty: Difficulty,
        rng: R,
    ) -> Result<Self> {
        let config = GameConfig::from_difficulty((width, height), difficulty)?;
        log::debug!("New {difficulty} board {width}x{height} with {} mines", config.mines);
        Ok(Self::with_generator(config, RandomLayoutGenerator::new(rng)))
    }

    pub fn with_generator(config: GameConfig, generator: impl MineLayoutGenerator) -> Self {
        Self::from_layout(&generator.generate(config))
    }

    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let layout = MineLayout::from_mine_coords((width, height), mine_coords)?;
        Ok(Self::from_layout(&layout))
    }

    pub fn from_layout(layout: &MineLayout) -> Self {
        let cells = Array2::from_shape_fn(layout.size().to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            let mut cell = Cell::default();
            if layout.contains_mine(coords) {
                cell.set_mine();
            } else {
                cell.set_adjacent_mines(layout.adjacent_mine_count(coords));
            }
            cell
        });

        Self {
            cells,
            mine_count: layout.mine_count(),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
        }
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        (x as Coord, y as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines minus flags placed, negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flagged_count.0)
    }

    pub fn is_valid_coordinate<C: TryInto<Coord>>(&self, x: C, y: C) -> bool {
        checked_coords(x, y, self.size()).is_some()
    }

    pub fn validate_coords<C: TryInto<Coord>>(&self, x: C, y: C) -> Result<Coord2> {
        checked_coords(x, y, self.size()).ok_or(GameError::OutOfBounds)
    }

    /// What the player may see at `(x, y)`; unrevealed mines look like any other hidden cell.
    pub fn cell_at<C: TryInto<Coord>>(&self, x: C, y: C) -> Result<CellView> {
        let coords = self.validate_coords(x, y)?;
        Ok(self.view(coords))
    }

    /// Like [`Board::cell_at`] for coordinates already known to be in bounds.
    pub fn view(&self, coords: Coord2) -> CellView {
        self.cell(coords).view()
    }

    pub fn iter_views(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell.view()))
    }

    pub(crate) fn cell(&self, coords: Coord2) -> &Cell {
        &self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn has_mine_at(&self, coords: Coord2) -> bool {
        self.cell(coords).is_mine()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> Neighbors {
        neighbors(coords, self.size())
    }

    pub(crate) fn reveal(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.is_revealed() {
            cell.reveal();
            self.revealed_count += 1;
        }
    }

    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed() {
            MarkOutcome::NoChange
        } else if cell.is_flagged() {
            cell.unflag();
            self.flagged_count -= 1;
            MarkOutcome::Unflagged
        } else {
            cell.flag();
            self.flagged_count += 1;
            MarkOutcome::Flagged
        }
    }
}
