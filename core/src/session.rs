use alloc::collections::VecDeque;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Derives the status from cell states alone.
    ///
    /// A board counts as won only once something has been revealed, so a board without safe cells starts (and
    /// stays) in progress until a mine goes off.
    pub fn evaluate(board: &Board) -> Self {
        let mut any_revealed = false;
        let mut all_safe_cleared = true;

        for cell in board.cells() {
            match (cell.is_mine(), cell.is_revealed()) {
                (true, true) => return Self::Lost,
                (true, false) => {}
                (false, revealed) => {
                    any_revealed |= revealed;
                    all_safe_cleared &= revealed && !cell.is_flagged();
                }
            }
        }

        if any_revealed && all_safe_cleared {
            Self::Won
        } else {
            Self::InProgress
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game on one board, driven by discrete player actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    flag_mode: bool,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            flag_mode: false,
            status: GameStatus::InProgress,
            triggered_mine: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn flag_mode(&self) -> bool {
        self.flag_mode
    }

    pub fn mines_left(&self) -> i64 {
        self.board.mines_left()
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Flips flag mode and returns the new mode.
    pub fn toggle_flag_mode(&mut self) -> bool {
        self.flag_mode = !self.flag_mode;
        log::debug!("flag mode: {}", self.flag_mode);
        self.flag_mode
    }

    /// Reveals or flags `(x, y)` depending on the current flag mode.
    pub fn primary_action<C: TryInto<Coord>>(&mut self, x: C, y: C) -> Result<ActionOutcome> {
        let coords = self.board.validate_coords(x, y)?;

        if self.is_finished() {
            return Ok(ActionOutcome::Ignored);
        }

        Ok(if self.flag_mode {
            ActionOutcome::Mark(self.toggle_flag_at(coords))
        } else {
            ActionOutcome::Reveal(self.reveal_at(coords))
        })
    }

    pub fn flag_toggle<C: TryInto<Coord>>(&mut self, x: C, y: C) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(x, y)?;

        if self.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        Ok(self.toggle_flag_at(coords))
    }

    pub fn reveal_cell<C: TryInto<Coord>>(&mut self, x: C, y: C) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(x, y)?;

        if self.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        Ok(self.reveal_at(coords))
    }

    fn toggle_flag_at(&mut self, coords: Coord2) -> MarkOutcome {
        let outcome = self.board.toggle_flag(coords);
        self.refresh_status();
        outcome
    }

    fn reveal_at(&mut self, coords: Coord2) -> RevealOutcome {
        let cell = *self.board.cell(coords);
        if cell.is_revealed() || cell.is_flagged() {
            return RevealOutcome::NoChange;
        }

        self.board.reveal(coords);
        if self.board.has_mine_at(coords) {
            self.triggered_mine = Some(coords);
        } else if cell.adjacent_mines() == 0 {
            self.cascade_from(coords);
        }

        match self.refresh_status() {
            GameStatus::InProgress => RevealOutcome::Revealed,
            GameStatus::Won => RevealOutcome::Won,
            GameStatus::Lost => RevealOutcome::HitMine,
        }
    }

    /// Breadth-first reveal of the zero region around `origin` and its numbered border.
    ///
    /// Flagged cells are left covered and stop the cascade.
    fn cascade_from(&mut self, origin: Coord2) {
        let mut visited = HashSet::new();
        visited.insert(origin);
        let mut to_visit: VecDeque<_> = self.hidden_neighbors(origin).collect();
        let mut revealed = 0usize;

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            let cell = *self.board.cell(visit_coords);
            if cell.is_revealed() || cell.is_flagged() {
                continue;
            }

            self.board.reveal(visit_coords);
            revealed += 1;

            // neighbors of a zero cell are never mines
            if cell.adjacent_mines() == 0 {
                to_visit.extend(
                    self.hidden_neighbors(visit_coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }

        log::debug!("cascade from {origin:?} revealed {revealed} more cells");
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.board
            .iter_neighbors(coords)
            .filter(|&pos| self.board.view(pos) == CellView::Hidden)
    }

    fn refresh_status(&mut self) -> GameStatus {
        if !self.status.is_finished() {
            self.status = GameStatus::evaluate(&self.board);
            match self.status {
                GameStatus::InProgress => {}
                GameStatus::Won => log::info!("game won"),
                GameStatus::Lost => log::info!("game lost at {:?}", self.triggered_mine),
            }
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: Coord2, mines: &[Coord2]) -> GameSession {
        GameSession::new(Board::from_mine_coords(size.0, size.1, mines).unwrap())
    }

    #[test]
    fn starts_in_progress() {
        let session = session((3, 3), &[(1, 1)]);

        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(!session.flag_mode());
    }

    #[test]
    fn revealing_flagged_cell_is_noop() {
        let mut session = session((3, 3), &[(2, 2)]);

        assert_eq!(session.flag_toggle(0, 0), Ok(MarkOutcome::Flagged));
        assert_eq!(session.reveal_cell(0, 0), Ok(RevealOutcome::NoChange));
        assert_eq!(session.board().cell_at(0, 0), Ok(CellView::Flagged));
        assert_eq!(session.board().revealed_count(), 0);
    }

    #[test]
    fn flood_fill_stops_at_numbered_border() {
        // columns 0 and 1 are zeros, column 2 borders the wall of mines at column 3
        let mut session = session((5, 3), &[(3, 0), (3, 1), (3, 2)]);

        assert_eq!(session.reveal_cell(0, 0), Ok(RevealOutcome::Revealed));

        for y in 0..3 {
            assert_eq!(session.board().cell_at(0, y), Ok(CellView::Revealed(0)));
            assert_eq!(session.board().cell_at(1, y), Ok(CellView::Revealed(0)));
            assert!(matches!(
                session.board().cell_at(2, y),
                Ok(CellView::Revealed(n)) if n > 0
            ));
            assert_eq!(session.board().cell_at(3, y), Ok(CellView::Hidden));
            assert_eq!(session.board().cell_at(4, y), Ok(CellView::Hidden));
        }
        assert_eq!(session.board().revealed_count(), 9);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn flood_fill_skips_flagged_cells() {
        let mut session = session((4, 1), &[]);

        session.flag_toggle(2, 0).unwrap();
        session.reveal_cell(0, 0).unwrap();

        assert_eq!(session.board().cell_at(1, 0), Ok(CellView::Revealed(0)));
        assert_eq!(session.board().cell_at(2, 0), Ok(CellView::Flagged));
        assert_eq!(session.board().cell_at(3, 0), Ok(CellView::Hidden));
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn revealing_mine_loses_for_good() {
        let mut session = session((2, 2), &[(0, 0)]);

        assert_eq!(session.reveal_cell(0, 0), Ok(RevealOutcome::HitMine));
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.triggered_mine(), Some((0, 0)));

        assert_eq!(session.reveal_cell(1, 0), Ok(RevealOutcome::NoChange));
        assert_eq!(session.primary_action(1, 1), Ok(ActionOutcome::Ignored));
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.board().cell_at(1, 0), Ok(CellView::Hidden));
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut session = session((2, 2), &[(0, 0)]);

        assert_eq!(session.reveal_cell(1, 0), Ok(RevealOutcome::Revealed));
        assert_eq!(session.reveal_cell(0, 1), Ok(RevealOutcome::Revealed));
        assert_eq!(session.reveal_cell(1, 1), Ok(RevealOutcome::Won));
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.triggered_mine(), None);
    }

    #[test]
    fn flag_on_mine_does_not_block_win() {
        let mut session = session((2, 1), &[(0, 0)]);

        session.flag_toggle(0, 0).unwrap();
        assert_eq!(session.reveal_cell(1, 0), Ok(RevealOutcome::Won));
    }

    #[test]
    fn flag_mode_primary_action_toggles_flag() {
        let mut session = session((3, 3), &[(1, 1)]);

        assert!(session.toggle_flag_mode());
        assert_eq!(
            session.primary_action(2, 2),
            Ok(ActionOutcome::Mark(MarkOutcome::Flagged))
        );
        assert_eq!(session.board().cell_at(2, 2), Ok(CellView::Flagged));
        assert_eq!(
            session.primary_action(2, 2),
            Ok(ActionOutcome::Mark(MarkOutcome::Unflagged))
        );
        assert_eq!(session.board().cell_at(2, 2), Ok(CellView::Hidden));

        assert!(!session.toggle_flag_mode());
        assert_eq!(
            session.primary_action(2, 2),
            Ok(ActionOutcome::Reveal(RevealOutcome::Revealed))
        );
    }

    #[test]
    fn flag_toggle_ignores_revealed_cell() {
        let mut session = session((3, 1), &[(0, 0)]);

        session.reveal_cell(2, 0).unwrap();
        assert_eq!(session.flag_toggle(2, 0), Ok(MarkOutcome::NoChange));
        assert_eq!(session.board().flagged_count(), 0);
    }

    #[test]
    fn out_of_bounds_actions_fail() {
        let mut session = session((3, 2), &[(0, 0)]);

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (i32::MAX, 0)] {
            assert_eq!(session.primary_action(x, y), Err(GameError::OutOfBounds));
        }
        session.toggle_flag_mode();
        assert_eq!(session.primary_action(-1, -1), Err(GameError::OutOfBounds));
        assert_eq!(session.reveal_cell(3, 3), Err(GameError::OutOfBounds));
        assert_eq!(session.flag_toggle(5, 0), Err(GameError::OutOfBounds));
    }

    #[test]
    fn out_of_bounds_still_fails_after_game_ends() {
        let mut session = session((2, 1), &[(0, 0)]);
        session.reveal_cell(0, 0).unwrap();

        assert_eq!(session.primary_action(2, 0), Err(GameError::OutOfBounds));
    }

    #[test]
    fn board_without_safe_cells_is_never_won() {
        let mut session = session((1, 1), &[(0, 0)]);

        assert_eq!(GameStatus::evaluate(session.board()), GameStatus::InProgress);
        session.flag_toggle(0, 0).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.reveal_cell(0, 0), Ok(RevealOutcome::NoChange));
        session.flag_toggle(0, 0).unwrap();
        assert_eq!(session.reveal_cell(0, 0), Ok(RevealOutcome::HitMine));
    }
}
