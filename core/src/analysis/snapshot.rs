use alloc::vec::Vec;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::nd;
use crate::*;

/// What one cell looks like to an outside observer.
///
/// `Mine` only ever appears on terminal boards, where the reveal engine has
/// uncovered the mine layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellInfo {
    Hidden,
    Flagged,
    Open(u8),
    Mine,
}

impl CellInfo {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn open_count(self) -> Option<u8> {
        match self {
            Self::Open(count) => Some(count),
            _ => None,
        }
    }
}

/// Read-only projection of a board into the player-visible three-state
/// view. This is the only data a solver or external policy may consume;
/// hidden cell values never leak through it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    grid: Array2<CellInfo>,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let mut grid = Array2::from_elem((size.0 as usize, size.1 as usize), CellInfo::Hidden);

        for pos in positions(size) {
            grid[nd(pos)] = match board.state_at(pos) {
                CellState::Hidden => CellInfo::Hidden,
                CellState::Flagged => CellInfo::Flagged,
                CellState::Revealed => match board.value_at(pos) {
                    CellValue::Mine => CellInfo::Mine,
                    CellValue::Count(count) => CellInfo::Open(count),
                },
            };
        }

        Self { grid }
    }

    pub fn size(&self) -> Pos {
        let dim = self.grid.dim();
        (dim.0 as Axis, dim.1 as Axis)
    }

    pub fn at(&self, pos: Pos) -> CellInfo {
        self.grid[nd(pos)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, CellInfo)> {
        positions(self.size()).map(|pos| (pos, self.at(pos)))
    }

    pub fn neighbors_of(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        neighbors(pos, self.size())
    }

    /// Every unflagged, unrevealed position; the guess fallback's domain.
    pub fn hidden_cells(&self) -> Vec<Pos> {
        self.iter()
            .filter(|&(_, cell)| cell.is_hidden())
            .map(|(pos, _)| pos)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_hidden_flagged_and_open_cells() {
        let board = Board::from_mine_positions(2, 2, &[(0, 0)]).unwrap();
        let mut game = Game::new(board);
        game.reveal((1, 1)).unwrap();
        game.toggle_flag((0, 1)).unwrap();

        let info = game.snapshot();

        assert_eq!(info.at((0, 0)), CellInfo::Hidden);
        assert_eq!(info.at((0, 1)), CellInfo::Flagged);
        assert_eq!(info.at((1, 0)), CellInfo::Hidden);
        assert_eq!(info.at((1, 1)), CellInfo::Open(1));
    }

    #[test]
    fn never_leaks_hidden_mines() {
        let board = Board::from_mine_positions(3, 3, &[(0, 0), (2, 2)]).unwrap();
        let game = Game::new(board);

        let info = game.snapshot();
        assert!(info.iter().all(|(_, cell)| cell == CellInfo::Hidden));
    }

    #[test]
    fn shows_mines_after_a_loss() {
        let board = Board::from_mine_positions(2, 2, &[(0, 0)]).unwrap();
        let mut game = Game::new(board);
        game.reveal((0, 0)).unwrap();

        let info = game.snapshot();
        assert_eq!(info.at((0, 0)), CellInfo::Mine);
    }

    #[test]
    fn serializes_for_the_recording_collaborator() {
        let board = Board::from_mine_positions(2, 1, &[(0, 0)]).unwrap();
        let mut game = Game::new(board);
        game.toggle_flag((0, 0)).unwrap();

        let json = serde_json::to_string(&game.snapshot()).unwrap();
        assert!(json.contains("Flagged"));
    }

    #[test]
    fn hidden_cells_excludes_flags_and_open_cells() {
        let board = Board::from_mine_positions(2, 2, &[(0, 0)]).unwrap();
        let mut game = Game::new(board);
        game.reveal((1, 1)).unwrap();
        game.toggle_flag((1, 0)).unwrap();

        let hidden = game.snapshot().hidden_cells();
        assert_eq!(hidden, [(0, 0), (0, 1)]);
    }
}
