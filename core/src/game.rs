use alloc::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::*;

/// Progress of a single game.
///
/// Valid transitions: `Fresh -> Playing`, `Fresh -> Won`, `Fresh -> Lost`,
/// `Playing -> Won`, `Playing -> Lost`. The terminal states accept no
/// further moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Fresh,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Fresh
    }
}

/// Result of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Continue,
    Won,
    Lost,
}

/// Result of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

/// One game, from a fresh board to a terminal state.
///
/// Move policy: reveals and flag toggles are accepted while the game is
/// `Fresh` or `Playing` and rejected with [`GameError::GameOver`] once it is
/// terminal. Revealing a flagged or already-revealed cell is a no-op
/// returning [`GameOutcome::Continue`]; a flag must be toggled off before
/// its cell can be revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    revealed_safe: CellCount,
    flagged: CellCount,
    status: GameStatus,
    detonated: Option<Pos>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            revealed_safe: 0,
            flagged: 0,
            status: GameStatus::default(),
            detonated: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of revealed non-mine cells so far.
    pub fn revealed_safe(&self) -> CellCount {
        self.revealed_safe
    }

    /// The mine that ended the game, if it was lost.
    pub fn detonated(&self) -> Option<Pos> {
        self.detonated
    }

    /// Mine budget minus placed flags, for the render collaborator's
    /// counter display. Negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.board.total_mines()) - i64::from(self.flagged)
    }

    /// The player-visible projection consumed by solvers and policies.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_board(&self.board)
    }

    /// Reveals the cell at `pos`.
    ///
    /// A mine reveals the full mine layout and loses the game. A zero-count
    /// cell triggers the cascade. After any reveal the win condition is
    /// rechecked: the game is won exactly when every non-mine cell is
    /// revealed.
    pub fn reveal(&mut self, pos: Pos) -> Result<GameOutcome> {
        let pos = self.board.check_bounds(pos)?;
        self.check_playable()?;

        match self.board.state_at(pos) {
            CellState::Revealed | CellState::Flagged => return Ok(GameOutcome::Continue),
            CellState::Hidden => {}
        }

        if self.board.value_at(pos).is_mine() {
            log::debug!("mine hit at {:?}", pos);
            self.detonated = Some(pos);
            self.reveal_all_mines();
            self.status = GameStatus::Lost;
            return Ok(GameOutcome::Lost);
        }

        self.reveal_safe_cell(pos);
        if self.board.value_at(pos).is_zero() {
            self.cascade_from(pos);
        }

        if self.revealed_safe == self.board.safe_cells() {
            self.status = GameStatus::Won;
            Ok(GameOutcome::Won)
        } else {
            self.status = GameStatus::Playing;
            Ok(GameOutcome::Continue)
        }
    }

    /// Flips the cell at `pos` between hidden and flagged; revealed cells
    /// are left alone. Toggling twice restores the original state.
    pub fn toggle_flag(&mut self, pos: Pos) -> Result<FlagOutcome> {
        let pos = self.board.check_bounds(pos)?;
        self.check_playable()?;

        Ok(match self.board.state_at(pos) {
            CellState::Hidden => {
                self.board.set_state(pos, CellState::Flagged);
                self.flagged += 1;
                FlagOutcome::Flagged
            }
            CellState::Flagged => {
                self.board.set_state(pos, CellState::Hidden);
                self.flagged -= 1;
                FlagOutcome::Unflagged
            }
            CellState::Revealed => FlagOutcome::NoChange,
        })
    }

    /// Breadth-first expansion of a zero region over an explicit worklist.
    /// The `Revealed` state doubles as the visited set, so every cell is
    /// processed at most once and the loop terminates on any finite grid.
    /// Flagged cells are never revealed by the cascade.
    fn cascade_from(&mut self, origin: Pos) {
        let mut frontier: VecDeque<Pos> = self.board.neighbors_of(origin).collect();

        while let Some(pos) = frontier.pop_front() {
            if self.board.state_at(pos) != CellState::Hidden {
                continue;
            }

            // a zero cell has no mine neighbors, so the frontier only ever
            // holds safe cells
            self.reveal_safe_cell(pos);
            log::trace!("cascade revealed {:?}", pos);

            if self.board.value_at(pos).is_zero() {
                frontier.extend(self.board.neighbors_of(pos));
            }
        }
    }

    fn reveal_safe_cell(&mut self, pos: Pos) {
        self.board.set_state(pos, CellState::Revealed);
        self.revealed_safe += 1;
    }

    /// Uncovers the full mine layout after a loss, flags included.
    fn reveal_all_mines(&mut self) {
        let size = self.board.size();
        for pos in positions(size) {
            if self.board.value_at(pos).is_mine() {
                if self.board.state_at(pos).is_flagged() {
                    self.flagged -= 1;
                }
                self.board.set_state(pos, CellState::Revealed);
            }
        }
    }

    fn check_playable(&self) -> Result<()> {
        if self.status.is_terminal() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
