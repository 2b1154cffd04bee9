use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::nd;
use crate::*;

/// Pure board data: an immutable grid of cell values plus a mutable grid of
/// reveal/flag states, both addressed by `(x, y)`.
///
/// Invariants held from construction onward: exactly `config.mines` cells
/// carry [`CellValue::Mine`], and every [`CellValue::Count`] equals the true
/// number of mine-valued neighbors. The value grid is never touched after
/// construction; only the state grid changes during play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    values: Array2<CellValue>,
    states: Array2<CellState>,
}

impl Board {
    /// Builds a board from explicit mine positions, computing every count.
    ///
    /// Duplicate positions collapse into one mine; the resulting distinct
    /// count must still satisfy the config invariant.
    pub fn from_mine_positions(width: Axis, height: Axis, mines: &[Pos]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default((width as usize, height as usize));
        for &pos in mines {
            if pos.0 >= width || pos.1 >= height {
                return Err(GameError::OutOfBounds);
            }
            mask[nd(pos)] = true;
        }

        let placed = mask.iter().filter(|&&mine| mine).count() as CellCount;
        let config = GameConfig::new(width, height, placed)?;
        Ok(Self::from_mine_mask(config, &mask))
    }

    /// Fills the value grid from a mine mask. The mask must already contain
    /// exactly `config.mines` set cells.
    pub(crate) fn from_mine_mask(config: GameConfig, mask: &Array2<bool>) -> Self {
        let size = config.size();
        let mut values = Array2::from_elem(mask.dim(), CellValue::default());

        for pos in positions(size) {
            values[nd(pos)] = if mask[nd(pos)] {
                CellValue::Mine
            } else {
                let count = neighbors(pos, size).filter(|&p| mask[nd(p)]).count() as u8;
                CellValue::Count(count)
            };
        }

        Self {
            config,
            values,
            states: Array2::default(mask.dim()),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Pos {
        self.config.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn safe_cells(&self) -> CellCount {
        self.config.safe_cells()
    }

    /// Returns `pos` unchanged when it lies on the board.
    pub fn check_bounds(&self, pos: Pos) -> Result<Pos> {
        if pos.0 < self.config.width && pos.1 < self.config.height {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn value_at(&self, pos: Pos) -> CellValue {
        self.values[nd(pos)]
    }

    pub fn state_at(&self, pos: Pos) -> CellState {
        self.states[nd(pos)]
    }

    pub(crate) fn set_state(&mut self, pos: Pos, state: CellState) {
        self.states[nd(pos)] = state;
    }

    /// Read-only access for the render collaborator.
    pub fn values(&self) -> &Array2<CellValue> {
        &self.values
    }

    /// Read-only access for the render collaborator.
    pub fn states(&self) -> &Array2<CellState> {
        &self.states
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = Pos> {
        positions(self.size())
    }

    pub fn neighbors_of(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        neighbors(pos, self.size())
    }
}
