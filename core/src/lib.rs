//! Minefield state engine: board generation, cascading reveal, and a local
//! deduction solver over the player-visible snapshot. Rendering, input
//! handling, and learned move policies live in other crates and only talk to
//! this one through [`Board`], [`Game`], and [`Snapshot`].

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod analysis;
mod board;
mod cell;
mod error;
mod game;
mod generator;
mod types;

/// Board dimensions and mine budget for one game.
///
/// Threaded explicitly through generation and play so boards of different
/// sizes can coexist in one process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Axis,
    pub height: Axis,
    pub mines: CellCount,
}

impl GameConfig {
    pub const BEGINNER: Self = Self::new_unchecked(9, 9, 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked(16, 16, 40);
    pub const EXPERT: Self = Self::new_unchecked(30, 16, 99);
    pub const TEST: Self = Self::new_unchecked(4, 4, 2);

    pub const fn new_unchecked(width: Axis, height: Axis, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Axis, height: Axis, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    /// Rejects any mine budget outside `0 < mines < width * height`.
    pub fn validate(&self) -> Result<()> {
        if self.mines == 0 || self.mines >= self.total_cells() {
            return Err(GameError::BadMineCount);
        }
        Ok(())
    }

    pub const fn size(&self) -> Pos {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_total(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}
