use ndarray::Array2;
use rand::Rng;
use rand::RngExt;

use crate::types::nd;
use crate::*;

/// Builds a fresh board by sampling uniform random positions until the
/// requested number of *distinct* mines has been placed; duplicate draws are
/// rejected and never double-counted. Counts are filled in a single pass
/// afterwards, and every cell starts hidden with no flags.
///
/// Reproducible for a seeded `rng`; the expected number of rejected draws
/// stays small because the config invariant keeps at least one cell free.
pub fn generate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Board> {
    config.validate()?;

    let (width, height) = config.size();
    let mut mask: Array2<bool> = Array2::default((width as usize, height as usize));
    let mut placed: CellCount = 0;

    while placed < config.mines {
        let pos: Pos = (rng.random_range(0..width), rng.random_range(0..height));
        if mask[nd(pos)] {
            continue;
        }
        mask[nd(pos)] = true;
        placed += 1;
    }

    log::debug!(
        "placed {} mines on a {}x{} field",
        placed,
        width,
        height
    );

    Ok(Board::from_mine_mask(config, &mask))
}
