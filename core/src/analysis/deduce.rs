use alloc::collections::BTreeSet;

use rand::Rng;
use rand::RngExt;
use smallvec::SmallVec;

use crate::*;

/// Certain conclusions drawn from one pass over a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deduction {
    pub mines: BTreeSet<Pos>,
    pub safe: BTreeSet<Pos>,
}

impl Deduction {
    pub fn is_empty(&self) -> bool {
        self.mines.is_empty() && self.safe.is_empty()
    }
}

/// Applies the two local completion rules to every open numbered cell.
///
/// For a cell showing `count` with hidden neighbors `h` and flagged
/// neighbors `f`:
///   - `count == |h| + |f|` marks all of `h` as certain mines;
///   - `count == |f|` marks all of `h` as certainly safe.
///
/// Flags are trusted as correct mines. Each rule looks at one constraint in
/// isolation; overlapping constraints are never combined, so the result can
/// be empty on boards a multi-constraint solver would still crack. Callers
/// fall back to [`guess`] in that case.
pub fn deduce(info: &Snapshot) -> Deduction {
    let mut deduction = Deduction::default();

    for (pos, cell) in info.iter() {
        let Some(count) = cell.open_count() else {
            continue;
        };

        let mut hidden: SmallVec<[Pos; 8]> = SmallVec::new();
        let mut flagged = 0usize;
        for neighbor in info.neighbors_of(pos) {
            match info.at(neighbor) {
                CellInfo::Hidden => hidden.push(neighbor),
                CellInfo::Flagged => flagged += 1,
                CellInfo::Open(_) | CellInfo::Mine => {}
            }
        }

        let count = usize::from(count);
        if count == hidden.len() + flagged {
            deduction.mines.extend(hidden.iter().copied());
        }
        if count == flagged {
            deduction.safe.extend(hidden.iter().copied());
        }
    }

    deduction
}

/// Uniform random fallback over the hidden (unflagged, unrevealed) cells,
/// for when [`deduce`] produces nothing safe. Reads the snapshot, mutates
/// nothing; deterministic under a seeded `rng`. `None` when no hidden cell
/// remains.
pub fn guess<R: Rng + ?Sized>(info: &Snapshot, rng: &mut R) -> Option<Pos> {
    let hidden = info.hidden_cells();
    if hidden.is_empty() {
        return None;
    }
    Some(hidden[rng.random_range(0..hidden.len())])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn played(width: Axis, height: Axis, mines: &[Pos], reveal: Pos) -> Game {
        let board = Board::from_mine_positions(width, height, mines).unwrap();
        let mut game = Game::new(board);
        game.reveal(reveal).unwrap();
        game
    }

    #[test]
    fn completes_a_saturated_clue_into_mines() {
        // 3x1 field: the cascade from the right opens everything but the
        // mine, and the 1-clue pins it
        let game = played(3, 1, &[(0, 0)], (2, 0));

        let deduction = deduce(&game.snapshot());

        assert_eq!(deduction.mines, BTreeSet::from([(0, 0)]));
        assert!(deduction.safe.is_empty());
    }

    #[test]
    fn flag_accounted_clues_release_their_other_neighbors() {
        let mut game = played(3, 3, &[(0, 0), (2, 0)], (1, 2));
        game.toggle_flag((0, 0)).unwrap();
        game.toggle_flag((2, 0)).unwrap();

        let deduction = deduce(&game.snapshot());

        assert_eq!(deduction.safe, BTreeSet::from([(1, 0)]));
        assert!(deduction.mines.is_empty());
    }

    #[test]
    fn no_deduction_without_enough_information() {
        // both corner mines share every clue with the safe middle cell, so
        // no single constraint resolves
        let game = played(3, 3, &[(0, 0), (2, 0)], (1, 2));

        assert!(deduce(&game.snapshot()).is_empty());
    }

    #[test]
    fn deductions_are_sound_against_ground_truth() {
        let mut rng = SmallRng::seed_from_u64(99);

        for seed in 0..20u64 {
            let mut game_rng = SmallRng::seed_from_u64(seed);
            let board = generate(GameConfig::BEGINNER, &mut game_rng).unwrap();
            let mut game = Game::new(board);

            if game.reveal(guess(&game.snapshot(), &mut rng).unwrap()).unwrap()
                != GameOutcome::Continue
            {
                continue;
            }

            let deduction = deduce(&game.snapshot());
            for &pos in &deduction.mines {
                assert!(game.board().value_at(pos).is_mine(), "unsound mine at {:?}", pos);
            }
            for &pos in &deduction.safe {
                assert!(!game.board().value_at(pos).is_mine(), "unsound safe at {:?}", pos);
            }
        }
    }

    #[test]
    fn guess_only_picks_hidden_cells() {
        let mut game = played(3, 3, &[(0, 0), (2, 0)], (1, 2));
        game.toggle_flag((0, 0)).unwrap();
        let info = game.snapshot();

        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..50 {
            let pos = guess(&info, &mut rng).unwrap();
            assert_eq!(info.at(pos), CellInfo::Hidden);
        }
    }

    #[test]
    fn guess_is_reproducible_for_a_fixed_seed() {
        let game = played(3, 3, &[(0, 0), (2, 0)], (1, 2));
        let info = game.snapshot();

        let mut first = SmallRng::seed_from_u64(11);
        let mut second = SmallRng::seed_from_u64(11);
        assert_eq!(guess(&info, &mut first), guess(&info, &mut second));
    }

    #[test]
    fn guess_returns_none_when_nothing_is_hidden() {
        let board = Board::from_mine_positions(2, 1, &[(0, 0)]).unwrap();
        let mut game = Game::new(board);
        game.toggle_flag((0, 0)).unwrap();
        assert_eq!(game.reveal((1, 0)).unwrap(), GameOutcome::Won);

        // every cell is revealed or flagged: nothing left to guess
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(guess(&game.snapshot(), &mut rng), None);
    }
}
