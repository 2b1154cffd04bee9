use minado_core::{Pos, Snapshot, deduce, guess};
use rand::rngs::SmallRng;

/// One turn's worth of moves chosen by a policy: flags are applied first,
/// then reveals, matching how a careful player marks mines before clicking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Turn {
    pub flags: Vec<Pos>,
    pub reveals: Vec<Pos>,
}

impl Turn {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.reveals.is_empty()
    }
}

/// An automated player. It only ever sees the public snapshot, never the
/// board itself, so it cannot cheat its way around hidden mines.
pub trait Policy {
    fn name(&self) -> &'static str;

    fn choose(&mut self, info: &Snapshot, rng: &mut SmallRng) -> Turn;
}

/// Flags every deduced mine, reveals every deduced safe cell, and falls
/// back to a uniform random guess when the local rules produce nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct DeductionPolicy;

impl Policy for DeductionPolicy {
    fn name(&self) -> &'static str {
        "deduction"
    }

    fn choose(&mut self, info: &Snapshot, rng: &mut SmallRng) -> Turn {
        let conclusions = deduce(info);
        let mut turn = Turn {
            flags: conclusions.mines.iter().copied().collect(),
            reveals: conclusions.safe.iter().copied().collect(),
        };

        if turn.reveals.is_empty() {
            if let Some(pos) = guess(info, rng) {
                log::debug!("no certain move, guessing {:?}", pos);
                turn.reveals.push(pos);
            }
        }

        turn
    }
}

/// Reveals one uniformly random hidden cell per turn; the baseline player
/// used to collect untrained game records.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, info: &Snapshot, rng: &mut SmallRng) -> Turn {
        Turn {
            flags: Vec::new(),
            reveals: guess(info, rng).into_iter().collect(),
        }
    }
}
