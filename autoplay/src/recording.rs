use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use minado_core::{CellCount, GameStatus, Pos, Snapshot};
use serde::Serialize;

/// What the training collaborator sees for one move: the snapshot the
/// policy acted on, the coordinate it chose, and the score at that point
/// (count of revealed safe cells).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnRecord {
    pub snapshot: Snapshot,
    pub chosen: Pos,
    pub score: CellCount,
}

/// One full game as recorded for training: reproducible via its seed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameRecord {
    pub seed: u64,
    pub turns: Vec<TurnRecord>,
    pub outcome: GameStatus,
}

/// Collects game records and writes them out as JSON lines, one game per
/// line, in play order.
#[derive(Debug, Default)]
pub struct Recorder {
    games: Vec<GameRecord>,
}

impl Recorder {
    pub fn push(&mut self, record: GameRecord) {
        self.games.push(record);
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn write_jsonl(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create record file {}", path.display()))?;
        let mut out = BufWriter::new(file);

        for game in &self.games {
            serde_json::to_writer(&mut out, game)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}
