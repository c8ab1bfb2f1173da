use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::game::{Move, PILE_COUNT};

/// Records a single removal during a match: who moved, what they took,
/// and the position left behind. Pile numbers are 1-indexed to match
/// what players see at the console.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub actor: String,
    pub amount: u8,
    pub pile: usize,
    pub piles_after: [u8; PILE_COUNT],
}

/// One completed (or abandoned) match, serializable as a JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub seed: u64,
    pub vs_cpu: bool,
    pub started_at: String,
    pub moves: Vec<MoveRecord>,
    pub winner: Option<String>,
}

/// Accumulates the transcript of one match.
#[derive(Debug, Clone)]
pub struct MatchLogger {
    record: MatchRecord,
}

impl MatchLogger {
    pub fn new(seed: u64, vs_cpu: bool) -> Self {
        Self {
            record: MatchRecord {
                seed,
                vs_cpu,
                started_at: Utc::now().to_rfc3339(),
                moves: Vec::new(),
                winner: None,
            },
        }
    }

    pub fn log_move(&mut self, actor: &str, mv: Move, piles_after: [u8; PILE_COUNT]) {
        self.record.moves.push(MoveRecord {
            actor: actor.to_string(),
            amount: mv.amount,
            pile: mv.pile + 1,
            piles_after,
        });
    }

    pub fn set_winner(&mut self, name: &str) {
        self.record.winner = Some(name.to_string());
    }

    pub fn record(&self) -> &MatchRecord {
        &self.record
    }

    pub fn into_record(self) -> MatchRecord {
        self.record
    }
}
