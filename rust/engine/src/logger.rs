use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::{Decision, Role};
use crate::rules::Outcome;

/// One step of a round, in the order it happened.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoundEvent {
    /// Initial deal. The dealer's second card is dealt face down.
    Dealt { role: Role, card: Card, hidden: bool },
    /// The policy answered for a player total below 21
    Decided { decision: Decision, value: u8 },
    /// Card taken after a HIT
    PlayerDrew { card: Card, value: u8 },
    /// The player reached exactly 21
    PlayerBlackjack { value: u8 },
    /// The player went over 21
    PlayerBust { value: u8 },
    /// Dealer turns over the hole card
    Revealed { card: Card, value: u8 },
    DealerDrew { card: Card, value: u8 },
    Resolved {
        outcome: Outcome,
        player_value: u8,
        dealer_value: u8,
    },
}

/// Complete record of a finished round.
/// Serialized to JSONL format for simulation output and later aggregation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed of the round's deck, when the deck was seeded
    pub seed: Option<u64>,
    /// Name of the policy that played the player's hand
    pub strategy: String,
    pub player: Vec<Card>,
    pub dealer: Vec<Card>,
    pub player_value: u8,
    pub dealer_value: u8,
    /// Every decision the policy made, in order
    pub decisions: Vec<Decision>,
    pub outcome: Outcome,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file.
pub struct RoundLogger {
    writer: BufWriter<File>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Opens `path` for appending, creating it and its parent directory if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
