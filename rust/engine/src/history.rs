use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::showdown::Outcome;

/// How a hand finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndedBy {
    Fold,
    Showdown,
}

/// Compact per-hand record handed to history storage.
/// Serialized as one JSON object per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandHistory {
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub board: Vec<Card>,
    pub outcome: Outcome,
    pub total_payout: u64,
    pub ended_by: EndedBy,
    /// RFC3339 timestamp, filled in by the writer when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

impl HandHistory {
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
