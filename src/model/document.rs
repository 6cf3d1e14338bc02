use super::outcome::{Outcome, WinTally};
use super::round::{Round, RoundId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything that gets persisted: the all-time tally plus every kept round.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerDocument {
    #[serde(default)]
    pub wins: BTreeMap<Outcome, u64>,
    #[serde(default)]
    pub rounds: BTreeMap<RoundId, Round>,
}

impl LedgerDocument {
    /// Parses stored text. Blank text is an empty document.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the text is not a valid ledger document
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut doc: Self = serde_json::from_str(text)?;
        doc.ensure_wins();
        Ok(doc)
    }

    /// # Errors
    ///
    /// Will return `Err` if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    pub fn ensure_wins(&mut self) {
        for outcome in Outcome::ALL {
            self.wins.entry(outcome).or_insert(0);
        }
    }

    /// Smallest positive id with no round stored under it.
    #[must_use]
    pub fn first_free_round_id(&self) -> RoundId {
        let mut id: RoundId = 1;
        while self.rounds.contains_key(&id) {
            id += 1;
        }
        id
    }

    #[must_use]
    pub fn win_tally(&self) -> WinTally {
        let count = |outcome: Outcome| self.wins.get(&outcome).copied().unwrap_or(0);
        WinTally {
            player_a: count(Outcome::PlayerA),
            player_b: count(Outcome::PlayerB),
            tied: count(Outcome::Tied),
        }
    }
}
