use super::score::HoleState;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Result of a finished round, also the key into the win tally.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    PlayerA,
    PlayerB,
    Tied,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::PlayerA, Outcome::PlayerB, Outcome::Tied];

    /// Fewer strokes wins.
    #[must_use]
    pub fn from_totals(totals: HoleState) -> Self {
        match totals.player_a.cmp(&totals.player_b) {
            Ordering::Less => Self::PlayerA,
            Ordering::Greater => Self::PlayerB,
            Ordering::Equal => Self::Tied,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerA => "PlayerA",
            Self::PlayerB => "PlayerB",
            Self::Tied => "Tied",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinTally {
    pub player_a: u64,
    pub player_b: u64,
    pub tied: u64,
}

impl WinTally {
    #[must_use]
    pub fn get(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::PlayerA => self.player_a,
            Outcome::PlayerB => self.player_b,
            Outcome::Tied => self.tied,
        }
    }
}
