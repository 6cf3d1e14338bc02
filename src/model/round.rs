use super::score::HoleState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type RoundId = u32;
pub type HoleNumber = u8;

pub const HOLES_PER_ROUND: HoleNumber = 9;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub holes: BTreeMap<HoleNumber, HoleState>,
}

impl Round {
    /// A round with every hole present and zeroed.
    #[must_use]
    pub fn new() -> Self {
        let holes = (1..=HOLES_PER_ROUND)
            .map(|hole| (hole, HoleState::default()))
            .collect();
        Self { holes }
    }

    #[must_use]
    pub fn hole(&self, hole: HoleNumber) -> Option<HoleState> {
        self.holes.get(&hole).copied()
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use]
pub fn hole_in_range(hole: HoleNumber) -> bool {
    (1..=HOLES_PER_ROUND).contains(&hole)
}
