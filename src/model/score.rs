use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw strokes entered for a single hole.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Strokes {
    pub player_a: u32,
    pub player_b: u32,
}

impl Strokes {
    #[must_use]
    pub fn new(player_a: u32, player_b: u32) -> Self {
        Self { player_a, player_b }
    }
}

impl From<(u32, u32)> for Strokes {
    fn from((player_a, player_b): (u32, u32)) -> Self {
        Self { player_a, player_b }
    }
}

/// Running totals through a hole, not the strokes taken on it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoleState {
    pub player_a: u32,
    pub player_b: u32,
}

impl HoleState {
    #[must_use]
    pub fn new(player_a: u32, player_b: u32) -> Self {
        Self { player_a, player_b }
    }

    /// Totals after adding `strokes`, `None` if either total would overflow.
    #[must_use]
    pub fn plus(self, strokes: Strokes) -> Option<Self> {
        Some(Self {
            player_a: self.player_a.checked_add(strokes.player_a)?,
            player_b: self.player_b.checked_add(strokes.player_b)?,
        })
    }
}

impl From<Strokes> for HoleState {
    fn from(value: Strokes) -> Self {
        Self {
            player_a: value.player_a,
            player_b: value.player_b,
        }
    }
}

impl From<(u32, u32)> for HoleState {
    fn from((player_a, player_b): (u32, u32)) -> Self {
        Self { player_a, player_b }
    }
}

impl fmt::Display for HoleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.player_a, self.player_b)
    }
}
