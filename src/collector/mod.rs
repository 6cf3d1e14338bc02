//! Where hole scores come from.

use crate::model::{HoleNumber, Strokes};
use anyhow::Result;
use std::collections::VecDeque;

mod parse;
mod prompt;

pub use parse::{ScoreInput, parse_replay_answer, parse_score_input};
pub use prompt::{EditorLines, LineReader, PromptCollector};

pub trait InputCollector {
    /// Strokes for `hole`, or `None` when the user wants to stop mid-round.
    fn collect_hole_score(&mut self, hole: HoleNumber) -> Result<Option<Strokes>>;

    /// Asked after a finished round.
    fn confirm_replay(&mut self) -> Result<bool>;
}

/// Replays a fixed script of hole scores and replay answers.
#[derive(Debug, Default)]
pub struct ScriptedCollector {
    scores: VecDeque<Option<Strokes>>,
    replays: VecDeque<bool>,
}

impl ScriptedCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scores<I, T>(mut self, scores: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Strokes>,
    {
        self.scores
            .extend(scores.into_iter().map(|score| Some(score.into())));
        self
    }

    #[must_use]
    pub fn then_exit(mut self) -> Self {
        self.scores.push_back(None);
        self
    }

    #[must_use]
    pub fn with_replay(mut self, again: bool) -> Self {
        self.replays.push_back(again);
        self
    }

    #[must_use]
    pub fn remaining_scores(&self) -> usize {
        self.scores.len()
    }
}

impl InputCollector for ScriptedCollector {
    fn collect_hole_score(&mut self, _hole: HoleNumber) -> Result<Option<Strokes>> {
        Ok(self.scores.pop_front().flatten())
    }

    fn confirm_replay(&mut self) -> Result<bool> {
        Ok(self.replays.pop_front().unwrap_or(false))
    }
}
