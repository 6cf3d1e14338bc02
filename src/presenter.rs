use crate::model::{HoleNumber, HoleState, Outcome, WinTally};
use anyhow::{Context, Result};
use std::io::Write;

/// Shows scores and results. Nothing it does feeds back into the ledger.
pub trait Presenter {
    fn hole_header(&mut self, hole: HoleNumber) -> Result<()>;
    fn hole_totals(&mut self, totals: HoleState) -> Result<()>;
    fn round_result(&mut self, outcome: Outcome, tally: WinTally) -> Result<()>;
    fn tally(&mut self, tally: WinTally) -> Result<()>;
    fn message(&mut self, text: &str) -> Result<()>;
}

/// Plain text to any writer, using the players' display names.
pub struct TextPresenter<W> {
    out: W,
    player_a: String,
    player_b: String,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, player_a: impl Into<String>, player_b: impl Into<String>) -> Self {
        Self {
            out,
            player_a: player_a.into(),
            player_b: player_b.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    #[must_use]
    pub fn winner_name(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::PlayerA => &self.player_a,
            Outcome::PlayerB => &self.player_b,
            Outcome::Tied => "No One",
        }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn hole_header(&mut self, hole: HoleNumber) -> Result<()> {
        writeln!(self.out, "Hole {hole}").context("write hole header")
    }

    fn hole_totals(&mut self, totals: HoleState) -> Result<()> {
        writeln!(self.out, "\tThe Score Is:")?;
        writeln!(self.out, "\t\t{} - {}", self.player_a, totals.player_a)?;
        writeln!(self.out, "\t\t{} - {}", self.player_b, totals.player_b)
            .context("write hole totals")
    }

    fn round_result(&mut self, outcome: Outcome, tally: WinTally) -> Result<()> {
        let winner = self.winner_name(outcome).to_string();
        writeln!(self.out, "{winner} Wins!")?;
        writeln!(self.out, "Game Over")?;
        writeln!(self.out)?;
        self.tally(tally)?;
        writeln!(self.out).context("write round result")
    }

    fn tally(&mut self, tally: WinTally) -> Result<()> {
        writeln!(self.out, "{} Has Won {} Times", self.player_a, tally.player_a)?;
        writeln!(self.out, "{} Has Won {} Times", self.player_b, tally.player_b)?;
        writeln!(self.out, "There Have Been {} Ties", tally.tied).context("write tally")
    }

    fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").context("write message")
    }
}
