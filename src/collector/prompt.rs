use super::InputCollector;
use super::parse::{ScoreInput, parse_replay_answer, parse_score_input};
use crate::model::{HoleNumber, Strokes};
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::io::Write;

/// Source of typed lines. `Ok(None)` means the user hung up (Ctrl-C, Ctrl-D,
/// or the input ran out).
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal input through rustyline, with history.
pub struct EditorLines {
    editor: DefaultEditor,
}

impl EditorLines {
    /// # Errors
    ///
    /// Will return `Err` if the terminal editor cannot be created
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("init score prompt")?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorLines {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed)?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("read score input"),
        }
    }
}

/// Pre-typed lines, for tests and piped input.
impl LineReader for VecDeque<String> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.pop_front())
    }
}

/// Asks each player for their strokes in turn, re-asking until it gets a
/// non-negative integer or an exit word.
pub struct PromptCollector<R, W> {
    lines: R,
    out: W,
    player_a: String,
    player_b: String,
}

impl<R: LineReader, W: Write> PromptCollector<R, W> {
    pub fn new(lines: R, out: W, player_a: impl Into<String>, player_b: impl Into<String>) -> Self {
        Self {
            lines,
            out,
            player_a: player_a.into(),
            player_b: player_b.into(),
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.lines, self.out)
    }

    fn ask_strokes(&mut self, name: &str) -> Result<Option<u32>> {
        let prompt = format!("\t{name}'s Score: ");
        loop {
            let Some(line) = self.lines.read_line(&prompt)? else {
                return Ok(None);
            };
            match parse_score_input(&line) {
                ScoreInput::Strokes(strokes) => return Ok(Some(strokes)),
                ScoreInput::Exit => return Ok(None),
                ScoreInput::Invalid => {
                    tracing::debug!(input = %line.trim(), "rejected score input");
                    writeln!(self.out, "Enter a number").context("write prompt output")?;
                }
            }
        }
    }
}

impl<R: LineReader, W: Write> InputCollector for PromptCollector<R, W> {
    fn collect_hole_score(&mut self, _hole: HoleNumber) -> Result<Option<Strokes>> {
        let player_a = self.player_a.clone();
        let Some(a) = self.ask_strokes(&player_a)? else {
            return Ok(None);
        };
        let player_b = self.player_b.clone();
        let Some(b) = self.ask_strokes(&player_b)? else {
            return Ok(None);
        };
        Ok(Some(Strokes::new(a, b)))
    }

    fn confirm_replay(&mut self) -> Result<bool> {
        Ok(self
            .lines
            .read_line("Play Again? (Y/N) ")?
            .is_some_and(|answer| parse_replay_answer(&answer)))
    }
}
