/// What a single line typed at a score prompt means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreInput {
    Strokes(u32),
    Exit,
    Invalid,
}

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

#[must_use]
pub fn parse_score_input(input: &str) -> ScoreInput {
    let trimmed = input.trim();
    if EXIT_WORDS
        .iter()
        .any(|word| trimmed.eq_ignore_ascii_case(word))
    {
        return ScoreInput::Exit;
    }
    trimmed
        .parse::<u32>()
        .map_or(ScoreInput::Invalid, ScoreInput::Strokes)
}

/// Only an explicit `y` plays again.
#[must_use]
pub fn parse_replay_answer(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
