use anyhow::Result;
use rusty_golf_ledger::collector::{InputCollector, PromptCollector};
use rusty_golf_ledger::model::Strokes;
use std::collections::VecDeque;

fn collector(lines: &[&str]) -> PromptCollector<VecDeque<String>, Vec<u8>> {
    let lines: VecDeque<String> = lines.iter().map(|line| (*line).to_string()).collect();
    PromptCollector::new(lines, Vec::new(), "Ann", "Bob")
}

#[test]
fn test7_reads_both_players() -> Result<()> {
    let mut collector = collector(&["4", "5", "3", "6"]);
    assert_eq!(collector.collect_hole_score(1)?, Some(Strokes::new(4, 5)));
    assert_eq!(collector.collect_hole_score(2)?, Some(Strokes::new(3, 6)));
    Ok(())
}

#[test]
fn test7_reasks_until_number() -> Result<()> {
    let mut collector = collector(&["four", "4", "-1", "", "5"]);
    assert_eq!(collector.collect_hole_score(1)?, Some(Strokes::new(4, 5)));
    let (lines, out) = collector.into_parts();
    assert!(lines.is_empty());
    let out = String::from_utf8(out)?;
    assert_eq!(out.matches("Enter a number").count(), 3);
    Ok(())
}

#[test]
fn test7_exit_words_and_hangup() -> Result<()> {
    assert_eq!(collector(&["exit"]).collect_hole_score(1)?, None);
    assert_eq!(collector(&["4", "Quit"]).collect_hole_score(1)?, None);
    assert_eq!(collector(&["4"]).collect_hole_score(1)?, None);
    assert_eq!(collector(&[]).collect_hole_score(1)?, None);
    Ok(())
}

#[test]
fn test7_replay_answer() -> Result<()> {
    assert!(collector(&["y"]).confirm_replay()?);
    assert!(collector(&["Y"]).confirm_replay()?);
    assert!(!collector(&["n"]).confirm_replay()?);
    assert!(!collector(&["maybe"]).confirm_replay()?);
    assert!(!collector(&[]).confirm_replay()?);
    Ok(())
}
