mod common;

use common::SCENARIO;
use rusty_golf_ledger::model::{HoleState, LedgerDocument, Outcome, WinTally};
use rusty_golf_ledger::storage::{DocumentStore, StorageError};
use rusty_golf_ledger::{FileStore, Ledger, LedgerError, MemoryStore};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

#[test]
fn test3_missing_file_is_empty_state() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("scores").join("game-data.json");
    assert!(FileStore::new(&path).read()?.is_none());

    let ledger = Ledger::initialize(FileStore::new(&path))?;
    assert_eq!(ledger.active_round_id(), Some(1));
    assert!(path.is_file());

    let value: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(value["wins"]["PlayerA"], 0);
    assert_eq!(value["wins"]["PlayerB"], 0);
    assert_eq!(value["wins"]["Tied"], 0);
    for hole in 1..=9 {
        let state = &value["rounds"]["1"]["holes"][hole.to_string()];
        assert_eq!(state["player_a"], 0, "hole {hole}");
        assert_eq!(state["player_b"], 0, "hole {hole}");
    }
    Ok(())
}

#[test]
fn test3_blank_file_is_empty_state() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("game-data.json");
    fs::write(&path, "")?;
    let ledger = Ledger::initialize(FileStore::new(&path))?;
    assert_eq!(ledger.active_round_id(), Some(1));
    assert_eq!(ledger.win_tally(), WinTally::default());
    Ok(())
}

#[test]
fn test3_malformed_document_is_fatal() {
    let store = MemoryStore::with_contents("{ \"wins\": [1, 2");
    let result = Ledger::initialize(store.clone());
    assert!(matches!(result, Err(LedgerError::Parse(_))));
    // nothing was overwritten
    assert_eq!(store.contents().as_deref(), Some("{ \"wins\": [1, 2"));

    let result = Ledger::open(MemoryStore::with_contents(r#"{"rounds": {"1": 7}}"#));
    assert!(matches!(result, Err(LedgerError::Parse(_))));
}

#[test]
fn test3_missing_win_counters_are_filled() -> Result<(), LedgerError> {
    let store = MemoryStore::with_contents(r#"{"wins": {"PlayerB": 3}, "rounds": {}}"#);
    let ledger = Ledger::initialize(store.clone())?;
    let tally = ledger.win_tally();
    assert_eq!((tally.player_a, tally.player_b, tally.tied), (0, 3, 0));

    let doc = LedgerDocument::from_json(&store.contents().unwrap_or_default())?;
    assert_eq!(doc.wins.len(), 3);
    Ok(())
}

#[test]
fn test3_reload_matches_in_memory_state() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("game-data.json");

    let mut ledger = Ledger::initialize(FileStore::new(&path))?;
    for (hole, pair) in (1..=9).zip(SCENARIO) {
        ledger.record_hole(hole, pair)?;
    }
    assert_eq!(ledger.finalize_round()?, Outcome::PlayerA);
    ledger.start_new_round()?;
    ledger.record_hole(1, (6, 3))?;
    let in_memory = ledger.document().clone();
    drop(ledger);

    let reopened = Ledger::open(FileStore::new(&path))?;
    assert_eq!(reopened.document(), &in_memory);
    assert_eq!(reopened.win_tally().player_a, 1);
    assert_eq!(
        reopened.document().rounds[&1].hole(9),
        Some(HoleState::new(35, 36))
    );
    assert_eq!(
        reopened.document().rounds[&2].hole(1),
        Some(HoleState::new(6, 3))
    );
    Ok(())
}

#[test]
fn test3_open_never_writes() -> Result<(), LedgerError> {
    let store = MemoryStore::new();
    let ledger = Ledger::open(store.clone())?;
    assert_eq!(ledger.active_round_id(), None);
    assert!(store.contents().is_none());
    Ok(())
}

#[test]
fn test3_document_is_pretty_and_ordered() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::with_contents(common::document_with_rounds(&[10, 2]));
    let _ledger = Ledger::initialize(store.clone())?;
    let text = store.contents().unwrap_or_default();

    assert!(text.lines().count() > 10);
    assert!(text.contains("\"PlayerA\": 0"));
    let first = text.find("\"1\": {").ok_or("round 1 missing")?;
    let second = text.find("\"2\": {").ok_or("round 2 missing")?;
    let tenth = text.find("\"10\": {").ok_or("round 10 missing")?;
    assert!(first < second && second < tenth);
    Ok(())
}

#[test]
fn test3_file_errors_name_the_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "plain file")?;
    let mut store = FileStore::new(blocker.join("game-data.json"));

    match store.write("{}") {
        Err(StorageError::CreateDir { path, .. }) => assert_eq!(path, blocker),
        other => panic!("expected CreateDir error, got {other:?}"),
    }

    let err = Ledger::initialize(FileStore::new(dir.path()))
        .err()
        .ok_or("directory read as file")?;
    assert!(matches!(err, LedgerError::Storage(StorageError::Read { .. })));
    assert!(err.to_string().contains(&dir.path().display().to_string()));
    Ok(())
}
