//! The play loop: pull, record nine holes per round, decide, push.

use crate::collector::InputCollector;
use crate::ledger::Ledger;
use crate::model::{HOLES_PER_ROUND, Outcome, RoundId, WinTally};
use crate::presenter::Presenter;
use crate::storage::DocumentStore;
use crate::sync::SyncAgent;
use anyhow::{Context, Result};
use chrono::Local;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub completed: Vec<(RoundId, Outcome)>,
    pub abandoned: Option<RoundId>,
    pub tally: WinTally,
}

/// Runs a whole scoring session against `store`.
///
/// Any failure once the ledger is loaded abandons the open round and still
/// pushes, so the remote copy never keeps a half-played round.
///
/// # Errors
///
/// Will return `Err` if the stored document is malformed or anything fails
/// mid-session (after cleanup has been attempted)
pub fn run_session<S, C, P, Y>(
    store: S,
    collector: &mut C,
    presenter: &mut P,
    sync: &mut Y,
) -> Result<SessionReport>
where
    S: DocumentStore,
    C: InputCollector,
    P: Presenter,
    Y: SyncAgent,
{
    if let Err(err) = sync.pull() {
        tracing::warn!(error = %err, "pull failed, continuing with local score file");
    }
    let mut ledger = Ledger::initialize(store).context("load score file")?;

    match play_rounds(&mut ledger, collector, presenter, sync) {
        Ok(report) => Ok(report),
        Err(err) => {
            tracing::error!(error = %err, "session failed, abandoning open round");
            match ledger.abandon_round() {
                Ok(Some(round)) => push_best_effort(sync, &abandoned_description(round)),
                Ok(None) => push_best_effort(sync, &commit_description("Session ended")),
                Err(abandon_err) => {
                    tracing::error!(error = %abandon_err, "could not abandon round");
                }
            }
            Err(err)
        }
    }
}

/// Prints the all-time tally without starting a round.
///
/// # Errors
///
/// Will return `Err` if the stored document cannot be loaded
pub fn show_tally<S, P, Y>(store: S, presenter: &mut P, sync: &mut Y) -> Result<WinTally>
where
    S: DocumentStore,
    P: Presenter,
    Y: SyncAgent,
{
    if let Err(err) = sync.pull() {
        tracing::warn!(error = %err, "pull failed, showing local tally");
    }
    let ledger = Ledger::open(store).context("load score file")?;
    let tally = ledger.win_tally();
    presenter.tally(tally)?;
    Ok(tally)
}

fn play_rounds<S, C, P, Y>(
    ledger: &mut Ledger<S>,
    collector: &mut C,
    presenter: &mut P,
    sync: &mut Y,
) -> Result<SessionReport>
where
    S: DocumentStore,
    C: InputCollector,
    P: Presenter,
    Y: SyncAgent,
{
    let mut report = SessionReport::default();
    loop {
        let round = ledger.active_round_id().context("no round to play")?;
        for hole in 1..=HOLES_PER_ROUND {
            presenter.hole_header(hole)?;
            let Some(strokes) = collector.collect_hole_score(hole)? else {
                report.abandoned = ledger.abandon_round()?;
                report.tally = ledger.win_tally();
                presenter.message(&format!("Round {round} abandoned at hole {hole}"))?;
                push_best_effort(sync, &abandoned_description(round));
                return Ok(report);
            };
            let totals = ledger.record_hole(hole, strokes)?;
            presenter.hole_totals(totals)?;
        }

        let outcome = ledger.finalize_round()?;
        report.completed.push((round, outcome));
        report.tally = ledger.win_tally();
        presenter.round_result(outcome, report.tally)?;

        let again = collector.confirm_replay()?;
        if again {
            ledger.start_new_round()?;
        }
        push_best_effort(
            sync,
            &commit_description(&format!("Round {round}: {outcome}")),
        );
        if !again {
            return Ok(report);
        }
    }
}

fn push_best_effort<Y: SyncAgent>(sync: &mut Y, description: &str) {
    if let Err(err) = sync.push(description) {
        tracing::warn!(error = %err, description, "push failed");
    }
}

fn abandoned_description(round: RoundId) -> String {
    commit_description(&format!("Round {round} abandoned"))
}

fn commit_description(summary: &str) -> String {
    format!("{summary} ({})", Local::now().format("%Y-%m-%d %H:%M"))
}
