//! The round ledger: running totals for the active round plus the all-time
//! win tally, persisted after every mutation.
//!
//! Each write serializes the whole document, hands it to the store, reads it
//! back and re-parses it, so the in-memory state always matches what a fresh
//! load would produce.

use crate::error::LedgerError;
use crate::model::{
    HOLES_PER_ROUND, HoleNumber, HoleState, LedgerDocument, Outcome, Round, RoundId, Strokes,
    WinTally, hole_in_range,
};
use crate::storage::{DocumentStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveRound {
    id: RoundId,
    recorded_through: HoleNumber,
    finalized: bool,
}

pub struct Ledger<S: DocumentStore> {
    store: S,
    document: LedgerDocument,
    active: Option<ActiveRound>,
}

impl<S: DocumentStore> Ledger<S> {
    /// Loads the stored document without starting a round. Never writes.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the store cannot be read or holds a malformed document
    pub fn open(store: S) -> Result<Self, LedgerError> {
        let document = match store.read()? {
            Some(text) => LedgerDocument::from_json(&text)?,
            None => LedgerDocument::default(),
        };
        let mut ledger = Self {
            store,
            document,
            active: None,
        };
        ledger.document.ensure_wins();
        Ok(ledger)
    }

    /// Loads the stored document and starts a fresh round under the first
    /// free round id.
    ///
    /// # Errors
    ///
    /// Will return `Err` if loading fails or the new round cannot be persisted
    pub fn initialize(store: S) -> Result<Self, LedgerError> {
        let mut ledger = Self::open(store)?;
        ledger.create_round()?;
        Ok(ledger)
    }

    /// Starts the next round once the active one has been finalized.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the active round is still open or persisting fails
    pub fn start_new_round(&mut self) -> Result<RoundId, LedgerError> {
        if let Some(active) = self.active
            && !active.finalized
        {
            return Err(LedgerError::RoundNotFinalized(active.id));
        }
        self.create_round()
    }

    /// Records the raw strokes for `hole` and stores the running totals.
    ///
    /// Hole 1 stores the strokes as-is; any later hole adds them to the
    /// previous hole's totals. Holes go in order: the next hole, or an
    /// already recorded one to correct it, which zeroes every hole after it.
    ///
    /// # Errors
    ///
    /// Will return `Err` if there is no open round, the hole is out of range or
    /// out of order, or persisting fails
    pub fn record_hole(
        &mut self,
        hole: HoleNumber,
        strokes: impl Into<Strokes>,
    ) -> Result<HoleState, LedgerError> {
        let active = self.active.ok_or(LedgerError::NoActiveRound)?;
        if active.finalized {
            return Err(LedgerError::RoundFinalized(active.id));
        }
        if !hole_in_range(hole) {
            return Err(LedgerError::HoleOutOfRange(hole));
        }
        let expected = active.recorded_through + 1;
        if hole > expected {
            return Err(LedgerError::OutOfOrder { hole, expected });
        }

        let strokes = strokes.into();
        let mut document = self.document.clone();
        let round = document
            .rounds
            .get_mut(&active.id)
            .ok_or(LedgerError::RoundNotFound(active.id))?;
        let totals = if hole == 1 {
            HoleState::from(strokes)
        } else {
            let previous = round
                .hole(hole - 1)
                .ok_or(LedgerError::HoleNotRecorded {
                    round: active.id,
                    hole: hole - 1,
                })?;
            previous
                .plus(strokes)
                .ok_or(LedgerError::TotalOverflow {
                    round: active.id,
                    hole,
                })?
        };
        round.holes.insert(hole, totals);
        for later in (hole + 1)..=HOLES_PER_ROUND {
            round.holes.insert(later, HoleState::default());
        }

        self.commit(
            document,
            Some(ActiveRound {
                recorded_through: hole,
                ..active
            }),
        )?;
        tracing::debug!(round = active.id, hole, totals = %totals, "recorded hole");
        self.hole_totals(hole)
    }

    /// Running totals stored for `hole` in the active round. Holes not yet
    /// played read back as zero.
    ///
    /// # Errors
    ///
    /// Will return `Err` if there is no active round, the hole is out of range,
    /// or the hole is missing from the document
    pub fn hole_totals(&self, hole: HoleNumber) -> Result<HoleState, LedgerError> {
        let active = self.active.ok_or(LedgerError::NoActiveRound)?;
        if !hole_in_range(hole) {
            return Err(LedgerError::HoleOutOfRange(hole));
        }
        self.document
            .rounds
            .get(&active.id)
            .ok_or(LedgerError::RoundNotFound(active.id))?
            .hole(hole)
            .ok_or(LedgerError::HoleNotRecorded {
                round: active.id,
                hole,
            })
    }

    /// Decides the round from hole 9's totals and bumps that outcome's counter.
    ///
    /// # Errors
    ///
    /// Will return `Err` if hole 9 has not been recorded, the round is already
    /// finalized, or persisting fails
    pub fn finalize_round(&mut self) -> Result<Outcome, LedgerError> {
        let active = self.active.ok_or(LedgerError::NoActiveRound)?;
        if active.finalized {
            return Err(LedgerError::RoundFinalized(active.id));
        }
        if active.recorded_through < HOLES_PER_ROUND {
            return Err(LedgerError::HoleNotRecorded {
                round: active.id,
                hole: HOLES_PER_ROUND,
            });
        }
        let totals = self.hole_totals(HOLES_PER_ROUND)?;
        let outcome = Outcome::from_totals(totals);
        let mut document = self.document.clone();
        *document.wins.entry(outcome).or_insert(0) += 1;
        self.commit(
            document,
            Some(ActiveRound {
                finalized: true,
                ..active
            }),
        )?;
        tracing::info!(round = active.id, totals = %totals, outcome = %outcome, "round finalized");
        Ok(outcome)
    }

    #[must_use]
    pub fn win_tally(&self) -> WinTally {
        self.document.win_tally()
    }

    /// Deletes the open round from the document so its id can be reused.
    /// Returns the removed id; `None` if there was nothing to remove.
    ///
    /// # Errors
    ///
    /// Will return `Err` if persisting fails
    pub fn abandon_round(&mut self) -> Result<Option<RoundId>, LedgerError> {
        let Some(active) = self.active else {
            return Ok(None);
        };
        if active.finalized {
            self.active = None;
            return Ok(None);
        }
        let mut document = self.document.clone();
        document.rounds.remove(&active.id);
        self.commit(document, None)?;
        tracing::info!(round = active.id, holes = active.recorded_through, "round abandoned");
        Ok(Some(active.id))
    }

    #[must_use]
    pub fn active_round_id(&self) -> Option<RoundId> {
        self.active.map(|active| active.id)
    }

    /// Last hole recorded in the active round, 0 when none.
    #[must_use]
    pub fn recorded_through(&self) -> HoleNumber {
        self.active.map_or(0, |active| active.recorded_through)
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.active.is_some_and(|active| active.finalized)
    }

    #[must_use]
    pub fn document(&self) -> &LedgerDocument {
        &self.document
    }

    fn create_round(&mut self) -> Result<RoundId, LedgerError> {
        let id = self.document.first_free_round_id();
        let mut document = self.document.clone();
        document.rounds.insert(id, Round::new());
        self.commit(
            document,
            Some(ActiveRound {
                id,
                recorded_through: 0,
                finalized: false,
            }),
        )?;
        tracing::info!(round = id, "round started");
        Ok(id)
    }

    /// Writes `document` and adopts it along with `active` once the write
    /// has landed, then swaps in the re-read copy. A failed write leaves the
    /// ledger exactly as it was.
    fn commit(
        &mut self,
        document: LedgerDocument,
        active: Option<ActiveRound>,
    ) -> Result<(), LedgerError> {
        let text = document.to_json()?;
        self.store.write(&text)?;
        self.document = document;
        self.active = active;
        let reread = self.store.read()?.ok_or(StorageError::Vanished)?;
        self.document = LedgerDocument::from_json(&reread)?;
        tracing::debug!(bytes = text.len(), rounds = self.document.rounds.len(), "ledger persisted");
        Ok(())
    }
}
