use crate::model::RoundId;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no active round")]
    NoActiveRound,
    #[error("hole {0} is out of range 1..=9")]
    HoleOutOfRange(u8),
    #[error("hole {hole} recorded out of order, expected hole {expected}")]
    OutOfOrder { hole: u8, expected: u8 },
    #[error("running total overflows at hole {hole} of round {round}")]
    TotalOverflow { round: RoundId, hole: u8 },
    #[error("hole {hole} has not been recorded for round {round}")]
    HoleNotRecorded { round: RoundId, hole: u8 },
    #[error("round {0} not found")]
    RoundNotFound(RoundId),
    #[error("round {0} is already finalized")]
    RoundFinalized(RoundId),
    #[error("round {0} is not finalized yet")]
    RoundNotFinalized(RoundId),
}
