pub mod collector;
pub mod config;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod session;
pub mod storage;
pub mod sync;

pub use error::LedgerError;
pub use ledger::Ledger;
pub use model::{HoleState, LedgerDocument, Outcome, Round, RoundId, Strokes, WinTally};
pub use storage::{DocumentStore, FileStore, MemoryStore};
