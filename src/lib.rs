// ============================================================================
// nestkv Library
// ============================================================================
//
// An in-memory key-value store with nested transactions.
//
// Writes and deletes are applied to the store immediately. Transactions only
// keep a log of what ran inside them: committing a nested transaction hands
// its log to the parent, committing a top-level one records it, and aborting
// throws the log away (the store is not rolled back).
//
// ============================================================================

pub mod config;
pub mod core;
pub mod executor;
pub mod facade;
pub mod parser;
pub mod result;
pub mod storage;
pub mod transaction;

// Re-export main types for convenience
pub use config::{ListFormat, ShellConfig};
pub use core::{KvError, Result, TxnAction};
pub use executor::CommandExecutor;
pub use facade::KvDatabase;
pub use parser::{Command, CommandParser};
pub use result::{CommandResult, Control};
pub use storage::{InMemoryStore, StorageEngine};
pub use transaction::{
    CommandLog, Operation, Transaction, TransactionId, TransactionManager, TransactionState,
};
