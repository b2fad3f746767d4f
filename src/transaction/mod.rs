// ============================================================================
// Transaction Management Module
// ============================================================================
//
// Nested transactions over an eagerly-mutated store.
//
// - change:  immutable command logs (READ/WRITE/DELETE + args)
// - state:   one transaction frame and its Active -> Committed/Aborted lifecycle
// - manager: the stack of open frames and the list of committed transactions
//
// ============================================================================

pub mod change;
pub mod manager;
pub mod state;

pub use change::{CommandLog, Operation};
pub use manager::TransactionManager;
pub use state::{Transaction, TransactionId, TransactionState};
