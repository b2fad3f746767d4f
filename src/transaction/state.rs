// ============================================================================
// Transaction State Management
// ============================================================================
//
// A transaction is one frame of the nesting stack. It accumulates command
// logs while it is the innermost open scope and moves through
// Active -> Committed/Aborted exactly once.
//
// The parent link is kept as an id, not a reference: frames live on the
// manager's stack and the enclosing frame is always the one below.
//
// ============================================================================

use super::{CommandLog, Operation};
use serde::Serialize;

/// Unique identifier for a transaction, assigned by its manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl TransactionId {
    pub(crate) fn next(&self) -> Self {
        TransactionId(self.0 + 1)
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "txn_{}", self.0)
    }
}

/// Transaction state
///
/// State transitions:
/// ```text
/// Active ──commit──> Committed
///   │
///   └──abort──> Aborted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionState {
    Active,
    Committed,
    Aborted,
}

impl TransactionState {
    pub fn is_active(&self) -> bool {
        matches!(self, TransactionState::Active)
    }
}

impl std::fmt::Display for TransactionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionState::Active => write!(f, "ACTIVE"),
            TransactionState::Committed => write!(f, "COMMITTED"),
            TransactionState::Aborted => write!(f, "ABORTED"),
        }
    }
}

/// A (possibly nested) transaction and its command log
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    id: TransactionId,

    /// Enclosing transaction, `None` for a top-level transaction
    parent: Option<TransactionId>,

    state: TransactionState,

    /// Command logs in the order they were applied, including logs merged
    /// from committed child transactions
    commands: Vec<CommandLog>,
}

impl Transaction {
    pub fn new(id: TransactionId, parent: Option<TransactionId>) -> Self {
        Self {
            id,
            parent,
            state: TransactionState::Active,
            commands: Vec::new(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn parent(&self) -> Option<TransactionId> {
        self.parent
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    pub fn commands(&self) -> &[CommandLog] {
        &self.commands
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Append a command log to this transaction
    pub(crate) fn record(&mut self, operation: Operation, args: Vec<String>) {
        debug_assert!(self.state.is_active(), "record on closed {}", self.id);
        self.commands.push(CommandLog::new(operation, args));
    }

    /// Append the logs of a committed child, preserving their order
    pub(crate) fn absorb(&mut self, child: Vec<CommandLog>) {
        debug_assert!(self.state.is_active(), "merge into closed {}", self.id);
        self.commands.extend(child);
    }

    /// Hand the log over to the parent, leaving this frame committed and empty
    pub(crate) fn take_commands(&mut self) -> Vec<CommandLog> {
        std::mem::take(&mut self.commands)
    }

    // Only frames still on the manager's stack are ever closed, so an
    // Active -> terminal move happens exactly once per frame.
    pub(crate) fn commit(&mut self) {
        debug_assert!(self.state.is_active());
        self.state = TransactionState::Committed;
    }

    /// Mark transaction as aborted and discard its log
    pub(crate) fn abort(&mut self) {
        debug_assert!(self.state.is_active());
        self.commands.clear();
        self.state = TransactionState::Aborted;
    }
}
