// ============================================================================
// Transaction Manager
// ============================================================================
//
// Owns the store, the stack of open transactions (innermost last) and the
// list of committed top-level transactions.
//
// Store mutations are eager: WRITE/DELETE hit the store immediately whether
// or not a transaction is open. COMMIT and ABORT only decide what happens to
// the command log and which frame is active; neither revisits the store.
//
// ============================================================================

use super::{Operation, Transaction, TransactionId};
use crate::core::{KvError, Result, TxnAction, Value};
use crate::storage::{InMemoryStore, StorageEngine};
use tracing::{debug, info, warn};

pub struct TransactionManager<S: StorageEngine = InMemoryStore> {
    store: S,

    /// Open transactions. The last frame is the active one; every other frame
    /// is suspended and is the parent of the frame above it.
    stack: Vec<Transaction>,

    /// Top-level transactions in commit order
    committed: Vec<Transaction>,

    next_id: TransactionId,
}

impl Default for TransactionManager<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionManager<InMemoryStore> {
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }
}

impl<S: StorageEngine> TransactionManager<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            stack: Vec::new(),
            committed: Vec::new(),
            next_id: TransactionId(1),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current nesting depth, 0 when no transaction is open
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_in_transaction(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The innermost open transaction
    pub fn active(&self) -> Option<&Transaction> {
        self.stack.last()
    }

    /// Committed top-level transactions, oldest first
    pub fn committed(&self) -> &[Transaction] {
        &self.committed
    }

    /// Open a transaction nested inside the active one (if any)
    pub fn start(&mut self) -> TransactionId {
        let id = self.next_id;
        self.next_id = id.next();

        let parent = self.active().map(Transaction::id);
        self.stack.push(Transaction::new(id, parent));

        debug!(txn = %id, depth = self.depth(), "transaction started");
        id
    }

    /// Look up `args[0]`. Hits are logged on the active transaction with
    /// every argument given; misses are reported and never logged.
    pub fn read<A: AsRef<str>>(&mut self, args: &[A]) -> Result<Value> {
        Operation::Read.check_arity(args)?;
        let key = args[0].as_ref();
        let value = self
            .store
            .read(key)
            .cloned()
            .ok_or_else(|| KvError::KeyNotFound(key.to_string()))?;

        self.record(Operation::Read, args);
        Ok(value)
    }

    /// Upsert `args[0]` to `args[1]`, applied to the store immediately
    pub fn write<A: AsRef<str>>(&mut self, args: &[A]) -> Result<()> {
        Operation::Write.check_arity(args)?;
        let (key, value) = (args[0].as_ref(), args[1].as_ref());

        self.record(Operation::Write, args);
        self.store.write(key.to_string(), value.to_string());
        Ok(())
    }

    /// Remove `args[0]`, applied to the store immediately. Deleting an absent
    /// key is not an error.
    pub fn delete<A: AsRef<str>>(&mut self, args: &[A]) -> Result<()> {
        Operation::Delete.check_arity(args)?;

        self.record(Operation::Delete, args);
        self.store.delete(args[0].as_ref());
        Ok(())
    }

    /// Close the active transaction, keeping its log.
    ///
    /// A nested transaction hands its log to the parent, which stays open. A
    /// top-level transaction is appended to the committed list.
    pub fn commit(&mut self) -> Result<TransactionId> {
        let mut txn = self
            .stack
            .pop()
            .ok_or(KvError::NoActiveTransaction(TxnAction::Commit))?;
        txn.commit();
        let id = txn.id();

        match self.stack.last_mut() {
            Some(parent) => {
                let merged = txn.take_commands();
                debug!(
                    txn = %id,
                    parent = %parent.id(),
                    commands = merged.len(),
                    "nested transaction merged into parent"
                );
                parent.absorb(merged);
            }
            None => {
                info!(txn = %id, commands = txn.command_count(), "transaction committed");
                self.committed.push(txn);
            }
        }

        Ok(id)
    }

    /// Discard the active transaction and its log. Ancestors and the store
    /// are left untouched.
    pub fn abort(&mut self) -> Result<TransactionId> {
        let mut txn = self
            .stack
            .pop()
            .ok_or(KvError::NoActiveTransaction(TxnAction::Abort))?;
        let discarded = txn.command_count();
        txn.abort();

        debug!(txn = %txn.id(), discarded, depth = self.depth(), "transaction aborted");
        Ok(txn.id())
    }

    /// Committed top-level transactions in chronological commit order
    pub fn list(&self) -> &[Transaction] {
        self.committed()
    }

    fn record<A: AsRef<str>>(&mut self, operation: Operation, args: &[A]) {
        if let Some(active) = self.stack.last_mut() {
            let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
            debug!(txn = %active.id(), %operation, ?args, "command logged");
            active.record(operation, args);
        }
    }
}

impl<S: StorageEngine> Drop for TransactionManager<S> {
    fn drop(&mut self) {
        if !self.stack.is_empty() {
            warn!(
                depth = self.stack.len(),
                "dropping open transactions without commit"
            );
        }
    }
}
