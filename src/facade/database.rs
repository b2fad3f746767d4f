use crate::config::{ListFormat, ShellConfig};
use crate::core::Result;
use crate::executor::CommandExecutor;
use crate::parser::{Command, CommandParser};
use crate::result::CommandResult;
use crate::transaction::{Transaction, TransactionManager};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Shared handle to one key-value store and its transaction stack
///
/// There is no per-key or per-transaction locking: every operation takes the
/// single lock around the manager, so callers are fully serialized. Clones
/// share the same state.
#[derive(Clone)]
pub struct KvDatabase {
    parser: CommandParser,
    executor: CommandExecutor,
    manager: Arc<Mutex<TransactionManager>>,
}

impl Default for KvDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl KvDatabase {
    pub fn new() -> Self {
        Self::with_list_format(ListFormat::default())
    }

    pub fn with_config(config: &ShellConfig) -> Self {
        Self::with_list_format(config.list_format)
    }

    fn with_list_format(list_format: ListFormat) -> Self {
        Self {
            parser: CommandParser::new(),
            executor: CommandExecutor::new(list_format),
            manager: Arc::new(Mutex::new(TransactionManager::new())),
        }
    }

    /// Parse and run one input line
    pub async fn execute(&self, line: &str) -> Result<CommandResult> {
        let command = self.parser.parse(line)?;
        self.execute_command(command).await
    }

    pub async fn execute_command(&self, command: Command) -> Result<CommandResult> {
        debug!(%command, "executing");
        let mut manager = self.manager.lock().await;
        self.executor.execute(command, &mut *manager)
    }

    /// Current transaction nesting depth
    pub async fn depth(&self) -> usize {
        self.manager.lock().await.depth()
    }

    pub async fn committed_count(&self) -> usize {
        self.manager.lock().await.committed().len()
    }

    /// Copy of the committed top-level transactions
    pub async fn committed(&self) -> Vec<Transaction> {
        self.manager.lock().await.committed().to_vec()
    }
}
