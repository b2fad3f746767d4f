use super::{help, list};
use crate::config::ListFormat;
use crate::core::Result;
use crate::parser::Command;
use crate::result::CommandResult;
use crate::storage::StorageEngine;
use crate::transaction::TransactionManager;

/// Runs a parsed command against a transaction manager
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor {
    list_format: ListFormat,
}

impl CommandExecutor {
    pub fn new(list_format: ListFormat) -> Self {
        Self { list_format }
    }

    pub fn execute<S: StorageEngine>(
        &self,
        command: Command,
        manager: &mut TransactionManager<S>,
    ) -> Result<CommandResult> {
        match command {
            Command::Help => Ok(CommandResult::lines(help::help_lines())),
            Command::Clear => Ok(CommandResult::clear()),
            Command::Read { args } => manager.read(&args).map(CommandResult::line),
            Command::Write { args } => {
                manager.write(&args)?;
                Ok(CommandResult::empty())
            }
            Command::Delete { args } => {
                manager.delete(&args)?;
                Ok(CommandResult::empty())
            }
            Command::Start => {
                manager.start();
                Ok(CommandResult::empty())
            }
            Command::Commit => {
                manager.commit()?;
                Ok(CommandResult::empty())
            }
            Command::Abort => {
                manager.abort()?;
                Ok(CommandResult::empty())
            }
            Command::List => Ok(CommandResult::lines(list::render(
                manager.list(),
                self.list_format,
            )?)),
            Command::Quit => Ok(CommandResult::quit()),
        }
    }
}
