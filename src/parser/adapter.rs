// ============================================================================
// Command line parser
// ============================================================================
//
// Turns one input line into a typed Command. Names are matched
// case-insensitively; arguments are whitespace separated. Missing arguments
// are rejected here, surplus arguments are carried through to the log.
// QUIT only counts when it is the whole line.
//
// ============================================================================

use crate::core::{KvError, Result};
use crate::parser::ast::Command;
use crate::transaction::Operation;

#[derive(Debug, Default, Clone, Copy)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, line: &str) -> Result<Command> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(KvError::EmptyCommand)?;
        let args: Vec<String> = parts.map(str::to_string).collect();

        match name.to_ascii_uppercase().as_str() {
            "HELP" => Ok(Command::Help),
            "CLEAR" => Ok(Command::Clear),
            "READ" => {
                Operation::Read.check_arity(&args)?;
                Ok(Command::Read { args })
            }
            "WRITE" => {
                Operation::Write.check_arity(&args)?;
                Ok(Command::Write { args })
            }
            "DELETE" => {
                Operation::Delete.check_arity(&args)?;
                Ok(Command::Delete { args })
            }
            "START" => Ok(Command::Start),
            "COMMIT" => Ok(Command::Commit),
            "ABORT" => Ok(Command::Abort),
            "LIST" => Ok(Command::List),
            "QUIT" if args.is_empty() => Ok(Command::Quit),
            _ => Err(KvError::UnknownCommand(name.to_string())),
        }
    }
}
