// ============================================================================
// Transaction Command Log
// ============================================================================
//
// Every READ/WRITE/DELETE applied while a transaction is open is captured as
// an immutable CommandLog entry on the innermost transaction. Logs are kept
// for replay/audit only; the store has already been mutated by the time an
// entry is recorded.
//
// ============================================================================

use crate::core::KvError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of operation captured in a command log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Read,
    Write,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Read => "READ",
            Operation::Write => "WRITE",
            Operation::Delete => "DELETE",
        }
    }

    /// Minimum number of arguments. Surplus arguments are accepted and
    /// kept in the log.
    pub fn min_args(&self) -> usize {
        match self {
            Operation::Read | Operation::Delete => 1,
            Operation::Write => 2,
        }
    }

    pub fn arity_error(&self) -> KvError {
        let (expected, usage) = match self {
            Operation::Read | Operation::Delete => ("one argument", "<key>"),
            Operation::Write => ("two arguments", "<key> <value>"),
        };
        KvError::InvalidArguments {
            command: self.as_str(),
            expected,
            usage,
        }
    }

    /// Reject argument lists shorter than `min_args`
    pub fn check_arity<S: AsRef<str>>(&self, args: &[S]) -> Result<(), KvError> {
        if args.len() < self.min_args() {
            return Err(self.arity_error());
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single applied operation together with its arguments
///
/// Fields are private so an entry cannot change once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLog {
    operation: Operation,
    args: Vec<String>,
}

impl CommandLog {
    pub fn new(operation: Operation, args: Vec<String>) -> Self {
        Self { operation, args }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ command: {}, args: {} }}",
            self.operation,
            self.args.join(", ")
        )
    }
}
