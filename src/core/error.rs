use std::fmt;
use thiserror::Error;

/// Transaction-control action that requires an open transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnAction {
    Commit,
    Abort,
}

impl fmt::Display for TxnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxnAction::Commit => write!(f, "commit"),
            TxnAction::Abort => write!(f, "abort"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KvError {
    #[error("key not found:  {0}")]
    KeyNotFound(String),

    #[error("{command} command expecting {expected} - {usage}")]
    InvalidArguments {
        command: &'static str,
        expected: &'static str,
        usage: &'static str,
    },

    #[error("no active transaction found to {0}")]
    NoActiveTransaction(TxnAction),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("empty command")]
    EmptyCommand,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl KvError {
    /// Outcomes that are reported to the user but are not failures of the
    /// requested operation.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            KvError::KeyNotFound(_) | KvError::UnknownCommand(_) | KvError::EmptyCommand
        )
    }
}

pub type Result<T> = std::result::Result<T, KvError>;

impl From<serde_json::Error> for KvError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            KvError::KeyNotFound("x".into()).to_string(),
            "key not found:  x"
        );
        assert_eq!(
            KvError::NoActiveTransaction(TxnAction::Abort).to_string(),
            "no active transaction found to abort"
        );
        assert_eq!(
            KvError::UnknownCommand("FETCH".into()).to_string(),
            "unknown command: FETCH"
        );
    }

    #[test]
    fn test_informational_classification() {
        assert!(KvError::KeyNotFound("k".into()).is_informational());
        assert!(KvError::UnknownCommand("x".into()).is_informational());
        assert!(!KvError::NoActiveTransaction(TxnAction::Commit).is_informational());
    }
}
