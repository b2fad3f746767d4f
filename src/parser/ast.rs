use std::fmt;

/// A parsed shell command
///
/// READ/WRITE/DELETE keep every argument as typed; the parser has already
/// checked the minimum count, and the whole list ends up in the command log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Read { args: Vec<String> },
    Write { args: Vec<String> },
    Delete { args: Vec<String> },
    Start,
    Commit,
    Abort,
    List,
    Quit,
}

impl Command {
    /// Canonical (upper-case) command name
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "HELP",
            Command::Clear => "CLEAR",
            Command::Read { .. } => "READ",
            Command::Write { .. } => "WRITE",
            Command::Delete { .. } => "DELETE",
            Command::Start => "START",
            Command::Commit => "COMMIT",
            Command::Abort => "ABORT",
            Command::List => "LIST",
            Command::Quit => "QUIT",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Read { args } | Command::Write { args } | Command::Delete { args } => {
                write!(f, "{} {}", self.name(), args.join(" "))
            }
            _ => f.write_str(self.name()),
        }
    }
}
