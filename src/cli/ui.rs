use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use nestkv::{CommandResult, KvError};
use std::io::{self, Write};

pub fn print_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn print_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{}", prompt)?;
    out.flush()
}

/// Print a command outcome. Hard failures get an `err: ` prefix; a blank
/// input line prints nothing.
pub fn print_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<CommandResult, KvError>,
) -> io::Result<()> {
    match outcome {
        Ok(result) => print_lines(out, &result.lines),
        Err(KvError::EmptyCommand) => Ok(()),
        Err(e) if e.is_informational() => writeln!(out, "{}", e),
        Err(e) => writeln!(out, "err: {}", e),
    }
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestkv::TxnAction;

    fn rendered(outcome: Result<CommandResult, KvError>) -> String {
        let mut out = Vec::new();
        print_outcome(&mut out, &outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_outcome() {
        assert_eq!(rendered(Ok(CommandResult::line("10"))), "10\n");
        assert_eq!(rendered(Ok(CommandResult::empty())), "");
        assert_eq!(
            rendered(Err(KvError::KeyNotFound("x".into()))),
            "key not found:  x\n"
        );
        assert_eq!(
            rendered(Err(KvError::NoActiveTransaction(TxnAction::Commit))),
            "err: no active transaction found to commit\n"
        );
        assert_eq!(rendered(Err(KvError::EmptyCommand)), "");
    }
}
