/// What the shell loop should do after printing a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Control {
    #[default]
    Continue,
    /// Clear the terminal
    Clear,
    /// Stop reading input
    Quit,
}

/// Display text produced by one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub lines: Vec<String>,
    pub control: Control,
}

impl CommandResult {
    /// Successful command with no output
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            control: Control::Continue,
        }
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            control: Control::Continue,
        }
    }

    pub fn quit() -> Self {
        Self {
            lines: Vec::new(),
            control: Control::Quit,
        }
    }

    pub fn clear() -> Self {
        Self {
            lines: Vec::new(),
            control: Control::Clear,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_quit(&self) -> bool {
        self.control == Control::Quit
    }

    /// Output as a single string, one line per entry
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
