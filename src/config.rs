use clap::ValueEnum;

/// Rendering used by the LIST command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// `transaction #1 commands: [{ command: WRITE, args: a, 1 }]`
    #[default]
    Text,
    /// A single JSON array
    Json,
}

/// Interactive shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Prompt printed before each input line
    pub prompt: String,

    /// Print the welcome banner on start
    pub show_banner: bool,

    /// Print the command table on start
    pub show_help_on_start: bool,

    /// Output format for LIST
    pub list_format: ListFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_banner: true,
            show_help_on_start: true,
            list_format: ListFormat::Text,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input prompt
    pub fn prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    /// Suppress banner and startup help
    pub fn quiet(mut self) -> Self {
        self.show_banner = false;
        self.show_help_on_start = false;
        self
    }

    pub fn show_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    pub fn show_help_on_start(mut self, show: bool) -> Self {
        self.show_help_on_start = show;
        self
    }

    /// Set the LIST output format
    pub fn list_format(mut self, format: ListFormat) -> Self {
        self.list_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, "> ");
        assert!(config.show_banner);
        assert!(config.show_help_on_start);
        assert_eq!(config.list_format, ListFormat::Text);
    }

    #[test]
    fn test_builder() {
        let config = ShellConfig::new()
            .prompt("kv> ")
            .quiet()
            .list_format(ListFormat::Json);

        assert_eq!(config.prompt, "kv> ");
        assert!(!config.show_banner);
        assert!(!config.show_help_on_start);
        assert_eq!(config.list_format, ListFormat::Json);
    }
}
