pub const BANNER: &str = "Welcome to K/V REPL! ";

const COMMANDS: &[(&str, &str)] = &[
    ("HELP", "prints help"),
    ("CLEAR", "clears the terminal"),
    ("READ <key>", "prints the value stored by the key"),
    ("WRITE <key> <val>", "stores val with the given key"),
    ("DELETE <key>", "removes the value stored by the key"),
    ("START", "starts a transaction"),
    ("COMMIT", "commits a transaction"),
    ("ABORT", "aborts a transaction"),
    ("LIST", "lists all committed transactions"),
    ("QUIT", "quits from the program"),
];

/// Command table printed by HELP
pub fn help_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(COMMANDS.len() + 2);
    lines.push("  Available commands: ".to_string());
    for (usage, description) in COMMANDS {
        lines.push(format!("    {:<18} - {}", usage, description));
    }
    lines.push("  (commands are case-insensitive)".to_string());
    lines
}
