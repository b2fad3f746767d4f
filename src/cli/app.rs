use super::ui;
use anyhow::Result;
use nestkv::executor::help::{BANNER, help_lines};
use nestkv::{Control, KvDatabase, ShellConfig};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

pub struct App {
    pub db: KvDatabase,
    pub config: ShellConfig,
}

impl App {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            db: KvDatabase::with_config(&config),
            config,
        }
    }

    /// Run against the process stdin/stdout until QUIT or end of input
    pub async fn run(&mut self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = io::stdout();
        self.run_with(stdin, &mut stdout).await
    }

    pub async fn run_with<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        if self.config.show_banner {
            writeln!(out, "{}", BANNER)?;
        }
        if self.config.show_help_on_start {
            ui::print_lines(out, &help_lines())?;
        }

        let mut lines = input.lines();
        loop {
            ui::print_prompt(out, &self.config.prompt)?;

            let Some(line) = lines.next_line().await? else {
                debug!("end of input");
                break;
            };

            let outcome = self.db.execute(&line).await;
            ui::print_outcome(out, &outcome)?;

            match outcome.map(|r| r.control) {
                Ok(Control::Quit) => break,
                Ok(Control::Clear) => ui::clear_screen(out)?,
                _ => {}
            }
        }

        out.flush()?;
        let depth = self.db.depth().await;
        info!(depth, "shell closed");
        Ok(())
    }
}
