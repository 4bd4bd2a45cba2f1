use std::collections::VecDeque;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};
use crate::core::library::{LibraryError, LibraryResult};

pub const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty. Please try again.";

// Console is the line-based boundary between the operator and the catalog controller.
#[async_trait]
pub trait Console: Send {
    // next input line without its line terminator, None once input is closed
    async fn read_line(&mut self) -> LibraryResult<Option<String>>;

    async fn write(&mut self, text: &str) -> LibraryResult<()>;

    // blocks until the operator acknowledges the last output
    async fn wait_for_key_press(&mut self) -> LibraryResult<()>;

    async fn write_line(&mut self, text: &str) -> LibraryResult<()> {
        self.write(format!("{}\n", text).as_str()).await
    }
}

/// Prompts until the operator enters something; blank input is returned only when `allow_empty`.
pub async fn get_input(console: &mut dyn Console, prompt: &str, allow_empty: bool) -> LibraryResult<String> {
    loop {
        console.write(prompt).await?;
        let line = console.read_line().await?
            .ok_or_else(|| LibraryError::runtime("console input closed", Some("eof".to_string())))?;
        if allow_empty || !line.is_empty() {
            return Ok(line);
        }
        console.write_line(EMPTY_INPUT_MESSAGE).await?;
    }
}

pub struct StdConsole {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            stdout: tokio::io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdConsole {
    async fn read_line(&mut self) -> LibraryResult<Option<String>> {
        self.stdout.flush().await?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim_end_matches('\r').to_string()))
    }

    async fn write(&mut self, text: &str) -> LibraryResult<()> {
        self.stdout.write_all(text.as_bytes()).await?;
        Ok(())
    }

    async fn wait_for_key_press(&mut self) -> LibraryResult<()> {
        self.write("Press Enter to continue...").await?;
        let _ = self.read_line().await?;
        Ok(())
    }
}

// ScriptedConsole replays queued input lines and captures everything written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
    key_presses: usize,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: String::new(),
            key_presses: 0,
        }
    }

    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    pub fn key_presses(&self) -> usize {
        self.key_presses
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self) -> LibraryResult<Option<String>> {
        Ok(self.input.pop_front())
    }

    async fn write(&mut self, text: &str) -> LibraryResult<()> {
        self.output.push_str(text);
        Ok(())
    }

    async fn wait_for_key_press(&mut self) -> LibraryResult<()> {
        self.key_presses += 1;
        Ok(())
    }
}
