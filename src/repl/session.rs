//! REPL Session Module
//!
//! Line loop, command dispatch, and output rendering.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::cache::Cache;
use crate::client::CachedClient;
use crate::error::{RestCacheError, Result};
use crate::repl::{tokenize, Command, StatsReport};

/// Prompt shown before each input line.
const PROMPT: &str = "restcache > ";

// == Command Output ==
/// Result of executing a single command.
#[derive(Debug)]
pub struct CommandOutput {
    /// Text to print for the user
    pub text: String,
    /// True when the session should end
    pub exit: bool,
}

// == Repl ==
/// Interactive session dispatching command lines against the cached client.
pub struct Repl {
    client: CachedClient,
    cache: Cache,
}

impl Repl {
    // == Constructor ==
    /// Creates a session over `client`, reporting stats from `cache`.
    pub fn new(client: CachedClient, cache: Cache) -> Self {
        Self { client, cache }
    }

    // == Run ==
    /// Runs the read-dispatch-print loop until `exit` or end of input.
    ///
    /// A failing command prints its error and keeps the session alive; only
    /// I/O failures on the terminal itself end the loop early.
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        let mut stdout = tokio::io::stdout();

        loop {
            stdout.write_all(PROMPT.as_bytes()).await?;
            stdout.flush().await?;

            let line = match lines.next_line().await? {
                Some(line) => line,
                // End of input behaves like exit
                None => break,
            };

            let tokens = tokenize(&line);
            let (word, args) = match tokens.split_first() {
                Some(split) => split,
                None => continue,
            };

            let command = match Command::parse(word) {
                Some(command) => command,
                None => {
                    stdout.write_all(b"Unknown command\n").await?;
                    continue;
                }
            };

            match self.execute(command, args).await {
                Ok(output) => {
                    if !output.text.is_empty() {
                        stdout.write_all(output.text.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                    }
                    if output.exit {
                        break;
                    }
                }
                Err(err) => {
                    let message = format!("error: {}\n", err);
                    stdout.write_all(message.as_bytes()).await?;
                }
            }
        }

        Ok(())
    }

    // == Execute ==
    /// Executes one parsed command against the session state.
    pub async fn execute(&self, command: Command, args: &[String]) -> Result<CommandOutput> {
        match command {
            Command::Help => Ok(CommandOutput {
                text: self.help_text(),
                exit: false,
            }),
            Command::Fetch => self.fetch(args).await,
            Command::Stats => self.stats().await,
            Command::Exit => Ok(CommandOutput {
                text: "Goodbye!".to_string(),
                exit: true,
            }),
        }
    }

    fn help_text(&self) -> String {
        let mut text = String::from("Available commands:\n");
        for command in Command::all() {
            text.push_str(&format!(
                "  {:<6} {}\n",
                command.name(),
                command.description()
            ));
        }
        text.pop();
        text
    }

    async fn fetch(&self, args: &[String]) -> Result<CommandOutput> {
        let url = match args {
            [url] => url,
            _ => {
                return Err(RestCacheError::Usage(
                    "fetch takes exactly one URL".to_string(),
                ))
            }
        };

        let fetched = self.client.fetch(url).await?;
        let origin = if fetched.from_cache { "cache" } else { "network" };

        Ok(CommandOutput {
            text: format!("[{}] {}", origin, render_body(&fetched.body)),
            exit: false,
        })
    }

    async fn stats(&self) -> Result<CommandOutput> {
        let report = StatsReport::from_stats(&self.cache.stats().await);

        Ok(CommandOutput {
            text: serde_json::to_string_pretty(&report)?,
            exit: false,
        })
    }
}

// == Body Rendering ==
/// Pretty-prints JSON bodies, falling back to lossy UTF-8 for anything else.
fn render_body(body: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned()),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}
