//! REPL Command Module
//!
//! The command words understood by the interactive session.

// == Command ==
/// A REPL command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Fetch,
    Stats,
    Exit,
}

impl Command {
    // == Parse ==
    /// Matches a command word, ignoring case.
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "help" => Some(Self::Help),
            "fetch" => Some(Self::Fetch),
            "stats" => Some(Self::Stats),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }

    // == Name ==
    /// Canonical lowercase name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Fetch => "fetch",
            Self::Stats => "stats",
            Self::Exit => "exit",
        }
    }

    // == Description ==
    /// One-line description shown by `help`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Help => "Show this help message",
            Self::Fetch => "Fetch a URL, serving repeated requests from the cache",
            Self::Stats => "Show cache statistics",
            Self::Exit => "Exit the session",
        }
    }

    // == All ==
    /// Every command, in the order `help` lists them.
    pub fn all() -> &'static [Command] {
        &[Self::Help, Self::Fetch, Self::Stats, Self::Exit]
    }
}
