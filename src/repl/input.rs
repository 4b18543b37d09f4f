//! REPL Input Module
//!
//! Turns raw command lines into tokens.

/// Splits an input line into whitespace-separated tokens.
///
/// Surrounding and repeated whitespace is discarded. Token case is left
/// untouched: the command word is matched case-insensitively later, while
/// arguments such as URLs must pass through exactly as typed.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}
