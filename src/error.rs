//! CLI-facing error type.
//!
//! The decoder core itself never errors (see [`crate::decoder::decode`]'s boolean contract); this
//! type exists for the surrounding CLI, which does have fallible I/O and fallible input parsing.

use thiserror::Error;

/// Errors raised by the `aarch64-disasm` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error reading an input file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A command-line or file token wasn't a parseable 32-bit hex instruction word.
    #[error("invalid instruction word {token:?}: {message}")]
    InvalidWord { token: String, message: String },

    /// The file contained no recognizable instruction words at all.
    #[error("no instruction words found in {path}")]
    EmptyInput { path: String },
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_word_display_includes_token() {
        let err = CliError::InvalidWord {
            token: "zzzz".to_string(),
            message: "not hex".to_string(),
        };
        assert!(err.to_string().contains("zzzz"));
    }
}
