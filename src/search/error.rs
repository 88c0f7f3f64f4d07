//! Search-specific error types
//!
//! Only the interactive loop can fail: filtering itself is infallible.
//!
//! - **`IoError`**: reading a key or drawing the screen failed
//! - **`TerminalError`**: raw mode could not be entered

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Reading input or writing the screen failed
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// The terminal could not be switched to raw mode
    #[error("Failed to set raw mode: {0}")]
    TerminalError(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: SearchError = std::io::Error::other("boom").into();
        assert!(matches!(err, SearchError::IoError(_)));
        assert_eq!(err.to_string(), "Failed to read input: boom");
    }

    #[test]
    fn test_terminal_error_message() {
        let err = SearchError::TerminalError(std::io::Error::other("not a tty"));
        assert_eq!(err.to_string(), "Failed to set raw mode: not a tty");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_variant_names_match_crate_convention() {
        let io = SearchError::IoError(std::io::Error::other("x"));
        let terminal = SearchError::TerminalError(std::io::Error::other("y"));
        assert!(format!("{io:?}").starts_with("IoError("));
        assert!(format!("{terminal:?}").starts_with("TerminalError("));
    }
}
