//! Raw terminal mode as a scoped resource
//!
//! [`RawModeGuard::enter`] switches the terminal to raw mode. Dropping the
//! guard restores cooked mode and shows the cursor again, whichever way the
//! interactive session ends.

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Holds the terminal in raw mode until dropped
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enter raw mode
    ///
    /// # Errors
    /// Returns the I/O error if the terminal cannot be switched, e.g. when
    /// stdin is not a terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Nothing sensible to do if restoring fails on the way out
        let _ = execute!(io::stdout(), Show);
        let _ = disable_raw_mode();
    }
}
