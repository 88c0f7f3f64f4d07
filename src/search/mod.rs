//! Tag search over loaded challenges
//!
//! Provides two ways of narrowing a corpus:
//! 1. Static filtering by a list of tags (`filter_by_tags`)
//! 2. An interactive terminal loop that filters as the user types

pub mod error;
pub mod filter;
pub mod interactive;
pub mod state;

pub use error::SearchError;
pub use filter::{filter_by_tags, filter_by_text};
pub use interactive::{InteractiveSearch, Outcome, run_interactive};
pub use state::{Key, SearchState};
