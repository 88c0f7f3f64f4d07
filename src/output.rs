//! Output formatting for CLI display
//!
//! Static search prints a markdown list; the interactive screen and the
//! final selection use their own line formats.

use crate::challenge::ChallengeResult;
use std::io::{self, Write};

/// Markdown list entry for static search: `- [branch] "Name"` or `- "Name"`
#[must_use]
pub fn result_line(result: &ChallengeResult) -> String {
    match &result.branch {
        Some(branch) => format!("- [{branch}] \"{}\"", result.name),
        None => format!("- \"{}\"", result.name),
    }
}

/// Result line on the interactive screen, with tags
#[must_use]
pub fn interactive_line(result: &ChallengeResult) -> String {
    let tags = result.tags.join(", ");
    match &result.branch {
        Some(branch) => format!("- [{branch}] {} (tags: {tags})", result.name),
        None => format!("- {} (tags: {tags})", result.name),
    }
}

/// Message printed when static search finds nothing
#[must_use]
pub fn no_matches_message(tags: &[String]) -> String {
    format!("No challenges found with tags: {}", tags.join(", "))
}

/// The three lines describing a confirmed interactive selection
#[must_use]
pub fn selection_lines(result: &ChallengeResult) -> [String; 3] {
    [
        format!("Selected: {}", result.name),
        format!("Tags: {}", result.tags.join(", ")),
        format!("Path: {}", result.file_path),
    ]
}

/// Write every result as a markdown list entry
///
/// # Errors
/// Returns the I/O error if writing fails.
pub fn write_markdown(writer: &mut impl Write, results: &[ChallengeResult]) -> io::Result<()> {
    for result in results {
        writeln!(writer, "{}", result_line(result))?;
    }
    Ok(())
}
