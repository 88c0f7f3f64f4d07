//! Interactive incremental search
//!
//! A blocking loop reads one key at a time, edits the query, re-filters the
//! whole corpus and redraws the screen. Enter confirms the first match,
//! Ctrl+C leaves without a selection.

use super::error::SearchError;
use super::filter::filter_by_text;
use super::state::{Key, SearchState, read_key};
use crate::challenge::ChallengeResult;
use crate::output::interactive_line;
use crate::terminal::RawModeGuard;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Read, Write};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Enter was pressed with at least one match
    Selected(ChallengeResult),
    /// Interrupted, or input ran out
    Cancelled,
}

/// Interactive search session over a loaded corpus
#[derive(Debug)]
pub struct InteractiveSearch<'a> {
    corpus: &'a [ChallengeResult],
    state: SearchState,
    results: Vec<ChallengeResult>,
}

impl<'a> InteractiveSearch<'a> {
    #[must_use]
    pub fn new(corpus: &'a [ChallengeResult]) -> Self {
        Self {
            corpus,
            state: SearchState::new(),
            results: corpus.to_vec(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Results matching the current query
    #[must_use]
    pub fn results(&self) -> &[ChallengeResult] {
        &self.results
    }

    /// Run the loop until a selection is made or the user gives up
    ///
    /// The terminal mode is the caller's concern; see [`run_interactive`].
    ///
    /// # Errors
    /// Returns `SearchError::IoError` if reading a key or drawing fails.
    pub fn run(
        &mut self,
        reader: &mut impl Read,
        writer: &mut impl Write,
    ) -> Result<Outcome, SearchError> {
        self.render(writer)?;

        loop {
            let Some(key) = read_key(reader)? else {
                return Ok(Outcome::Cancelled);
            };

            match key {
                Key::Interrupt => {
                    queue!(
                        writer,
                        Clear(ClearType::All),
                        MoveTo(0, 0),
                        Show,
                        Print("Goodbye!\r\n")
                    )?;
                    writer.flush()?;
                    return Ok(Outcome::Cancelled);
                }
                Key::Enter => {
                    if let Some(first) = self.results.first() {
                        let selected = first.clone();
                        queue!(writer, Clear(ClearType::All), MoveTo(0, 0), Show)?;
                        writer.flush()?;
                        return Ok(Outcome::Selected(selected));
                    }
                }
                key => {
                    if self.state.apply(key) {
                        self.results = filter_by_text(self.corpus, &self.state.query());
                        self.render(writer)?;
                    }
                }
            }
        }
    }

    /// Redraw the query line and the current results
    fn render(&self, writer: &mut impl Write) -> io::Result<()> {
        queue!(writer, Clear(ClearType::All), MoveTo(0, 0), Hide, Print("input: "))?;

        let (before, at, after) = self.state.split_at_cursor();
        match at {
            Some(c) => queue!(
                writer,
                Print(before),
                SetAttribute(Attribute::Reverse),
                Print(c),
                SetAttribute(Attribute::Reset),
                Print(after)
            )?,
            None => queue!(writer, Print(before), Print('█'))?,
        }
        queue!(writer, Print("\r\n\r\n"))?;

        if self.results.is_empty() {
            queue!(writer, Print("No challenges found\r\n"))?;
        } else {
            for result in &self.results {
                queue!(writer, Print(interactive_line(result)), Print("\r\n"))?;
            }
        }

        writer.flush()
    }
}

/// Run an interactive search on the real terminal
///
/// Raw mode is held for the duration of the loop and released on every
/// exit path.
///
/// # Errors
/// Returns `SearchError::TerminalError` if raw mode cannot be entered, or
/// `SearchError::IoError` if terminal I/O fails.
pub fn run_interactive(corpus: &[ChallengeResult]) -> Result<Outcome, SearchError> {
    let _guard = RawModeGuard::enter().map_err(SearchError::TerminalError)?;

    let mut reader = io::stdin().lock();
    let mut writer = io::stdout().lock();
    InteractiveSearch::new(corpus).run(&mut reader, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn result(name: &str, tags: &[&str], branch: Option<&str>) -> ChallengeResult {
        ChallengeResult {
            name: name.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            file_path: format!("genre/{name}/challenge.yml"),
            branch: branch.map(ToString::to_string),
        }
    }

    fn corpus() -> Vec<ChallengeResult> {
        vec![
            result("login", &["web", "sql-injection"], Some("main")),
            result("recon", &["osint"], None),
            result("rsa", &["crypto"], None),
        ]
    }

    fn run<'a>(corpus: &'a [ChallengeResult], input: &[u8]) -> (Outcome, String, InteractiveSearch<'a>) {
        let mut search = InteractiveSearch::new(corpus);
        let mut reader = Cursor::new(input.to_vec());
        let mut screen = Vec::new();
        let outcome = search.run(&mut reader, &mut screen).unwrap();
        (outcome, String::from_utf8(screen).unwrap(), search)
    }

    #[test]
    fn test_initial_render_shows_everything() {
        let corpus = corpus();
        let (outcome, screen, search) = run(&corpus, b"");

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(search.state().cursor(), 0);
        assert!(screen.contains("input: █"));
        assert!(screen.contains("- [main] login (tags: web, sql-injection)\r\n"));
        assert!(screen.contains("- recon (tags: osint)\r\n"));
    }

    #[test]
    fn test_typing_filters_results() {
        let corpus = corpus();
        let (_, screen, search) = run(&corpus, b"osi");

        assert_eq!(search.state().query(), "osi");
        assert_eq!(search.state().cursor(), 3);
        assert_eq!(search.results().len(), 1);
        assert_eq!(search.results()[0].name, "recon");
        assert!(screen.contains("input: osi█"));
    }

    #[test]
    fn test_enter_selects_first_match() {
        let corpus = corpus();
        let (outcome, _, _) = run(&corpus, b"cry\r");

        assert_eq!(outcome, Outcome::Selected(corpus[2].clone()));
    }

    #[test]
    fn test_enter_without_matches_keeps_looping() {
        let corpus = corpus();
        let (outcome, screen, search) = run(&corpus, b"zzz\r\x7f\x7f\x7f\r");

        assert_eq!(outcome, Outcome::Selected(corpus[0].clone()));
        assert!(screen.contains("No challenges found\r\n"));
        assert!(search.state().is_empty());
    }

    #[test]
    fn test_interrupt_cancels() {
        let corpus = corpus();
        let (outcome, screen, _) = run(&corpus, b"we\x03b\r");

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(screen.ends_with("Goodbye!\r\n"));
    }

    #[test]
    fn test_cursor_is_highlighted() {
        let corpus = corpus();
        let (_, screen, search) = run(&corpus, b"web\x1b[D\x1b[D");

        assert_eq!(search.state().cursor(), 1);
        assert!(screen.contains("input: w\x1b[7me"));
    }

    #[test]
    fn test_edit_in_middle_refilters() {
        let corpus = corpus();
        let (_, _, search) = run(&corpus, b"wb\x1b[De");

        assert_eq!(search.state().query(), "web");
        assert_eq!(search.results().len(), 1);
    }

    #[test]
    fn test_ignored_bytes_do_not_redraw() {
        let corpus = corpus();
        let (_, quiet, _) = run(&corpus, b"");
        let (_, noisy, _) = run(&corpus, b"\x01\x1b[A\x02");

        assert_eq!(quiet, noisy);
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let corpus = corpus();
        let (_, _, search) = run(&corpus, b"\x7f\x7f");

        assert_eq!(search.state().cursor(), 0);
        assert_eq!(search.results().len(), 3);
    }
}
