//! Edit buffer and key decoding for interactive search
//!
//! The terminal is read one byte at a time in raw mode. [`read_key`] turns
//! those bytes into a [`Key`]; [`SearchState`] applies the key to the edit
//! buffer and reports whether anything changed.

use std::io::{self, Read};

const CTRL_C: u8 = 0x03;
const BACKSPACE: u8 = 0x08;
const ENTER: u8 = b'\r';
const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;

/// A decoded keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Ctrl+C
    Interrupt,
    Left,
    Right,
    Backspace,
    Enter,
    /// Printable ASCII
    Char(char),
    /// Anything the search does not react to, including broken escape sequences
    Ignored,
}

/// Read one keypress from `reader`
///
/// Returns `Ok(None)` at end of input. An escape sequence cut short by a
/// failed or partial read decodes as [`Key::Ignored`].
///
/// # Errors
/// Returns the I/O error if reading the first byte fails.
pub fn read_key(reader: &mut impl Read) -> io::Result<Option<Key>> {
    let mut byte = [0u8; 1];
    if reader.read(&mut byte)? == 0 {
        return Ok(None);
    }

    let key = match byte[0] {
        CTRL_C => Key::Interrupt,
        ESC => {
            let mut seq = [0u8; 2];
            match reader.read(&mut seq) {
                Ok(2) => decode_escape(seq),
                _ => Key::Ignored,
            }
        }
        DEL | BACKSPACE => Key::Backspace,
        ENTER => Key::Enter,
        b @ 0x20..=0x7e => Key::Char(char::from(b)),
        _ => Key::Ignored,
    };

    Ok(Some(key))
}

fn decode_escape(seq: [u8; 2]) -> Key {
    match seq {
        [b'[', b'D'] => Key::Left,
        [b'[', b'C'] => Key::Right,
        _ => Key::Ignored,
    }
}

/// Edit buffer with a cursor
///
/// The cursor is always within `0..=len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    buffer: Vec<char>,
    cursor: usize,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `c` at the cursor and advance past it
    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor; `false` at the start of the buffer
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Apply an editing key, returning whether the state changed
    ///
    /// Keys that do not edit the buffer return `false`.
    pub fn apply(&mut self, key: Key) -> bool {
        match key {
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Backspace => self.backspace(),
            Key::Char(c) => {
                self.insert(c);
                true
            }
            Key::Interrupt | Key::Enter | Key::Ignored => false,
        }
    }

    /// Current buffer contents
    #[must_use]
    pub fn query(&self) -> String {
        self.buffer.iter().collect()
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffer split around the cursor: before, the character under it, after
    #[must_use]
    pub fn split_at_cursor(&self) -> (String, Option<char>, String) {
        let before = self.buffer[..self.cursor].iter().collect();
        let at = self.buffer.get(self.cursor).copied();
        let after = self
            .buffer
            .get(self.cursor + 1..)
            .map(|rest| rest.iter().collect())
            .unwrap_or_default();
        (before, at, after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn keys(bytes: &[u8]) -> Vec<Key> {
        let mut reader = Cursor::new(bytes.to_vec());
        let mut out = Vec::new();
        while let Some(key) = read_key(&mut reader).unwrap() {
            out.push(key);
        }
        out
    }

    fn typed(text: &str) -> SearchState {
        let mut state = SearchState::new();
        for c in text.chars() {
            state.insert(c);
        }
        state
    }

    #[test]
    fn test_decode_keys() {
        assert_eq!(
            keys(b"a\x1b[D\x1b[C\x7f\x08\r\x03\x01~ "),
            vec![
                Key::Char('a'),
                Key::Left,
                Key::Right,
                Key::Backspace,
                Key::Backspace,
                Key::Enter,
                Key::Interrupt,
                Key::Ignored,
                Key::Char('~'),
                Key::Char(' '),
            ]
        );
    }

    #[test]
    fn test_unknown_escape_is_ignored() {
        assert_eq!(keys(b"\x1b[Ax"), vec![Key::Ignored, Key::Char('x')]);
    }

    #[test]
    fn test_truncated_escape_is_ignored() {
        assert_eq!(keys(b"\x1b["), vec![Key::Ignored]);
        assert_eq!(keys(b"\x1b"), vec![Key::Ignored]);
    }

    #[test]
    fn test_non_ascii_bytes_are_ignored() {
        assert_eq!(keys(&[0xc3, 0xa9]), vec![Key::Ignored, Key::Ignored]);
    }

    #[test]
    fn test_initial_state() {
        let state = SearchState::new();
        assert_eq!(state.cursor(), 0);
        assert!(state.is_empty());
    }

    #[test]
    fn test_insert_advances_cursor() {
        let state = typed("web");
        assert_eq!(state.cursor(), 3);
        assert_eq!(state.len(), 3);
        assert_eq!(state.query(), "web");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut state = typed("wb");
        assert!(state.move_left());
        state.insert('e');
        assert_eq!(state.query(), "web");
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut state = typed("web");
        while state.move_left() {}
        assert_eq!(state.cursor(), 0);
        assert!(!state.backspace());
        assert_eq!(state.query(), "web");
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut state = typed("wxeb");
        state.move_left();
        state.move_left();
        assert!(state.backspace());
        assert_eq!(state.query(), "web");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut state = typed("ab");
        assert!(!state.move_right());
        assert!(state.move_left());
        assert!(state.move_left());
        assert!(!state.move_left());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_apply() {
        let mut state = SearchState::new();
        assert!(state.apply(Key::Char('x')));
        assert!(!state.apply(Key::Right));
        assert!(state.apply(Key::Left));
        assert!(!state.apply(Key::Enter));
        assert!(!state.apply(Key::Ignored));
        assert!(!state.apply(Key::Backspace));
        assert_eq!(state.query(), "x");
    }

    #[test]
    fn test_split_at_cursor() {
        let mut state = typed("abc");
        assert_eq!(state.split_at_cursor(), ("abc".into(), None, String::new()));
        state.move_left();
        state.move_left();
        assert_eq!(state.split_at_cursor(), ("a".into(), Some('b'), "c".into()));
    }
}
