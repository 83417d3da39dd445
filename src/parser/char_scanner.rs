//! Low-level character-by-character scanner.
//!
//! This module provides [CharScanner] for scanning text with support for
//! peeking, consuming, and extracting context for error reporting. Used as
//! the foundation of the tree notation tokenizer.

// =#========================================================================#=
// CHAR SCANNER
// =#========================================================================#=
/// A character-by-character scanner over an in-memory string.
///
/// Positions are character offsets (not byte offsets), so they can be
/// reported to users as-is, also for non-ASCII input.
///
/// # Example
/// ```
/// use treemaker::parser::CharScanner;
///
/// let mut scanner = CharScanner::from_str("  Kea(Kaka)");
/// scanner.skip_whitespace();
/// assert_eq!(scanner.position(), 2);
/// assert_eq!(scanner.consume_while(|c| c.is_alphanumeric()), "Kea");
/// assert!(scanner.consume_if('('));
/// assert_eq!(scanner.peek(), Some('K'));
/// ```
pub struct CharScanner {
    /// The characters being scanned
    input: Vec<char>,
    /// Current position (character offset)
    pos: usize,
}

impl CharScanner {
    /// Creates a new scanner positioned at the start of `input`.
    pub fn from_str(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    /// Peeks at the current character without consuming it.
    ///
    /// # Returns
    /// * `Some(char)` - The current character if available
    /// * `None` - If at end of input
    #[inline(always)]
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    /// Gets the current character and advances the position (consumes it).
    ///
    /// # Returns
    /// * `Some(char)` - The current character if available
    /// * `None` - If at end of input
    #[inline(always)]
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Consumes the current character if it is `c`.
    ///
    /// # Returns
    /// `true` if the character was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes characters as long as `predicate` holds and returns them.
    ///
    /// Returns an empty string if the current character does not satisfy
    /// `predicate` (or at end of input).
    pub fn consume_while<F: Fn(char) -> bool>(&mut self, predicate: F) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.pos += 1;
        }
        self.input[start..self.pos].iter().collect()
    }

    /// Consumes characters up to the next occurrence of `target` and
    /// returns them; `target` itself is consumed but not returned.
    ///
    /// # Returns
    /// * `Some(String)` - Characters before `target`
    /// * `None` - If end of input was reached first; the scanner is then at EOF
    pub fn consume_until(&mut self, target: char) -> Option<String> {
        let start = self.pos;
        while let Some(c) = self.next_char() {
            if c == target {
                return Some(self.input[start..self.pos - 1].iter().collect());
            }
        }
        None
    }

    /// Skips (consumes) all consecutive whitespace characters.
    ///
    /// Whitespace includes: space (' '), tab ('\t'), newline ('\n'), and carriage return ('\r').
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if is_whitespace(c) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Returns the current position (character offset).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Checks if at end of input.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns up to `k` characters starting at `position`, for error context.
    pub fn get_context_at(&self, position: usize, k: usize) -> String {
        let start = position.min(self.input.len());
        let end = (start + k).min(self.input.len());
        self.input[start..end].iter().collect()
    }
}

/// Checks whether a character separates tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
