//! Error types for the tree notation parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for
//! representing and reporting errors that occur while tokenizing tree
//! notation or folding tokens into a tree.

use crate::model::TreeError;
use crate::parser::char_scanner::CharScanner;
use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 20;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing tree notation.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum ParsingErrorType {
    /// Quoted label opened but never closed
    #[error("Unterminated quoted label")]
    UnterminatedString,

    /// Character outside of labels, brackets, quotes, and whitespace
    #[error("Unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// Tokens do not describe a tree
    #[error("Malformed tree - {0}")]
    MalformedTree(String),

    /// Tree rejected a construction step
    #[error("Invalid tree construction - {0}")]
    Tree(TreeError),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Parsing error with contextual information (position and following input).
///
/// Positions are character offsets into the parsed text. For builder
/// errors, the position is that of the offending token.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
#[error("{kind} at position {position}{}", format_context(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and the scanner state,
    /// taking the context from the given position onward.
    pub fn from_scanner(kind: ParsingErrorType, scanner: &CharScanner, position: usize) -> Self {
        Self {
            kind,
            position,
            context: scanner.get_context_at(position, DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnterminatedString, where `start` is
    /// the position of the opening quote
    pub fn unterminated_string(scanner: &CharScanner, start: usize) -> Self {
        Self::from_scanner(ParsingErrorType::UnterminatedString, scanner, start)
    }

    /// Convenience constructor for UnexpectedCharacter at the current position
    pub fn unexpected_character(scanner: &CharScanner, c: char) -> Self {
        Self::from_scanner(
            ParsingErrorType::UnexpectedCharacter(c),
            scanner,
            scanner.position(),
        )
    }

    /// Convenience constructor for MalformedTree (without context)
    pub fn malformed_tree<S: Into<String>>(msg: S, position: usize) -> Self {
        Self::without_context(ParsingErrorType::MalformedTree(msg.into()), position)
    }

    /// Convenience constructor for a rejected tree construction step (without context)
    pub fn tree(err: TreeError, position: usize) -> Self {
        Self::without_context(ParsingErrorType::Tree(err), position)
    }

    /// Create a ParsingError without input context (for builder errors)
    pub fn without_context(kind: ParsingErrorType, position: usize) -> Self {
        Self {
            kind,
            position,
            context: String::new(),
        }
    }

    /// Adds the input following the error position as context,
    /// unless context is already present.
    pub fn with_input_context(mut self, input: &str) -> Self {
        if self.context.is_empty() {
            self.context = input
                .chars()
                .skip(self.position)
                .take(DEFAULT_CONTEXT_LENGTH)
                .collect();
        }
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input following the error position (may be empty)
    pub fn context(&self) -> &str {
        &self.context
    }
}

fn format_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} chars): {}", context.chars().count(), context)
    }
}
