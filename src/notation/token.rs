//! Tokens of tree notation.

use std::fmt;

/// Kind of a token, with the label payload where there is one.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum TokenKind {
    /// Opening bracket `(`
    BrackL,
    /// Closing bracket `)`
    BrackR,
    /// Quoted label `'...'`, payload without the quotes
    Literal(String),
    /// Unquoted label, a maximal run of label characters
    Node(String),
}

/// A token together with the position (character offset) it starts at.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token {
    kind: TokenKind,
    position: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Returns the kind of this token.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Returns the position this token starts at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the label carried by a `Node` or `Literal` token.
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Node(label) | TokenKind::Literal(label) => Some(label),
            TokenKind::BrackL | TokenKind::BrackR => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::BrackL => write!(f, "BRACK_L"),
            TokenKind::BrackR => write!(f, "BRACK_R"),
            TokenKind::Literal(label) => write!(f, "LITERAL({label})"),
            TokenKind::Node(label) => write!(f, "NODE({label})"),
        }
    }
}
