//! First parsing stage: tree notation to a flat token sequence.

use crate::model::label::{QUOTE, is_label_char};
use crate::notation::token::{Token, TokenKind};
use crate::parser::char_scanner::CharScanner;
use crate::parser::parsing_error::ParsingError;
use tracing::debug;

/// Splits tree notation into tokens, scanning left to right.
///
/// * `(` and `)` become [TokenKind::BrackL] and [TokenKind::BrackR]
/// * `'...'` becomes a [TokenKind::Literal] with the raw text between the
///   quotes (no escape processing)
/// * a maximal run of alphanumeric characters, `_` and `-` becomes a
///   [TokenKind::Node]
/// * whitespace only separates tokens
///
/// # Errors
/// * `UnterminatedString` - if a quote is never closed
///   (position of the opening quote)
/// * `UnexpectedCharacter` - for any other character
///   (position of that character)
///
/// # Example
/// ```
/// use treemaker::notation::{tokenize, TokenKind};
///
/// let tokens = tokenize("A('x y' B)")?;
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind().clone()).collect();
/// assert_eq!(kinds, [
///     TokenKind::Node("A".to_string()),
///     TokenKind::BrackL,
///     TokenKind::Literal("x y".to_string()),
///     TokenKind::Node("B".to_string()),
///     TokenKind::BrackR,
/// ]);
/// # Ok::<(), treemaker::parser::ParsingError>(())
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParsingError> {
    let mut scanner = CharScanner::from_str(text);
    let mut tokens = Vec::new();

    loop {
        scanner.skip_whitespace();
        if scanner.is_eof() {
            break;
        }

        let position = scanner.position();
        let kind = if scanner.consume_if('(') {
            TokenKind::BrackL
        } else if scanner.consume_if(')') {
            TokenKind::BrackR
        } else if scanner.consume_if(QUOTE) {
            let literal = scanner
                .consume_until(QUOTE)
                .ok_or_else(|| ParsingError::unterminated_string(&scanner, position))?;
            TokenKind::Literal(literal)
        } else {
            let label = scanner.consume_while(is_label_char);
            if label.is_empty() {
                // Not at EOF, so there is a character that starts no token
                return match scanner.peek() {
                    Some(c) => Err(ParsingError::unexpected_character(&scanner, c)),
                    None => break,
                };
            }
            TokenKind::Node(label)
        };
        tokens.push(Token::new(kind, position));
    }

    debug!(num_tokens = tokens.len(), "tokenized tree notation");
    Ok(tokens)
}
