//! Low-level scanning and error handling for the tree notation parser.
//!
//! The tree notation parser itself lives in [crate::notation]; this module
//! provides the character scanner it is built on and its error type.

pub mod char_scanner;
pub mod parsing_error;

pub use char_scanner::CharScanner;
pub use parsing_error::{ParsingError, ParsingErrorType};
