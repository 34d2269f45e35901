//! Fallible parsing of square notation.

use std::str::FromStr;

use thiserror::Error;

use crate::{File, Rank, Square};

/// Errors that can occur when parsing square notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid notation: expected 2 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid file letter: expected 'a'-'h', got '{0}'")]
    InvalidFile(char),

    #[error("invalid rank digit: expected '1'-'8', got '{0}'")]
    InvalidRankChar(char),

    #[error("invalid rank number: expected 1-8, got {0}")]
    InvalidRank(u8),
}

impl Square {
    /// Creates a square from a file letter and a rank number as they
    /// appear in board notation (e.g., 'f' and 1 for f1).
    pub const fn from_notation(file: char, rank: u8) -> Result<Self, NotationError> {
        let f = match File::from_char(file) {
            Some(f) => f,
            None => return Err(NotationError::InvalidFile(file)),
        };
        let r = match Rank::from_number(rank) {
            Some(r) => r,
            None => return Err(NotationError::InvalidRank(rank)),
        };
        Ok(Square::new(f, r))
    }
}

impl FromStr for Square {
    type Err = NotationError;

    /// Parses algebraic notation (e.g., "e4") with detailed errors.
    ///
    /// [`Square::from_algebraic`] offers the same parse as a `const fn`
    /// returning `Option`; this implementation reports what went wrong.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(NotationError::InvalidLength(chars.len()));
        }
        let file = File::from_char(chars[0]).ok_or(NotationError::InvalidFile(chars[0]))?;
        let rank = Rank::from_char(chars[1]).ok_or(NotationError::InvalidRankChar(chars[1]))?;
        Ok(Square::new(file, rank))
    }
}
