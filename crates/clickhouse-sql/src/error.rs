//! Error types for clickhouse-sql

use crate::tokens::Pos;
use thiserror::Error;

/// The result type for parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, tokenizing, or parsing SQL
#[derive(Debug, Error)]
pub enum Error {
    /// Error reading the source text (CLI `-f` path)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during tokenization
    #[error("tokenize error at byte {pos}: {message}")]
    Tokenize { message: String, pos: Pos },

    /// Error during parsing
    #[error("parse error at byte {pos}: {message}")]
    Parse { message: String, pos: Pos },

    /// A tree invariant was violated; should not occur on parser-produced trees
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl Error {
    /// Create a tokenization error
    pub fn tokenize(message: impl Into<String>, pos: Pos) -> Self {
        Error::Tokenize {
            message: message.into(),
            pos,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, pos: Pos) -> Self {
        Error::Parse {
            message: message.into(),
            pos,
        }
    }

    /// Byte offset the error points at, if it carries one
    pub fn pos(&self) -> Option<Pos> {
        match self {
            Error::Tokenize { pos, .. } | Error::Parse { pos, .. } => Some(*pos),
            _ => None,
        }
    }
}
