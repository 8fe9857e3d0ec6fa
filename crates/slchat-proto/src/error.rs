//! Error types for the protocol library.

use thiserror::Error;

/// Errors produced while turning a raw line into a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Line was empty or whitespace only.
    #[error("empty line")]
    EmptyLine,

    /// The line did not have the `[:prefix] VERB params` shape.
    #[error("malformed line at position {position}")]
    Malformed {
        /// Byte offset where parsing stopped.
        position: usize,
    },

    /// Verb is not part of the protocol.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Verb is known but the argument count is wrong.
    #[error("{command} expects {expected} parameter(s), got {got}")]
    WrongArity {
        /// The verb.
        command: &'static str,
        /// Expected parameter count.
        expected: usize,
        /// Parameters actually present.
        got: usize,
    },

    /// CREATE flag was neither `0` nor `1`.
    #[error("invalid invite-only flag: {0}")]
    InvalidFlag(String),
}
