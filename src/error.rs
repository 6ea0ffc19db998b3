//! The error type shared by the core evaluator and the ambient CLI/loader stack.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can arise while tokenizing/parsing a formula, loading an LTS, or evaluating a
/// formula against an LTS.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A formula node used an operator head the parser/evaluator does not recognise.
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),

    /// `not(phi)` was applied to a non-atomic `phi`.
    #[error("negation argument is not atomic: `{0}`")]
    NonAtomicNegation(String),

    /// The LTS violates one of its structural invariants (dangling reference, duplicate
    /// `(state, action)` pair, or a source-level use of the reserved `tau` action).
    #[error("malformed LTS: {0}")]
    MalformedLts(String),

    /// An internal assertion failed: a fixed-point iteration exceeded its safety bound, or a set
    /// operation was handed something other than a well-formed set.
    #[error("internal invariant violated: {0}")]
    Invariant(String),

    /// The tokenizer or the recursive-descent parser rejected the formula source text.
    #[error("failed to parse formula `{formula}`: {reason}")]
    ParseError { formula: String, reason: String },

    /// No built-in model matches the requested id.
    #[error("no built-in model with id {0}")]
    UnknownModel(u32),

    /// Wraps an I/O failure while loading an LTS or formula file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::sync::Arc<std::io::Error>,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source: std::sync::Arc::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
