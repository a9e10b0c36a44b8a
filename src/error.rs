use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the distance engine and the data generation tooling.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller supplied a value outside the accepted domain, e.g. a negative cost.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An accumulated cost no longer fits in a `u64`.
    #[error("cost overflow while computing {context}")]
    Overflow { context: &'static str },

    /// The dictionary file held no usable tokens.
    #[error("dictionary {0} contains no words")]
    EmptyDictionary(PathBuf),

    /// Generated results disagree with the recomputed ones.
    #[error("verification failed: {0}")]
    Mismatch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub fn mismatch<S: Into<String>>(message: S) -> Self {
        Error::Mismatch(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
