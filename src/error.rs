use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid window size {window} for {len} values (expected 1 <= k <= n)")]
    InvalidWindow { window: i64, len: usize },

    #[error("Invalid value count: {0}")]
    InvalidLength(i64),

    #[error("Invalid integer '{token}' at token {position}")]
    Parse { token: String, position: usize },

    #[error("Missing values: expected {expected}, got {actual}")]
    MissingValues { expected: usize, actual: usize },

    /// Incrementally maintained frame counts drifted from a full recount.
    #[error("Aggregate mismatch at window {window}: tracked ({tracked_nd}, {tracked_ni}), recounted ({counted_nd}, {counted_ni})")]
    AggregateMismatch {
        window: usize,
        tracked_nd: i64,
        tracked_ni: i64,
        counted_nd: i64,
        counted_ni: i64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
