//! Error types for estimate_pi

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for a run
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run.
///
/// The `Display` text of each variant is exactly what the binary prints to
/// stderr before exiting with a failure status.
#[derive(Error, Debug)]
pub enum Error {
    /// A positional argument is not an integer
    #[error("invalid {name} {value:?}: {source}")]
    Parse {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("num_threads must be positive")]
    NonPositiveThreads,

    #[error("don't use more than {0} threads")]
    TooManyThreads(usize),

    #[error("num_points must be positive")]
    NonPositivePoints,

    /// Partitions must be exactly equal, so a remainder is rejected
    #[error("num_points must be divisible by {0}")]
    NotDivisible(usize),

    /// An output artifact could not be opened
    #[error("cannot open {} for writing: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
