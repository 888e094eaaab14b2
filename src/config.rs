// config.rs - Validated run parameters

use crate::error::{Error, Result};

/// Upper bound on worker threads.
pub const MAX_THREADS: usize = 8;

/// Seed used when none is given, so repeated runs reproduce each other.
pub const DEFAULT_SEED: u64 = 1;

/// Parameters of a single run, checked once up front.
///
/// Holding a `RunConfig` means `num_threads` is in `1..=MAX_THREADS`,
/// `num_points` is positive and `num_points % num_threads == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    num_threads: usize,
    num_points: usize,
    seed: u64,
}

impl RunConfig {
    /// Validate raw command-line values.
    ///
    /// Checks run in a fixed order: parse threads, range-check threads,
    /// parse points, range-check points, then divisibility. The first
    /// failure wins.
    pub fn from_args(num_threads: &str, num_points: &str) -> Result<Self> {
        let num_threads = parse_count("num_threads", num_threads)?;
        let num_threads = check_threads(i64::from(num_threads))?;

        let num_points = parse_count("num_points", num_points)?;
        if num_points <= 0 {
            return Err(Error::NonPositivePoints);
        }
        let num_points = usize::try_from(num_points).map_err(|_| Error::NonPositivePoints)?;

        Self::new(num_threads, num_points)
    }

    /// Validate already-typed values.
    pub fn new(num_threads: usize, num_points: usize) -> Result<Self> {
        let num_threads = check_threads(i64::try_from(num_threads).unwrap_or(i64::MAX))?;
        if num_points == 0 {
            return Err(Error::NonPositivePoints);
        }
        if num_points % num_threads != 0 {
            return Err(Error::NotDivisible(num_threads));
        }
        Ok(Self { num_threads, num_points, seed: DEFAULT_SEED })
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Points handled by each worker.
    pub fn points_per_thread(&self) -> usize {
        self.num_points / self.num_threads
    }
}

/// Parse a signed 32-bit integer argument, keeping the raw text for the
/// message.
///
/// The whole string must be the number: no surrounding whitespace and no
/// trailing characters. Values outside `i32` are parse errors, which keeps
/// `num_points` small enough to materialize.
pub fn parse_count(name: &'static str, raw: &str) -> Result<i32> {
    raw.parse::<i32>().map_err(|source| Error::Parse {
        name,
        value: raw.to_string(),
        source,
    })
}

fn check_threads(num_threads: i64) -> Result<usize> {
    if num_threads <= 0 {
        return Err(Error::NonPositiveThreads);
    }
    if num_threads > MAX_THREADS as i64 {
        return Err(Error::TooManyThreads(MAX_THREADS));
    }
    Ok(num_threads as usize)
}
