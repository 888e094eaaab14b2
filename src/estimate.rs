//! One Monte Carlo run: generate, count, estimate.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use log::info;

use crate::config::RunConfig;
use crate::counter::{count_in_circle, pi_estimate};
use crate::points::{generate_points, Point};

/// Result of counting a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub num_points: usize,
    pub in_circle: usize,
    pub pi_estimate: f64,
}

impl Estimate {
    pub fn new(num_points: usize, in_circle: usize) -> Self {
        Self {
            num_points,
            in_circle,
            pi_estimate: pi_estimate(in_circle, num_points),
        }
    }

    /// Signed difference from the true constant, `estimate - π`.
    pub fn error(&self) -> f64 {
        self.pi_estimate - PI
    }
}

/// Everything a run produces. The points are kept for the points artifact.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub points: Vec<Point>,
    pub estimate: Estimate,
    /// Time spent generating and counting.
    pub elapsed: Duration,
}

/// Run the estimator for a validated configuration.
///
/// Depends only on `(num_points, num_threads, seed)`; nothing is written to
/// disk here.
pub fn simulate(config: &RunConfig) -> Simulation {
    let start = Instant::now();

    let points = generate_points(config.num_points(), config.seed());
    let generated = start.elapsed();

    let in_circle = count_in_circle(&points, config.num_threads());
    let elapsed = start.elapsed();

    info!(
        "{} points, {} threads: generated in {:.3}s, counted in {:.3}s",
        config.num_points(),
        config.num_threads(),
        generated.as_secs_f64(),
        (elapsed - generated).as_secs_f64()
    );

    Simulation {
        points,
        estimate: Estimate::new(config.num_points(), in_circle),
        elapsed,
    }
}
