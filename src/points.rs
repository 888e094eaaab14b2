//! Sample points in the square [-1, 1] x [-1, 1]

use rand::distributions::{Distribution, Uniform};

use crate::utils::rng::seeded_rng;

/// Radius of the circle inscribed in the sampling square.
pub const UNIT_CIRCLE_RADIUS: f64 = 1.0;

/// A sample point. Both coordinates lie in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin.
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Points exactly on the boundary count as inside.
    pub fn in_unit_circle(&self) -> bool {
        self.distance_from_origin() <= UNIT_CIRCLE_RADIUS
    }
}

/// Generate `num_points` points from a generator seeded with `seed`.
///
/// For each point x is drawn before y, so the same `(num_points, seed)`
/// always yields the same sequence, and a shorter run is a prefix of a
/// longer one.
pub fn generate_points(num_points: usize, seed: u64) -> Vec<Point> {
    let mut rng = seeded_rng(seed);
    let uniform = Uniform::new_inclusive(-1.0, 1.0);

    let mut points = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        let x = uniform.sample(&mut rng);
        let y = uniform.sample(&mut rng);
        points.push(Point::new(x, y));
    }
    points
}
