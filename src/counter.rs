// counter.rs - Count points inside the unit circle across worker threads

use std::ops::Range;
use std::thread;

use log::debug;

use crate::points::Point;

/// Half-open index interval `[low, high)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionRange {
    pub low: usize,
    pub high: usize,
}

impl PartitionRange {
    pub fn len(&self) -> usize {
        self.high - self.low
    }

    pub fn as_range(&self) -> Range<usize> {
        self.low..self.high
    }
}

/// Split `[0, num_points)` into `num_threads` equal contiguous ranges.
///
/// # Panics
///
/// If `num_threads` is zero or does not divide `num_points`.
pub fn partition(num_points: usize, num_threads: usize) -> Vec<PartitionRange> {
    assert!(num_threads > 0, "num_threads must be positive");
    assert!(
        num_points % num_threads == 0,
        "num_points must be divisible by {num_threads}"
    );

    let points_per_thread = num_points / num_threads;
    (0..num_threads)
        .map(|i| PartitionRange {
            low: i * points_per_thread,
            high: (i + 1) * points_per_thread,
        })
        .collect()
}

/// Count the points of one slice that fall inside the unit circle.
pub fn count_slice(points: &[Point]) -> usize {
    points.iter().filter(|p| p.in_unit_circle()).count()
}

/// Count in-circle points using one fresh thread per partition.
///
/// Each worker reads only its own range and returns a local count; the
/// counts are summed after every worker has been joined.
///
/// # Panics
///
/// Same preconditions as [`partition`]. A panic inside a worker is resumed on
/// the calling thread.
pub fn count_in_circle(points: &[Point], num_threads: usize) -> usize {
    let ranges = partition(points.len(), num_threads);

    thread::scope(|s| {
        let handles: Vec<_> = ranges
            .iter()
            .map(|range| {
                let chunk = &points[range.as_range()];
                s.spawn(move || count_slice(chunk))
            })
            .collect();

        let mut total = 0;
        for (range, handle) in ranges.iter().zip(handles) {
            let local = match handle.join() {
                Ok(local) => local,
                Err(payload) => std::panic::resume_unwind(payload),
            };
            debug!(
                "partition [{}, {}): {} of {} in circle",
                range.low,
                range.high,
                local,
                range.len()
            );
            total += local;
        }
        total
    })
}

/// `4 * in_circle / num_points`; always in [0, 4].
pub fn pi_estimate(in_circle: usize, num_points: usize) -> f64 {
    4.0 * in_circle as f64 / num_points as f64
}
