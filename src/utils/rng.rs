use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic 64-bit generator for a run.
///
/// Every run with the same `seed` sees the same output stream, which is what
/// makes the generated point files reproducible.
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}
