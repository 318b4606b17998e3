use crate::math::Matrix;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::Normal;
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create a [`StdRng`] seeded from the `SEED` environment variable.
///
/// Each call uses a unique seed derived from the base seed and an
/// incrementing counter to ensure deterministic yet distinct streams.
pub fn rng_from_env() -> StdRng {
    let base = std::env::var("SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let idx = COUNTER.fetch_add(1, Ordering::SeqCst);
    StdRng::seed_from_u64(base + idx)
}

/// Sample a `rows x cols` matrix from a zero-mean normal distribution.
///
/// Used for weight initialisation; the embedding layers pass
/// `stddev = embed_size^-0.5` so the variance of the projected values stays
/// independent of the embedding width.
pub fn normal_matrix(rows: usize, cols: usize, stddev: f32) -> Matrix {
    let normal = Normal::new(0.0f32, stddev).expect("stddev must be finite and positive");
    let mut rng = rng_from_env();
    let data = (0..rows * cols).map(|_| rng.sample(normal)).collect();
    Matrix::from_vec(rows, cols, data)
}
