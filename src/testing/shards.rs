use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reproducible values drawn uniformly from `[low, high)`, with roughly one
/// in fifty replaced by NaN.
pub fn random_values(n: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            if rng.random_range(0..50) == 0 {
                f64::NAN
            } else {
                rng.random_range(low..high)
            }
        })
        .collect()
}

/// Splits `data` into `parts` contiguous, possibly empty, shards at random
/// cut points.
pub fn random_shards<T: Clone>(data: &[T], parts: usize, seed: u64) -> Vec<Vec<T>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cuts: Vec<usize> = (1..parts).map(|_| rng.random_range(0..=data.len())).collect();
    cuts.sort_unstable();

    let mut shards = Vec::with_capacity(parts);
    let mut start = 0;
    for cut in cuts {
        shards.push(data[start..cut].to_vec());
        start = cut;
    }
    shards.push(data[start..].to_vec());
    shards
}
