use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::StdRng};

/// Deterministic RNG so statistical tests see the same data on every run.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[allow(dead_code)]
pub fn generate_random_string(rng: &mut StdRng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `count` random strings of length `len`. Strings of different lengths
/// never collide, which makes disjoint sets easy to build.
#[allow(dead_code)]
pub fn generate_test_data(
    rng: &mut StdRng,
    count: usize,
    len: usize,
) -> Vec<String> {
    (0..count).map(|_| generate_random_string(rng, len)).collect()
}

/// Consistent, distinct items: `test_item_000000`, `test_item_000001`, ...
#[allow(dead_code)]
pub fn generate_test_items(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("test_item_{:06}", i)).collect()
}

/// Dotted-quad strings, all distinct for `count <= 2^24`.
#[allow(dead_code)]
pub fn generate_ips(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!("10.{}.{}.{}", (i >> 16) & 0xff, (i >> 8) & 0xff, i & 0xff)
        })
        .collect()
}
