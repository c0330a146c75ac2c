use fnv::FnvHasher;
use murmur3::murmur3_32;
use std::hash::Hasher;
use std::io::Cursor;

/// A type alias for the hash function used in the Bloom filter.
///
/// This function takes an input item and computes multiple hash indices
/// for the Bloom filter's bit vector.
///
/// **Parameters:**
///
/// - `item: &[u8]`
///   - A byte slice representing the item to be hashed.
/// - `num_hashes: usize`
///   - The number of hash values to compute for the item.
/// - `capacity: usize`
///   - The size of the Bloom filter's bit vector. This ensures that
///     the generated hash indices are within valid bounds.
///
/// **Returns:**
///
/// - `Vec<u32>`
///   - A vector of hash indices corresponding to positions in the bit vector.
pub type HashFunction = fn(&[u8], usize, usize) -> Vec<u32>;

/// 32-bit murmur3 with seed 0. Shared by the Bloom filter (as `h1`) and the
/// HyperLogLog sketch (as its only hash).
pub fn hash_murmur32(key: &[u8]) -> u32 {
    let mut cursor = Cursor::new(key);
    murmur3_32(&mut cursor, 0).expect("Failed to compute Murmur3 hash")
}

pub(crate) fn hash_fnv32(key: &[u8]) -> u32 {
    let mut hasher = FnvHasher::default();
    hasher.write(key);
    hasher.finish() as u32
}

/// Double hashing: `h_i = h1 + i * h2 (mod capacity)`.
///
/// Arithmetic is done in `u64` so that capacities above `u32::MAX` do not
/// truncate the modulus.
pub fn default_hash_function(
    item: &[u8],
    num_hashes: usize,
    capacity: usize,
) -> Vec<u32> {
    let h1 = hash_murmur32(item) as u64;
    let h2 = hash_fnv32(item) as u64;
    let capacity = capacity as u64;
    (0..num_hashes as u64)
        .map(|i| (h1.wrapping_add(i.wrapping_mul(h2)) % capacity) as u32)
        .collect()
}

/// Number of bits needed to hold `n` items at false positive rate `fpr`.
pub fn optimal_bit_vector_size(n: usize, fpr: f64) -> usize {
    let ln2 = std::f64::consts::LN_2;
    ((-(n as f64) * fpr.ln()) / (ln2 * ln2)).ceil() as usize
}

/// Number of hash functions minimizing the false positive rate for `n`
/// items in `m` bits. Never less than one.
pub fn optimal_num_hashes(n: usize, m: usize) -> usize {
    (((m as f64 / n as f64) * std::f64::consts::LN_2).round() as usize).max(1)
}
