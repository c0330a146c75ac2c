use crate::error::{Result, SketchError};
use crate::hash::{
    HashFunction, default_hash_function, optimal_bit_vector_size,
    optimal_num_hashes,
};
use derive_builder::Builder;

#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct BloomFilterConfig {
    /// Number of bits in the filter
    #[builder(default = "1000")]
    pub size: usize,

    /// Number of hash functions applied per element
    #[builder(default = "3")]
    pub hash_count: usize,

    /// Hash function to use
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl BloomFilterConfig {
    /// Derives `size` and `hash_count` for `expected_items` at the target
    /// false positive rate.
    pub fn for_capacity(expected_items: usize, fpr: f64) -> Result<Self> {
        if expected_items == 0 {
            return Err(SketchError::ConfigurationError(
                "Expected item count must be > 0".into(),
            ));
        }
        if fpr.is_nan() || fpr <= 0.0 || fpr >= 1.0 {
            return Err(SketchError::ConfigurationError(format!(
                "False positive rate must be between 0 and 1, got {fpr}"
            )));
        }

        let size = optimal_bit_vector_size(expected_items, fpr);
        let hash_count = optimal_num_hashes(expected_items, size);

        Ok(Self {
            size,
            hash_count,
            hash_function: default_hash_function,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(SketchError::ConfigurationError(
                "Size must be > 0".into(),
            ));
        }
        if self.hash_count == 0 {
            return Err(SketchError::ConfigurationError(
                "Hash count must be > 0".into(),
            ));
        }
        if self.size > u32::MAX as usize {
            return Err(SketchError::ConfigurationError(format!(
                "Size must not exceed {} bits, got {}",
                u32::MAX,
                self.size
            )));
        }
        Ok(())
    }
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            hash_count: 3,
            hash_function: default_hash_function,
        }
    }
}
