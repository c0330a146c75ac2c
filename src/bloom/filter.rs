use super::{BloomFilterConfig, BloomFilterStats};
use crate::candidate::Candidate;
use crate::error::Result;
use bitvec::{bitvec, order::Lsb0, slice::BitSlice, vec::BitVec};
use tracing::debug;

/// Fixed-size Bloom filter over string items.
///
/// Bits only ever go from 0 to 1; there is no removal and no clear, so an
/// item that was added is reported present for the lifetime of the filter.
/// Mutation takes `&mut self`; share it across threads behind a `Mutex`.
pub struct BloomFilter {
    config: BloomFilterConfig,
    bits: BitVec<usize, Lsb0>,
    insert_count: usize,
}

impl BloomFilter {
    pub fn new(config: BloomFilterConfig) -> Result<Self> {
        config.validate()?;

        let bits = bitvec![usize, Lsb0; 0; config.size];
        debug!(
            size = config.size,
            hash_count = config.hash_count,
            "Created bloom filter"
        );

        Ok(Self {
            config,
            bits,
            insert_count: 0,
        })
    }

    pub fn with_params(size: usize, hash_count: usize) -> Result<Self> {
        Self::new(BloomFilterConfig {
            size,
            hash_count,
            ..Default::default()
        })
    }

    /// Sizes the filter for `expected_items` at false positive rate `fpr`.
    pub fn with_capacity(expected_items: usize, fpr: f64) -> Result<Self> {
        Self::new(BloomFilterConfig::for_capacity(expected_items, fpr)?)
    }

    pub fn config(&self) -> &BloomFilterConfig {
        &self.config
    }

    fn indices(&self, item: &str) -> impl Iterator<Item = usize> + use<> {
        let size = self.config.size;
        (self.config.hash_function)(
            item.as_bytes(),
            self.config.hash_count,
            size,
        )
        .into_iter()
        .map(move |h| h as usize % size)
    }

    pub fn add(&mut self, item: &str) {
        for idx in self.indices(item) {
            self.bits.set(idx, true);
        }
        self.insert_count += 1;
    }

    pub fn contains(&self, item: &str) -> bool {
        self.indices(item).all(|idx| self.bits[idx])
    }

    /// Adds a boundary value, rejecting `Candidate::Invalid` with
    /// `InvalidInput`.
    pub fn add_candidate(&mut self, candidate: &Candidate) -> Result<()> {
        let item = candidate.as_str()?;
        self.add(item);
        Ok(())
    }

    pub fn contains_candidate(&self, candidate: &Candidate) -> Result<bool> {
        let item = candidate.as_str()?;
        Ok(self.contains(item))
    }

    /// Read-only view of the bit array.
    pub fn bit_pattern(&self) -> &BitSlice<usize, Lsb0> {
        &self.bits
    }

    /// Bytes held by the bit array.
    pub fn memory_usage(&self) -> usize {
        self.bits.as_raw_slice().len() * std::mem::size_of::<usize>()
    }
}

impl BloomFilterStats for BloomFilter {
    fn size(&self) -> usize {
        self.config.size
    }

    fn hash_count(&self) -> usize {
        self.config.hash_count
    }

    fn insert_count(&self) -> usize {
        self.insert_count
    }

    fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ size: {}, hash_count: {}, insert_count: {}, bits_set: {} }}",
            self.config.size,
            self.config.hash_count,
            self.insert_count,
            self.bits.count_ones()
        )
    }
}
