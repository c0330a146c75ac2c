use super::{HyperLogLogConfig, estimator};
use crate::candidate::Candidate;
use crate::error::Result;
use crate::hash::hash_murmur32;
use tracing::debug;

/// HyperLogLog sketch over 32-bit murmur3 hashes.
///
/// The low `p` bits of the hash pick a register; the remaining `32 - p` bits
/// provide the rank (1 + leading zeros). Registers only ever grow, and their
/// number is fixed at `2^p` for the lifetime of the sketch.
///
/// Registers are combined with `max`, so a register-wise max of two sketches
/// with equal precision would be their union. That is left out here.
pub struct HyperLogLog {
    config: HyperLogLogConfig,
    registers: Vec<u8>,
    alpha: f64,
}

impl HyperLogLog {
    pub fn new(precision: u8) -> Result<Self> {
        Self::with_config(HyperLogLogConfig {
            precision,
            ..Default::default()
        })
    }

    pub fn with_config(config: HyperLogLogConfig) -> Result<Self> {
        config.validate()?;

        let num_registers = 1usize << config.precision;
        let alpha = estimator::alpha(num_registers, config.alpha_table);
        debug!(
            precision = config.precision,
            num_registers, "Created HyperLogLog"
        );

        Ok(Self {
            config,
            registers: vec![0; num_registers],
            alpha,
        })
    }

    pub fn add(&mut self, item: &str) {
        let hash = hash_murmur32(item.as_bytes());
        let (index, rank) = self.split_hash(hash);
        if self.registers[index] < rank {
            self.registers[index] = rank;
        }
    }

    pub fn add_candidate(&mut self, candidate: &Candidate) -> Result<()> {
        let item = candidate.as_str()?;
        self.add(item);
        Ok(())
    }

    /// Register index and rank for a hash value.
    fn split_hash(&self, hash: u32) -> (usize, u8) {
        let p = self.config.precision as u32;
        let index = (hash & ((1 << p) - 1)) as usize;
        // `w` has at most 32 - p significant bits, so it has at least p
        // leading zeros; w == 0 gives the maximum rank 33 - p.
        let w = hash >> p;
        let rank = (w.leading_zeros() - p + 1) as u8;
        (index, rank)
    }

    /// Estimated number of distinct items added so far.
    pub fn estimate(&self) -> f64 {
        estimator::estimate(&self.registers, self.alpha)
    }

    /// The estimate rounded to the nearest whole count.
    pub fn count(&self) -> u64 {
        self.estimate().round() as u64
    }

    pub fn precision(&self) -> u8 {
        self.config.precision
    }

    pub fn num_registers(&self) -> usize {
        self.registers.len()
    }

    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn zero_registers(&self) -> usize {
        self.registers.iter().filter(|&&r| r == 0).count()
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn config(&self) -> &HyperLogLogConfig {
        &self.config
    }

    /// Relative standard error, `1.04 / √m`.
    pub fn standard_error(&self) -> f64 {
        1.04 / (self.registers.len() as f64).sqrt()
    }

    /// Bytes used by the registers plus the struct itself.
    pub fn memory_usage(&self) -> usize {
        self.registers.len() + std::mem::size_of::<Self>()
    }
}

impl std::fmt::Debug for HyperLogLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperLogLog")
            .field("precision", &self.config.precision)
            .field("num_registers", &self.registers.len())
            .field("alpha", &self.alpha)
            .field("zero_registers", &self.zero_registers())
            .finish()
    }
}
