//! Two small probabilistic structures for large-scale data analysis.
//!
//! * [`BloomFilter`]: approximate set membership in a fixed bit array. Used
//!   here to tell whether a password has been seen before without keeping
//!   the passwords themselves.
//! * [`HyperLogLog`]: approximate distinct counting in `2^p` one-byte
//!   registers. Used here to count unique client IPs in an access log.
//!
//! HowTo:
//!    * Bloom filter: every item is hashed with murmur3 (`h1`) and FNV-1a
//!      (`h2`); the k bit positions are `h1 + i * h2 mod size` (double
//!      hashing). `add` sets them, `contains` checks that all are set.
//!    * Uniqueness: `contains` means "already used"; an unseen password is
//!      reported unique and added at once, so duplicates later in the batch
//!      are caught.
//!    * HyperLogLog: one 32-bit murmur3 hash per item. The low `p` bits pick
//!      a register, the rest give a rank (1 + leading zeros); each register
//!      keeps the max rank. The estimate is the bias-corrected harmonic mean
//!      with linear counting for small and a log correction for large
//!      cardinalities.
//!
//! Obvious problems:
//!     * False positives: a Bloom filter can report a never-seen password as
//!       used. Its rate grows with the number of items; size the filter with
//!       [`BloomFilter::with_capacity`] when the volume is known.
//!     * No removal: bits never get cleared, so nothing can be forgotten.
//!     * Since 32 bit hashes are used for HyperLogLog, estimates get coarse
//!       as the count approaches 2**32.
//!     * Neither structure synchronizes itself; wrap it in a `Mutex` to share
//!       between threads.

pub mod bloom;
pub mod candidate;
pub mod common;
pub mod comparator;
mod error;
mod hash;
pub mod hll;
pub mod logs;
#[cfg(feature = "cli")]
pub mod report;
#[cfg(feature = "cli")]
pub mod settings;
pub mod uniqueness;

pub use bloom::{
    BloomFilter, BloomFilterConfig, BloomFilterConfigBuilder, BloomFilterStats,
};
pub use candidate::{Candidate, PasswordPolicy};
pub use comparator::{CardinalityComparator, ComparisonReport};
pub use error::{Result, SketchError};
pub use hash::{
    HashFunction, default_hash_function, hash_murmur32, optimal_bit_vector_size,
    optimal_num_hashes,
};
pub use hll::{
    AlphaTable, HyperLogLog, HyperLogLogConfig, HyperLogLogConfigBuilder,
};
pub use logs::{LogScan, extract_ip, scan_log, scan_log_file};
#[cfg(feature = "cli")]
pub use settings::{Settings, SettingsBuilder};
pub use uniqueness::{UniquenessChecker, Verdict, check_uniqueness};
