//! Standard Bloom Filter implementation
pub mod config;
pub mod filter;
pub mod traits;

pub use config::{BloomFilterConfig, BloomFilterConfigBuilder};
pub use filter::BloomFilter;
pub use traits::BloomFilterStats;
