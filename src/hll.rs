//! HyperLogLog cardinality estimation
pub mod config;
pub mod estimator;
pub mod sketch;

pub use config::{
    AlphaTable, HyperLogLogConfig, HyperLogLogConfigBuilder, MAX_PRECISION,
    MIN_PRECISION,
};
pub use sketch::HyperLogLog;
