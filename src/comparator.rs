//! Exact versus approximate distinct counting over the same input.
use crate::error::Result;
use crate::hll::{HyperLogLog, HyperLogLogConfig};
use serde::Serialize;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub exact_count: usize,
    pub exact_time: Duration,
    pub hll_estimate: f64,
    pub hll_time: Duration,
    /// Bytes held by the HyperLogLog sketch.
    pub hll_memory: usize,
}

impl ComparisonReport {
    pub fn exact_secs(&self) -> f64 {
        self.exact_time.as_secs_f64()
    }

    pub fn hll_secs(&self) -> f64 {
        self.hll_time.as_secs_f64()
    }

    pub fn absolute_error(&self) -> f64 {
        (self.hll_estimate - self.exact_count as f64).abs()
    }

    /// Error relative to the exact count; zero when both are zero.
    pub fn relative_error(&self) -> f64 {
        if self.exact_count == 0 {
            return if self.hll_estimate == 0.0 { 0.0 } else { f64::INFINITY };
        }
        self.absolute_error() / self.exact_count as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardinalityComparator {
    config: HyperLogLogConfig,
}

impl CardinalityComparator {
    pub fn new(config: HyperLogLogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_precision(precision: u8) -> Result<Self> {
        Self::new(HyperLogLogConfig {
            precision,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &HyperLogLogConfig {
        &self.config
    }

    /// Runs a set-based count and a fresh HyperLogLog over `items`, one after
    /// the other, timing each.
    pub fn compare<S: AsRef<str>>(
        &self,
        items: &[S],
    ) -> Result<ComparisonReport> {
        let start = Instant::now();
        let mut exact = HashSet::new();
        for item in items {
            exact.insert(item.as_ref());
        }
        let exact_time = start.elapsed();
        let exact_count = exact.len();

        let start = Instant::now();
        let mut hll = HyperLogLog::with_config(self.config.clone())?;
        for item in items {
            hll.add(item.as_ref());
        }
        let hll_estimate = hll.estimate();
        let hll_time = start.elapsed();

        info!(
            items = items.len(),
            exact_count,
            hll_estimate,
            exact_ms = exact_time.as_secs_f64() * 1000.0,
            hll_ms = hll_time.as_secs_f64() * 1000.0,
            "Compared exact and approximate counts"
        );

        Ok(ComparisonReport {
            exact_count,
            exact_time,
            hll_estimate,
            hll_time,
            hll_memory: hll.memory_usage(),
        })
    }
}
