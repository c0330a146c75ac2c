use crate::error::{Result, SketchError};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

pub const MIN_PRECISION: u8 = 4;
pub const MAX_PRECISION: u8 = 16;

/// Which bias-correction constant `α_m` to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlphaTable {
    /// Tabulated values 0.673 / 0.697 / 0.709 for m = 16 / 32 / 64,
    /// `0.7213 / (1 + 1.079 / m)` above that.
    #[default]
    Flajolet,
    /// `0.7213 / (1 + 1.079 / m)` for every m.
    Asymptotic,
}

#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(pattern = "owned")]
pub struct HyperLogLogConfig {
    /// log2 of the register count
    #[builder(default = "14")]
    pub precision: u8,

    #[builder(default)]
    pub alpha_table: AlphaTable,
}

impl HyperLogLogConfig {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(SketchError::ConfigurationError(format!(
                "Precision must be between {MIN_PRECISION} and {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

impl Default for HyperLogLogConfig {
    fn default() -> Self {
        Self {
            precision: 14,
            alpha_table: AlphaTable::default(),
        }
    }
}
