use crate::error::{Result, SketchError};
use derive_builder::Builder;
use std::path::PathBuf;
use std::str::FromStr;

/// Defaults for the `probrs` binary, read from the environment.
#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned")]
pub struct Settings {
    #[builder(default = "1000")]
    pub bloom_size: usize,
    #[builder(default = "3")]
    pub bloom_hash_count: usize,
    #[builder(default = "14")]
    pub hll_precision: u8,
    #[builder(default = "PathBuf::from(\"lms-stage-access.log\")")]
    pub log_file: PathBuf,
}

fn env_or<T>(var_name: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value =
        std::env::var(var_name).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|e: T::Err| SketchError::EnvParseError {
        var_name: var_name.to_string(),
        value: value.clone(),
        error: e.to_string(),
    })
}

impl Settings {
    /// Loads `.env` if present, then reads `BLOOM_SIZE`, `BLOOM_HASH_COUNT`,
    /// `HLL_PRECISION` and `LOG_FILE`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            bloom_size: env_or("BLOOM_SIZE", "1000")?,
            bloom_hash_count: env_or("BLOOM_HASH_COUNT", "3")?,
            hll_precision: env_or("HLL_PRECISION", "14")?,
            log_file: std::env::var("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("lms-stage-access.log")),
        })
    }
}
