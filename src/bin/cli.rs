use clap::{Parser, Subcommand};
use probabilistic_rs::{
    BloomFilter, BloomFilterStats, Candidate, CardinalityComparator,
    PasswordPolicy, Settings, UniquenessChecker, common::bytes2hr,
    optimal_bit_vector_size, optimal_num_hashes,
    report::{comparison_table, verdict_table},
    scan_log_file,
};
use std::{fs, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check passwords for reuse against a Bloom filter
    Passwords {
        /// Passwords the filter is seeded with
        #[arg(short, long, value_delimiter = ',')]
        existing: Vec<String>,

        /// Number of bits in the filter
        #[arg(short, long)]
        size: Option<usize>,

        /// Number of hash functions
        #[arg(long)]
        hashes: Option<usize>,

        /// Size the filter for this many passwords instead of --size/--hashes
        #[arg(short, long, conflicts_with_all = ["size", "hashes"])]
        capacity: Option<usize>,

        /// Target false positive rate used with --capacity
        #[arg(short, long, default_value = "0.01")]
        fpr: f64,

        /// Only accept letters, digits and common punctuation
        #[arg(long)]
        strict_charset: bool,

        /// JSON array of candidates; non-string entries are reported invalid
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Passwords to check
        candidates: Vec<String>,
    },

    /// Count unique IPs in an access log, exactly and with HyperLogLog
    Ips {
        /// Path to the log file
        log_file: Option<PathBuf>,

        /// HyperLogLog precision (4..=16)
        #[arg(short, long)]
        precision: Option<u8>,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show Bloom filter parameters for an expected load
    Params {
        /// Expected number of items
        #[arg(short, long)]
        capacity: usize,

        /// Target false positive rate
        #[arg(short, long, default_value = "0.01")]
        fpr: f64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    match cli.command {
        Commands::Passwords {
            existing,
            size,
            hashes,
            capacity,
            fpr,
            strict_charset,
            json,
            candidates,
        } => {
            let mut filter = match capacity {
                Some(capacity) => BloomFilter::with_capacity(capacity, fpr)?,
                None => BloomFilter::with_params(
                    size.unwrap_or(settings.bloom_size),
                    hashes.unwrap_or(settings.bloom_hash_count),
                )?,
            };
            for password in &existing {
                filter.add(password);
            }
            info!(
                seeded = existing.len(),
                size = filter.size(),
                hash_count = filter.hash_count(),
                "Seeded bloom filter"
            );

            let mut batch: Vec<Candidate> =
                candidates.into_iter().map(Candidate::from).collect();
            if let Some(path) = json {
                let values: Vec<serde_json::Value> =
                    serde_json::from_str(&fs::read_to_string(path)?)?;
                batch.extend(values.into_iter().map(Candidate::from));
            }

            let policy = if strict_charset {
                PasswordPolicy::ascii_printable()
            } else {
                PasswordPolicy::permissive()
            };
            let mut checker =
                UniquenessChecker::with_policy(&mut filter, policy);
            let results = checker.check_batch(batch)?;

            println!("{}", verdict_table(&results));
            println!(
                "Filter: {} bits, {} hashes, {} set, {} in memory, est. FPR {:.4}%",
                filter.size(),
                filter.hash_count(),
                filter.bits_set(),
                bytes2hr(filter.memory_usage()),
                filter.estimated_false_positive_rate() * 100.0
            );
        }
        Commands::Ips {
            log_file,
            precision,
            json,
        } => {
            let log_file = log_file.unwrap_or(settings.log_file);
            if !log_file.exists() {
                warn!("Log file '{}' not found", log_file.display());
                return Ok(());
            }

            let scan = scan_log_file(&log_file)?;
            info!(
                total_lines = scan.total_lines,
                rejected_lines = scan.rejected_lines,
                "Read {}",
                log_file.display()
            );
            if scan.ips.is_empty() {
                warn!("No IP addresses found in the log file");
                return Ok(());
            }

            let comparator = CardinalityComparator::with_precision(
                precision.unwrap_or(settings.hll_precision),
            )?;
            let report = comparator.compare(&scan.ips)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", comparison_table(&report));
            }
        }
        Commands::Params { capacity, fpr } => {
            let filter = BloomFilter::with_capacity(capacity, fpr)?;
            println!("Bloom filter parameters:");
            println!("  Capacity: {capacity}");
            println!("  False positive rate: {fpr:.4}");
            println!(
                "  Bit vector size: {}",
                optimal_bit_vector_size(capacity, fpr)
            );
            println!(
                "  Number of hash functions: {}",
                optimal_num_hashes(capacity, filter.size())
            );
            println!("  Memory: {}", bytes2hr(filter.memory_usage()));
        }
    }

    Ok(())
}
