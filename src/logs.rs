//! Pulling client IPv4 addresses out of access-log lines.
//!
//! Lines are expected to be JSON objects with `remote_addr` and optionally
//! `http_x_forwarded_for`. Lines that are not JSON are searched for the first
//! dotted-quad token instead.
use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::net::Ipv4Addr;
use std::path::Path;
use tracing::debug;

const PROGRESS_EVERY: usize = 10_000;

#[derive(Debug, Deserialize)]
struct AccessRecord {
    #[serde(default)]
    remote_addr: Option<String>,
    #[serde(default)]
    http_x_forwarded_for: Option<String>,
}

/// Outcome of scanning a log.
#[derive(Debug, Clone, Default)]
pub struct LogScan {
    /// Valid IPs in the order they appeared, duplicates included.
    pub ips: Vec<String>,
    pub total_lines: usize,
    pub rejected_lines: usize,
}

/// Strict dotted-quad parse; surrounding whitespace is rejected.
fn parse_ipv4(value: &str) -> Option<Ipv4Addr> {
    value.parse().ok()
}

pub fn extract_ip(line: &str) -> Option<Ipv4Addr> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_str::<AccessRecord>(line) {
        Ok(record) => {
            // The first hop of X-Forwarded-For is the original client.
            let forwarded = record
                .http_x_forwarded_for
                .as_deref()
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|v| !v.is_empty());

            forwarded
                .or(record.remote_addr.as_deref())
                .and_then(|v| parse_ipv4(v.trim()))
        }
        Err(_) => line
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .find_map(parse_ipv4),
    }
}

/// Decodes a raw line as UTF-8, falling back to Latin-1.
fn decode_line(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

pub fn scan_log<R: Read>(reader: R) -> Result<LogScan> {
    let mut reader = BufReader::new(reader);
    let mut scan = LogScan::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        scan.total_lines += 1;

        match extract_ip(&decode_line(&buf)) {
            Some(ip) => scan.ips.push(ip.to_string()),
            None => scan.rejected_lines += 1,
        }

        if scan.total_lines % PROGRESS_EVERY == 0 {
            debug!(
                lines = scan.total_lines,
                ips = scan.ips.len(),
                "Scanning log"
            );
        }
    }

    debug!(
        total_lines = scan.total_lines,
        rejected_lines = scan.rejected_lines,
        "Finished scanning log"
    );
    Ok(scan)
}

pub fn scan_log_file<P: AsRef<Path>>(path: P) -> Result<LogScan> {
    let file = File::open(path.as_ref())?;
    scan_log(file)
}
