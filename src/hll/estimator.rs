//! Cardinality estimation over a register array.
//!
//! Everything here is a pure function of the registers, so an estimate can
//! be recomputed at any time and identical register state always yields the
//! identical estimate.
use super::AlphaTable;

/// Size of the 32-bit hash space the registers are fed from.
pub const HASH_SPACE: f64 = 4_294_967_296.0;

/// Above this raw estimate the 32-bit hash space starts to saturate and the
/// large-range correction kicks in.
pub const LARGE_RANGE_THRESHOLD: f64 = HASH_SPACE / 30.0;

pub fn alpha(num_registers: usize, table: AlphaTable) -> f64 {
    let m = num_registers as f64;
    match (table, num_registers) {
        (AlphaTable::Flajolet, 16) => 0.673,
        (AlphaTable::Flajolet, 32) => 0.697,
        (AlphaTable::Flajolet, 64) => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / m),
    }
}

/// `α_m · m² / Σ 2^(-M[j])` without any range correction.
pub fn raw_estimate(registers: &[u8], alpha: f64) -> f64 {
    let m = registers.len() as f64;
    let sum: f64 = registers.iter().map(|&r| 2_f64.powi(-(r as i32))).sum();
    alpha * m * m / sum
}

pub fn linear_counting(num_registers: usize, zero_registers: usize) -> f64 {
    let m = num_registers as f64;
    m * (m / zero_registers as f64).ln()
}

/// Raw estimate with small- and large-range corrections applied.
pub fn estimate(registers: &[u8], alpha: f64) -> f64 {
    let m = registers.len() as f64;
    let e = raw_estimate(registers, alpha);

    if e <= 2.5 * m {
        let zeros = registers.iter().filter(|&&r| r == 0).count();
        if zeros > 0 {
            return linear_counting(registers.len(), zeros);
        }
        e
    } else if e <= LARGE_RANGE_THRESHOLD {
        e
    } else {
        -HASH_SPACE * (1.0 - e / HASH_SPACE).ln()
    }
}
