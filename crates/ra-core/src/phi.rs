use crate::constants::{PHI, PHI_INVERSE};
use crate::error::{RaError, Result};

/// Default tolerance for [`is_phi_ratio`].
pub const DEFAULT_PHI_TOLERANCE: f64 = 0.01;

/// φⁿ for any integer n.
///
/// n ∈ {-1, 0, 1} returns the stored constant exactly; other powers go
/// through `powi` on φ (positive n) or on 1/φ (negative n).
pub fn phi_power(n: i32) -> f64 {
    match n {
        0 => 1.0,
        1 => PHI,
        -1 => PHI_INVERSE,
        n if n > 0 => PHI.powi(n),
        n => PHI_INVERSE.powi(n.saturating_neg()),
    }
}

/// F(n+1) / F(n), seeded from (1, 1). Converges to φ as n grows.
pub fn fibonacci_ratio(n: i64) -> Result<f64> {
    if n < 1 {
        return Err(RaError::InvalidArgument(format!(
            "fibonacci index must be >= 1, got {n}"
        )));
    }

    // Past ~90 terms u64 saturates; the ratio has long since hit φ in f64.
    let mut prev: u64 = 1;
    let mut curr: u64 = 1;
    for _ in 1..n.min(90) {
        let next = prev.saturating_add(curr);
        prev = curr;
        curr = next;
    }

    Ok(curr as f64 / prev as f64)
}

/// True when the larger of `a`, `b` divided by the smaller is within
/// `tolerance` of φ. Non-positive inputs never match.
pub fn is_phi_ratio(a: f64, b: f64, tolerance: f64) -> bool {
    if a <= 0.0 || b <= 0.0 {
        return false;
    }
    let ratio = a.max(b) / a.min(b);
    (ratio - PHI).abs() < tolerance
}
