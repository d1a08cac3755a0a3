//! Coherence thresholds and the five-level classification over [0, 1].

use serde::Serialize;

use crate::error::{RaError, Result};

/// Peak coherence threshold (85%)
pub const HIGH_COHERENCE: f64 = 0.85;

/// High coherence threshold (60%)
pub const MEDIUM_COHERENCE: f64 = 0.6;

/// Medium coherence threshold (30%)
pub const LOW_COHERENCE: f64 = 0.3;

/// Minimum detectable coherence (10%)
pub const MINIMUM_COHERENCE: f64 = 0.1;

/// Default maximum standard deviation for [`is_coherence_stable`].
pub const DEFAULT_STABILITY_THRESHOLD: f64 = 0.05;

/// Stored upper bound of the PEAK band, past 1.0 so that exactly 1.0 is inside.
const PEAK_UPPER: f64 = 1.01;

/// A half-open interval `[lower, upper)` on the coherence scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CoherenceBand {
    pub lower: f64,
    pub upper: f64,
    pub name: &'static str,
}

impl CoherenceBand {
    pub const fn new(lower: f64, upper: f64, name: &'static str) -> Self {
        Self { lower, upper, name }
    }

    /// `lower <= value < upper`. No range validation.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }
}

/// Coherence level, ordered from MINIMAL to PEAK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoherenceLevel {
    Minimal,
    Low,
    Medium,
    High,
    Peak,
}

impl CoherenceLevel {
    /// Every level in ascending order of lower bound.
    pub const ALL: [CoherenceLevel; 5] = [
        Self::Minimal,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Peak,
    ];

    pub const fn band(self) -> CoherenceBand {
        match self {
            Self::Minimal => CoherenceBand::new(0.0, MINIMUM_COHERENCE, "minimal"),
            Self::Low => CoherenceBand::new(MINIMUM_COHERENCE, LOW_COHERENCE, "low"),
            Self::Medium => CoherenceBand::new(LOW_COHERENCE, MEDIUM_COHERENCE, "medium"),
            Self::High => CoherenceBand::new(MEDIUM_COHERENCE, HIGH_COHERENCE, "high"),
            Self::Peak => CoherenceBand::new(HIGH_COHERENCE, PEAK_UPPER, "peak"),
        }
    }

    pub const fn lower(self) -> f64 {
        self.band().lower
    }

    pub const fn upper(self) -> f64 {
        self.band().upper
    }

    pub const fn name(self) -> &'static str {
        self.band().name
    }

    /// Classify a coherence value.
    ///
    /// Values outside [0, 1] (and NaN) are rejected. Exactly 1.0 is PEAK.
    pub fn classify(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(RaError::InvalidArgument(format!(
                "coherence must be in [0, 1], got {value}"
            )));
        }
        Ok(Self::ALL
            .into_iter()
            .find(|level| level.contains(value))
            .unwrap_or(Self::Peak))
    }

    /// Band-local membership test; see [`CoherenceBand::contains`].
    pub fn contains(self, value: f64) -> bool {
        self.band().contains(value)
    }
}

impl std::fmt::Display for CoherenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rescale `value` from `[min_val, max_val]` into [0, 1], saturating outside.
///
/// Both bounds must be finite with `max_val > min_val`, and `value` must not
/// be NaN. Infinite values saturate.
pub fn normalize_coherence(value: f64, min_val: f64, max_val: f64) -> Result<f64> {
    if !min_val.is_finite() || !max_val.is_finite() {
        return Err(RaError::InvalidArgument(format!(
            "normalization bounds must be finite, got [{min_val}, {max_val}]"
        )));
    }
    if max_val <= min_val {
        return Err(RaError::InvalidArgument(format!(
            "max_val must be greater than min_val, got [{min_val}, {max_val}]"
        )));
    }
    if value.is_nan() {
        return Err(RaError::InvalidArgument(
            "cannot normalize NaN coherence".to_string(),
        ));
    }

    let range = max_val - min_val;
    let normalized = if range.is_finite() {
        (value - min_val) / range
    } else {
        // Bounds more than f64::MAX apart; halving keeps the span finite.
        (value / 2.0 - min_val / 2.0) / (max_val / 2.0 - min_val / 2.0)
    };
    Ok(normalized.clamp(0.0, 1.0))
}

/// Change between two measurements; positive means rising coherence.
pub fn coherence_delta(current: f64, previous: f64) -> f64 {
    current - previous
}

/// True when the population standard deviation of `values` is at most
/// `threshold`. Fewer than two samples are trivially stable.
pub fn is_coherence_stable(values: &[f64], threshold: f64) -> bool {
    if values.len() < 2 {
        return true;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt() <= threshold
}
