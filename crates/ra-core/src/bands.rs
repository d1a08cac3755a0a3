//! The five φ bands.
//!
//! Band k (k ∈ -2..=2) is centred on φᵏ Hz and spans the geometric-mean
//! interval [φ^(k-½), φ^(k+½)). Weights fall off as φ^-|k| around CORE, so
//! ±1 share weight 1/φ and ±2 share 1/φ².

use serde::Serialize;

use crate::constants::{PHI, PHI_INVERSE, PHI_NEG2, PHI_SQUARED, TAU};
use crate::error::{RaError, Result};

/// A named band on the φ-spaced frequency ladder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhiBand {
    pub index: i32,
    pub name: &'static str,
    pub description: &'static str,
    /// φ^index (Hz)
    pub frequency: f64,
    /// 1 / frequency (s)
    pub period: f64,
    /// 2π · frequency (rad/s)
    pub angular_frequency: f64,
    /// φ^-|index|
    pub weight: f64,
}

impl PhiBand {
    const fn new(
        index: i32,
        name: &'static str,
        description: &'static str,
        frequency: f64,
        weight: f64,
    ) -> Self {
        Self {
            index,
            name,
            description,
            frequency,
            period: 1.0 / frequency,
            angular_frequency: TAU * frequency,
            weight,
        }
    }

    /// Geometric-mean boundaries `(φ^(k-½), φ^(k+½))`.
    ///
    /// The upper bound of band k and the lower bound of band k+1 are both
    /// φ^(k+½), so adjacent ranges meet without gaps.
    pub fn frequency_range(&self) -> (f64, f64) {
        let k = f64::from(self.index);
        (PHI.powf(k - 0.5), PHI.powf(k + 0.5))
    }

    /// Half-open membership test against [`Self::frequency_range`].
    pub fn contains(&self, freq_hz: f64) -> bool {
        let (lower, upper) = self.frequency_range();
        lower <= freq_hz && freq_hz < upper
    }

    /// Exact lookup by band index.
    pub fn from_index(k: i32) -> Result<&'static PhiBand> {
        PHI_BANDS.iter().find(|b| b.index == k).ok_or_else(|| {
            RaError::InvalidArgument(format!("band index must be in -2..=2, got {k}"))
        })
    }

    /// Lookup by band name (`ULTRA`, `SLOW`, ...), ignoring case and
    /// surrounding whitespace.
    pub fn by_name(name: &str) -> Option<&'static PhiBand> {
        PHI_BANDS
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
    }
}

pub const PHI_BAND_ULTRA: PhiBand = PhiBand::new(
    -2,
    "ULTRA",
    "ultra-slow φ⁻² cycle, long-horizon drift",
    PHI_NEG2,
    PHI_NEG2,
);
pub const PHI_BAND_SLOW: PhiBand = PhiBand::new(
    -1,
    "SLOW",
    "slow φ⁻¹ cycle, sustained trends",
    PHI_INVERSE,
    PHI_INVERSE,
);
pub const PHI_BAND_CORE: PhiBand =
    PhiBand::new(0, "CORE", "unit cycle, primary rhythm", 1.0, 1.0);
pub const PHI_BAND_FAST: PhiBand = PhiBand::new(
    1,
    "FAST",
    "fast φ cycle, short-term fluctuation",
    PHI,
    PHI_INVERSE,
);
pub const PHI_BAND_RAPID: PhiBand = PhiBand::new(
    2,
    "RAPID",
    "rapid φ² cycle, transient detail",
    PHI_SQUARED,
    PHI_NEG2,
);

/// All five bands in ascending index order.
pub static PHI_BANDS: [PhiBand; 5] = [
    PHI_BAND_ULTRA,
    PHI_BAND_SLOW,
    PHI_BAND_CORE,
    PHI_BAND_FAST,
    PHI_BAND_RAPID,
];

/// Free-function form of [`PhiBand::frequency_range`].
pub fn band_frequency_range(band: &PhiBand) -> (f64, f64) {
    band.frequency_range()
}

/// Classify a frequency into its φ band, saturating at both ends.
///
/// Anything below ULTRA's lower bound (NaN included) is ULTRA; anything at or
/// above RAPID's upper bound is RAPID.
pub fn frequency_to_band(freq_hz: f64) -> &'static PhiBand {
    let (floor, _) = PHI_BANDS[0].frequency_range();
    if freq_hz.is_nan() || freq_hz < floor {
        return &PHI_BANDS[0];
    }
    PHI_BANDS
        .iter()
        .find(|b| b.contains(freq_hz))
        .unwrap_or(&PHI_BANDS[PHI_BANDS.len() - 1])
}

/// Strict classification: out-of-range or NaN frequencies are an error
/// instead of being clamped to the nearest extreme band.
pub fn try_frequency_to_band(freq_hz: f64) -> Result<&'static PhiBand> {
    PHI_BANDS.iter().find(|b| b.contains(freq_hz)).ok_or_else(|| {
        let (floor, _) = PHI_BANDS[0].frequency_range();
        let (_, ceiling) = PHI_BANDS[PHI_BANDS.len() - 1].frequency_range();
        RaError::InvalidArgument(format!(
            "frequency {freq_hz} Hz outside φ band range [{floor}, {ceiling})"
        ))
    })
}
