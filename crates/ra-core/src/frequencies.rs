//! Reference frequencies: Schumann resonances, concert pitch standards and
//! the Solfeggio scale, plus octave/harmonic/cents helpers.

use crate::error::{RaError, Result};

/// Schumann resonance fundamental (Hz)
pub const SCHUMANN_FUNDAMENTAL: f64 = 7.83;
pub const SCHUMANN_2ND: f64 = 14.3;
pub const SCHUMANN_3RD: f64 = 20.8;
pub const SCHUMANN_4TH: f64 = 27.3;
pub const SCHUMANN_5TH: f64 = 33.8;

/// First five Schumann modes, fundamental first.
pub const SCHUMANN_HARMONICS: [f64; 5] = [
    SCHUMANN_FUNDAMENTAL,
    SCHUMANN_2ND,
    SCHUMANN_3RD,
    SCHUMANN_4TH,
    SCHUMANN_5TH,
];

/// Concert A at 432 Hz (Verdi tuning)
pub const A432: f64 = 432.0;

/// Concert A at 440 Hz (ISO 16)
pub const A440: f64 = 440.0;

pub const SOLFEGGIO_UT: f64 = 396.0;
pub const SOLFEGGIO_RE: f64 = 417.0;
pub const SOLFEGGIO_MI: f64 = 528.0;
pub const SOLFEGGIO_FA: f64 = 639.0;
pub const SOLFEGGIO_SOL: f64 = 741.0;
pub const SOLFEGGIO_LA: f64 = 852.0;

/// Solfeggio scale in ascending order, UT through LA.
pub const SOLFEGGIO_FREQUENCIES: [f64; 6] = [
    SOLFEGGIO_UT,
    SOLFEGGIO_RE,
    SOLFEGGIO_MI,
    SOLFEGGIO_FA,
    SOLFEGGIO_SOL,
    SOLFEGGIO_LA,
];

/// Shift `frequency` by whole octaves. Negative `octaves` shifts down.
pub fn octave_of(frequency: f64, octaves: i32) -> f64 {
    frequency * 2.0_f64.powi(octaves)
}

/// The nth harmonic of `frequency` (1 = fundamental).
pub fn harmonic_of(frequency: f64, harmonic: u32) -> Result<f64> {
    if harmonic < 1 {
        return Err(RaError::InvalidArgument(format!(
            "harmonic number must be >= 1, got {harmonic}"
        )));
    }
    Ok(frequency * f64::from(harmonic))
}

/// Interval from `freq1` to `freq2` in cents (1200 per octave).
pub fn cents_difference(freq1: f64, freq2: f64) -> f64 {
    1200.0 * (freq2 / freq1).log2()
}
