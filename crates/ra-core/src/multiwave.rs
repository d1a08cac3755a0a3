use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::bands::PHI_BANDS;

/// Weighted phase-aligned coherence across the five φ bands.
///
/// For each band present in both `amplitudes` and `phases` (keyed by band
/// name: `ULTRA`, `SLOW`, `CORE`, `FAST`, `RAPID`), accumulates
/// `weight · amplitude · cos(phase - reference_phase)`. Bands missing from
/// either map contribute nothing, and so does a band whose term is not finite
/// (NaN or infinite amplitude or phase). The sum of the remaining terms is
/// clamped to [0, 1].
pub fn compute_multiwave_coherence<K>(
    amplitudes: &HashMap<K, f64>,
    phases: &HashMap<K, f64>,
    reference_phase: f64,
) -> f64
where
    K: Borrow<str> + Eq + Hash,
{
    let total: f64 = PHI_BANDS
        .iter()
        .filter_map(|band| {
            let amplitude = amplitudes.get(band.name)?;
            let phase = phases.get(band.name)?;
            let term = band.weight * amplitude * (phase - reference_phase).cos();
            term.is_finite().then_some(term)
        })
        .sum();

    if total.is_nan() {
        return 0.0;
    }
    total.clamp(0.0, 1.0)
}
