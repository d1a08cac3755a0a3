//! Harmonic resonance constants and classifiers.
//!
//! A fixed catalog of golden-ratio powers, Schumann modes, pitch standards
//! and material resonances, plus classification over two scales: frequency
//! (five φ-spaced bands centred on φ⁻²..φ²) and coherence (five levels over
//! [0, 1]). Multi-band coherence combines per-band amplitude and phase using
//! the φ band weights.
//!
//! Zero I/O. Every table is immutable and every function is pure.

pub mod bands;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod frequencies;
pub mod material;
pub mod multiwave;
pub mod phi;
pub mod thresholds;

pub use bands::{
    PHI_BAND_CORE, PHI_BAND_FAST, PHI_BAND_RAPID, PHI_BAND_SLOW, PHI_BAND_ULTRA, PHI_BANDS,
    PhiBand, band_frequency_range, frequency_to_band, try_frequency_to_band,
};
pub use catalog::{CATALOG_VERSION, CONSTANTS, NamedConstant, constant_by_name, export_json};
pub use constants::{
    E, EPSILON, PHI, PHI_INVERSE, PHI_NEG1, PHI_NEG2, PHI_NEG3, PHI_NEG4, PHI_SQUARED, PI,
    SQRT_2, SQRT_3, SQRT_5, TAU,
};
pub use error::{RaError, Result};
pub use frequencies::{
    A432, A440, SCHUMANN_2ND, SCHUMANN_3RD, SCHUMANN_4TH, SCHUMANN_5TH, SCHUMANN_FUNDAMENTAL,
    SCHUMANN_HARMONICS, SOLFEGGIO_FA, SOLFEGGIO_FREQUENCIES, SOLFEGGIO_LA, SOLFEGGIO_MI,
    SOLFEGGIO_RE, SOLFEGGIO_SOL, SOLFEGGIO_UT, cents_difference, harmonic_of, octave_of,
};
pub use material::{MATERIALS, MaterialEntry, material_by_name};
pub use multiwave::compute_multiwave_coherence;
pub use phi::{DEFAULT_PHI_TOLERANCE, fibonacci_ratio, is_phi_ratio, phi_power};
pub use thresholds::{
    CoherenceBand, CoherenceLevel, DEFAULT_STABILITY_THRESHOLD, HIGH_COHERENCE, LOW_COHERENCE,
    MEDIUM_COHERENCE, MINIMUM_COHERENCE, coherence_delta, is_coherence_stable,
    normalize_coherence,
};
