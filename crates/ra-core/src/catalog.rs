//! Enumerable view over every named scalar, and the JSON snapshot of the
//! whole catalog.
//!
//! The snapshot uses snake_case field names. Bands carry their computed
//! `range` as `[lower, upper]`; coherence levels carry `[lower, upper)`
//! bounds with PEAK's stored upper bound of 1.01.

use serde::Serialize;

use crate::bands::{PHI_BANDS, PhiBand};
use crate::constants::*;
use crate::error::{RaError, Result};
use crate::frequencies::*;
use crate::material::{MATERIALS, MaterialEntry};
use crate::thresholds::{
    CoherenceBand, CoherenceLevel, HIGH_COHERENCE, LOW_COHERENCE, MEDIUM_COHERENCE,
    MINIMUM_COHERENCE,
};

pub const CATALOG_VERSION: &str = "0.2.0";

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NamedConstant {
    pub name: &'static str,
    pub value: f64,
    /// Unit symbol, empty for dimensionless values.
    pub unit: &'static str,
    pub description: &'static str,
}

const fn named(
    name: &'static str,
    value: f64,
    unit: &'static str,
    description: &'static str,
) -> NamedConstant {
    NamedConstant {
        name,
        value,
        unit,
        description,
    }
}

pub static CONSTANTS: &[NamedConstant] = &[
    named("PHI", PHI, "", "golden ratio (1 + √5) / 2"),
    named("PHI_INVERSE", PHI_INVERSE, "", "1/φ = φ - 1"),
    named("PHI_SQUARED", PHI_SQUARED, "", "φ² = φ + 1"),
    named("PHI_NEG1", PHI_NEG1, "", "φ⁻¹"),
    named("PHI_NEG2", PHI_NEG2, "", "φ⁻²"),
    named("PHI_NEG3", PHI_NEG3, "", "φ⁻³"),
    named("PHI_NEG4", PHI_NEG4, "", "φ⁻⁴"),
    named("SQRT_2", SQRT_2, "", "√2"),
    named("SQRT_3", SQRT_3, "", "√3"),
    named("SQRT_5", SQRT_5, "", "√5"),
    named("PI", PI, "", "π"),
    named("TAU", TAU, "", "τ = 2π"),
    named("E", E, "", "Euler's number"),
    named("SCHUMANN_FUNDAMENTAL", SCHUMANN_FUNDAMENTAL, "Hz", "Schumann resonance, 1st mode"),
    named("SCHUMANN_2ND", SCHUMANN_2ND, "Hz", "Schumann resonance, 2nd mode"),
    named("SCHUMANN_3RD", SCHUMANN_3RD, "Hz", "Schumann resonance, 3rd mode"),
    named("SCHUMANN_4TH", SCHUMANN_4TH, "Hz", "Schumann resonance, 4th mode"),
    named("SCHUMANN_5TH", SCHUMANN_5TH, "Hz", "Schumann resonance, 5th mode"),
    named("A432", A432, "Hz", "concert A, Verdi tuning"),
    named("A440", A440, "Hz", "concert A, ISO 16"),
    named("SOLFEGGIO_UT", SOLFEGGIO_UT, "Hz", "Solfeggio UT"),
    named("SOLFEGGIO_RE", SOLFEGGIO_RE, "Hz", "Solfeggio RE"),
    named("SOLFEGGIO_MI", SOLFEGGIO_MI, "Hz", "Solfeggio MI"),
    named("SOLFEGGIO_FA", SOLFEGGIO_FA, "Hz", "Solfeggio FA"),
    named("SOLFEGGIO_SOL", SOLFEGGIO_SOL, "Hz", "Solfeggio SOL"),
    named("SOLFEGGIO_LA", SOLFEGGIO_LA, "Hz", "Solfeggio LA"),
    named("HIGH_COHERENCE", HIGH_COHERENCE, "", "PEAK threshold"),
    named("MEDIUM_COHERENCE", MEDIUM_COHERENCE, "", "HIGH threshold"),
    named("LOW_COHERENCE", LOW_COHERENCE, "", "MEDIUM threshold"),
    named("MINIMUM_COHERENCE", MINIMUM_COHERENCE, "", "LOW threshold"),
    named("EPSILON", EPSILON, "", "near-zero comparison tolerance"),
];

/// Case-insensitive lookup of a named constant.
pub fn constant_by_name(name: &str) -> Result<&'static NamedConstant> {
    let name = name.trim();
    CONSTANTS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| RaError::NotFound(format!("constant '{name}'")))
}

#[derive(Serialize, Debug)]
pub struct CatalogSnapshot {
    pub version: &'static str,
    pub constants: &'static [NamedConstant],
    pub bands: Vec<BandSnapshot>,
    pub coherence_levels: Vec<LevelSnapshot>,
    pub materials: &'static [MaterialEntry],
}

#[derive(Serialize, Debug)]
pub struct BandSnapshot {
    #[serde(flatten)]
    pub band: PhiBand,
    pub range: [f64; 2],
}

#[derive(Serialize, Debug)]
pub struct LevelSnapshot {
    pub level: CoherenceLevel,
    #[serde(flatten)]
    pub band: CoherenceBand,
}

/// Build the full catalog snapshot.
pub fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        version: CATALOG_VERSION,
        constants: CONSTANTS,
        bands: PHI_BANDS
            .iter()
            .map(|band| {
                let (lower, upper) = band.frequency_range();
                BandSnapshot {
                    band: *band,
                    range: [lower, upper],
                }
            })
            .collect(),
        coherence_levels: CoherenceLevel::ALL
            .into_iter()
            .map(|level| LevelSnapshot {
                level,
                band: level.band(),
            })
            .collect(),
        materials: &MATERIALS,
    }
}

/// Serialize [`snapshot`] as pretty JSON.
pub fn export_json() -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_unique() {
        let mut names: Vec<&str> = CONSTANTS.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CONSTANTS.len());
    }

    #[test]
    fn test_constant_by_name() {
        assert_eq!(constant_by_name("phi").unwrap().value, PHI);
        assert_eq!(constant_by_name("SCHUMANN_FUNDAMENTAL").unwrap().unit, "Hz");
        assert!(matches!(constant_by_name("planck"), Err(RaError::NotFound(_))));
    }

    #[test]
    fn test_export_json_shape() {
        let json = export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], CATALOG_VERSION);
        assert_eq!(value["constants"].as_array().unwrap().len(), CONSTANTS.len());
        assert_eq!(value["materials"].as_array().unwrap().len(), 8);

        let bands = value["bands"].as_array().unwrap();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[2]["name"], "CORE");
        assert_eq!(bands[2]["weight"], 1.0);
        assert_eq!(bands[2]["range"].as_array().unwrap().len(), 2);

        let levels = value["coherence_levels"].as_array().unwrap();
        assert_eq!(levels[0]["level"], "MINIMAL");
        assert_eq!(levels[4]["level"], "PEAK");
        assert!(levels[4]["upper"].as_f64().unwrap() > 1.0);
    }
}
