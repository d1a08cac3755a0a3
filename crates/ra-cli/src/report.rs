//! JSON shapes shared by the command-line output and the MCP tools.

use std::collections::HashMap;

use ra_core::{CoherenceLevel, MaterialEntry, NamedConstant, PhiBand, RaError};
use serde_json::{Value, json};

pub fn band_json(band: &PhiBand) -> Value {
    let (lower, upper) = band.frequency_range();
    json!({
        "index": band.index,
        "name": band.name,
        "description": band.description,
        "frequency": band.frequency,
        "period": band.period,
        "angular_frequency": band.angular_frequency,
        "weight": band.weight,
        "range": [lower, upper],
    })
}

pub fn classification_json(frequency_hz: f64, band: &PhiBand) -> Value {
    json!({
        "frequency_hz": frequency_hz,
        "band": band_json(band),
    })
}

pub fn level_json(value: f64, level: CoherenceLevel) -> Value {
    json!({
        "value": value,
        "level": level,
        "name": level.name(),
        "lower": level.lower(),
        "upper": level.upper(),
    })
}

pub fn material_json(material: &MaterialEntry) -> Value {
    json!(material)
}

pub fn constants_json(constants: &[NamedConstant]) -> Value {
    json!(constants)
}

pub fn multiwave_json(
    coherence: f64,
    level: CoherenceLevel,
    amplitudes: &HashMap<String, f64>,
    phases: &HashMap<String, f64>,
    reference_phase: f64,
) -> Value {
    let bands_used: Vec<&str> = ra_core::PHI_BANDS
        .iter()
        .map(|b| b.name)
        .filter(|name| amplitudes.contains_key(*name) && phases.contains_key(*name))
        .collect();
    json!({
        "coherence": coherence,
        "level": level,
        "reference_phase": reference_phase,
        "bands_used": bands_used,
    })
}

pub fn stability_json(values: &[f64], threshold: f64, stable: bool) -> Value {
    json!({
        "samples": values.len(),
        "threshold": threshold,
        "stable": stable,
    })
}

/// Band names in the multiwave maps are matched exactly; fold user input to
/// the canonical upper-case form and report anything that is not a band.
/// Two entries that fold to the same name (`core` and `CORE`) are rejected.
pub fn canonical_band_map(
    entries: impl IntoIterator<Item = (String, f64)>,
) -> ra_core::Result<HashMap<String, f64>> {
    let mut map = HashMap::new();
    for (name, value) in entries {
        let key = name.trim().to_ascii_uppercase();
        if PhiBand::by_name(&key).is_none() {
            tracing::warn!("'{name}' is not a φ band name, it will be ignored");
        }
        if map.insert(key.clone(), value).is_some() {
            return Err(RaError::InvalidArgument(format!(
                "band '{key}' given more than once"
            )));
        }
    }
    Ok(map)
}
