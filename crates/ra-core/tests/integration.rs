//! Integration tests exercising the public ra-core API across modules:
//! catalog → band classification → coherence aggregation → level.

use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use ra_core::{
    CoherenceLevel, DEFAULT_STABILITY_THRESHOLD, PHI, PHI_BANDS, PhiBand, RaError,
    SCHUMANN_FUNDAMENTAL, compute_multiwave_coherence, constant_by_name, export_json,
    fibonacci_ratio, frequency_to_band, harmonic_of, is_coherence_stable, material_by_name,
    normalize_coherence, octave_of, phi_power,
};

/// A signal whose energy sits entirely in CORE and FAST, in phase, classifies
/// as PEAK once aggregated.
#[test]
fn aligned_core_and_fast_reach_peak() {
    let amplitudes: HashMap<String, f64> =
        [("CORE".to_string(), 0.6), ("FAST".to_string(), 0.5)].into_iter().collect();
    let phases: HashMap<String, f64> =
        [("CORE".to_string(), 0.3), ("FAST".to_string(), 0.3)].into_iter().collect();

    let coherence = compute_multiwave_coherence(&amplitudes, &phases, 0.3);
    assert_abs_diff_eq!(coherence, 0.6 + 0.5 / PHI, epsilon = 1e-12);
    assert_eq!(CoherenceLevel::classify(coherence).unwrap(), CoherenceLevel::Peak);
}

/// Band classification feeds the aggregation: amplitude keyed by the band a
/// frequency falls in.
#[test]
fn classify_then_aggregate() {
    let readings = [(0.4, 0.2), (1.0, 0.3), (2.6, 0.9)];
    let mut amplitudes = HashMap::new();
    let mut phases = HashMap::new();
    for (freq, amp) in readings {
        let band = frequency_to_band(freq);
        amplitudes.insert(band.name, amp);
        phases.insert(band.name, 0.0);
    }
    assert_eq!(amplitudes.len(), 3);
    assert!(amplitudes.contains_key("ULTRA"));
    assert!(amplitudes.contains_key("RAPID"));

    let coherence = compute_multiwave_coherence(&amplitudes, &phases, 0.0);
    let expected: f64 = PHI_BANDS
        .iter()
        .filter_map(|b| amplitudes.get(b.name).map(|a| a * b.weight))
        .sum();
    assert_abs_diff_eq!(coherence, expected.min(1.0), epsilon = 1e-12);
    assert_eq!(
        CoherenceLevel::classify(coherence).unwrap(),
        CoherenceLevel::High
    );
}

/// Raw sensor readings normalized into [0, 1] then checked for stability.
#[test]
fn normalized_series_stability() {
    let raw = [412.0, 415.0, 409.0, 418.0, 411.0];
    let series: Vec<f64> = raw
        .iter()
        .map(|v| normalize_coherence(*v, 0.0, 1000.0).unwrap())
        .collect();
    assert!(series.iter().all(|v| (0.0..=1.0).contains(v)));
    assert!(is_coherence_stable(&series, DEFAULT_STABILITY_THRESHOLD));
    assert_eq!(
        CoherenceLevel::classify(series[0]).unwrap(),
        CoherenceLevel::Medium
    );
}

#[test]
fn schumann_harmonic_classification_saturates_high() {
    let third = harmonic_of(SCHUMANN_FUNDAMENTAL, 3).unwrap();
    assert_eq!(frequency_to_band(third).name, "RAPID");
    // Four octaves down lands the fundamental just inside SLOW.
    let low = octave_of(SCHUMANN_FUNDAMENTAL, -4);
    assert_eq!(frequency_to_band(low).name, "SLOW");
}

#[test]
fn error_kinds() {
    assert!(matches!(
        CoherenceLevel::classify(-0.1),
        Err(RaError::InvalidArgument(_))
    ));
    assert!(matches!(
        CoherenceLevel::classify(1.1),
        Err(RaError::InvalidArgument(_))
    ));
    assert!(matches!(
        normalize_coherence(1.0, 100.0, 0.0),
        Err(RaError::InvalidArgument(_))
    ));
    assert!(matches!(fibonacci_ratio(0), Err(RaError::InvalidArgument(_))));
    assert!(matches!(harmonic_of(1.0, 0), Err(RaError::InvalidArgument(_))));
    assert!(matches!(PhiBand::from_index(5), Err(RaError::InvalidArgument(_))));
    assert!(matches!(material_by_name("adamant"), Err(RaError::NotFound(_))));
    assert!(matches!(constant_by_name("adamant"), Err(RaError::NotFound(_))));
}

#[test]
fn catalog_agrees_with_functions() {
    assert_eq!(constant_by_name("PHI").unwrap().value, phi_power(1));
    assert_abs_diff_eq!(
        constant_by_name("PHI_SQUARED").unwrap().value,
        phi_power(2),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        constant_by_name("PHI_NEG3").unwrap().value,
        phi_power(-3),
        epsilon = 1e-12
    );
    let gold = material_by_name("gold").unwrap();
    assert_eq!(gold, material_by_name("GOLD").unwrap());
}

#[test]
fn export_json_is_valid_and_complete() {
    let json = export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let names: Vec<&str> = value["bands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["ULTRA", "SLOW", "CORE", "FAST", "RAPID"]);
    let materials: Vec<&str> = value["materials"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert!(materials.contains(&"OBSIDIAN"));
}
