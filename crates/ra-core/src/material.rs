use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{RaError, Result};

/// Resonance properties of a physical material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MaterialEntry {
    pub name: &'static str,
    /// Base resonance frequency (Hz)
    pub frequency: f64,
    /// Coherence affinity in [0, 1]
    pub alpha_affinity: f64,
    /// Electrical conductivity factor in [0, 1]
    pub conductivity: f64,
}

impl MaterialEntry {
    const fn new(
        name: &'static str,
        frequency: f64,
        alpha_affinity: f64,
        conductivity: f64,
    ) -> Self {
        Self {
            name,
            frequency,
            alpha_affinity,
            conductivity,
        }
    }
}

/// The fixed material table, highest frequency first.
pub static MATERIALS: [MaterialEntry; 8] = [
    MaterialEntry::new("QUARTZ", 32768.0, 0.9, 0.3),
    MaterialEntry::new("GOLD", 24576.0, 0.95, 0.95),
    MaterialEntry::new("SILVER", 20480.0, 0.85, 0.9),
    MaterialEntry::new("COPPER", 16384.0, 0.8, 0.85),
    MaterialEntry::new("IRON", 12288.0, 0.6, 0.5),
    MaterialEntry::new("OBSIDIAN", 8192.0, 0.7, 0.1),
    MaterialEntry::new("GRANITE", 4096.0, 0.5, 0.05),
    MaterialEntry::new("LIMESTONE", 2048.0, 0.4, 0.02),
];

static MATERIAL_INDEX: OnceLock<HashMap<&'static str, &'static MaterialEntry>> = OnceLock::new();

fn material_index() -> &'static HashMap<&'static str, &'static MaterialEntry> {
    MATERIAL_INDEX.get_or_init(|| MATERIALS.iter().map(|m| (m.name, m)).collect())
}

/// Lookup into [`MATERIALS`], ignoring case and surrounding whitespace
/// (`" gold "` resolves to GOLD).
pub fn material_by_name(name: &str) -> Result<&'static MaterialEntry> {
    let key = name.trim().to_ascii_uppercase();
    material_index()
        .get(key.as_str())
        .copied()
        .ok_or_else(|| RaError::NotFound(format!("material '{name}'")))
}
