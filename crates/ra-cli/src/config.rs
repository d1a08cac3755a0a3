//! Optional TOML settings for the `ra` binary.
//!
//! Resolution order: `--config <path>`, then `$RA_CONFIG`, then defaults.
//! Command-line flags override whatever the file provides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ra_core::{DEFAULT_PHI_TOLERANCE, DEFAULT_STABILITY_THRESHOLD};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "RA_CONFIG";

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Maximum standard deviation for a coherence series to count as stable.
    pub stability_threshold: f64,
    /// Allowed deviation from φ when testing a ratio.
    pub phi_tolerance: f64,
    /// Reference phase (radians) for multi-band coherence.
    pub reference_phase: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stability_threshold: DEFAULT_STABILITY_THRESHOLD,
            phi_tolerance: DEFAULT_PHI_TOLERANCE,
            reference_phase: 0.0,
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).context("invalid settings TOML")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from an explicit path or `$RA_CONFIG`; defaults when neither is set.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let Some(path) = path else {
            tracing::debug!("no settings file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        let settings = Self::from_toml(&content)
            .with_context(|| format!("failed to load settings {}", path.display()))?;
        tracing::debug!(?settings, path = %path.display(), "loaded settings");
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("stability_threshold", self.stability_threshold),
            ("phi_tolerance", self.phi_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{key} must be a finite non-negative number, got {value}");
            }
        }
        if !self.reference_phase.is_finite() {
            bail!("reference_phase must be finite, got {}", self.reference_phase);
        }
        Ok(())
    }
}
