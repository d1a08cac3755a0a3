mod config;
mod report;
mod server;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ra_core::{
    CONSTANTS, CoherenceLevel, PHI_BANDS, compute_multiwave_coherence, export_json,
    frequency_to_band, is_coherence_stable, is_phi_ratio, material_by_name, normalize_coherence,
};
use rmcp::{ServiceExt, transport::stdio};
use serde_json::json;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "ra", about = "Golden-ratio band and coherence classifier CLI and MCP server")]
struct Cli {
    /// Settings file (TOML). Falls back to $RA_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server on stdio transport
    Serve,

    /// List every named constant
    Constants,

    /// List the five φ bands
    Bands,

    /// Classify a frequency into its φ band
    Band {
        /// Frequency in Hz
        #[arg(allow_negative_numbers = true)]
        frequency: f64,
    },

    /// Classify a coherence value in [0, 1]
    Classify {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Rescale a value from [min, max] into [0, 1]
    Normalize {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },

    /// Check whether a coherence series is stable
    Stable {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Maximum standard deviation (overrides settings)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Check whether two values are in golden ratio
    PhiRatio {
        a: f64,
        b: f64,

        /// Allowed deviation from φ (overrides settings)
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Look up a material by name (case-insensitive)
    Material { name: String },

    /// Weighted multi-band coherence from per-band amplitude and phase
    Coherence {
        /// BAND=amplitude, repeatable
        #[arg(long = "amplitude", value_parser = parse_band_value)]
        amplitudes: Vec<(String, f64)>,

        /// BAND=phase in radians, repeatable
        #[arg(long = "phase", value_parser = parse_band_value)]
        phases: Vec<(String, f64)>,

        /// Reference phase in radians (overrides settings)
        #[arg(long, allow_negative_numbers = true)]
        reference_phase: Option<f64>,
    },

    /// Write the full catalog as JSON
    Export {
        /// Output file path
        path: PathBuf,
    },
}

fn parse_band_value(s: &str) -> std::result::Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected BAND=value, got '{s}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;
    Ok((name.to_string(), value))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to serialize output")?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let settings = Settings::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Serve => cmd_serve(settings).await,
        Commands::Constants => cmd_constants(&cli),
        Commands::Bands => cmd_bands(&cli),
        Commands::Band { frequency } => cmd_band(&cli, *frequency),
        Commands::Classify { value } => cmd_classify(&cli, *value),
        Commands::Normalize { value, min, max } => cmd_normalize(&cli, *value, *min, *max),
        Commands::Stable { values, threshold } => {
            cmd_stable(&cli, values, threshold.unwrap_or(settings.stability_threshold))
        }
        Commands::PhiRatio { a, b, tolerance } => {
            cmd_phi_ratio(&cli, *a, *b, tolerance.unwrap_or(settings.phi_tolerance))
        }
        Commands::Material { name } => cmd_material(&cli, name),
        Commands::Coherence {
            amplitudes,
            phases,
            reference_phase,
        } => cmd_coherence(
            &cli,
            amplitudes,
            phases,
            reference_phase.unwrap_or(settings.reference_phase),
        ),
        Commands::Export { path } => cmd_export(path),
    }
}

async fn cmd_serve(settings: Settings) -> Result<()> {
    tracing::info!(?settings, "starting MCP server");
    let server = server::RaServer::new(settings);
    // On stdio, a failed handshake means the client hung up before initialize.
    let service = match server.serve(stdio()).await {
        Ok(service) => service,
        Err(e) => {
            tracing::warn!("MCP session closed before initialization: {e}");
            return Ok(());
        }
    };
    service.waiting().await?;
    tracing::info!("MCP server stopped");
    Ok(())
}

fn cmd_constants(cli: &Cli) -> Result<()> {
    if cli.json {
        return print_json(&report::constants_json(CONSTANTS));
    }
    for c in CONSTANTS {
        let unit = if c.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", c.unit)
        };
        println!("{:<22} {:<22}{unit}  {}", c.name, c.value, c.description);
    }
    Ok(())
}

fn cmd_bands(cli: &Cli) -> Result<()> {
    if cli.json {
        let bands: Vec<_> = PHI_BANDS.iter().map(report::band_json).collect();
        return print_json(&json!(bands));
    }
    for band in &PHI_BANDS {
        let (lower, upper) = band.frequency_range();
        println!(
            "{:<6} k={:>2}  f={:.6} Hz  range=[{lower:.6}, {upper:.6})  weight={:.6}",
            band.name, band.index, band.frequency, band.weight
        );
    }
    Ok(())
}

fn cmd_band(cli: &Cli, frequency: f64) -> Result<()> {
    let band = frequency_to_band(frequency);
    tracing::debug!(frequency, band = band.name, "classified frequency");
    if cli.json {
        return print_json(&report::classification_json(frequency, band));
    }
    println!("{} ({})", band.name, band.description);
    Ok(())
}

fn cmd_classify(cli: &Cli, value: f64) -> Result<()> {
    let level = CoherenceLevel::classify(value)?;
    tracing::debug!(value, %level, "classified coherence");
    if cli.json {
        return print_json(&report::level_json(value, level));
    }
    println!("{level}");
    Ok(())
}

fn cmd_normalize(cli: &Cli, value: f64, min: f64, max: f64) -> Result<()> {
    let normalized = normalize_coherence(value, min, max)?;
    if cli.json {
        return print_json(&json!({ "value": value, "normalized": normalized }));
    }
    println!("{normalized}");
    Ok(())
}

fn cmd_stable(cli: &Cli, values: &[f64], threshold: f64) -> Result<()> {
    let stable = is_coherence_stable(values, threshold);
    if cli.json {
        return print_json(&report::stability_json(values, threshold, stable));
    }
    println!("{}", if stable { "stable" } else { "unstable" });
    Ok(())
}

fn cmd_phi_ratio(cli: &Cli, a: f64, b: f64, tolerance: f64) -> Result<()> {
    let matches = is_phi_ratio(a, b, tolerance);
    if cli.json {
        return print_json(&json!({ "a": a, "b": b, "tolerance": tolerance, "phi_ratio": matches }));
    }
    println!("{matches}");
    Ok(())
}

fn cmd_material(cli: &Cli, name: &str) -> Result<()> {
    let material = material_by_name(name)?;
    if cli.json {
        return print_json(&report::material_json(material));
    }
    println!("material:       {}", material.name);
    println!("frequency:      {} Hz", material.frequency);
    println!("alpha_affinity: {}", material.alpha_affinity);
    println!("conductivity:   {}", material.conductivity);
    Ok(())
}

fn cmd_coherence(
    cli: &Cli,
    amplitudes: &[(String, f64)],
    phases: &[(String, f64)],
    reference_phase: f64,
) -> Result<()> {
    let amplitudes = report::canonical_band_map(amplitudes.iter().cloned())?;
    let phases = report::canonical_band_map(phases.iter().cloned())?;
    let coherence = compute_multiwave_coherence(&amplitudes, &phases, reference_phase);
    let level = CoherenceLevel::classify(coherence)?;
    tracing::debug!(coherence, %level, reference_phase, "multiwave coherence");

    if cli.json {
        return print_json(&report::multiwave_json(
            coherence,
            level,
            &amplitudes,
            &phases,
            reference_phase,
        ));
    }
    println!("coherence: {coherence:.6}");
    println!("level:     {level}");
    Ok(())
}

fn cmd_export(path: &Path) -> Result<()> {
    let json = export_json().context("failed to serialize catalog")?;
    std::fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;
    println!("exported to {}", path.display());
    Ok(())
}
