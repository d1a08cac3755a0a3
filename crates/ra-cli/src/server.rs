use std::collections::HashMap;

use ra_core::{
    CONSTANTS, CoherenceLevel, RaError, compute_multiwave_coherence, frequency_to_band,
    is_coherence_stable, material_by_name, try_frequency_to_band,
};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::config::Settings;
use crate::report;

/// Stateless MCP front end over the ra-core classifiers.
#[derive(Clone)]
pub struct RaServer {
    settings: Settings,
    tool_router: ToolRouter<Self>,
}

impl RaServer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            tool_router: Self::tool_router(),
        }
    }
}

fn invalid_params(e: RaError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct FrequencyRequest {
    /// Frequency in Hz
    frequency_hz: f64,
    /// Reject frequencies outside the five bands instead of clamping to
    /// ULTRA or RAPID
    strict: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CoherenceRequest {
    /// Coherence value in [0, 1]
    value: f64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct MultiwaveRequest {
    /// Amplitude per band name (ULTRA, SLOW, CORE, FAST, RAPID)
    amplitudes: HashMap<String, f64>,
    /// Phase in radians per band name
    phases: HashMap<String, f64>,
    /// Reference phase in radians; defaults to the configured value
    reference_phase: Option<f64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct MaterialRequest {
    /// Material name, case-insensitive (e.g. "quartz", "GOLD")
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct StabilityRequest {
    /// Series of coherence measurements
    values: Vec<f64>,
    /// Maximum standard deviation; defaults to the configured value
    threshold: Option<f64>,
}

#[tool_router]
impl RaServer {
    #[tool(
        description = "Classify a frequency (Hz) into one of the five golden-ratio bands ULTRA, SLOW, CORE, FAST, RAPID. Band k is centred on φ^k Hz. Out-of-range frequencies saturate to ULTRA or RAPID unless strict is set."
    )]
    async fn ra_classify_frequency(
        &self,
        Parameters(req): Parameters<FrequencyRequest>,
    ) -> Result<CallToolResult, McpError> {
        let band = if req.strict.unwrap_or(false) {
            try_frequency_to_band(req.frequency_hz).map_err(invalid_params)?
        } else {
            frequency_to_band(req.frequency_hz)
        };
        tracing::debug!(frequency = req.frequency_hz, band = band.name, "ra_classify_frequency");
        json_result(&report::classification_json(req.frequency_hz, band))
    }

    #[tool(
        description = "Classify a coherence value in [0, 1] as MINIMAL, LOW, MEDIUM, HIGH or PEAK. Values outside [0, 1] are rejected."
    )]
    async fn ra_classify_coherence(
        &self,
        Parameters(req): Parameters<CoherenceRequest>,
    ) -> Result<CallToolResult, McpError> {
        let level = CoherenceLevel::classify(req.value).map_err(invalid_params)?;
        tracing::debug!(value = req.value, %level, "ra_classify_coherence");
        json_result(&report::level_json(req.value, level))
    }

    #[tool(
        description = "Combine per-band amplitudes and phases into one coherence score in [0, 1], weighting bands by φ^-|k|. Bands missing from either map are skipped."
    )]
    async fn ra_multiwave_coherence(
        &self,
        Parameters(req): Parameters<MultiwaveRequest>,
    ) -> Result<CallToolResult, McpError> {
        let amplitudes = report::canonical_band_map(req.amplitudes).map_err(invalid_params)?;
        let phases = report::canonical_band_map(req.phases).map_err(invalid_params)?;
        let reference_phase = req.reference_phase.unwrap_or(self.settings.reference_phase);

        let coherence = compute_multiwave_coherence(&amplitudes, &phases, reference_phase);
        let level = CoherenceLevel::classify(coherence).map_err(invalid_params)?;
        tracing::debug!(coherence, %level, "ra_multiwave_coherence");
        json_result(&report::multiwave_json(
            coherence,
            level,
            &amplitudes,
            &phases,
            reference_phase,
        ))
    }

    #[tool(
        description = "Look up a material's resonance frequency, alpha affinity and conductivity by name (case-insensitive)."
    )]
    async fn ra_material(
        &self,
        Parameters(req): Parameters<MaterialRequest>,
    ) -> Result<CallToolResult, McpError> {
        let material = material_by_name(&req.name).map_err(invalid_params)?;
        json_result(&report::material_json(material))
    }

    #[tool(description = "List every named constant with its value, unit and description.")]
    async fn ra_constants(&self) -> Result<CallToolResult, McpError> {
        json_result(&report::constants_json(CONSTANTS))
    }

    #[tool(
        description = "Check whether a series of coherence measurements is stable: population standard deviation at or below the threshold. Fewer than two samples are always stable."
    )]
    async fn ra_coherence_stability(
        &self,
        Parameters(req): Parameters<StabilityRequest>,
    ) -> Result<CallToolResult, McpError> {
        let threshold = req.threshold.unwrap_or(self.settings.stability_threshold);
        let stable = is_coherence_stable(&req.values, threshold);
        json_result(&report::stability_json(&req.values, threshold, stable))
    }
}

#[tool_handler]
impl ServerHandler for RaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Golden-ratio band and coherence classification.\n\n\
                 - ra_classify_frequency: frequency (Hz) → φ band\n\
                 - ra_classify_coherence: value in [0, 1] → coherence level\n\
                 - ra_multiwave_coherence: per-band amplitude/phase maps → weighted coherence\n\
                 - ra_coherence_stability: series → stable or not\n\
                 - ra_material, ra_constants: catalog lookups\n\n\
                 All tools are pure and stateless."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
