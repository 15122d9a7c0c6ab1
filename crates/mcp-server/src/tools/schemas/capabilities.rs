use rmcp::schemars;
use serde::Deserialize;

/// Request for `drift_capabilities`.
#[derive(Debug, Deserialize, schemars::JsonSchema, Default)]
pub struct CapabilitiesRequest {
    /// Pretty-print the JSON text payload.
    #[schemars(description = "Pretty-print the JSON text payload (default: false).")]
    #[serde(default)]
    pub pretty: Option<bool>,
}
