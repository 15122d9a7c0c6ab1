use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupRequest {
    /// Single-fact question
    #[schemars(description = "Single-fact question, e.g. 'who calls this function?'.")]
    pub question: String,
}
