use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SequenceRequest {
    /// Category tag
    #[schemars(
        description = "Category tag such as 'refactor' or 'security-review' (case-insensitive; '_' is accepted for '-')."
    )]
    pub category: String,
}
