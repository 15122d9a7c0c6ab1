use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RouteRequest {
    /// Task description in plain language
    #[schemars(
        description = "Task description in plain language, e.g. 'refactor the payment module'. Matching is case-insensitive."
    )]
    pub request: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_field_is_required_and_described() {
        let schema = serde_json::to_value(schemars::schema_for!(RouteRequest)).unwrap();
        assert_eq!(schema["required"], serde_json::json!(["request"]));
        let description = schema["properties"]["request"]["description"]
            .as_str()
            .unwrap_or_default();
        assert!(description.contains("case-insensitive"), "{description}");
    }
}
