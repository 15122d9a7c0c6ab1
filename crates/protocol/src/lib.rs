use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One recommended tool call inside a sequence.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ToolStep {
    pub tool: String,
    pub rationale: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ToolNextAction {
    pub tool: String,
    pub args: serde_json::Value,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub hint: Option<String>,
    #[serde(default)]
    pub next_actions: Vec<ToolNextAction>,
}

/// Result of routing a free-text request.
///
/// `category` is `None` when no keyword matched; in that case `fallback` is set and `steps`
/// holds the default sequence.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct RoutePayload {
    pub request: String,
    pub category: Option<String>,
    pub matched_keyword: Option<String>,
    pub fallback: bool,
    pub steps: Vec<ToolStep>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SequencePayload {
    pub category: String,
    pub steps: Vec<ToolStep>,
}

/// A single branch of the agent decision tree.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct DecisionNode {
    /// Category tag, or `null` for the default branch.
    pub category: Option<String>,
    pub question: String,
    pub keywords: Vec<String>,
    pub steps: Vec<ToolStep>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurgicalLookup {
    pub question: String,
    pub tool: String,
    pub example_args: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct CommonMistake {
    pub mistake: String,
    pub correction: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgentNavigationGuide {
    pub decision_tree: Vec<DecisionNode>,
    pub surgical_lookups: Vec<SurgicalLookup>,
    pub common_mistakes: Vec<CommonMistake>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct LayerInfo {
    pub name: String,
    pub purpose: String,
    pub tools: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct QuickStart {
    pub steps: Vec<String>,
}

/// Payload of `drift_capabilities`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub summary: String,
    pub agent_navigation_guide: AgentNavigationGuide,
    pub layers: Vec<LayerInfo>,
    pub quick_start: QuickStart,
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}

pub fn serialize_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn capabilities_use_camel_case_field_names() {
        let caps = Capabilities {
            summary: "s".to_string(),
            agent_navigation_guide: AgentNavigationGuide {
                decision_tree: Vec::new(),
                surgical_lookups: vec![SurgicalLookup {
                    question: "q".to_string(),
                    tool: "drift_status".to_string(),
                    example_args: json!({}),
                }],
                common_mistakes: Vec::new(),
            },
            layers: Vec::new(),
            quick_start: QuickStart {
                steps: vec!["one".to_string()],
            },
        };

        let value = serde_json::to_value(&caps).unwrap();
        assert_eq!(
            value,
            json!({
                "summary": "s",
                "agentNavigationGuide": {
                    "decisionTree": [],
                    "surgicalLookups": [
                        { "question": "q", "tool": "drift_status", "exampleArgs": {} }
                    ],
                    "commonMistakes": []
                },
                "layers": [],
                "quickStart": { "steps": ["one"] }
            })
        );
    }

    #[test]
    fn route_payload_keeps_null_category_for_fallback() {
        let payload = RoutePayload {
            request: "what time is it".to_string(),
            category: None,
            matched_keyword: None,
            fallback: true,
            steps: vec![ToolStep {
                tool: "drift_status".to_string(),
                rationale: "r".to_string(),
            }],
        };
        let raw = serialize_json(&payload).unwrap();
        assert!(raw.contains("\"category\":null"), "{raw}");
        assert!(raw.contains("\"fallback\":true"), "{raw}");
    }
}
