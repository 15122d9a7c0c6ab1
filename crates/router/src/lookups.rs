use drift_protocol::SurgicalLookup;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Surgical Q&A entry: a single-fact question answered by exactly one tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupEntry {
    pub question: &'static str,
    pub triggers: &'static [&'static str],
    pub tool: &'static str,
    pub example_args: Value,
}

impl LookupEntry {
    #[must_use]
    pub fn to_protocol(&self) -> SurgicalLookup {
        SurgicalLookup {
            question: self.question.to_string(),
            tool: self.tool.to_string(),
            example_args: self.example_args.clone(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|trigger| lowered.contains(trigger))
    }
}

static LOOKUPS: Lazy<Vec<LookupEntry>> = Lazy::new(|| {
    vec![
        LookupEntry {
            question: "Who calls this function?",
            triggers: &["who calls", "what calls", "callers of"],
            tool: "drift_callers",
            example_args: json!({ "function": "processPayment" }),
        },
        LookupEntry {
            question: "What is the signature of this function?",
            triggers: &["signature"],
            tool: "drift_signature",
            example_args: json!({ "symbol": "createUser" }),
        },
        LookupEntry {
            question: "What is the shape of this type?",
            triggers: &["what type", "type of", "shape of", "interface for"],
            tool: "drift_type",
            example_args: json!({ "type": "UserDTO" }),
        },
        LookupEntry {
            question: "What does this file import?",
            triggers: &["imports", "imported", "does this file import"],
            tool: "drift_imports",
            example_args: json!({ "file": "src/api/users.ts" }),
        },
        LookupEntry {
            question: "What breaks if I change this?",
            triggers: &["what breaks", "blast radius", "impact of"],
            tool: "drift_impact_analysis",
            example_args: json!({ "target": "src/auth/session.ts" }),
        },
        LookupEntry {
            question: "Which tests cover this file?",
            triggers: &["which tests", "tests cover", "test coverage", "covered by"],
            tool: "drift_test_topology",
            example_args: json!({ "action": "affected", "files": ["src/api/users.ts"] }),
        },
        LookupEntry {
            question: "Which environment variables does the code read?",
            triggers: &["env var", "environment variable", ".env"],
            tool: "drift_env",
            example_args: json!({ "action": "list" }),
        },
        LookupEntry {
            question: "Can this data reach the database?",
            triggers: &["can this data reach", "can reach", "reachable", "end up in"],
            tool: "drift_reachability",
            example_args: json!({
                "direction": "forward",
                "location": "src/api/users.ts:42",
                "target": "database"
            }),
        },
        LookupEntry {
            question: "Is there existing code that already does this?",
            triggers: &["existing code", "already exist", "similar"],
            tool: "drift_similar",
            example_args: json!({
                "intent": "api_endpoint",
                "description": "paginated list of orders"
            }),
        },
        LookupEntry {
            question: "Which patterns apply to this file?",
            triggers: &["patterns in", "patterns apply", "patterns for"],
            tool: "drift_file_patterns",
            example_args: json!({ "file": "src/api/users.ts" }),
        },
        LookupEntry {
            question: "Show me an example of how we do this.",
            triggers: &["example of", "examples of", "show me how"],
            tool: "drift_code_examples",
            example_args: json!({ "category": "api", "limit": 3 }),
        },
        LookupEntry {
            question: "What can drift do?",
            triggers: &["what can", "capabilities", "which tools"],
            tool: "drift_capabilities",
            example_args: json!({}),
        },
        LookupEntry {
            question: "Is the project index ready?",
            triggers: &["index", "status", "health"],
            tool: "drift_status",
            example_args: json!({}),
        },
    ]
});

#[must_use]
pub fn lookups() -> &'static [LookupEntry] {
    &LOOKUPS
}

/// First surgical entry whose trigger phrase occurs in `question` (case-insensitive).
#[must_use]
pub fn lookup(question: &str) -> Option<&'static LookupEntry> {
    let lowered = question.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    let hit = LOOKUPS.iter().find(|entry| entry.matches(&lowered));
    if let Some(entry) = hit {
        log::debug!("surgical lookup matched {} for {question:?}", entry.tool);
    }
    hit
}
