use drift_protocol::{ErrorEnvelope, ToolNextAction};
use drift_router::Category;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CommandStatus {
    Ok,
    Error,
}

/// JSON envelope printed by every `--json` subcommand.
#[derive(Debug, Serialize, Clone)]
pub(crate) struct CommandResponse {
    pub status: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEnvelope>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_actions: Vec<ToolNextAction>,
    #[serde(default)]
    pub data: Value,
}

impl CommandResponse {
    pub(crate) fn ok(data: Value) -> Self {
        Self {
            status: CommandStatus::Ok,
            message: None,
            error: None,
            next_actions: Vec::new(),
            data,
        }
    }

    pub(crate) fn ok_with_next(data: Value, next_actions: Vec<ToolNextAction>) -> Self {
        Self {
            next_actions,
            ..Self::ok(data)
        }
    }

    pub(crate) fn from_error(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");
        let error = classify_error(&message);
        Self {
            status: CommandStatus::Error,
            message: Some(message),
            next_actions: error.next_actions.clone(),
            error: Some(error),
            data: Value::Null,
        }
    }
}

/// Maps an error message onto a stable code plus a recovery hint.
pub(crate) fn classify_error(message: &str) -> ErrorEnvelope {
    let mut code = "internal".to_string();
    let mut hint = None;
    let mut next_actions = Vec::new();

    // Profile failures can wrap a category error; they must surface as profile errors.
    if message.contains("router profile") || message.contains("Profile config") {
        code = "profile_invalid".to_string();
        hint = Some(
            "Fix the profile file or unset DRIFT_ROUTER_PROFILE to use the builtin rules."
                .to_string(),
        );
    } else if message.contains("unknown category") {
        code = "unknown_category".to_string();
        hint = Some(format!(
            "Valid categories: {}",
            Category::tags().collect::<Vec<_>>().join(", ")
        ));
        next_actions.push(ToolNextAction {
            tool: "categories".to_string(),
            args: json!({}),
            reason: "List the category tags accepted by `sequence`.".to_string(),
        });
    } else if message.contains("no tool sequence registered") {
        code = "sequence_missing".to_string();
    }

    ErrorEnvelope {
        code,
        message: message.to_string(),
        details: None,
        hint,
        next_actions,
    }
}
