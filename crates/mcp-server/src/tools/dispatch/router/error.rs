use super::super::{CallToolResult, Content};
use crate::tools::context_doc::ContextDocBuilder;
use drift_protocol::{ErrorEnvelope, ToolNextAction};
use drift_router::{Category, RouterError};
use serde::Serialize;
use serde_json::json;

pub(in crate::tools::dispatch) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let mut doc = ContextDocBuilder::new();
    doc.push_answer(&format!("error: {}", error.code));
    doc.push_note(&error.message);
    if let Some(hint) = error.hint.as_deref() {
        if !hint.trim().is_empty() {
            doc.push_note(&format!("hint: {hint}"));
        }
    }
    for action in &error.next_actions {
        doc.push_note(&format!("next: {} ({})", action.tool, action.reason));
    }

    let mut result = CallToolResult::error(vec![Content::text(doc.finish())]);
    result.structured_content = Some(json!({ "error": error }));
    result
}

pub(in crate::tools::dispatch) fn internal_error(message: impl Into<String>) -> CallToolResult {
    tool_error_envelope(ErrorEnvelope {
        code: "internal".to_string(),
        message: message.into(),
        details: None,
        hint: None,
        next_actions: Vec::new(),
    })
}

/// Maps a router error onto a tool error with a recovery hint.
pub(in crate::tools::dispatch) fn router_error(err: &RouterError) -> CallToolResult {
    match err {
        RouterError::UnknownCategory(tag) => tool_error_envelope(ErrorEnvelope {
            code: "unknown_category".to_string(),
            message: err.to_string(),
            details: Some(json!({ "category": tag })),
            hint: Some(format!(
                "Valid categories: {}",
                Category::tags().collect::<Vec<_>>().join(", ")
            )),
            next_actions: vec![ToolNextAction {
                tool: "drift_route".to_string(),
                args: json!({ "request": tag }),
                reason: "Route the text as a request instead of a category tag.".to_string(),
            }],
        }),
        RouterError::MissingSequence(_) => internal_error(err.to_string()),
    }
}

pub(in crate::tools::dispatch) fn attach_structured_content<T: Serialize>(
    mut result: CallToolResult,
    payload: &T,
    tool: &'static str,
) -> CallToolResult {
    match serde_json::to_value(payload) {
        Ok(value) => {
            result.structured_content = Some(value);
            result
        }
        Err(err) => internal_error(format!(
            "Error: failed to serialize {tool} structured_content ({err})"
        )),
    }
}
