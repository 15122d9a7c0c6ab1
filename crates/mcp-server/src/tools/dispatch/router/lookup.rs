use super::super::{CallToolResult, Content, DriftNavigatorService};
use crate::tools::context_doc::ContextDocBuilder;
use crate::tools::schemas::lookup::LookupRequest;
use drift_protocol::ToolNextAction;
use serde_json::json;

use super::error::attach_structured_content;

/// Pick the surgical tool for a single-fact question.
///
/// No match is a normal outcome: the result says `found: false` and points at `drift_route`.
pub(in crate::tools::dispatch) async fn lookup(
    _service: &DriftNavigatorService,
    request: LookupRequest,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let mut doc = ContextDocBuilder::new();

    let payload = match drift_router::lookup(&request.question) {
        Some(entry) => {
            doc.push_answer(&format!("tool: {}", entry.tool));
            doc.push_note(entry.question);
            doc.push_meta(&format!("args={}", entry.example_args));
            json!({ "found": true, "lookup": entry.to_protocol() })
        }
        None => {
            let next = ToolNextAction {
                tool: "drift_route".to_string(),
                args: json!({ "request": request.question }),
                reason: "No surgical lookup matched; route the request instead.".to_string(),
            };
            doc.push_answer("no surgical lookup matched");
            doc.push_note(&format!("next: {} ({})", next.tool, next.reason));
            json!({ "found": false, "next_actions": [next] })
        }
    };

    let result = CallToolResult::success(vec![Content::text(doc.finish())]);
    Ok(attach_structured_content(result, &payload, "drift_lookup"))
}
