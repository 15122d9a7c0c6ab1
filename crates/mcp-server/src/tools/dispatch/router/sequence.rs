use super::super::{CallToolResult, Content, DriftNavigatorService};
use crate::tools::context_doc::ContextDocBuilder;
use crate::tools::schemas::sequence::SequenceRequest;
use drift_protocol::SequencePayload;
use drift_router::Category;

use super::error::{attach_structured_content, router_error};
use super::steps::push_steps;

/// Return the tool sequence registered for a category tag.
pub(in crate::tools::dispatch) async fn sequence(
    service: &DriftNavigatorService,
    request: SequenceRequest,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let category: Category = match request.category.parse() {
        Ok(category) => category,
        Err(err) => return Ok(router_error(&err)),
    };
    let sequence = match service.router().sequence_for(category) {
        Ok(sequence) => sequence,
        Err(err) => return Ok(router_error(&err)),
    };

    let payload = SequencePayload {
        category: category.tag().to_string(),
        steps: sequence.to_steps(),
    };

    let mut doc = ContextDocBuilder::new();
    doc.push_answer(&format!("category: {}", payload.category));
    push_steps(&mut doc, &payload.steps);

    let result = CallToolResult::success(vec![Content::text(doc.finish())]);
    Ok(attach_structured_content(result, &payload, "drift_sequence"))
}
