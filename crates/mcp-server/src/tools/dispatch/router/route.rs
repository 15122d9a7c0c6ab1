use super::super::{CallToolResult, Content, DriftNavigatorService};
use crate::tools::context_doc::ContextDocBuilder;
use crate::tools::schemas::route::RouteRequest;
use drift_protocol::RoutePayload;

use super::error::{attach_structured_content, router_error};
use super::steps::push_steps;

/// Classify the request and return the recommended tool sequence.
pub(in crate::tools::dispatch) async fn route(
    service: &DriftNavigatorService,
    request: RouteRequest,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let route = match service.router().route(&request.request) {
        Ok(route) => route,
        Err(err) => return Ok(router_error(&err)),
    };
    let payload = route.to_payload();

    log::debug!(
        "drift_route: category={:?} keyword={:?}",
        payload.category,
        payload.matched_keyword
    );

    let result = CallToolResult::success(vec![Content::text(render(&payload))]);
    Ok(attach_structured_content(result, &payload, "drift_route"))
}

fn render(payload: &RoutePayload) -> String {
    let mut doc = ContextDocBuilder::new();
    match (payload.category.as_deref(), payload.matched_keyword.as_deref()) {
        (Some(category), Some(keyword)) => {
            doc.push_answer(&format!("category: {category} (keyword: {keyword:?})"));
        }
        (Some(category), None) => doc.push_answer(&format!("category: {category}")),
        (None, _) => doc.push_answer("category: none (fallback)"),
    }
    push_steps(&mut doc, &payload.steps);
    if payload.fallback {
        doc.push_note("hint: rephrase with a task verb (refactor, fix, test, explain, ...) for a specific sequence");
    }
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_router::IntentRouter;

    #[test]
    fn renders_matched_route() {
        let route = IntentRouter::builtin().route("Refactor the parser").unwrap();
        let text = render(&route.to_payload());
        assert!(
            text.starts_with("[CONTENT]\nA: category: refactor (keyword: \"refactor\")\n"),
            "{text}"
        );
        assert!(text.contains("N: 1. drift_impact_analysis [analysis]\n"), "{text}");
        assert!(!text.contains("hint:"), "{text}");
    }

    #[test]
    fn renders_fallback_route_with_hint() {
        let route = IntentRouter::builtin().route("what time is it").unwrap();
        let text = render(&route.to_payload());
        assert!(text.contains("A: category: none (fallback)\n"), "{text}");
        assert!(text.contains("N: 1. drift_status [discovery]\n"), "{text}");
        assert!(text.contains("N: hint:"), "{text}");
    }
}
