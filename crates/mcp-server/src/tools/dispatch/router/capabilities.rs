use super::super::{CallToolResult, Content, DriftNavigatorService};
use crate::tools::schemas::capabilities::CapabilitiesRequest;
use drift_protocol::{serialize_json, serialize_json_pretty};

use super::error::{internal_error, router_error};

/// Return the navigation guide built from the service's router.
pub(in crate::tools::dispatch) async fn capabilities(
    service: &DriftNavigatorService,
    request: CapabilitiesRequest,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let doc = match drift_router::capabilities(service.router()) {
        Ok(doc) => doc,
        Err(err) => return Ok(router_error(&err)),
    };

    let text = if request.pretty.unwrap_or(false) {
        serialize_json_pretty(&doc)
    } else {
        serialize_json(&doc)
    };
    let text = match text {
        Ok(text) => text,
        Err(err) => return Ok(internal_error(format!("{err:#}"))),
    };

    let value = match serde_json::to_value(&doc) {
        Ok(value) => value,
        Err(err) => {
            return Ok(internal_error(format!(
                "Error: failed to serialize drift_capabilities ({err})"
            )))
        }
    };

    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(value);
    Ok(result)
}
