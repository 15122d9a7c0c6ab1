use crate::tools::context_doc::ContextDocBuilder;
use drift_protocol::ToolStep;
use drift_router::tool_layer;

/// Numbered `N:` line per step, rationale indented underneath.
pub(super) fn push_steps(doc: &mut ContextDocBuilder, steps: &[ToolStep]) {
    for (idx, step) in steps.iter().enumerate() {
        let layer = tool_layer(&step.tool).unwrap_or("unlayered");
        doc.push_note(&format!("{}. {} [{layer}]", idx + 1, step.tool));
        doc.push_line(&format!("   {}", step.rationale));
    }
}
