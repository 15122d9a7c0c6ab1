use drift_router::{tool_layer, LookupEntry, Route, ToolSequence};
use std::fmt::Write;

fn push_steps(out: &mut String, sequence: &ToolSequence) {
    for (idx, step) in sequence.steps().iter().enumerate() {
        let layer = tool_layer(step.tool).unwrap_or("unlayered");
        let _ = writeln!(out, "{}. {} [{layer}]", idx + 1, step.tool);
        let _ = writeln!(out, "   {}", step.rationale);
    }
}

pub(crate) fn route(route: &Route) -> String {
    let mut out = String::new();
    match (route.category, route.matched_keyword.as_deref()) {
        (Some(category), Some(keyword)) => {
            let _ = writeln!(out, "category: {category} (keyword: {keyword:?})");
        }
        (Some(category), None) => {
            let _ = writeln!(out, "category: {category}");
        }
        (None, _) => {
            let _ = writeln!(out, "category: none (fallback)");
        }
    }
    push_steps(&mut out, &route.sequence);
    out
}

pub(crate) fn sequence(tag: &str, sequence: &ToolSequence) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "category: {tag}");
    push_steps(&mut out, sequence);
    out
}

pub(crate) fn lookup(entry: &LookupEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", entry.question);
    let _ = writeln!(out, "tool: {}", entry.tool);
    let _ = writeln!(out, "example args: {}", entry.example_args);
    out
}
