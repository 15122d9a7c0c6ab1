use drift_protocol::ToolStep;

use crate::error::{Result, RouterError};
use crate::Category;

/// A recommended tool call with the reason it appears in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCall {
    pub tool: &'static str,
    pub rationale: &'static str,
}

const fn call(tool: &'static str, rationale: &'static str) -> ToolCall {
    ToolCall { tool, rationale }
}

/// Ordered, non-empty list of tool calls for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSequence {
    steps: &'static [ToolCall],
}

impl ToolSequence {
    #[must_use]
    pub const fn steps(&self) -> &'static [ToolCall] {
        self.steps
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn tools(&self) -> impl Iterator<Item = &'static str> {
        self.steps.iter().map(|step| step.tool)
    }

    #[must_use]
    pub fn to_steps(&self) -> Vec<ToolStep> {
        self.steps
            .iter()
            .map(|step| ToolStep {
                tool: step.tool.to_string(),
                rationale: step.rationale.to_string(),
            })
            .collect()
    }
}

pub const FALLBACK_TOOL: &str = "drift_status";

const FALLBACK: &[ToolCall] = &[call(
    FALLBACK_TOOL,
    "No intent recognized; check project status and available capabilities first.",
)];

const SEQUENCES: &[(Category, &[ToolCall])] = &[
    (
        Category::CodeGeneration,
        &[
            call(
                "drift_context",
                "Gather patterns, examples and relevant files for the intent in one call.",
            ),
            call(
                "drift_code_examples",
                "See how the codebase already implements similar code.",
            ),
            call(
                "drift_prevalidate",
                "Check the generated code against established patterns before presenting it.",
            ),
        ],
    ),
    (
        Category::UiComponent,
        &[
            call(
                "drift_context",
                "Load component conventions and the files in the target area.",
            ),
            call(
                "drift_similar",
                "Find existing components to mirror instead of inventing a new shape.",
            ),
            call(
                "drift_code_examples",
                "Copy the codebase's styling, state and prop patterns.",
            ),
        ],
    ),
    (
        Category::ApiEndpoint,
        &[
            call(
                "drift_context",
                "Load routing, validation and response conventions for the endpoint.",
            ),
            call(
                "drift_contracts",
                "Keep the backend response shape in sync with frontend expectations.",
            ),
            call(
                "drift_middleware",
                "Apply the same auth and request middleware as sibling routes.",
            ),
            call(
                "drift_code_examples",
                "Follow an existing endpoint as the template.",
            ),
        ],
    ),
    (
        Category::BugFix,
        &[
            call(
                "drift_context",
                "Locate the code involved in the failure and its conventions.",
            ),
            call(
                "drift_callers",
                "See every path that reaches the failing function.",
            ),
            call(
                "drift_error_handling",
                "Check whether the failure escapes an unhandled error path.",
            ),
        ],
    ),
    (
        Category::ErrorHandling,
        &[
            call(
                "drift_error_handling",
                "Find gaps and unhandled paths in current error handling.",
            ),
            call(
                "drift_wrappers",
                "Reuse the project's existing error wrappers and helpers.",
            ),
            call(
                "drift_code_examples",
                "Match how errors are raised and reported elsewhere.",
            ),
        ],
    ),
    (
        Category::Refactor,
        &[
            call(
                "drift_impact_analysis",
                "Measure the blast radius before changing anything.",
            ),
            call(
                "drift_coupling",
                "Spot cycles and tightly coupled modules the refactor must respect.",
            ),
            call(
                "drift_test_topology",
                "Know which tests guard the code being changed.",
            ),
        ],
    ),
    (
        Category::MoveRename,
        &[
            call(
                "drift_callers",
                "List every call site that must follow the move or rename.",
            ),
            call(
                "drift_imports",
                "Find the import statements that reference the old location.",
            ),
            call(
                "drift_impact_analysis",
                "Confirm nothing outside the direct callers breaks.",
            ),
        ],
    ),
    (
        Category::SecurityReview,
        &[
            call(
                "drift_security_summary",
                "Get the security posture overview and sensitive-data hotspots.",
            ),
            call(
                "drift_reachability",
                "Trace whether untrusted input reaches sensitive sinks.",
            ),
            call(
                "drift_env",
                "Audit environment variables and secrets the code reads.",
            ),
        ],
    ),
    (
        Category::AuthReview,
        &[
            call(
                "drift_security_summary",
                "Start from the security overview for auth-related findings.",
            ),
            call(
                "drift_middleware",
                "Check which routes are covered by auth middleware.",
            ),
            call(
                "drift_reachability",
                "Verify protected data is only reachable through authorized paths.",
            ),
        ],
    ),
    (
        Category::Understanding,
        &[
            call(
                "drift_context",
                "Get a curated overview of the area in question.",
            ),
            call(
                "drift_explain",
                "Explain the specific symbol or file in depth.",
            ),
            call(
                "drift_file_patterns",
                "See which patterns the relevant files follow.",
            ),
        ],
    ),
    (
        Category::RelationshipLookup,
        &[
            call("drift_callers", "Answer who calls the symbol directly."),
            call(
                "drift_signature",
                "Confirm the exact signature the callers depend on.",
            ),
            call("drift_type", "Expand the types flowing through the relationship."),
        ],
    ),
    (
        Category::DataFlow,
        &[
            call(
                "drift_reachability",
                "Trace where the data can flow from its source.",
            ),
            call(
                "drift_callers",
                "Follow the call chain that carries the data.",
            ),
            call(
                "drift_explain",
                "Explain the transformations applied along the path.",
            ),
        ],
    ),
    (
        Category::Testing,
        &[
            call(
                "drift_test_topology",
                "See which tests exist for the code and what they cover.",
            ),
            call(
                "drift_code_examples",
                "Follow the project's test structure and fixtures.",
            ),
            call(
                "drift_validate_change",
                "Validate the new tests against project conventions.",
            ),
        ],
    ),
    (
        Category::PatternDiscovery,
        &[
            call(
                "drift_patterns_list",
                "List the patterns detected across the codebase.",
            ),
            call(
                "drift_pattern_get",
                "Inspect one pattern with its locations and outliers.",
            ),
            call(
                "drift_file_patterns",
                "Check how a specific file conforms to those patterns.",
            ),
        ],
    ),
    (
        Category::SimilaritySearch,
        &[
            call(
                "drift_similar",
                "Find code semantically similar to the description.",
            ),
            call(
                "drift_code_examples",
                "Pull concrete examples of the closest matches.",
            ),
        ],
    ),
];

/// Pure lookup of the sequence registered for `category`.
///
/// # Errors
/// `MissingSequence` if the table has no entry for the category.
pub fn sequence_for(category: Category) -> Result<ToolSequence> {
    SEQUENCES
        .iter()
        .find(|(candidate, _)| *candidate == category)
        .map(|(_, steps)| ToolSequence { steps: *steps })
        .ok_or(RouterError::MissingSequence(category))
}

/// Sequence used when no category matched.
#[must_use]
pub const fn fallback_sequence() -> ToolSequence {
    ToolSequence { steps: FALLBACK }
}

/// Every tool name referenced by a sequence, in first-seen order.
pub(crate) fn sequence_tools() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    let all = SEQUENCES
        .iter()
        .flat_map(|(_, steps)| steps.iter())
        .chain(FALLBACK.iter());
    for step in all {
        if !out.contains(&step.tool) {
            out.push(step.tool);
        }
    }
    out
}
