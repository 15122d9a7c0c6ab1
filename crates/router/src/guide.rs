//! Agent navigation guide published through `drift_capabilities`.

use drift_protocol::{
    AgentNavigationGuide, Capabilities, CommonMistake, DecisionNode, LayerInfo, QuickStart,
};

use crate::error::Result;
use crate::lookups::lookups;
use crate::router::IntentRouter;
use crate::sequences::fallback_sequence;
use crate::Category;

pub const SUMMARY: &str = "Drift navigation guide: route a task description to an ordered \
sequence of drift tools, or answer a single-fact question with one surgical lookup.";

pub const FALLBACK_QUESTION: &str = "None of the above?";

/// Tool layers, from cheap orientation to whole-codebase analysis.
pub const LAYERS: &[(&str, &str, &[&str])] = &[
    (
        "discovery",
        "Orientation: project health and what the server can do.",
        &["drift_status", "drift_capabilities"],
    ),
    (
        "orchestration",
        "One call that assembles everything needed for a task.",
        &["drift_context"],
    ),
    (
        "surgical",
        "Single-fact answers with minimal output.",
        &[
            "drift_callers",
            "drift_signature",
            "drift_type",
            "drift_imports",
            "drift_similar",
            "drift_prevalidate",
        ],
    ),
    (
        "exploration",
        "Browse detected patterns and concrete examples.",
        &[
            "drift_patterns_list",
            "drift_pattern_get",
            "drift_file_patterns",
            "drift_code_examples",
            "drift_explain",
        ],
    ),
    (
        "analysis",
        "Cross-cutting analysis of impact, coupling, tests and security.",
        &[
            "drift_impact_analysis",
            "drift_coupling",
            "drift_test_topology",
            "drift_error_handling",
            "drift_wrappers",
            "drift_contracts",
            "drift_middleware",
            "drift_security_summary",
            "drift_reachability",
            "drift_env",
        ],
    ),
    (
        "validation",
        "Check a finished change against project conventions.",
        &["drift_validate_change"],
    ),
];

pub const COMMON_MISTAKES: &[(&str, &str)] = &[
    (
        "Grepping through files before asking drift for context.",
        "Call drift_context first; it returns patterns, examples and relevant files in one call.",
    ),
    (
        "Refactoring or renaming without checking the blast radius.",
        "Run drift_impact_analysis (and drift_callers for renames) before touching the code.",
    ),
    (
        "Calling drift_status before every step.",
        "drift_status is for orientation; call it once per session or when nothing else fits.",
    ),
    (
        "Reviewing security by reading files one at a time.",
        "Start with drift_security_summary, then trace specific paths with drift_reachability.",
    ),
    (
        "Writing tests without knowing what already covers the code.",
        "Check drift_test_topology before adding tests.",
    ),
    (
        "Running a full analysis for a single-fact question.",
        "Use a surgical lookup (drift_callers, drift_signature, drift_type) when one answer is enough.",
    ),
];

pub const QUICK_START: &[&str] = &[
    "Call drift_status once to confirm the project is indexed.",
    "Describe the task in plain language and route it to get the recommended tool sequence.",
    "Call drift_context with the intent and focus area before writing code.",
    "Use surgical lookups for single facts such as callers, signatures and types.",
    "Validate generated code with drift_prevalidate before presenting it.",
];

/// Layer that owns `tool`, if any.
#[must_use]
pub fn tool_layer(tool: &str) -> Option<&'static str> {
    LAYERS
        .iter()
        .find(|(_, _, tools)| tools.contains(&tool))
        .map(|(name, _, _)| *name)
}

/// Builds the capabilities document for `router`.
///
/// The decision tree lists categories in the router's priority order, merging keywords when a
/// profile adds several rules for one category, and ends with the default branch.
///
/// # Errors
/// Propagates `MissingSequence` from the sequence table.
pub fn capabilities(router: &IntentRouter) -> Result<Capabilities> {
    let mut order: Vec<Category> = Vec::with_capacity(Category::ALL.len());
    for rule in router.rules() {
        if !order.contains(&rule.category()) {
            order.push(rule.category());
        }
    }
    for category in Category::ALL {
        if !order.contains(&category) {
            order.push(category);
        }
    }

    let mut decision_tree = Vec::with_capacity(order.len() + 1);
    for category in order {
        let mut keywords: Vec<String> = Vec::new();
        for rule in router.rules().iter().filter(|r| r.category() == category) {
            for kw in rule.keywords() {
                if !keywords.contains(kw) {
                    keywords.push(kw.clone());
                }
            }
        }
        decision_tree.push(DecisionNode {
            category: Some(category.tag().to_string()),
            question: category.question().to_string(),
            keywords,
            steps: router.sequence_for(category)?.to_steps(),
        });
    }
    decision_tree.push(DecisionNode {
        category: None,
        question: FALLBACK_QUESTION.to_string(),
        keywords: Vec::new(),
        steps: fallback_sequence().to_steps(),
    });

    Ok(Capabilities {
        summary: SUMMARY.to_string(),
        agent_navigation_guide: AgentNavigationGuide {
            decision_tree,
            surgical_lookups: lookups().iter().map(|entry| entry.to_protocol()).collect(),
            common_mistakes: COMMON_MISTAKES
                .iter()
                .map(|(mistake, correction)| CommonMistake {
                    mistake: (*mistake).to_string(),
                    correction: (*correction).to_string(),
                })
                .collect(),
        },
        layers: LAYERS
            .iter()
            .map(|(name, purpose, tools)| LayerInfo {
                name: (*name).to_string(),
                purpose: (*purpose).to_string(),
                tools: tools.iter().map(|t| (*t).to_string()).collect(),
            })
            .collect(),
        quick_start: QuickStart {
            steps: QUICK_START.iter().map(|s| (*s).to_string()).collect(),
        },
    })
}
