//! Keyword intent router for drift agents.
//!
//! Classifies a free-text request into a [`Category`] (first matching keyword rule wins, table
//! order is priority order) and maps the category to an ordered [`ToolSequence`]. Requests with
//! no recognized keyword fall back to `drift_status`.

mod category;
mod error;
pub mod guide;
mod lookups;
pub mod profile;
mod router;
mod rules;
mod sequences;

pub use category::Category;
pub use error::{Result, RouterError};
pub use guide::{capabilities, tool_layer};
pub use lookups::{lookup, lookups, LookupEntry};
pub use profile::RouterProfile;
pub use router::{IntentRouter, KeywordMatch, Route};
pub use rules::{builtin_rules, KeywordRule};
pub use sequences::{fallback_sequence, sequence_for, ToolCall, ToolSequence, FALLBACK_TOOL};

/// Classifies `request` with the builtin router.
#[must_use]
pub fn classify(request: &str) -> Option<Category> {
    IntentRouter::builtin().classify(request)
}

/// Routes `request` with the builtin router.
///
/// # Errors
/// Only when a category has no registered sequence.
pub fn route(request: &str) -> Result<Route> {
    IntentRouter::builtin().route(request)
}
