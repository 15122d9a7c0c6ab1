use drift_protocol::RoutePayload;
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::profile::RouterProfile;
use crate::rules::{builtin_rules, KeywordRule};
use crate::sequences::{fallback_sequence, sequence_for, ToolSequence};
use crate::Category;

static BUILTIN: Lazy<IntentRouter> = Lazy::new(|| IntentRouter::with_rules("builtin", builtin_rules()));

/// Category plus the keyword that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    pub category: Category,
    pub keyword: &'a str,
}

/// Outcome of routing a request: a category (if any) and the sequence to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub request: String,
    pub category: Option<Category>,
    pub matched_keyword: Option<String>,
    pub sequence: ToolSequence,
}

impl Route {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.category.is_none()
    }

    #[must_use]
    pub fn to_payload(&self) -> RoutePayload {
        RoutePayload {
            request: self.request.clone(),
            category: self.category.map(|c| c.tag().to_string()),
            matched_keyword: self.matched_keyword.clone(),
            fallback: self.is_fallback(),
            steps: self.sequence.to_steps(),
        }
    }
}

/// Keyword router over an immutable, priority-ordered rule table.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    name: String,
    rules: Vec<KeywordRule>,
}

impl IntentRouter {
    /// Process-wide router over the builtin table.
    #[must_use]
    pub fn builtin() -> &'static IntentRouter {
        &BUILTIN
    }

    #[must_use]
    pub fn with_rules(name: impl Into<String>, rules: Vec<KeywordRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Builtin rules with the profile's rules placed before/after them.
    #[must_use]
    pub fn from_profile(profile: &RouterProfile) -> Self {
        let mut rules = Vec::with_capacity(
            profile.before().len() + BUILTIN.rules.len() + profile.after().len(),
        );
        rules.extend_from_slice(profile.before());
        rules.extend_from_slice(&BUILTIN.rules);
        rules.extend_from_slice(profile.after());
        log::debug!(
            "router profile '{}' loaded: {} rules ({} before, {} after builtin)",
            profile.name(),
            rules.len(),
            profile.before().len(),
            profile.after().len()
        );
        Self::with_rules(profile.name(), rules)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    #[must_use]
    pub fn classify(&self, request: &str) -> Option<Category> {
        self.classify_with_keyword(request).map(|hit| hit.category)
    }

    /// First rule (table order) with a keyword contained in the request.
    #[must_use]
    pub fn classify_with_keyword(&self, request: &str) -> Option<KeywordMatch<'_>> {
        let lowered = request.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }
        self.rules.iter().find_map(|rule| {
            rule.first_hit(&lowered).map(|keyword| KeywordMatch {
                category: rule.category(),
                keyword,
            })
        })
    }

    /// # Errors
    /// `MissingSequence` when the sequence table lacks the category.
    pub fn sequence_for(&self, category: Category) -> Result<ToolSequence> {
        sequence_for(category)
    }

    /// Classifies the request and resolves its sequence, falling back to `drift_status`.
    ///
    /// # Errors
    /// Only when the category has no registered sequence.
    pub fn route(&self, request: &str) -> Result<Route> {
        let Some(hit) = self.classify_with_keyword(request) else {
            log::debug!("router '{}': no keyword matched {request:?}", self.name);
            return Ok(Route {
                request: request.to_string(),
                category: None,
                matched_keyword: None,
                sequence: fallback_sequence(),
            });
        };
        log::debug!(
            "router '{}': {request:?} -> {} (keyword {:?})",
            self.name,
            hit.category,
            hit.keyword
        );
        Ok(Route {
            request: request.to_string(),
            category: Some(hit.category),
            matched_keyword: Some(hit.keyword.to_string()),
            sequence: self.sequence_for(hit.category)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn router() -> &'static IntentRouter {
        IntentRouter::builtin()
    }

    #[test]
    fn classify_examples() {
        let cases = [
            ("Fix the crash in checkout", Category::BugFix),
            ("Add a button to the settings page", Category::UiComponent),
            ("Create a REST API endpoint for orders", Category::ApiEndpoint),
            ("Where does user PII flow?", Category::DataFlow),
            ("Who calls processPayment?", Category::RelationshipLookup),
            ("Find code similar to the retry helper", Category::SimilaritySearch),
            ("What conventions do we use for logging?", Category::PatternDiscovery),
            ("Write unit tests for the cart service", Category::Testing),
            ("Rename UserService to AccountService", Category::MoveRename),
            ("Improve error handling in the uploader", Category::ErrorHandling),
            ("Review the OAuth flow", Category::AuthReview),
            ("Explain how the parser works", Category::Understanding),
            ("Implement a caching layer", Category::CodeGeneration),
            ("Audit dependencies for vulnerabilities", Category::SecurityReview),
            ("Please REFACTOR the billing module", Category::Refactor),
        ];
        for (request, expected) in cases {
            assert_eq!(router().classify(request), Some(expected), "{request}");
        }
    }

    #[test]
    fn refactor_outranks_other_keywords() {
        assert_eq!(
            router().classify("refactor the security module and fix the bug"),
            Some(Category::Refactor)
        );
    }

    #[test]
    fn unknown_request_falls_back_to_status() {
        assert_eq!(router().classify("what time is it"), None);
        let route = router().route("what time is it").unwrap();
        assert!(route.is_fallback());
        let tools: Vec<_> = route.sequence.tools().collect();
        assert_eq!(tools, ["drift_status"]);
    }

    #[test]
    fn blank_request_has_no_category() {
        assert_eq!(router().classify(""), None);
        assert_eq!(router().classify("   \n"), None);
    }

    #[test]
    fn route_reports_matched_keyword() {
        let route = router().route("Is this endpoint vulnerable to XSS?").unwrap();
        assert_eq!(route.category, Some(Category::SecurityReview));
        assert_eq!(route.matched_keyword.as_deref(), Some("vulnerable"));
        let payload = route.to_payload();
        assert_eq!(payload.category.as_deref(), Some("security-review"));
        assert!(!payload.fallback);
        assert_eq!(payload.steps.len(), 3);
    }

    #[test]
    fn custom_rules_are_checked_in_order() {
        let router = IntentRouter::with_rules(
            "custom",
            vec![
                KeywordRule::new(Category::Testing, ["pytest"]),
                KeywordRule::new(Category::BugFix, ["pytest", "bug"]),
            ],
        );
        assert_eq!(router.classify("pytest bug"), Some(Category::Testing));
        assert_eq!(router.classify("a bug"), Some(Category::BugFix));
        assert_eq!(router.classify("refactor"), None);
    }
}
