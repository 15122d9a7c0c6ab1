use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// Classification bucket for a user's natural-language intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CodeGeneration,
    UiComponent,
    ApiEndpoint,
    BugFix,
    ErrorHandling,
    Refactor,
    MoveRename,
    SecurityReview,
    AuthReview,
    Understanding,
    RelationshipLookup,
    DataFlow,
    Testing,
    PatternDiscovery,
    SimilaritySearch,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::CodeGeneration,
        Category::UiComponent,
        Category::ApiEndpoint,
        Category::BugFix,
        Category::ErrorHandling,
        Category::Refactor,
        Category::MoveRename,
        Category::SecurityReview,
        Category::AuthReview,
        Category::Understanding,
        Category::RelationshipLookup,
        Category::DataFlow,
        Category::Testing,
        Category::PatternDiscovery,
        Category::SimilaritySearch,
    ];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Category::CodeGeneration => "code-generation",
            Category::UiComponent => "ui-component",
            Category::ApiEndpoint => "api-endpoint",
            Category::BugFix => "bug-fix",
            Category::ErrorHandling => "error-handling",
            Category::Refactor => "refactor",
            Category::MoveRename => "move-rename",
            Category::SecurityReview => "security-review",
            Category::AuthReview => "auth-review",
            Category::Understanding => "understanding",
            Category::RelationshipLookup => "relationship-lookup",
            Category::DataFlow => "data-flow",
            Category::Testing => "testing",
            Category::PatternDiscovery => "pattern-discovery",
            Category::SimilaritySearch => "similarity-search",
        }
    }

    /// Decision-tree question an agent asks itself for this branch.
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Category::CodeGeneration => "Generating new code?",
            Category::UiComponent => "Building a UI component?",
            Category::ApiEndpoint => "Adding or changing an API endpoint?",
            Category::BugFix => "Fixing a bug?",
            Category::ErrorHandling => "Improving error handling?",
            Category::Refactor => "Refactoring existing code?",
            Category::MoveRename => "Moving or renaming code?",
            Category::SecurityReview => "Reviewing security?",
            Category::AuthReview => "Reviewing authentication or authorization?",
            Category::Understanding => "Trying to understand how code works?",
            Category::RelationshipLookup => "Looking up who calls or uses something?",
            Category::DataFlow => "Tracing where data flows?",
            Category::Testing => "Writing or reviewing tests?",
            Category::PatternDiscovery => "Discovering codebase conventions?",
            Category::SimilaritySearch => "Looking for similar code?",
        }
    }

    pub fn tags() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|category| category.tag())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = RouterError;

    /// Accepts the kebab-case tag in any case; `_` is treated like `-`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.tag() == normalized)
            .ok_or_else(|| RouterError::UnknownCategory(raw.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Category;
    use crate::RouterError;

    #[test]
    fn tags_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.tag().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parsing_ignores_case_and_underscores() {
        assert_eq!("BUG_FIX".parse::<Category>(), Ok(Category::BugFix));
        assert_eq!(" Security-Review ".parse::<Category>(), Ok(Category::SecurityReview));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            "deploy".parse::<Category>(),
            Err(RouterError::UnknownCategory("deploy".to_string()))
        );
    }

    #[test]
    fn serde_uses_kebab_case_tags() {
        let raw = serde_json::to_string(&Category::RelationshipLookup).unwrap();
        assert_eq!(raw, "\"relationship-lookup\"");
    }
}
