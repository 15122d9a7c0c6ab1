use crate::Category;

/// Trigger keywords mapped to a single category.
///
/// Keywords are stored lower-case and matched as substrings of the lower-cased request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    category: Category,
    keywords: Vec<String>,
}

impl KeywordRule {
    /// Builds a rule, normalizing keywords and dropping blanks.
    #[must_use]
    pub fn new<I, S>(category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|kw| kw.as_ref().trim().to_lowercase())
            .filter(|kw| !kw.is_empty())
            .collect();
        Self { category, keywords }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword (in rule order) contained in `lowered`.
    pub(crate) fn first_hit(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|kw| lowered.contains(kw))
    }
}

// Table order is priority order. Specific intents sit above generic ones so that
// e.g. "write tests" lands on testing before the catch-all "write" of code generation.
// Only the literal "refactor" outranks security; its synonyms sit below auth review.
// Matching is raw substring, so a keyword must not occur inside an unrelated word
// ("fix" in "prefix", "modal" in "multimodal", "reach" in "breach").
const BUILTIN_RULES: &[(Category, &[&str])] = &[
    (Category::Refactor, &["refactor"]),
    (
        Category::SecurityReview,
        &[
            "security",
            "vulnerability",
            "vulnerabilities",
            "vulnerable",
            "audit",
            "cve",
            "injection",
            "xss",
            "csrf",
            "exploit",
            "breach",
        ],
    ),
    (
        Category::AuthReview,
        &[
            "authentication",
            "authenticate",
            "authorization",
            "authorize",
            "oauth",
            "jwt",
            "login",
            "sign-in",
            "permission",
            "rbac",
            "access control",
        ],
    ),
    (
        Category::Refactor,
        &["restructure", "decouple", "clean up", "cleanup"],
    ),
    (
        Category::MoveRename,
        &[
            "rename",
            "relocate",
            "move file",
            "move the",
            "move this",
            "move function",
            "move class",
            "move module",
        ],
    ),
    (
        Category::ErrorHandling,
        &[
            "error handling",
            "handle error",
            "exception",
            "try/catch",
            "try-catch",
            "error boundary",
            "retry logic",
            "error propagation",
        ],
    ),
    (
        Category::BugFix,
        &[
            "bug",
            "fix the",
            "fix this",
            "fix a",
            "hotfix",
            "crash",
            "broken",
            "regression",
            "not working",
            "doesn't work",
            "failing",
            "stack trace",
            "error",
        ],
    ),
    (
        Category::Testing,
        &[
            "testing",
            "tests",
            "unit test",
            "integration test",
            "test case",
            "test for",
            "a test",
            "coverage",
            "mock",
        ],
    ),
    (
        Category::ApiEndpoint,
        &[
            "endpoint",
            "api route",
            "rest api",
            "graphql",
            "route handler",
            "http handler",
            "controller",
            "webhook",
        ],
    ),
    (
        Category::UiComponent,
        &[
            "ui component",
            "component",
            "widget",
            "button",
            "modal dialog",
            "modal window",
            "frontend",
            "user interface",
        ],
    ),
    (
        Category::DataFlow,
        &[
            "data flow",
            "dataflow",
            "data flows",
            "flow of data",
            "sensitive data",
            "pii",
            "can reach",
            "reachability",
            "propagate",
            "propagation",
            "where does the data",
        ],
    ),
    (
        Category::RelationshipLookup,
        &[
            "who calls",
            "callers",
            "call site",
            "calls this",
            "usages",
            "used by",
            "depends on",
            "dependents",
            "signature",
            "imports",
        ],
    ),
    (
        Category::SimilaritySearch,
        &["similar", "like this", "duplicate", "resembles", "same as"],
    ),
    (
        Category::PatternDiscovery,
        &[
            "pattern",
            "convention",
            "idiom",
            "best practice",
            "how do we",
            "consistent with",
        ],
    ),
    (
        Category::Understanding,
        &[
            "explain",
            "how does",
            "what does",
            "understand",
            "overview",
            "architecture",
            "walk me through",
            "describe",
        ],
    ),
    (
        Category::CodeGeneration,
        &[
            "create",
            "implement",
            "generate",
            "write",
            "build",
            "scaffold",
            "new feature",
            "add a",
            "add an",
            "add new",
            "code for",
        ],
    ),
];

/// The builtin rule table, in priority order.
#[must_use]
pub fn builtin_rules() -> Vec<KeywordRule> {
    BUILTIN_RULES
        .iter()
        .map(|(category, keywords)| KeywordRule::new(*category, keywords.iter()))
        .collect()
}
