use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::rules::KeywordRule;
use crate::Category;

/// Environment variable naming a router profile file (JSON or TOML).
pub const PROFILE_ENV: &str = "DRIFT_ROUTER_PROFILE";

/// Extra keyword rules layered around the builtin table.
#[derive(Clone, Debug)]
pub struct RouterProfile {
    name: String,
    description: Option<String>,
    before: Vec<KeywordRule>,
    after: Vec<KeywordRule>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Before,
    After,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawProfile {
    #[serde(default)]
    schema_version: Option<u32>,
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawRule {
    category: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    placement: Placement,
}

impl RouterProfile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read router profile {}", path.display()))?;
        let fallback_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("custom");
        Self::from_bytes(fallback_name, &bytes)
    }

    pub fn from_bytes(fallback_name: &str, bytes: &[u8]) -> Result<Self> {
        let raw = parse_raw(bytes).with_context(|| {
            format!("Router profile '{fallback_name}' is not valid JSON/TOML configuration")
        })?;
        Self::from_raw(raw, fallback_name)
    }

    fn from_raw(raw: RawProfile, fallback_name: &str) -> Result<Self> {
        if let Some(schema_version) = raw.schema_version {
            if schema_version != 1 {
                return Err(anyhow!(
                    "profile.schema_version {schema_version} is not supported (expected 1)"
                ));
            }
        }

        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string());

        let mut before = Vec::new();
        let mut after = Vec::new();
        for (idx, rule) in raw.rules.into_iter().enumerate() {
            let category: Category = rule
                .category
                .parse()
                .with_context(|| format!("rules[{idx}].category"))?;
            let parsed = KeywordRule::new(category, &rule.keywords);
            if parsed.keywords().is_empty() {
                return Err(anyhow!("rules[{idx}].keywords must contain a non-empty keyword"));
            }
            match rule.placement {
                Placement::Before => before.push(parsed),
                Placement::After => after.push(parsed),
            }
        }

        Ok(Self {
            name,
            description: raw.description,
            before,
            after,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn before(&self) -> &[KeywordRule] {
        &self.before
    }

    #[must_use]
    pub fn after(&self) -> &[KeywordRule] {
        &self.after
    }
}

/// Profile path from `DRIFT_ROUTER_PROFILE`, if set and non-blank.
#[must_use]
pub fn profile_path_from_env() -> Option<PathBuf> {
    std::env::var(PROFILE_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Decodes a profile document into JSON, accepting either JSON or TOML text.
fn profile_document(bytes: &[u8]) -> Result<serde_json::Value> {
    let json_err = match serde_json::from_slice(bytes) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    let text = std::str::from_utf8(bytes)
        .map_err(|err| anyhow!("profile is neither JSON ({json_err}) nor UTF-8 text ({err})"))?;
    let table: toml::Table = toml::from_str(text).map_err(|toml_err| {
        anyhow!("profile is neither JSON ({json_err}) nor TOML ({toml_err})")
    })?;
    serde_json::to_value(table).context("TOML profile does not map onto JSON")
}

fn parse_raw(bytes: &[u8]) -> Result<RawProfile> {
    let document = profile_document(bytes)?;
    validate_profile_value(&document)?;
    serde_json::from_value(document).context("profile does not match the router profile schema")
}

fn validate_profile_value(value: &serde_json::Value) -> Result<()> {
    fn validate_object_keys(
        unknown: &mut Vec<String>,
        obj: &serde_json::Map<String, serde_json::Value>,
        base: &str,
        allowed: &[&str],
    ) {
        for key in obj.keys() {
            if !allowed.iter().any(|a| a == &key.as_str()) {
                if base.is_empty() {
                    unknown.push(key.to_string());
                } else {
                    unknown.push(format!("{base}.{key}"));
                }
            }
        }
    }

    let serde_json::Value::Object(root) = value else {
        return Err(anyhow!("Profile config must be a JSON object"));
    };

    let mut unknown = Vec::new();
    validate_object_keys(
        &mut unknown,
        root,
        "",
        &["schema_version", "name", "description", "rules"],
    );

    if let Some(serde_json::Value::Array(rules)) = root.get("rules") {
        for (idx, item) in rules.iter().enumerate() {
            if let serde_json::Value::Object(obj) = item {
                validate_object_keys(
                    &mut unknown,
                    obj,
                    &format!("rules[{idx}]"),
                    &["category", "keywords", "placement"],
                );
            }
        }
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(anyhow!(
            "Profile config has unknown fields: {}",
            unknown.join(", ")
        ))
    }
}
