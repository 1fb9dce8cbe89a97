//! Normalization of raw dependency expressions into node labels.
//!
//! Dependency targets are written in the template expression language, e.g.
//! `[resourceId('Microsoft.Storage/storageAccounts', parameters('storageName'))]`.
//! Instead of evaluating the expression, the resolver treats the structural tokens as
//! noise and keeps the identifying substrings:
//!
//! 1. Drop everything up to and including the last provider marker (`providers/`)
//! 2. Remove brackets and turn quoted argument separators into `/`
//! 3. Remove quotes, parentheses and backslashes
//! 4. Remove function-name tokens (`resourceId`, `parameters`, `concat`)
//! 5. Turn any remaining `", "` separators into `/` and collapse repeated `/`
//!
//! The rewrite is lexical: tokens are removed wherever they occur, without matching
//! parentheses. Malformed input still yields a deterministic string.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Function names stripped from expressions when no configuration overrides them.
pub const DEFAULT_FUNCTION_TOKENS: &[&str] = &["resourceId", "parameters", "concat"];

/// Marker after which the provider-qualified path starts.
pub const DEFAULT_PROVIDER_MARKER: &str = "providers/";

const NOISE_CHARS: &[char] = &['\'', '"', '(', ')', '\\'];

/// Token lists driving the rewrite. Loaded from the `[resolver]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverRules {
    /// Literal substrings removed from every expression.
    pub function_tokens: Vec<String>,
    /// Everything up to and including the last occurrence of this marker is dropped.
    pub provider_marker: String,
}

impl Default for ResolverRules {
    fn default() -> Self {
        Self {
            function_tokens: DEFAULT_FUNCTION_TOKENS.iter().map(ToString::to_string).collect(),
            provider_marker: DEFAULT_PROVIDER_MARKER.to_string(),
        }
    }
}

/// Turns raw expression strings into canonical node labels.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    function_tokens: Vec<String>,
    provider_prefix: Option<Regex>,
}

impl ReferenceResolver {
    pub fn new(rules: &ResolverRules) -> Self {
        let provider_prefix = if rules.provider_marker.is_empty() {
            None
        } else {
            // `.` stops at newlines, so each line loses its own prefix.
            Regex::new(&format!(".*{}", regex::escape(&rules.provider_marker))).ok()
        };

        Self {
            function_tokens: rules
                .function_tokens
                .iter()
                .filter(|token| !token.is_empty())
                .cloned()
                .collect(),
            provider_prefix,
        }
    }

    /// Normalize `raw` into a node label. Total over all inputs.
    pub fn resolve(&self, raw: &str) -> String {
        let mut text = match &self.provider_prefix {
            Some(prefix) => prefix.replace_all(raw, "").into_owned(),
            None => raw.to_string(),
        };

        text.retain(|c| c != '[' && c != ']');
        text = text.replace("', ", "/").replace("'), ", "/");
        text.retain(|c| !NOISE_CHARS.contains(&c));

        for token in &self.function_tokens {
            text = text.replace(token.as_str(), "");
        }

        collapse_separators(&text.replace(", ", "/"))
    }
}

impl Default for ReferenceResolver {
    fn default() -> Self {
        Self::new(&ResolverRules::default())
    }
}

/// Resolve with the default token set.
pub fn resolve(raw: &str) -> String {
    ReferenceResolver::default().resolve(raw)
}

fn collapse_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}
