use crate::{
    result::{ExplainError, Result},
    span::StatementSpan,
};
use std::fs;

/// The directive inserted before every selected statement. The spelling,
/// including FROMAT, is the wire contract of downstream consumers and is
/// reproduced verbatim; use [`RewriteSettings`] to override it.
pub const DEFAULT_DIRECTIVE: &str = " EXPLAIN ( ANALYZE, COSTS, FROMAT JSON ) ";

/// Rewrite options loaded from JSON configuration
#[derive(Debug, Clone)]
pub struct RewriteSettings {
    pub directive: String,
}

impl Default for RewriteSettings {
    fn default() -> Self {
        RewriteSettings {
            directive: DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl RewriteSettings {
    /// Load settings from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let json: serde_json::Value = serde_json::from_str(&content)?;
        Self::from_json(json)
    }

    /// Load settings from a serde_json::Value object; a missing "directive"
    /// key means the default literal
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        let map = json
            .as_object()
            .ok_or_else(|| ExplainError::SettingsTypeMismatch {
                expected: "object".to_string(),
                got: json.to_string(),
            })?;
        let directive = match map.get("directive") {
            None => DEFAULT_DIRECTIVE.to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(ExplainError::SettingsTypeMismatch {
                    expected: "string".to_string(),
                    got: other.to_string(),
                });
            }
        };
        Ok(RewriteSettings { directive })
    }
}

/// Splices the directive into a script at every selected span start
#[derive(Debug, Clone)]
pub struct ScriptRewriter {
    pub directive: String,
}

impl Default for ScriptRewriter {
    fn default() -> Self {
        ScriptRewriter {
            directive: DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl ScriptRewriter {
    pub fn new(settings: RewriteSettings) -> Self {
        ScriptRewriter {
            directive: settings.directive,
        }
    }

    pub fn with_directive(directive: &str) -> Self {
        ScriptRewriter {
            directive: directive.to_string(),
        }
    }

    /// Resolve the span multiset to non-nested splice points and rebuild the
    /// script with the directive inserted at each of them
    ///
    /// Spans are sorted by start offset, ties broken by smaller end first. A
    /// single forward scan then selects a span only when it starts strictly
    /// past the end of the previously selected one, so nested spans and
    /// spans sharing a start offset collapse to the outermost span of their
    /// cluster. The untouched text between splice points is carried over
    /// verbatim, and an empty span set returns the script unchanged.
    ///
    /// Offsets are character offsets produced against this same script;
    /// out-of-range spans are out of contract and are not defended against.
    pub fn rewrite(&self, script: &str, spans: &[StatementSpan]) -> String {
        let chars: Vec<char> = script.chars().collect();
        let mut sorted: Vec<StatementSpan> = spans.to_vec();
        sorted.sort_by_key(|span| (span.start, span.end));

        let mut parts: Vec<String> = Vec::new();
        let mut prev = 0usize;
        // end offset of the most recently selected span; None until the
        // first selection
        let mut last: Option<usize> = None;
        for span in sorted {
            if last.is_none_or(|end| span.start > end) {
                parts.push(chars[prev..span.start].iter().collect());
                prev = span.start;
                last = Some(span.end);
            }
        }
        parts.push(chars[prev..].iter().collect());
        parts.join(&self.directive)
    }
}
