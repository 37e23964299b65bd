pub mod lexer;
pub mod result;
pub mod rewrite;
pub mod script_parser;
pub mod span;
pub mod str_utils;
pub mod stream;

// Re-export types for convenience
pub use result::{ExplainError, Result};
pub use rewrite::{DEFAULT_DIRECTIVE, RewriteSettings, ScriptRewriter};
pub use script_parser::ScriptParser;
pub use span::{SpanCollector, StatementKind, StatementNode, StatementSpan};

// Re-export third-party types used in the public API to provide fallback for dependency conflicts
pub use serde_json::Value as JsonValue;

/// Rewrite a script so every recognized DML statement is preceded by the
/// default execution-analysis directive
pub fn explain_script(script: &str) -> Result<String> {
    explain_script_with(script, &ScriptRewriter::default())
}

/// Rewrite a script with a configured rewriter
pub fn explain_script_with(script: &str, rewriter: &ScriptRewriter) -> Result<String> {
    if !str_utils::contains_explainable_keyword(script) {
        return Ok(script.to_string());
    }
    let events = ScriptParser::parse(script)?;
    let collector = SpanCollector::from_events(&events);
    Ok(rewriter.rewrite(script, collector.spans()))
}
