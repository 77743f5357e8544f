//! Credibility: source reputation lookup with a qualitative justification.

use curator_core::config::SourcesConfig;

/// Score how reliable a source is.
///
/// The number comes from the configured reputation table; the explanation
/// is a fixed judgement per known source kind, so overriding a score does
/// not reword it.
pub fn score(source: &str, sources: &SourcesConfig) -> (f64, String) {
    let score = sources.credibility_for(source);
    let explanation = match source {
        "github" => "High credibility: GitHub PRs/issues have code context and review".to_string(),
        "confluence" => "Good credibility: Documented and reviewed content".to_string(),
        "jira" => "Good credibility: Structured ticket with context".to_string(),
        "slack" => "Lower credibility: Conversational, may lack full context".to_string(),
        "claude_session" => "Moderate credibility: AI-assisted, should be verified".to_string(),
        _ => format!("Unknown source ({source})"),
    };
    (score, explanation)
}
