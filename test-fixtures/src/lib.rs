//! Shared submission samples for scoring and gate tests across crates.
//!
//! The three tier fixtures are calibrated against the default thresholds:
//! `detailed_bug_report` clears auto-approval, `incident_followup_note` lands
//! in the confirmation band, and `vague_chat_snippet` falls below the quality
//! floor. Tests in this crate pin the content properties those tiers rely on.

use curator_core::models::Submission;

/// GitHub bug report with a stack trace, root cause, and numbered fix steps.
/// 150+ words, so it hits the top completeness band.
pub const DETAILED_BUG_REPORT: &str = r#"Payment webhook handler crashes with a NoneType error when Stripe retries a webhook
after a timeout. The bug appeared in version 2.14.0 and affects the checkout service
in the production environment.

Symptom: every retried delivery fails and the order stays unpaid. Stack trace:

```text
Traceback (most recent call last):
  File "handlers/webhook.py", line 84, in process_event
    charge_id = event.data.object.charge.id
AttributeError: 'NoneType' object has no attribute 'id'
```

Root cause: the retry payload omits the expanded charge object, so the handler
dereferences a missing field. The first delivery includes it because we request
expansion when registering the endpoint.

Fix:
1. Guard the charge lookup and fall back to fetching the charge by event id.
2. Add a regression test that replays a retried delivery fixture.
3. Run the webhook replay suite, then update the runbook.

Resolved by PR #4821. The fix shipped in 2.14.1 and error rates returned to
baseline. Monitoring stayed clean for a full week after the deploy."#;

/// Confluence follow-up in the 50-150 word band: keyword-dense but without
/// code blocks or a context section, which keeps it below auto-approval.
pub const INCIDENT_FOLLOWUP_NOTE: &str = "Investigation notes for the checkout latency \
incident. The payment service returned an intermittent timeout error under peak load, \
and the database connection pool was exhausted. Root cause: the retry loop doubled \
traffic because failed requests were replayed immediately. As a temporary fix we \
lowered the retry budget, then raised the pool ceiling. Follow up: run a load test \
against the staging api and update the performance dashboard.";

/// Slack chatter that passes the length floor but carries no quality signals.
pub const VAGUE_CHAT_SNIPPET: &str = "The nightly job failed again so we restarted \
the worker box and everything looked fine afterwards.";

/// Long enough to pass the length floor, but contains `api_key`, so the
/// content-pattern check rejects it before anything else runs.
pub const LEAKED_CREDENTIAL_NOTE: &str = "The deploy failed because the api_key was \
rotated without updating the integration environment configuration files.";

/// Submission that should be stored without confirmation under default config.
pub fn detailed_bug_report() -> Submission {
    Submission::new(DETAILED_BUG_REPORT, "bug").with_source("github")
}

/// Submission that should park in the pending registry under default config.
pub fn incident_followup_note() -> Submission {
    Submission::new(INCIDENT_FOLLOWUP_NOTE, "investigation").with_source("confluence")
}

/// Submission that should be rejected on quality under default config.
pub fn vague_chat_snippet() -> Submission {
    Submission::new(VAGUE_CHAT_SNIPPET, "bug").with_source("slack")
}

/// Submission that should be rejected by the content-pattern check.
pub fn leaked_credential_note() -> Submission {
    Submission::new(LEAKED_CREDENTIAL_NOTE, "bug").with_source("slack")
}
