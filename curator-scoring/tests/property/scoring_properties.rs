use proptest::prelude::*;

use curator_core::config::{CuratorConfig, ScoreWeights};
use curator_core::models::Submission;
use curator_scoring::QualityScorer;

fn scorer() -> QualityScorer {
    QualityScorer::new(&CuratorConfig::default())
}

/// Random weight triples, normalized so they sum to 1.0.
fn weight_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.01f64..1.0, 0.01f64..1.0, 0.01f64..1.0).prop_map(|(a, b, c)| {
        let total = a + b + c;
        (a / total, b / total, c / total)
    })
}

fn kind_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("bug".to_string()),
        Just("feature".to_string()),
        Just("incident".to_string()),
        Just("debugging".to_string()),
        Just("architecture".to_string()),
        Just("error".to_string()),
        Just("investigation".to_string()),
    ]
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("github".to_string()),
        Just("confluence".to_string()),
        Just("jira".to_string()),
        Just("slack".to_string()),
        Just("claude_session".to_string()),
        Just("mailing_list".to_string()),
    ]
}

// ── Every score stays inside the unit interval ────────────────────────────

proptest! {
    #[test]
    fn scores_stay_normalized(
        content in ".{0,300}",
        kind in kind_strategy(),
        source in source_strategy()
    ) {
        let submission = Submission::new(content, kind).with_source(source);
        let analysis = scorer().score(&submission);
        for score in [
            analysis.relevance_score,
            analysis.completeness_score,
            analysis.credibility_score,
            analysis.composite_score,
        ] {
            prop_assert!(
                (0.0..=1.0).contains(&score),
                "score {} outside unit interval",
                score
            );
        }
    }
}

// ── The composite tracks the reported sub-scores under any weighting ──────

proptest! {
    #[test]
    fn reported_composite_tracks_any_weighting(
        content in ".{0,300}",
        kind in kind_strategy(),
        source in source_strategy(),
        (w_rel, w_comp, w_cred) in weight_strategy()
    ) {
        let mut config = CuratorConfig::default();
        config.scoring.weights = ScoreWeights {
            relevance: w_rel,
            completeness: w_comp,
            credibility: w_cred,
        };
        let submission = Submission::new(content, kind).with_source(source);
        let analysis = QualityScorer::new(&config).score(&submission);

        let expected = analysis.relevance_score * w_rel
            + analysis.completeness_score * w_comp
            + analysis.credibility_score * w_cred;
        prop_assert!(
            (analysis.composite_score - expected).abs() < 0.01,
            "composite {} drifted from weighted sub-scores {}",
            analysis.composite_score,
            expected
        );
    }
}

// ── Scoring is deterministic ──────────────────────────────────────────────

proptest! {
    #[test]
    fn equal_submissions_score_equally(
        content in ".{0,300}",
        kind in kind_strategy(),
        source in source_strategy()
    ) {
        let submission = Submission::new(content, kind).with_source(source);
        let first = scorer().score(&submission);
        let second = scorer().score(&submission);
        prop_assert_eq!(first.composite_score, second.composite_score);
        prop_assert_eq!(first.relevance_details, second.relevance_details);
        prop_assert_eq!(first.completeness_details, second.completeness_details);
        prop_assert_eq!(first.recommendations, second.recommendations);
    }
}

// ── Adding a code fence never lowers any score ────────────────────────────

proptest! {
    #[test]
    fn code_fence_never_lowers_scores(
        content in "[a-z ]{0,200}",
        kind in kind_strategy()
    ) {
        let plain = Submission::new(content.clone(), kind.clone());
        let fenced = Submission::new(format!("{content} ```"), kind);
        let before = scorer().score(&plain);
        let after = scorer().score(&fenced);
        prop_assert!(
            after.relevance_score >= before.relevance_score,
            "relevance dropped from {} to {}",
            before.relevance_score,
            after.relevance_score
        );
        prop_assert!(
            after.completeness_score >= before.completeness_score,
            "completeness dropped from {} to {}",
            before.completeness_score,
            after.completeness_score
        );
    }
}

// ── Short content always draws the expansion recommendation ──────────────

proptest! {
    #[test]
    fn short_content_recommends_expansion(
        content in "[a-z]{1,8}( [a-z]{1,8}){0,30}",
        source in source_strategy()
    ) {
        let submission = Submission::new(content, "bug").with_source(source);
        prop_assume!(submission.word_count() < 50);
        let analysis = scorer().score(&submission);
        prop_assert!(
            analysis
                .recommendations
                .contains(&"Expand content with more context and details".to_string()),
            "recommendations were {:?}",
            analysis.recommendations
        );
    }
}
