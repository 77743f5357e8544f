//! QualityGate — the per-submission pipeline and the confirmation workflow.

use tracing::{debug, info};

use curator_core::config::CuratorConfig;
use curator_core::constants::MAX_DUPLICATE_ADVISORIES;
use curator_core::errors::{CuratorError, CuratorResult, KnowledgeError};
use curator_core::models::{ConfirmOutcome, IngestOutcome, PendingItem, PendingSummary, Submission};
use curator_core::traits::{IEmbeddingProvider, IKnowledgeStore};
use curator_pending::PendingStore;
use curator_scoring::QualityScorer;

use crate::validator::Validator;

/// The ingestion gate.
///
/// Owns policy (validator, scorer, thresholds) and the pending registry.
/// The two external collaborators are injected at construction and never
/// replaced afterwards; the gate consumes them by generic bound because
/// their async methods keep the traits out of dyn dispatch.
pub struct QualityGate<E, K>
where
    E: IEmbeddingProvider,
    K: IKnowledgeStore,
{
    config: CuratorConfig,
    validator: Validator,
    scorer: QualityScorer,
    pending: PendingStore,
    embedder: E,
    knowledge: K,
}

impl<E, K> QualityGate<E, K>
where
    E: IEmbeddingProvider,
    K: IKnowledgeStore,
{
    /// Create a gate from configuration and its two collaborators.
    pub fn new(config: CuratorConfig, embedder: E, knowledge: K) -> Self {
        let validator = Validator::new(&config);
        let scorer = QualityScorer::new(&config);
        let pending = PendingStore::new(&config);
        Self {
            config,
            validator,
            scorer,
            pending,
            embedder,
            knowledge,
        }
    }

    /// Use a pre-built pending registry instead of one derived from
    /// configuration (e.g. with an explicit TTL override).
    pub fn with_pending_store(mut self, pending: PendingStore) -> Self {
        self.pending = pending;
        self
    }

    /// Run one submission through the gate.
    ///
    /// Validation failures and below-threshold scores come back as
    /// [`IngestOutcome::Rejected`]; only collaborator faults are `Err`.
    /// Nothing is stored or held pending until the relevant step
    /// completes, so callers can safely resubmit after a fault.
    pub async fn ingest(&self, submission: Submission) -> CuratorResult<IngestOutcome> {
        let validation = self.validator.validate(&submission);
        if let Some(error) = validation.error {
            debug!(kind = %submission.kind, error = %error, "submission failed validation");
            return Ok(IngestOutcome::Rejected {
                message: error,
                quality_score: None,
                quality_analysis: None,
                recommendations: Vec::new(),
            });
        }

        let embedding = self.embedder.embed(&submission.content).await?;
        let expected = self.embedder.dimensions();
        if embedding.len() != expected {
            return Err(KnowledgeError::DimensionMismatch {
                expected,
                actual: embedding.len(),
            }
            .into());
        }

        let mut duplicates = self
            .knowledge
            .find_duplicates(&embedding, self.config.thresholds.duplicate_similarity)
            .await?;
        // The store does not guarantee ranked results; order them here so the
        // advisory cap keeps the closest matches.
        duplicates.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        duplicates.truncate(MAX_DUPLICATE_ADVISORIES);

        let analysis = self.scorer.score(&submission);
        let composite = analysis.composite_score;
        let breakdown = analysis.breakdown();

        let min_threshold = self.config.min_score_for_type(&submission.kind);
        if composite < min_threshold {
            info!(
                kind = %submission.kind,
                composite,
                min_threshold,
                "submission rejected below quality threshold"
            );
            return Ok(IngestOutcome::Rejected {
                message: format!(
                    "Quality score {composite:.2} below threshold {min_threshold:.2}"
                ),
                quality_score: Some(composite),
                quality_analysis: Some(breakdown),
                recommendations: analysis.recommendations,
            });
        }

        if composite >= self.config.thresholds.auto_approve_score {
            let id = self.knowledge.store(&submission, &embedding).await?;
            info!(id = %id, composite, "submission auto-approved and stored");
            return Ok(IngestOutcome::Stored {
                id,
                quality_score: composite,
                duplicates,
            });
        }

        // Mid band: hold for confirmation, keeping the closest duplicate
        // on the item itself.
        let duplicate_info = duplicates.first().cloned();
        let item = PendingItem::new(submission, embedding, analysis.clone(), duplicate_info);
        let pending_id = self.pending.add(item);
        info!(pending_id = %pending_id, composite, "submission held for confirmation");

        Ok(IngestOutcome::Pending {
            pending_id,
            quality_score: composite,
            quality_analysis: breakdown,
            recommendations: analysis.recommendations,
            duplicates,
        })
    }

    /// Resolve a pending item by id.
    ///
    /// Approval forwards the original payload to the knowledge store and
    /// removes the item only after the write succeeds, so a store fault
    /// leaves it pending and the call can be retried until the TTL runs
    /// out.
    pub async fn confirm(&self, pending_id: &str, approved: bool) -> CuratorResult<ConfirmOutcome> {
        let Some(item) = self.pending.get(pending_id) else {
            return Err(CuratorError::PendingNotFound {
                id: pending_id.to_string(),
            });
        };

        if !approved {
            self.pending.remove(pending_id);
            info!(pending_id = %pending_id, "pending item rejected by user");
            return Ok(ConfirmOutcome::Rejected {
                message: "User rejected the entry".to_string(),
            });
        }

        let id = self.knowledge.store(&item.submission, &item.embedding).await?;
        self.pending.remove(pending_id);
        info!(pending_id = %pending_id, id = %id, "pending item confirmed and stored");
        Ok(ConfirmOutcome::Stored { id })
    }

    /// Summaries of all live pending items.
    pub fn list_pending(&self) -> Vec<PendingSummary> {
        self.pending
            .list_pending()
            .iter()
            .map(PendingItem::summary)
            .collect()
    }

    /// The pending registry, for callers that run their own cleanup
    /// sweeps or need full pending items.
    pub fn pending_store(&self) -> &PendingStore {
        &self.pending
    }

    /// The gate's configuration.
    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }
}
