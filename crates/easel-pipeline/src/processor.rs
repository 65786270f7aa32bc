//! Artifact processor
//!
//! Collapses the three historical envelope shapes into the canonical
//! `{type, data, meta}` shape. A record without a kind tag is skipped, a
//! failing custom processor hook is isolated to its own record, and batch
//! processing never reorders its input.

use easel_artifact::{ArtifactKind, NormalizedArtifact, RawArtifactRecord};
use easel_registry::ArtifactRegistry;
use futures::future::join_all;
use serde_json::Value;
use std::sync::Arc;

/// Normalizes raw records against a registry
#[derive(Debug, Clone)]
pub struct ArtifactProcessor {
    registry: Arc<ArtifactRegistry>,
}

impl ArtifactProcessor {
    /// Processor over a registry
    #[inline]
    #[must_use]
    pub fn new(registry: Arc<ArtifactRegistry>) -> Self {
        Self { registry }
    }

    /// Normalize one record
    ///
    /// Returns `None` for records without a usable kind tag; the caller
    /// skips those. A registered definition's custom `process` hook wins
    /// over the default unwrap; a failing hook falls back to the default
    /// unwrap for this record only.
    pub async fn process(&self, raw: &RawArtifactRecord) -> Option<NormalizedArtifact> {
        let tag = match raw.kind.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => {
                tracing::trace!(id = ?raw.id, "skipping record without kind tag");
                return None;
            }
        };

        let data = match self.registry.get(tag) {
            Some(definition) => match definition.process(raw).await {
                Some(Ok(data)) => data,
                Some(Err(error)) => {
                    tracing::warn!(tag, %error, "custom processor failed, using default unwrap");
                    raw.unwrap_content()
                }
                None => raw.unwrap_content(),
            },
            None => raw.unwrap_content(),
        };

        Some(NormalizedArtifact {
            kind: ArtifactKind::from_tag(tag),
            data,
            meta: raw.meta(),
        })
    }

    /// Normalize a batch, preserving input order
    ///
    /// Custom hooks run concurrently, but the whole batch is awaited before
    /// anything is returned — first paint waits for the slowest record.
    /// Records without a kind tag are dropped.
    pub async fn process_batch(
        &self,
        raws: &[RawArtifactRecord],
    ) -> Vec<NormalizedArtifact> {
        join_all(raws.iter().map(|raw| self.process(raw)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Normalize a feed of query rows
    ///
    /// Rows that are not objects (or have an unusable envelope) are skipped.
    pub async fn process_values(&self, rows: &[Value]) -> Vec<NormalizedArtifact> {
        let records: Vec<RawArtifactRecord> = rows
            .iter()
            .filter_map(|row| match RawArtifactRecord::from_value(row.clone()) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::trace!(%error, "skipping unreadable feed row");
                    None
                }
            })
            .collect();
        self.process_batch(&records).await
    }
}
