//! Artifact renderer
//!
//! Dispatches a normalized artifact to its definition's view through the
//! registry. Tags the registry does not know degrade to a generic JSON
//! preview — the universal safety net; the renderer never fails.

use easel_artifact::{NormalizedArtifact, RenderState, View};
use easel_registry::ArtifactRegistry;
use serde_json::Value;
use std::sync::Arc;

/// Longest JSON excerpt the generic fallback shows
pub const FALLBACK_PREVIEW_MAX: usize = 600;

/// Dispatches normalized artifacts to views
#[derive(Debug, Clone)]
pub struct ArtifactRenderer {
    registry: Arc<ArtifactRegistry>,
}

impl ArtifactRenderer {
    /// Renderer over a registry
    #[inline]
    #[must_use]
    pub fn new(registry: Arc<ArtifactRegistry>) -> Self {
        Self { registry }
    }

    /// Render an artifact, falling back generically on unknown tags
    #[must_use]
    pub fn render(&self, artifact: &NormalizedArtifact, state: &RenderState) -> View {
        match self.registry.get_kind(&artifact.kind) {
            Some(definition) => definition.render(&artifact.data, state),
            None => {
                tracing::warn!(
                    tag = artifact.kind.tag(),
                    "no definition registered, rendering generic fallback"
                );
                fallback_view(artifact.kind.tag(), &artifact.data)
            }
        }
    }
}

/// Generic always-renderable view: raw tag plus a truncated JSON preview
#[must_use]
pub fn fallback_view(tag: &str, data: &Value) -> View {
    let pretty = serde_json::to_string_pretty(data).unwrap_or_default();
    let truncated = pretty.chars().count() > FALLBACK_PREVIEW_MAX;
    let excerpt = if truncated {
        pretty.chars().take(FALLBACK_PREVIEW_MAX).collect()
    } else {
        pretty
    };

    View::stack(vec![
        View::heading(3, tag.to_string()),
        View::JsonPreview { excerpt, truncated },
    ])
}
