//! Artifact type registry
//!
//! A constructed object, not a global: build it once at startup (usually via
//! [`ArtifactRegistry::with_defaults`]) and pass it by `Arc` to the
//! processor, renderer, and panels. After startup it is read-only.

use crate::definition::ArtifactTypeDefinition;
use crate::defs;
use easel_artifact::ArtifactKind;
use indexmap::IndexMap;
use std::sync::Arc;

/// Mapping from kind tag to type definition
///
/// Registration is append/overwrite-only; re-registering a tag silently
/// replaces the previous definition (last writer wins). A `get` miss is
/// never an error — callers fall back to the generic view.
pub struct ArtifactRegistry {
    defs: IndexMap<String, Arc<dyn ArtifactTypeDefinition>>,
}

impl Default for ArtifactRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ArtifactRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactRegistry")
            .field("definition_count", &self.defs.len())
            .field("tags", &self.defs.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ArtifactRegistry {
    /// Empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            defs: IndexMap::new(),
        }
    }

    /// Registry with every builtin definition, in display order
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(defs::ProgramPlanDefinition::new()));
        registry.register(Arc::new(defs::LeadQualificationDefinition::new()));
        registry.register(Arc::new(defs::SearchResultDefinition::new()));
        registry.register(Arc::new(defs::ToolRunDefinition::new()));
        registry.register(Arc::new(defs::MealSuggestionsDefinition::new()));
        registry.register(Arc::new(defs::ResearchReportDefinition::new()));
        registry.register(Arc::new(defs::MarketAnalysisDefinition::new()));
        registry.register(Arc::new(defs::PresentationDefinition::new()));
        registry.register(Arc::new(defs::YoutubeTranscriptDefinition::new()));
        registry.register(Arc::new(defs::TodoListDefinition::new()));
        registry
    }

    /// Register a definition under its kind tag
    ///
    /// Overwrites any previous definition for the tag.
    pub fn register(&mut self, definition: Arc<dyn ArtifactTypeDefinition>) {
        let tag = definition.kind().tag().to_string();
        if self.defs.insert(tag.clone(), definition).is_some() {
            tracing::debug!(tag, "artifact type definition overwritten");
        }
    }

    /// Definition for a tag
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<Arc<dyn ArtifactTypeDefinition>> {
        self.defs.get(tag).cloned()
    }

    /// Definition for a kind
    #[must_use]
    pub fn get_kind(&self, kind: &ArtifactKind) -> Option<Arc<dyn ArtifactTypeDefinition>> {
        self.get(kind.tag())
    }

    /// Whether a tag is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.defs.contains_key(tag)
    }

    /// All definitions, in registration order
    pub fn definitions(&self) -> impl Iterator<Item = &Arc<dyn ArtifactTypeDefinition>> {
        self.defs.values()
    }

    /// Number of registered definitions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
