//! Thread surface
//!
//! The ordered collection of panels shown for one chat thread. Mount order
//! follows the feed order — the surface never re-sorts. Switching threads
//! unmounts everything, discarding all instance state; durability lives in
//! the backend records, not here.

use crate::debut::DebutTracker;
use crate::panel::ArtifactPanel;
use easel_artifact::{NormalizedArtifact, View};
use easel_pipeline::ArtifactRenderer;
use easel_registry::ArtifactRegistry;
use std::sync::Arc;

/// Ordered mounted panels for one thread
pub struct Surface {
    registry: Arc<ArtifactRegistry>,
    tracker: Arc<DebutTracker>,
    panels: Vec<ArtifactPanel>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("panel_count", &self.panels.len())
            .finish()
    }
}

impl Surface {
    /// Surface over a registry and a debut tracker
    #[must_use]
    pub fn new(registry: Arc<ArtifactRegistry>, tracker: Arc<DebutTracker>) -> Self {
        Self {
            registry,
            tracker,
            panels: Vec::new(),
        }
    }

    /// Mount a batch of processed artifacts, in order
    ///
    /// The live query re-delivers the whole list; artifacts whose id is
    /// already mounted are skipped so a re-query does not duplicate panels.
    /// Returns how many panels were mounted.
    pub fn mount_feed(&mut self, artifacts: Vec<NormalizedArtifact>) -> usize {
        let mut mounted = 0;
        for artifact in artifacts {
            if let Some(id) = artifact.id() {
                if self.panel_by_id(id).is_some() {
                    continue;
                }
            }
            self.panels
                .push(ArtifactPanel::mount(artifact, &self.registry, &self.tracker));
            mounted += 1;
        }
        mounted
    }

    /// Panels in mount order
    #[inline]
    #[must_use]
    pub fn panels(&self) -> &[ArtifactPanel] {
        &self.panels
    }

    /// Mutable panel at `index`
    pub fn panel_mut(&mut self, index: usize) -> Option<&mut ArtifactPanel> {
        self.panels.get_mut(index)
    }

    /// Panel holding the artifact with backend id `id`
    #[must_use]
    pub fn panel_by_id(&self, id: &str) -> Option<&ArtifactPanel> {
        self.panels
            .iter()
            .find(|panel| panel.artifact().and_then(NormalizedArtifact::id) == Some(id))
    }

    /// Unmount the panel holding `id`, discarding its state
    pub fn unmount(&mut self, id: &str) -> bool {
        let before = self.panels.len();
        self.panels
            .retain(|panel| panel.artifact().and_then(NormalizedArtifact::id) != Some(id));
        self.panels.len() < before
    }

    /// Unmount everything (thread switch)
    pub fn unmount_all(&mut self) {
        self.panels.clear();
    }

    /// Render every panel, in mount order
    #[must_use]
    pub fn render_all(&self, renderer: &ArtifactRenderer) -> Vec<View> {
        self.panels
            .iter()
            .map(|panel| panel.render(renderer))
            .collect()
    }

    /// Number of mounted panels
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether nothing is mounted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
