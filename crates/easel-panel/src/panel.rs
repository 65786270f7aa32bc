//! Artifact panel
//!
//! Owns the mutable per-instance state for one artifact across its displayed
//! lifetime: phase, metadata bag, mode, version cursor, readonly flag, and
//! the debut decision. Action and toolbar invocations get a context built
//! fresh each time; errors inside an action are contained here so a failing
//! action cannot leave the instance inconsistent.

use crate::debut::{DebutAnimation, DebutTracker};
use crate::error::PanelError;
use crate::phase::{validate_transition, PanelPhase};
use easel_artifact::{
    NormalizedArtifact, RenderState, VersionCursor, View, ViewMode,
};
use easel_pipeline::ArtifactRenderer;
use easel_registry::{
    ActionContext, ActionError, ArtifactAction, ArtifactRegistry, ArtifactTypeDefinition,
    ChatHandle, EffectSink, MetadataHandle, ToolbarContext, ToolbarItem,
};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Result of asking the panel to invoke an action
#[derive(Debug)]
pub enum ActionOutcome {
    /// The action ran to completion
    Invoked,
    /// `is_disabled` was true; `invoke` was not called
    Disabled,
    /// The action ran and failed; the error was contained
    Failed(ActionError),
}

/// Lifecycle host for one artifact instance
///
/// Dropping the panel is unmounting: all instance state goes with it, and
/// outstanding [`MetadataHandle`]s turn into no-ops.
pub struct ArtifactPanel {
    artifact: Option<NormalizedArtifact>,
    definition: Option<Arc<dyn ArtifactTypeDefinition>>,
    phase: PanelPhase,
    metadata: Arc<Mutex<Value>>,
    mode: ViewMode,
    version: VersionCursor,
    readonly: bool,
    debut: Option<DebutAnimation>,
}

impl std::fmt::Debug for ArtifactPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactPanel")
            .field("phase", &self.phase)
            .field("kind", &self.artifact.as_ref().map(|a| a.kind.tag()))
            .field("id", &self.artifact.as_ref().and_then(NormalizedArtifact::id))
            .finish()
    }
}

impl ArtifactPanel {
    /// Panel in the Loading phase, before processing has resolved
    #[must_use]
    pub fn new_loading() -> Self {
        Self {
            artifact: None,
            definition: None,
            phase: PanelPhase::Loading,
            metadata: Arc::new(Mutex::new(Value::Object(Map::new()))),
            mode: ViewMode::View,
            version: VersionCursor::default(),
            readonly: false,
            debut: None,
        }
    }

    /// Mount a resolved artifact directly
    ///
    /// Runs `initialize` once and records the debut decision; the panel
    /// lands in Collapsed.
    #[must_use]
    pub fn mount(
        artifact: NormalizedArtifact,
        registry: &ArtifactRegistry,
        tracker: &DebutTracker,
    ) -> Self {
        let mut panel = Self::new_loading();
        panel.resolve(artifact, registry, tracker);
        panel.phase = PanelPhase::Collapsed;
        panel
    }

    /// Complete a Loading panel with its processed artifact
    ///
    /// # Errors
    /// Returns [`PanelError::AlreadyResolved`] when the panel already holds
    /// an artifact — there is no Collapsed → Loading re-entry.
    pub fn complete(
        &mut self,
        artifact: NormalizedArtifact,
        registry: &ArtifactRegistry,
        tracker: &DebutTracker,
    ) -> Result<(), PanelError> {
        if self.artifact.is_some() {
            return Err(PanelError::AlreadyResolved);
        }
        validate_transition(self.phase, PanelPhase::Collapsed)?;
        self.resolve(artifact, registry, tracker);
        self.phase = PanelPhase::Collapsed;
        Ok(())
    }

    fn resolve(
        &mut self,
        artifact: NormalizedArtifact,
        registry: &ArtifactRegistry,
        tracker: &DebutTracker,
    ) {
        let definition = registry.get_kind(&artifact.kind);
        // Debut is keyed by backend id; records without one never animate.
        self.debut = artifact
            .id()
            .and_then(|id| tracker.begin(id, &artifact.kind));
        if let Some(definition) = &definition {
            definition.initialize(&artifact.data, &self.metadata_handle());
        }
        self.definition = definition;
        self.artifact = Some(artifact);
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Whether processing has resolved
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.artifact.is_some()
    }

    /// The resolved artifact
    #[inline]
    #[must_use]
    pub fn artifact(&self) -> Option<&NormalizedArtifact> {
        self.artifact.as_ref()
    }

    /// Debut animation chosen at mount, when this instance debuted
    #[inline]
    #[must_use]
    pub fn debut(&self) -> Option<&DebutAnimation> {
        self.debut.as_ref()
    }

    /// Write-through handle onto this panel's metadata bag
    #[must_use]
    pub fn metadata_handle(&self) -> MetadataHandle {
        MetadataHandle::from_slot(&self.metadata)
    }

    /// Snapshot of the metadata bag
    #[must_use]
    pub fn metadata(&self) -> Value {
        self.metadata.lock().clone()
    }

    /// Set the display mode
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Set the readonly flag
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// Expand to the modal view
    ///
    /// # Errors
    /// Returns [`PanelError::IllegalTransition`] unless Collapsed.
    pub fn expand(&mut self) -> Result<(), PanelError> {
        validate_transition(self.phase, PanelPhase::Expanded)?;
        self.phase = PanelPhase::Expanded;
        Ok(())
    }

    /// Return to the card view, keeping all state
    ///
    /// # Errors
    /// Returns [`PanelError::IllegalTransition`] unless Expanded.
    pub fn collapse(&mut self) -> Result<(), PanelError> {
        validate_transition(self.phase, PanelPhase::Collapsed)?;
        self.phase = PanelPhase::Collapsed;
        Ok(())
    }

    /// Toggle between card and modal views
    ///
    /// # Errors
    /// Returns [`PanelError::NotResolved`] while Loading.
    pub fn toggle_expanded(&mut self) -> Result<(), PanelError> {
        match self.phase {
            PanelPhase::Collapsed => self.expand(),
            PanelPhase::Expanded => self.collapse(),
            PanelPhase::Loading => Err(PanelError::NotResolved),
        }
    }

    /// Ambient state for the next render, built from live instance state
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            metadata: self.metadata(),
            version: self.version,
            is_readonly: self.readonly,
        }
    }

    /// Render at the current phase
    #[must_use]
    pub fn render(&self, renderer: &ArtifactRenderer) -> View {
        match &self.artifact {
            None => View::Loading {
                message: "Preparing artifact…".to_string(),
            },
            Some(artifact) => renderer.render(artifact, &self.render_state()),
        }
    }

    /// Actions offered by the resolved definition
    #[must_use]
    pub fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        self.definition.as_deref().map_or(&[], |def| def.actions())
    }

    /// Toolbar items offered by the resolved definition
    #[must_use]
    pub fn toolbar(&self) -> &[Arc<dyn ToolbarItem>] {
        self.definition.as_deref().map_or(&[], |def| def.toolbar())
    }

    /// Invoke the action at `index` with a freshly built context
    ///
    /// `is_disabled` is evaluated now, against the current state; a disabled
    /// action is never invoked. An error inside `invoke` is logged and
    /// returned as [`ActionOutcome::Failed`] rather than propagated.
    ///
    /// # Errors
    /// Returns [`PanelError::NotResolved`] while Loading and
    /// [`PanelError::NoSuchAction`] for an out-of-range index.
    pub fn invoke_action(
        &self,
        index: usize,
        effects: &dyn EffectSink,
    ) -> Result<ActionOutcome, PanelError> {
        let artifact = self.artifact.as_ref().ok_or(PanelError::NotResolved)?;
        let action = self
            .actions()
            .get(index)
            .cloned()
            .ok_or(PanelError::NoSuchAction(index))?;

        let context = ActionContext {
            kind: &artifact.kind,
            data: &artifact.data,
            mode: self.mode,
            metadata: self.metadata(),
            metadata_handle: self.metadata_handle(),
            version: self.version,
            is_readonly: self.readonly,
            effects,
        };

        if action.is_disabled(&context) {
            return Ok(ActionOutcome::Disabled);
        }
        match action.invoke(&context) {
            Ok(()) => Ok(ActionOutcome::Invoked),
            Err(error) => {
                tracing::error!(
                    kind = artifact.kind.tag(),
                    action = action.description(),
                    %error,
                    "action failed"
                );
                Ok(ActionOutcome::Failed(error))
            }
        }
    }

    /// Invoke the toolbar item at `index` with a freshly built context
    ///
    /// # Errors
    /// Returns [`PanelError::NotResolved`] while Loading and
    /// [`PanelError::NoSuchToolbarItem`] for an out-of-range index.
    pub fn invoke_toolbar(
        &self,
        index: usize,
        chat: &dyn ChatHandle,
        effects: &dyn EffectSink,
    ) -> Result<ActionOutcome, PanelError> {
        let artifact = self.artifact.as_ref().ok_or(PanelError::NotResolved)?;
        let item = self
            .toolbar()
            .get(index)
            .cloned()
            .ok_or(PanelError::NoSuchToolbarItem(index))?;

        let context = ToolbarContext {
            kind: &artifact.kind,
            data: &artifact.data,
            metadata: self.metadata(),
            chat,
            effects,
        };

        match item.invoke(&context) {
            Ok(()) => Ok(ActionOutcome::Invoked),
            Err(error) => {
                tracing::error!(
                    kind = artifact.kind.tag(),
                    item = item.description(),
                    %error,
                    "toolbar item failed"
                );
                Ok(ActionOutcome::Failed(error))
            }
        }
    }
}
