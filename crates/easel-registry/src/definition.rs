//! Artifact type definition trait
//!
//! One definition per kind tag, registered once at startup and immutable for
//! the process lifetime. The trait is dyn-first: the registry stores
//! `Arc<dyn ArtifactTypeDefinition>` and everything downstream dispatches
//! through it.

use crate::action::{ArtifactAction, ToolbarItem};
use crate::context::MetadataHandle;
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RawArtifactRecord, RenderState, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Icon identifiers used by definitions and actions
///
/// `name()` yields the asset name the host UI maps to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Calendar,
    Target,
    Search,
    Wrench,
    Utensils,
    BookOpen,
    TrendingUp,
    Presentation,
    Video,
    CheckSquare,
    File,
    Copy,
    Printer,
    ExternalLink,
    MessageSquare,
}

impl Icon {
    /// Asset name for this icon
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Calendar => "calendar",
            Icon::Target => "target",
            Icon::Search => "search",
            Icon::Wrench => "wrench",
            Icon::Utensils => "utensils",
            Icon::BookOpen => "book-open",
            Icon::TrendingUp => "trending-up",
            Icon::Presentation => "presentation",
            Icon::Video => "video",
            Icon::CheckSquare => "check-square",
            Icon::File => "file",
            Icon::Copy => "copy",
            Icon::Printer => "printer",
            Icon::ExternalLink => "external-link",
            Icon::MessageSquare => "message-square",
        }
    }
}

/// One incremental update to a streaming artifact
///
/// No current tool streams artifact content; the hook exists so streaming
/// producers can be added without changing the definition contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamPart {
    /// Producer-defined part discriminator
    pub part_type: String,
    /// Part content
    pub content: Value,
}

/// Failure of a custom processor hook
///
/// The processor isolates these per record: a failing hook downgrades that
/// one record to the default unwrap instead of failing the batch.
#[derive(Debug, Clone, thiserror::Error)]
#[error("processor hook failed: {0}")]
pub struct ProcessError(pub String);

/// Registered descriptor for one artifact kind
///
/// # Contract
/// - `render` is pure and must tolerate partially-populated data: when the
///   payload's core field is missing, return [`View::Empty`], never panic
/// - `initialize` runs once per mounted instance, after data is available
///   and before first paint; it must stay idempotent if called again
/// - `process` overrides the default content unwrap; `None` means "use the
///   default"
#[async_trait]
pub trait ArtifactTypeDefinition: Send + Sync + 'static {
    /// The kind tag this definition owns
    fn kind(&self) -> ArtifactKind;

    /// Display title
    fn title(&self) -> &str;

    /// Display description
    fn description(&self) -> &str;

    /// Display icon
    fn icon(&self) -> Icon;

    /// Map normalized data plus ambient state to a view
    fn render(&self, data: &Value, state: &RenderState) -> View;

    /// Ordered card-level actions
    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &[]
    }

    /// Ordered toolbar items
    fn toolbar(&self) -> &[Arc<dyn ToolbarItem>] {
        &[]
    }

    /// One-time setup on first mount; seeds derived metadata
    fn initialize(&self, _data: &Value, _metadata: &MetadataHandle) {}

    /// Apply an incremental update to a streaming artifact
    async fn on_stream_part(&self, _part: &StreamPart, _metadata: &MetadataHandle) {}

    /// Custom normalizer overriding the default unwrap
    ///
    /// Returning `None` selects the default unwrap; `Some(Err(_))` is
    /// isolated by the processor.
    async fn process(&self, _raw: &RawArtifactRecord) -> Option<Result<Value, ProcessError>> {
        None
    }

    /// JSON schema of the expected payload, when the definition has one
    fn payload_schema(&self) -> Option<schemars::schema::RootSchema> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_are_kebab_case_assets() {
        assert_eq!(Icon::BookOpen.name(), "book-open");
        assert_eq!(Icon::ExternalLink.name(), "external-link");
        assert_eq!(
            serde_json::to_string(&Icon::CheckSquare).unwrap(),
            "\"check-square\""
        );
    }

    #[tokio::test]
    async fn default_hooks_are_no_ops() {
        struct Bare;

        #[async_trait]
        impl ArtifactTypeDefinition for Bare {
            fn kind(&self) -> ArtifactKind {
                ArtifactKind::Other("bare".to_string())
            }
            fn title(&self) -> &str {
                "Bare"
            }
            fn description(&self) -> &str {
                "minimal definition"
            }
            fn icon(&self) -> Icon {
                Icon::File
            }
            fn render(&self, _data: &Value, _state: &RenderState) -> View {
                View::Empty
            }
        }

        let bare = Bare;
        assert!(bare.actions().is_empty());
        assert!(bare.toolbar().is_empty());
        assert!(bare.payload_schema().is_none());

        let raw = RawArtifactRecord::new("bare");
        assert!(bare.process(&raw).await.is_none());
    }
}
