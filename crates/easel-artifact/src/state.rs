//! Ambient render state
//!
//! The state a lifecycle host threads into every render: display mode, the
//! per-instance metadata bag, the version cursor, and the readonly flag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display mode for a rendered artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Read-only display
    #[default]
    View,
    /// Inline editing surface
    Edit,
    /// Side-by-side comparison
    Diff,
}

/// Position within an artifact's version history
///
/// Reserved interface for future multi-version artifacts; the current system
/// appends new artifacts rather than revising existing ones, so the cursor
/// always sits at the single version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCursor {
    /// Index of the displayed version
    pub index: usize,
    /// Whether the displayed version is the latest
    pub is_current: bool,
}

impl Default for VersionCursor {
    fn default() -> Self {
        Self {
            index: 0,
            is_current: true,
        }
    }
}

/// Everything ambient a render sees besides the artifact data itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    /// Display mode
    pub mode: ViewMode,
    /// Per-instance metadata bag, seeded by `initialize`
    pub metadata: Value,
    /// Version cursor
    pub version: VersionCursor,
    /// Whether interaction is disabled
    pub is_readonly: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            metadata: Value::Object(Map::new()),
            version: VersionCursor::default(),
            is_readonly: false,
        }
    }
}

impl RenderState {
    /// Read a metadata key, when the bag is an object holding it
    #[must_use]
    pub fn metadata_field(&self, key: &str) -> Option<&Value> {
        self.metadata.as_object().and_then(|m| m.get(key))
    }
}
