//! Card actions and toolbar items
//!
//! Actions operate on a single artifact through [`ActionContext`]; toolbar
//! items reach outside it through [`ToolbarContext`]. Shared concrete
//! actions used by several definitions live here; kind-specific ones live in
//! the definition modules.

use crate::context::{ActionContext, EffectError, ToolbarContext};
use crate::definition::Icon;
use serde_json::Value;

/// Errors from invoking an action or toolbar item
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// An outbound effect was denied
    #[error("effect failed: {0}")]
    Effect(#[from] EffectError),

    /// The action itself failed
    #[error("action failed: {0}")]
    Failed(String),
}

/// A context-dependent operation on one artifact
///
/// `is_disabled` is re-evaluated against a fresh context on every render and
/// before every invocation; it is never cached. Any idempotence guarantee is
/// the implementation's responsibility — the host fires once per click.
pub trait ArtifactAction: Send + Sync {
    /// Icon shown on the action button
    fn icon(&self) -> Icon;

    /// Tooltip/accessibility description
    fn description(&self) -> &str;

    /// Whether the action is currently unavailable
    fn is_disabled(&self, _cx: &ActionContext<'_>) -> bool {
        false
    }

    /// Perform the action
    ///
    /// # Errors
    /// Returns [`ActionError`] when the operation or one of its effects
    /// fails; the host contains the error.
    fn invoke(&self, cx: &ActionContext<'_>) -> Result<(), ActionError>;
}

/// An operation that reaches outside the artifact
pub trait ToolbarItem: Send + Sync {
    /// Icon shown on the toolbar button
    fn icon(&self) -> Icon;

    /// Tooltip/accessibility description
    fn description(&self) -> &str;

    /// Perform the operation
    ///
    /// # Errors
    /// Returns [`ActionError`] when the operation or one of its effects
    /// fails; the host contains the error.
    fn invoke(&self, cx: &ToolbarContext<'_>) -> Result<(), ActionError>;
}

/// Copy the artifact data to the clipboard as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyJsonAction;

impl ArtifactAction for CopyJsonAction {
    fn icon(&self) -> Icon {
        Icon::Copy
    }

    fn description(&self) -> &str {
        "Copy as JSON"
    }

    fn is_disabled(&self, cx: &ActionContext<'_>) -> bool {
        cx.data.is_null()
    }

    fn invoke(&self, cx: &ActionContext<'_>) -> Result<(), ActionError> {
        let text = serde_json::to_string_pretty(cx.data)
            .map_err(|e| ActionError::Failed(e.to_string()))?;
        cx.effects.copy_to_clipboard(&text)?;
        Ok(())
    }
}

/// Bring up the print dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintAction;

impl ArtifactAction for PrintAction {
    fn icon(&self) -> Icon {
        Icon::Printer
    }

    fn description(&self) -> &str {
        "Print"
    }

    fn invoke(&self, cx: &ActionContext<'_>) -> Result<(), ActionError> {
        cx.effects.trigger_print()?;
        Ok(())
    }
}

/// Open the URL stored at a top-level payload field
#[derive(Debug, Clone)]
pub struct OpenUrlAction {
    field: String,
    description: String,
}

impl OpenUrlAction {
    /// Action opening `data[field]`
    #[must_use]
    pub fn new(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            description: description.into(),
        }
    }

    fn url<'a>(&self, data: &'a Value) -> Option<&'a str> {
        data.get(&self.field).and_then(Value::as_str)
    }
}

impl ArtifactAction for OpenUrlAction {
    fn icon(&self) -> Icon {
        Icon::ExternalLink
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_disabled(&self, cx: &ActionContext<'_>) -> bool {
        self.url(cx.data).is_none()
    }

    fn invoke(&self, cx: &ActionContext<'_>) -> Result<(), ActionError> {
        let url = self
            .url(cx.data)
            .ok_or_else(|| ActionError::Failed(format!("no url at field {}", self.field)))?;
        cx.effects.open_external(url)?;
        Ok(())
    }
}

/// Post a fixed follow-up prompt into the chat
#[derive(Debug, Clone)]
pub struct FollowupItem {
    message: String,
    description: String,
}

impl FollowupItem {
    /// Item sending `message` verbatim
    #[must_use]
    pub fn new(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: description.into(),
        }
    }
}

impl ToolbarItem for FollowupItem {
    fn icon(&self) -> Icon {
        Icon::MessageSquare
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn invoke(&self, cx: &ToolbarContext<'_>) -> Result<(), ActionError> {
        cx.chat.send_message(&self.message)?;
        Ok(())
    }
}
