//! Invocation contexts and outbound seams
//!
//! Actions and toolbar items never touch the outside world directly; every
//! side effect goes through [`EffectSink`] (clipboard, external links, print)
//! or [`ChatHandle`] (follow-up chat messages). Contexts are assembled fresh
//! on every invocation and never stored.

use easel_artifact::{ArtifactKind, VersionCursor, ViewMode};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::{Arc, Weak};
use tokio::sync::mpsc;

/// Errors from outbound side effects
#[derive(Debug, Clone, thiserror::Error)]
pub enum EffectError {
    /// Clipboard write denied or unavailable
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// External URL could not be opened
    #[error("cannot open external url: {0}")]
    Open(String),

    /// Print dialog could not be triggered
    #[error("print dialog unavailable: {0}")]
    Print(String),

    /// The chat channel has been closed
    #[error("chat channel closed")]
    ChatClosed,
}

/// Outbound side effects available to actions
///
/// The host UI supplies the real implementation; tests supply a recorder.
#[cfg_attr(test, mockall::automock)]
pub trait EffectSink: Send + Sync {
    /// Write text to the system clipboard
    ///
    /// # Errors
    /// Returns [`EffectError::Clipboard`] when the write is denied.
    fn copy_to_clipboard(&self, text: &str) -> Result<(), EffectError>;

    /// Open an external URL in the surrounding browser
    ///
    /// # Errors
    /// Returns [`EffectError::Open`] when the URL cannot be opened.
    fn open_external(&self, url: &str) -> Result<(), EffectError>;

    /// Bring up the print dialog for the current artifact
    ///
    /// # Errors
    /// Returns [`EffectError::Print`] when printing is unavailable.
    fn trigger_print(&self) -> Result<(), EffectError>;
}

/// Escape hatch into the surrounding chat pipeline
pub trait ChatHandle: Send + Sync {
    /// Post a synthesized follow-up prompt into the chat
    ///
    /// # Errors
    /// Returns [`EffectError::ChatClosed`] when the chat is gone.
    fn send_message(&self, text: &str) -> Result<(), EffectError>;
}

/// Channel-backed [`ChatHandle`]
///
/// The chat transport (out of scope here) drains the receiving end.
#[derive(Debug, Clone)]
pub struct ChannelChat {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelChat {
    /// Create a chat handle and the receiver the transport will drain
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ChatHandle for ChannelChat {
    fn send_message(&self, text: &str) -> Result<(), EffectError> {
        self.sender
            .send(text.to_string())
            .map_err(|_| EffectError::ChatClosed)
    }
}

/// Writable handle onto a panel's metadata bag
///
/// Holds a weak reference to the panel's slot: once the panel is unmounted,
/// every write through an outstanding handle becomes a no-op instead of a
/// dangling write. An in-flight action completing after unmount is therefore
/// harmless.
#[derive(Debug, Clone, Default)]
pub struct MetadataHandle {
    slot: Weak<Mutex<Value>>,
}

impl MetadataHandle {
    /// Handle onto a live metadata slot
    #[must_use]
    pub fn from_slot(slot: &Arc<Mutex<Value>>) -> Self {
        Self {
            slot: Arc::downgrade(slot),
        }
    }

    /// Handle that is never live; every write no-ops
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Replace the metadata bag
    ///
    /// Returns `false` (and does nothing) when the panel is unmounted.
    pub fn set(&self, value: Value) -> bool {
        match self.slot.upgrade() {
            Some(slot) => {
                *slot.lock() = value;
                true
            }
            None => false,
        }
    }

    /// Shallow-merge object keys into the bag
    ///
    /// When either side is not an object the patch replaces the bag.
    /// Returns `false` (and does nothing) when the panel is unmounted.
    pub fn merge(&self, patch: Value) -> bool {
        let Some(slot) = self.slot.upgrade() else {
            return false;
        };
        let mut guard = slot.lock();
        match (guard.as_object_mut(), patch) {
            (Some(bag), Value::Object(entries)) => {
                for (key, value) in entries {
                    bag.insert(key, value);
                }
            }
            (_, patch) => *guard = patch,
        }
        true
    }

    /// Current bag contents, when the panel is still mounted
    #[must_use]
    pub fn snapshot(&self) -> Option<Value> {
        self.slot.upgrade().map(|slot| slot.lock().clone())
    }

    /// Whether the backing panel is still mounted
    #[inline]
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.slot.strong_count() > 0
    }
}

/// Read/write context passed to an action's `invoke` and `is_disabled`
///
/// Built fresh for every invocation; `metadata` is a snapshot taken at build
/// time, `metadata_handle` writes through to the live bag.
pub struct ActionContext<'a> {
    /// Kind of the artifact the action belongs to
    pub kind: &'a ArtifactKind,
    /// Normalized artifact data
    pub data: &'a Value,
    /// Current display mode
    pub mode: ViewMode,
    /// Snapshot of the metadata bag
    pub metadata: Value,
    /// Write-through handle onto the live bag
    pub metadata_handle: MetadataHandle,
    /// Version cursor
    pub version: VersionCursor,
    /// Whether the panel is readonly
    pub is_readonly: bool,
    /// Outbound side effects
    pub effects: &'a dyn EffectSink,
}

/// Context passed to a toolbar item's `invoke`
///
/// Toolbar items reach outside the artifact (chat follow-ups, external
/// links) rather than mutating its own state.
pub struct ToolbarContext<'a> {
    /// Kind of the artifact the item belongs to
    pub kind: &'a ArtifactKind,
    /// Normalized artifact data
    pub data: &'a Value,
    /// Snapshot of the metadata bag
    pub metadata: Value,
    /// The surrounding chat
    pub chat: &'a dyn ChatHandle,
    /// Outbound side effects
    pub effects: &'a dyn EffectSink,
}
