//! Error types for the lifecycle host

use crate::phase::PanelPhase;

/// Errors raised by panel lifecycle operations
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A phase transition outside the allowed table
    #[error("illegal phase transition: {from:?} -> {to:?}")]
    IllegalTransition {
        /// Phase the panel was in
        from: PanelPhase,
        /// Phase that was requested
        to: PanelPhase,
    },

    /// The panel already holds a resolved artifact
    #[error("artifact already resolved")]
    AlreadyResolved,

    /// The panel is still loading
    #[error("artifact not resolved yet")]
    NotResolved,

    /// Action index out of range
    #[error("no action at index {0}")]
    NoSuchAction(usize),

    /// Toolbar index out of range
    #[error("no toolbar item at index {0}")]
    NoSuchToolbarItem(usize),
}
