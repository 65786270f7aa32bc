//! Panel phase state machine
//!
//! A mounted panel moves Loading → Collapsed once processing and
//! `initialize` complete, then toggles Collapsed ↔ Expanded on user input.
//! There is no way back to Loading: a resolved artifact is never
//! re-processed in place. Unmounting is dropping the panel value.

use crate::error::PanelError;

/// Displayed phase of a mounted panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelPhase {
    /// Processing has not resolved; no actions available
    Loading,
    /// Steady state at card scale
    Collapsed,
    /// Modal full-size view; same data and actions
    Expanded,
}

/// Phases reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: PanelPhase) -> &'static [PanelPhase] {
    use PanelPhase::{Collapsed, Expanded, Loading};
    match from {
        Loading => &[Collapsed],
        Collapsed => &[Expanded],
        Expanded => &[Collapsed],
    }
}

/// Validate a phase transition
///
/// # Errors
/// Returns [`PanelError::IllegalTransition`] when `to` is not reachable
/// from `from`.
pub fn validate_transition(from: PanelPhase, to: PanelPhase) -> Result<(), PanelError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(PanelError::IllegalTransition { from, to })
    }
}
