//! Easel Panel
//!
//! The lifecycle host: per-instance state for every displayed artifact.
//!
//! # Core Concepts
//!
//! - [`PanelPhase`]: Loading → Collapsed ↔ Expanded, validated against an
//!   explicit transition table
//! - [`ArtifactPanel`]: owns phase, metadata bag, mode, version cursor, and
//!   the debut decision for one artifact instance
//! - [`DebutTracker`]: bounded, TTL-evicted memory of which artifact ids
//!   have already played their entrance animation
//! - [`Surface`]: the ordered panel list for one thread
//!
//! Unmounting is dropping: a panel's state (and the liveness of every
//! [`easel_registry::MetadataHandle`] onto it) ends when the value does.

#![warn(unreachable_pub)]

mod debut;
mod error;
mod panel;
mod phase;
mod surface;

pub use debut::{
    DebutAnimation, DebutTracker, TransitionKind, DEFAULT_DEBUT_CAPACITY, DEFAULT_DEBUT_TTL,
};
pub use error::PanelError;
pub use panel::{ActionOutcome, ArtifactPanel};
pub use phase::{allowed_transitions, validate_transition, PanelPhase};
pub use surface::Surface;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
