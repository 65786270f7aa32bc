//! Easel Artifact Model
//!
//! Data model shared across the Easel workspace.
//!
//! # Core Concepts
//!
//! - [`ArtifactKind`]: kind tag with an explicit `Other` bucket for tags the
//!   registry never anticipated
//! - [`RawArtifactRecord`]: the persisted record in any of its three
//!   historical envelope shapes
//! - [`NormalizedArtifact`]: canonical `{type, data, meta}` shape consumed by
//!   renderer and panel
//! - [`View`]: rendering output as a pure data tree
//! - [`RenderState`]: ambient state threaded into every render

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod kind;
mod record;
mod state;
mod view;

pub use kind::{ArtifactKind, KNOWN_TAGS};
pub use record::{ArtifactMeta, NormalizedArtifact, RawArtifactRecord, RecordError};
pub use state::{RenderState, VersionCursor, ViewMode};
pub use view::{Tone, View};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
