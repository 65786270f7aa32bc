//! Easel Pipeline
//!
//! The path from a raw feed row to a rendered view:
//!
//! 1. [`ArtifactProcessor`] collapses the ambiguous envelope into the
//!    canonical `{type, data, meta}` shape, honoring per-kind custom
//!    processor hooks and isolating their failures per record
//! 2. [`ArtifactRenderer`] resolves the kind through the registry and
//!    renders, degrading to [`fallback_view`] for tags the registry never
//!    anticipated
//!
//! Both are thin objects over a shared `Arc<ArtifactRegistry>`; the
//! type→view mapping cannot drift from the registered definitions because
//! dispatch goes through the registry itself.

#![warn(unreachable_pub)]

mod processor;
mod renderer;

pub use processor::ArtifactProcessor;
pub use renderer::{fallback_view, ArtifactRenderer, FALLBACK_PREVIEW_MAX};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
