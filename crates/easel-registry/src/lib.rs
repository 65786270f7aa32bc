//! Easel Type Registry
//!
//! Artifact type definitions and the registry that resolves kind tags to
//! them.
//!
//! # Core Concepts
//!
//! - [`ArtifactTypeDefinition`]: descriptor for one kind — renderer,
//!   actions, toolbar, lifecycle hooks
//! - [`ArtifactRegistry`]: tag → definition mapping, built once at startup
//!   and passed by `Arc` (no global singleton)
//! - [`ActionContext`] / [`ToolbarContext`]: fully-typed invocation
//!   contexts, assembled fresh per invocation
//! - [`MetadataHandle`]: write-through handle onto a panel's metadata bag
//!   that no-ops once the panel is unmounted
//! - [`defs`]: the builtin definitions, one module per kind
//!
//! # Example
//!
//! ```rust,ignore
//! use easel_registry::ArtifactRegistry;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ArtifactRegistry::with_defaults());
//! let def = registry.get("meal_suggestions").expect("builtin");
//! let view = def.render(&data, &state);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod action;
mod context;
mod definition;
pub mod defs;
mod registry;

pub use action::{
    ActionError, ArtifactAction, CopyJsonAction, FollowupItem, OpenUrlAction, PrintAction,
    ToolbarItem,
};
pub use context::{
    ActionContext, ChannelChat, ChatHandle, EffectError, EffectSink, MetadataHandle,
    ToolbarContext,
};
pub use definition::{ArtifactTypeDefinition, Icon, ProcessError, StreamPart};
pub use registry::ArtifactRegistry;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use easel_artifact::{ArtifactKind, RenderState};
    use serde_json::json;

    #[test]
    fn builtin_definitions_render_their_own_payloads() {
        let registry = ArtifactRegistry::with_defaults();

        let def = registry.get_kind(&ArtifactKind::MealSuggestions).unwrap();
        let view = def.render(
            &json!({"query": "tacos", "location": "Austin, TX", "suggestions": []}),
            &RenderState::default(),
        );
        assert!(view.contains_text("Found 0 options in Austin, TX"));
    }

    #[test]
    fn every_builtin_tolerates_empty_data() {
        let registry = ArtifactRegistry::with_defaults();
        for def in registry.definitions() {
            let view = def.render(&json!({}), &RenderState::default());
            assert!(
                view.is_empty(),
                "{} should render empty on empty data",
                def.kind()
            );
        }
    }

    #[test]
    fn every_builtin_tolerates_non_object_data() {
        let registry = ArtifactRegistry::with_defaults();
        for def in registry.definitions() {
            let view = def.render(&json!(42), &RenderState::default());
            assert!(
                view.is_empty(),
                "{} should render empty on scalar data",
                def.kind()
            );
        }
    }
}
