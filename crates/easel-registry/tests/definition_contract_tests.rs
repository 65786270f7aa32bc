//! Contract tests over every builtin definition.
//!
//! Whatever a producer tool emits, a definition must hold these invariants:
//! tags are unique and match the kind enum, display metadata is present,
//! and renders tolerate empty, partial, and wrongly-shaped data without
//! panicking.

use easel_artifact::{ArtifactKind, RenderState, ViewMode};
use easel_registry::ArtifactRegistry;
use serde_json::json;
use std::collections::HashSet;

#[test]
fn builtin_tags_are_unique_and_known() {
    let registry = ArtifactRegistry::with_defaults();
    let mut seen = HashSet::new();
    for def in registry.definitions() {
        let kind = def.kind();
        assert!(kind.is_known(), "builtin {} must be a known kind", kind);
        assert!(seen.insert(kind.tag().to_string()), "duplicate tag {kind}");
    }
    assert_eq!(seen.len(), easel_artifact::KNOWN_TAGS.len());
}

#[test]
fn builtin_display_metadata_is_present() {
    let registry = ArtifactRegistry::with_defaults();
    for def in registry.definitions() {
        assert!(!def.title().is_empty(), "{} has no title", def.kind());
        assert!(
            !def.description().is_empty(),
            "{} has no description",
            def.kind()
        );
        assert!(!def.icon().name().is_empty());
    }
}

#[test]
fn renders_tolerate_hostile_data_shapes() {
    let registry = ArtifactRegistry::with_defaults();
    let hostile = [
        json!({}),
        json!(null),
        json!(42),
        json!("a string"),
        json!([1, 2, 3]),
        json!({"suggestions": "not an array"}),
        json!({"mealsByDay": {"not": "an array"}}),
        json!({"items": 17}),
    ];

    for def in registry.definitions() {
        for data in &hostile {
            // Must not panic; emptiness is the expected degradation.
            let _ = def.render(data, &RenderState::default());
        }
    }
}

#[test]
fn renders_are_pure_across_modes() {
    let registry = ArtifactRegistry::with_defaults();
    let data = json!({
        "query": "tacos",
        "location": "Austin, TX",
        "suggestions": [{"title": "Al Pastor"}],
    });
    let def = registry.get("meal_suggestions").unwrap();

    let view_mode = def.render(&data, &RenderState::default());
    let edit_mode = def.render(
        &data,
        &RenderState {
            mode: ViewMode::Edit,
            ..RenderState::default()
        },
    );
    // Mode does not change this definition's content.
    assert_eq!(view_mode, edit_mode);

    // Same data, same state, same view: rendering is a pure function.
    assert_eq!(view_mode, def.render(&data, &RenderState::default()));
}

#[test]
fn schemas_are_exposed_where_payloads_are_stable() {
    let registry = ArtifactRegistry::with_defaults();
    for tag in ["program_plan", "lead_qualification", "meal_suggestions"] {
        assert!(
            registry.get(tag).unwrap().payload_schema().is_some(),
            "{tag} should expose a payload schema"
        );
    }
}

proptest::proptest! {
    /// Any tag outside the builtin set misses the default registry; misses
    /// are `None`, never a panic.
    #[test]
    fn prop_unknown_tags_miss_quietly(tag in "[a-z_]{1,24}") {
        proptest::prop_assume!(!easel_artifact::KNOWN_TAGS.contains(&tag.as_str()));
        let registry = ArtifactRegistry::with_defaults();
        proptest::prop_assert!(registry.get(&tag).is_none());
    }
}

#[test]
fn every_kind_round_trips_through_the_registry() {
    let registry = ArtifactRegistry::with_defaults();
    for tag in easel_artifact::KNOWN_TAGS {
        let def = registry.get(tag).unwrap();
        assert_eq!(def.kind(), ArtifactKind::from_tag(tag));
    }
}
