//! Functional tests for the normalization and rendering pipeline.
//!
//! These tests exercise the guarantees the chat surface depends on:
//! - Wrapper ambiguity collapses deterministically (artifact > payload >
//!   self) and double-processing loses nothing.
//! - Records without a kind tag are skipped, never rendered.
//! - Unknown tags degrade to the generic JSON preview; rendering is total.
//! - Batch normalization preserves feed order and isolates per-record
//!   failures of custom processor hooks.
//!
//! They are intentionally "fat" compared to unit tests: each scenario runs
//! raw records through processor and renderer end-to-end, the way the host
//! list does.

use easel_artifact::{ArtifactKind, RawArtifactRecord, RenderState, Tone, View};
use easel_pipeline::{ArtifactProcessor, ArtifactRenderer};
use easel_registry::ArtifactRegistry;
use easel_test_utils::{
    raw_meal_suggestions_empty, raw_program_plan, raw_tool_run_error, raw_unknown,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

fn pipeline() -> (ArtifactProcessor, ArtifactRenderer) {
    let registry = Arc::new(ArtifactRegistry::with_defaults());
    (
        ArtifactProcessor::new(Arc::clone(&registry)),
        ArtifactRenderer::new(registry),
    )
}

/// Normalizing already-normalized content must change nothing: re-wrapping
/// the produced `data` under the same tag and processing again yields the
/// identical `data`.
#[tokio::test]
async fn normalization_is_idempotent_on_unwrapped_content() {
    let (processor, _) = pipeline();

    let raw = RawArtifactRecord::new("lead_qualification").with_payload(json!({
        "companyName": "Acme Robotics",
        "idealFitScore": 82,
        "idealFitReason": "Large distributed workforce",
    }));
    let first = processor.process(&raw).await.unwrap();

    // Rebuild the "record is itself the data" shape from the first pass.
    let mut rewrapped = json!({"type": "lead_qualification"});
    for (key, value) in first.data.as_object().unwrap() {
        rewrapped[key.as_str()] = value.clone();
    }
    let second = processor
        .process(&RawArtifactRecord::from_value(rewrapped).unwrap())
        .await
        .unwrap();

    assert_eq!(second.data, first.data);
    assert_eq!(second.kind, first.kind);
}

/// A record without a `type` field is dropped before rendering.
#[tokio::test]
async fn record_without_kind_is_never_rendered() {
    let (processor, _) = pipeline();
    let raw = RawArtifactRecord::default().with_payload(json!({"foo": 1}));
    assert!(processor.process(&raw).await.is_none());
}

/// `artifact` wins over `payload` when both wrappers are present.
#[tokio::test]
async fn artifact_wrapper_takes_precedence() {
    let (processor, _) = pipeline();
    let raw = RawArtifactRecord::new("x")
        .with_artifact(json!({"a": 1}))
        .with_payload(json!({"a": 2}));

    let normalized = processor.process(&raw).await.unwrap();
    assert_eq!(normalized.data, json!({"a": 1}));
}

/// Feed order survives batch normalization: creation stamps [3, 1, 2] stay
/// [3, 1, 2]. The pipeline never re-sorts.
#[tokio::test]
async fn batch_preserves_feed_order() {
    let (processor, _) = pipeline();
    let raws: Vec<RawArtifactRecord> = [3_i64, 1, 2]
        .into_iter()
        .map(|stamp| {
            RawArtifactRecord::new("tool_run")
                .with_created_at(stamp)
                .with_payload(json!({"toolName": format!("tool-{stamp}")}))
        })
        .collect();

    let normalized = processor.process_batch(&raws).await;
    let stamps: Vec<i64> = normalized
        .iter()
        .map(|n| n.meta.as_ref().unwrap().created_at)
        .collect();
    assert_eq!(stamps, vec![3, 1, 2]);
}

/// One record whose custom hook fails must not take the batch down with it;
/// that record falls back to the default unwrap.
#[tokio::test]
async fn failing_custom_hook_is_isolated_per_record() {
    let (processor, _) = pipeline();
    let broken_payload = json!({"suggestions": ["not an object"]});
    let raws = vec![
        raw_program_plan(),
        RawArtifactRecord::new("meal_suggestions").with_payload(broken_payload.clone()),
        raw_tool_run_error(),
    ];

    let normalized = processor.process_batch(&raws).await;
    assert_eq!(normalized.len(), 3);
    assert_eq!(normalized[0].kind, ArtifactKind::ProgramPlan);
    assert_eq!(normalized[1].data, broken_payload);
    assert_eq!(normalized[2].kind, ArtifactKind::ToolRun);
}

/// A program plan flows raw → normalized → view with its days and meal
/// slots intact.
#[tokio::test]
async fn program_plan_renders_days_and_slots() {
    let (processor, renderer) = pipeline();

    let normalized = processor.process(&raw_program_plan()).await.unwrap();
    assert_eq!(normalized.data["officeId"], json!("nyc-hq"));

    let view = renderer.render(&normalized, &RenderState::default());
    assert!(view.contains_text("nyc-hq"));
    assert!(view.contains_text("2025-12-01"));
    assert!(view.contains_text("lunch"));
}

/// A tag the registry never anticipated still renders — as the generic
/// JSON preview carrying the payload.
#[tokio::test]
async fn unknown_tag_renders_generic_preview() {
    let (processor, renderer) = pipeline();

    let normalized = processor.process(&raw_unknown()).await.unwrap();
    assert_eq!(
        normalized.kind,
        ArtifactKind::Other("unknown_future_type".to_string())
    );

    let view = renderer.render(&normalized, &RenderState::default());
    assert!(view.contains_text("unknown_future_type"));
    assert!(view.contains_text("\"x\": 1"));
}

/// An empty suggestion grid renders its header, not a crash.
#[tokio::test]
async fn empty_meal_grid_renders_header() {
    let (processor, renderer) = pipeline();

    let normalized = processor
        .process(&raw_meal_suggestions_empty())
        .await
        .unwrap();
    let view = renderer.render(&normalized, &RenderState::default());
    assert!(view.contains_text("Found 0 options in Austin, TX"));
}

/// An errored tool run shows the error banner and nothing of the output.
#[tokio::test]
async fn tool_run_error_shows_banner_only() {
    let (processor, renderer) = pipeline();

    let normalized = processor.process(&raw_tool_run_error()).await.unwrap();
    let view = renderer.render(&normalized, &RenderState::default());

    assert_eq!(view.find_banners(), vec![(Tone::Danger, "timeout")]);
    assert!(!view.has_table());
}

/// A registered definition's async custom processor hook replaces the
/// default unwrap entirely, even when it needs to await.
#[tokio::test]
async fn async_custom_hook_overrides_default_unwrap() {
    use async_trait::async_trait;
    use easel_registry::{ArtifactTypeDefinition, Icon, ProcessError};

    struct SlowUnwrapDefinition;

    #[async_trait]
    impl ArtifactTypeDefinition for SlowUnwrapDefinition {
        fn kind(&self) -> ArtifactKind {
            ArtifactKind::Other("wrapped_blob".to_string())
        }
        fn title(&self) -> &str {
            "Wrapped blob"
        }
        fn description(&self) -> &str {
            "test definition with an async processor"
        }
        fn icon(&self) -> Icon {
            Icon::File
        }
        fn render(&self, _data: &Value, _state: &RenderState) -> View {
            View::Empty
        }
        async fn process(
            &self,
            raw: &RawArtifactRecord,
        ) -> Option<Result<Value, ProcessError>> {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            let inner = raw.unwrap_content();
            Some(Ok(json!({"inner": inner, "reshaped": true})))
        }
    }

    let mut registry = ArtifactRegistry::with_defaults();
    registry.register(Arc::new(SlowUnwrapDefinition));
    let processor = ArtifactProcessor::new(Arc::new(registry));

    let raw = RawArtifactRecord::new("wrapped_blob").with_payload(json!({"x": 1}));
    let normalized = processor.process(&raw).await.unwrap();

    assert_eq!(normalized.data["reshaped"], json!(true));
    assert_eq!(normalized.data["inner"], json!({"x": 1}));
}

proptest! {
    /// Rendering is total: any unregistered tag with any simple payload
    /// falls back to the generic preview and never panics.
    #[test]
    fn prop_fallback_is_total_over_unknown_tags(
        tag in "[a-z_]{1,24}",
        n in any::<i64>(),
    ) {
        prop_assume!(!easel_artifact::KNOWN_TAGS.contains(&tag.as_str()));

        let registry = Arc::new(ArtifactRegistry::with_defaults());
        let renderer = ArtifactRenderer::new(registry);
        let artifact = easel_artifact::NormalizedArtifact {
            kind: ArtifactKind::from_tag(&tag),
            data: json!({"n": n}),
            meta: None,
        };

        let view = renderer.render(&artifact, &RenderState::default());
        prop_assert!(matches!(view, View::Stack { .. }), "expected Stack view");
        prop_assert!(view.contains_text(&tag));
    }

    /// The default unwrap never loses non-envelope fields.
    #[test]
    fn prop_self_unwrap_keeps_every_field(
        key in "[a-z]{1,12}",
        value in any::<u32>(),
    ) {
        prop_assume!(key != "type" && key != "artifact" && key != "payload");

        let raw = RawArtifactRecord::new("some_custom_tag")
            .with_field(&key, Value::from(value));
        prop_assert_eq!(
            raw.unwrap_content().get(&key).cloned(),
            Some(Value::from(value))
        );
    }
}
