//! Testing utilities for the Easel workspace
//!
//! Shared fixtures and recording doubles for the outbound seams.

#![allow(missing_docs)]

use easel_artifact::RawArtifactRecord;
use easel_registry::{ChatHandle, EffectError, EffectSink};
use parking_lot::Mutex;
use serde_json::json;
use ulid::Ulid;

/// Fresh backend-style record id
#[must_use]
pub fn fresh_id() -> String {
    Ulid::new().to_string()
}

/// Install a test tracing subscriber once; later calls are no-ops
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Program plan record matching the nyc-hq catering scenario
#[must_use]
pub fn raw_program_plan() -> RawArtifactRecord {
    RawArtifactRecord::new("program_plan")
        .with_id(fresh_id())
        .with_created_at(1_764_547_200_000)
        .with_artifact(json!({
            "officeId": "nyc-hq",
            "timeRange": {"startDate": "2025-12-01", "endDate": "2025-12-05"},
            "currency": "USD",
            "mealsByDay": [{
                "date": "2025-12-01",
                "meals": [{
                    "name": "Chicken Bowl",
                    "type": "lunch",
                    "dietaryTags": ["Gluten-Free"],
                }],
            }],
        }))
}

/// Meal suggestions record with an empty grid
#[must_use]
pub fn raw_meal_suggestions_empty() -> RawArtifactRecord {
    RawArtifactRecord::new("meal_suggestions")
        .with_id(fresh_id())
        .with_created_at(1_764_547_200_001)
        .with_artifact(json!({
            "query": "tacos",
            "location": "Austin, TX",
            "suggestions": [],
        }))
}

/// Tool run record that timed out
#[must_use]
pub fn raw_tool_run_error() -> RawArtifactRecord {
    RawArtifactRecord::new("tool_run")
        .with_id(fresh_id())
        .with_created_at(1_764_547_200_002)
        .with_payload(json!({
            "toolName": "web_search",
            "status": "error",
            "error": "timeout",
        }))
}

/// Record with a tag no registry knows
#[must_use]
pub fn raw_unknown() -> RawArtifactRecord {
    RawArtifactRecord::new("unknown_future_type")
        .with_id(fresh_id())
        .with_payload(json!({"x": 1}))
}

/// One recorded outbound effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEffect {
    Clipboard(String),
    OpenedUrl(String),
    Printed,
}

/// [`EffectSink`] double that records every effect
///
/// `deny_clipboard` simulates a clipboard permission denial.
#[derive(Debug, Default)]
pub struct RecordingEffects {
    pub deny_clipboard: bool,
    log: Mutex<Vec<RecordedEffect>>,
}

impl RecordingEffects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn denying_clipboard() -> Self {
        Self {
            deny_clipboard: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedEffect> {
        self.log.lock().clone()
    }
}

impl EffectSink for RecordingEffects {
    fn copy_to_clipboard(&self, text: &str) -> Result<(), EffectError> {
        if self.deny_clipboard {
            return Err(EffectError::Clipboard("denied by test".to_string()));
        }
        self.log
            .lock()
            .push(RecordedEffect::Clipboard(text.to_string()));
        Ok(())
    }

    fn open_external(&self, url: &str) -> Result<(), EffectError> {
        self.log
            .lock()
            .push(RecordedEffect::OpenedUrl(url.to_string()));
        Ok(())
    }

    fn trigger_print(&self) -> Result<(), EffectError> {
        self.log.lock().push(RecordedEffect::Printed);
        Ok(())
    }
}

/// [`ChatHandle`] double that records every message
#[derive(Debug, Default)]
pub struct RecordingChat {
    messages: Mutex<Vec<String>>,
}

impl RecordingChat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl ChatHandle for RecordingChat {
    fn send_message(&self, text: &str) -> Result<(), EffectError> {
        self.messages.lock().push(text.to_string());
        Ok(())
    }
}
