//! Raw and normalized artifact records
//!
//! Tools persist artifacts in three historical envelope shapes: the real
//! content may live under `artifact`, under `payload`, or the record may be
//! the content itself. [`RawArtifactRecord`] captures all three tolerantly;
//! the processor collapses the ambiguity into [`NormalizedArtifact`].

use crate::kind::ArtifactKind;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Errors converting feed rows into records
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The feed row was not a JSON object
    #[error("record is not a JSON object")]
    NotAnObject,

    /// An envelope field had an unusable type
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),
}

/// A persisted artifact record, exactly as the backing query returns it
///
/// All envelope fields are optional; top-level fields that are not part of
/// the envelope are kept in `rest`, preserving the "record is itself the
/// data" shape through round-trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArtifactRecord {
    /// Backend record id
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Kind tag; records without one are skipped by the processor
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Preferred content wrapper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<Value>,

    /// Secondary content wrapper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,

    /// Owning chat thread
    #[serde(rename = "threadId", default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,

    /// Creation time, epoch milliseconds
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// All remaining top-level fields
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl RawArtifactRecord {
    /// Empty record with a kind tag
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Convert a feed row
    ///
    /// # Errors
    /// Returns [`RecordError::NotAnObject`] for non-object rows and
    /// [`RecordError::InvalidEnvelope`] when an envelope field has an
    /// unusable type.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        if !value.is_object() {
            return Err(RecordError::NotAnObject);
        }
        serde_json::from_value(value).map_err(|e| RecordError::InvalidEnvelope(e.to_string()))
    }

    /// With backend id
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// With `artifact` wrapper content
    #[must_use]
    pub fn with_artifact(mut self, artifact: Value) -> Self {
        self.artifact = Some(artifact);
        self
    }

    /// With `payload` wrapper content
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// With owning thread
    #[must_use]
    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    /// With creation time (epoch milliseconds)
    #[must_use]
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// With an arbitrary non-envelope top-level field
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.rest.insert(key.into(), value);
        self
    }

    /// The record itself as content, envelope fields stripped
    ///
    /// Used as the last resort of the default unwrap when neither wrapper
    /// field is present.
    #[must_use]
    pub fn self_data(&self) -> Value {
        Value::Object(self.rest.clone())
    }

    /// Default content unwrap: `artifact`, else `payload`, else the record
    /// itself minus envelope fields
    ///
    /// The single home of the wrapper-precedence rule; custom processor
    /// hooks that only reshape the unwrapped content start from this too.
    #[must_use]
    pub fn unwrap_content(&self) -> Value {
        self.artifact
            .clone()
            .or_else(|| self.payload.clone())
            .unwrap_or_else(|| self.self_data())
    }

    /// Metadata extracted from the envelope, present iff `createdAt` is set
    #[must_use]
    pub fn meta(&self) -> Option<ArtifactMeta> {
        self.created_at.map(|created_at| ArtifactMeta {
            id: self.id.clone(),
            thread_id: self.thread_id.clone(),
            created_at,
        })
    }
}

/// Envelope metadata carried alongside normalized content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMeta {
    /// Backend record id
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Owning chat thread
    #[serde(rename = "threadId", default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,

    /// Creation time, epoch milliseconds
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl ArtifactMeta {
    /// Creation time as a UTC timestamp, when the epoch value is in range
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at).single()
    }
}

/// Canonical post-processing shape consumed by the renderer and panel
///
/// Invariant: `data` never contains the envelope fields (`type`, `_id`,
/// `createdAt`, `threadId`) at top level — those live in `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedArtifact {
    /// Resolved kind
    #[serde(rename = "type")]
    pub kind: ArtifactKind,

    /// Normalized content
    pub data: Value,

    /// Envelope metadata, when the raw record carried a creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ArtifactMeta>,
}

impl NormalizedArtifact {
    /// Backend id, when metadata is present
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.id.as_deref())
    }
}
