//! Debut tracking
//!
//! Each artifact id plays its entrance animation exactly once per tracker
//! lifetime; remounts stay silent. The tracker is an injectable collaborator
//! (tests construct their own), bounded and TTL-evicted so a long-lived
//! session does not grow without limit — an evicted id simply debuts again,
//! which is cosmetic. Debut never gates functional behavior.

use easel_artifact::ArtifactKind;
use moka::sync::Cache;
use std::time::Duration;

/// Entrance transition family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Slide in from the side; used by slide-like artifacts
    Slide,
    /// Quiet fade; used by low-salience artifacts
    Fade,
    /// Default pop
    Pop,
}

impl TransitionKind {
    /// Transition family for an artifact kind
    #[must_use]
    pub fn for_kind(kind: &ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Presentation => TransitionKind::Slide,
            ArtifactKind::ToolRun | ArtifactKind::SearchResult => TransitionKind::Fade,
            _ => TransitionKind::Pop,
        }
    }
}

/// Parameters of one entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebutAnimation {
    /// Transition family
    pub transition: TransitionKind,
    /// Animation length
    pub duration: Duration,
    /// Delay before the animation starts
    pub delay: Duration,
}

impl DebutAnimation {
    /// Animation parameters for an artifact kind
    #[must_use]
    pub fn for_kind(kind: &ArtifactKind) -> Self {
        let transition = TransitionKind::for_kind(kind);
        let duration = match transition {
            TransitionKind::Slide => Duration::from_millis(400),
            TransitionKind::Fade => Duration::from_millis(250),
            TransitionKind::Pop => Duration::from_millis(300),
        };
        Self {
            transition,
            duration,
            delay: Duration::ZERO,
        }
    }
}

/// Default bound on remembered artifact ids
pub const DEFAULT_DEBUT_CAPACITY: u64 = 4096;

/// Default retention for remembered artifact ids
pub const DEFAULT_DEBUT_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Remembers which artifact ids have already debuted
///
/// Inserts are idempotent; two mounts racing on the same id can at worst
/// both observe a debut, which is harmless.
#[derive(Debug, Clone)]
pub struct DebutTracker {
    seen: Cache<String, ()>,
}

impl DebutTracker {
    /// Tracker with default capacity and TTL
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity_and_ttl(DEFAULT_DEBUT_CAPACITY, DEFAULT_DEBUT_TTL)
    }

    /// Tracker with explicit bounds; tests use small ones
    #[must_use]
    pub fn with_capacity_and_ttl(capacity: u64, ttl: Duration) -> Self {
        Self {
            seen: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Begin a debut for an artifact id
    ///
    /// Returns the animation on the id's first sighting, `None` on every
    /// later one.
    pub fn begin(&self, artifact_id: &str, kind: &ArtifactKind) -> Option<DebutAnimation> {
        if self.seen.contains_key(artifact_id) {
            return None;
        }
        self.seen.insert(artifact_id.to_string(), ());
        Some(DebutAnimation::for_kind(kind))
    }

    /// Whether an id has already debuted
    #[must_use]
    pub fn has_debuted(&self, artifact_id: &str) -> bool {
        self.seen.contains_key(artifact_id)
    }

    /// Forget every debut; tests call this between cases
    pub fn reset(&self) {
        self.seen.invalidate_all();
    }
}

impl Default for DebutTracker {
    fn default() -> Self {
        Self::new()
    }
}
