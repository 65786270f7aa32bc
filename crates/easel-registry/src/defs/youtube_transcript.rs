//! YouTube video transcript
//!
//! Transcript segments keyed by `MM:SS` or `HH:MM:SS` timestamps. Producers
//! occasionally emit malformed timestamps; those render as given rather than
//! failing the segment.

use crate::action::{ArtifactAction, CopyJsonAction};
use crate::definition::{ArtifactTypeDefinition, Icon};
use crate::defs::parse_payload;
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RenderState, View};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Transcript payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YoutubeTranscriptPayload {
    pub video_title: Option<String>,
    pub video_url: Option<String>,
    pub segments: Option<Vec<TranscriptSegment>>,
}

/// One transcript segment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranscriptSegment {
    pub timestamp: Option<String>,
    pub text: Option<String>,
}

/// Type definition for `youtube_transcript`
pub struct YoutubeTranscriptDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
    timestamp_format: Regex,
}

impl YoutubeTranscriptDefinition {
    /// Definition with the copy action
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction)],
            // MM:SS or HH:MM:SS, seconds always two digits
            timestamp_format: Regex::new(r"^(?:\d{1,2}:)?\d{1,2}:\d{2}$")
                .expect("timestamp pattern is valid"),
        }
    }

    fn segment_label(&self, segment: &TranscriptSegment) -> String {
        let text = segment.text.clone().unwrap_or_default();
        match &segment.timestamp {
            Some(ts) if self.timestamp_format.is_match(ts) => format!("[{ts}] {text}"),
            Some(ts) => format!("{ts} {text}"),
            None => text,
        }
    }
}

impl Default for YoutubeTranscriptDefinition {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactTypeDefinition for YoutubeTranscriptDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::YoutubeTranscript
    }

    fn title(&self) -> &str {
        "Video transcript"
    }

    fn description(&self) -> &str {
        "Timestamped transcript of a video"
    }

    fn icon(&self) -> Icon {
        Icon::Video
    }

    fn render(&self, data: &Value, _state: &RenderState) -> View {
        let Some(payload) = parse_payload::<YoutubeTranscriptPayload>(data) else {
            return View::Empty;
        };
        let Some(segments) = payload.segments else {
            return View::Empty;
        };

        let mut children = Vec::new();
        if let Some(title) = &payload.video_title {
            children.push(View::heading(3, title.clone()));
        }
        if let Some(url) = &payload.video_url {
            children.push(View::Link {
                url: url.clone(),
                label: "Watch".to_string(),
            });
        }
        children.push(View::List {
            ordered: false,
            items: segments
                .iter()
                .map(|segment| View::text(self.segment_label(segment)))
                .collect(),
        });

        View::stack(children)
    }

    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &self.actions
    }
}
