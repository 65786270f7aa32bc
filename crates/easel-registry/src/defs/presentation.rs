//! Slide presentation outline

use crate::action::{ArtifactAction, CopyJsonAction, PrintAction};
use crate::definition::{ArtifactTypeDefinition, Icon};
use crate::defs::parse_payload;
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RenderState, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Presentation payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationPayload {
    pub title: Option<String>,
    pub slides: Option<Vec<Slide>>,
}

/// One slide
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slide {
    pub title: Option<String>,
    pub bullets: Vec<String>,
}

/// Type definition for `presentation`
pub struct PresentationDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
}

impl PresentationDefinition {
    /// Definition with copy and print actions
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction), Arc::new(PrintAction)],
        }
    }
}

impl Default for PresentationDefinition {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactTypeDefinition for PresentationDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Presentation
    }

    fn title(&self) -> &str {
        "Presentation"
    }

    fn description(&self) -> &str {
        "Slide deck outline"
    }

    fn icon(&self) -> Icon {
        Icon::Presentation
    }

    fn render(&self, data: &Value, _state: &RenderState) -> View {
        let Some(payload) = parse_payload::<PresentationPayload>(data) else {
            return View::Empty;
        };
        let Some(slides) = payload.slides else {
            return View::Empty;
        };

        let mut children = Vec::new();
        if let Some(title) = &payload.title {
            children.push(View::heading(2, title.clone()));
        }
        children.push(View::text(format!("{} slides", slides.len())));
        children.push(View::List {
            ordered: true,
            items: slides
                .iter()
                .map(|slide| {
                    let mut parts = Vec::new();
                    if let Some(title) = &slide.title {
                        parts.push(View::text(title.clone()));
                    }
                    if !slide.bullets.is_empty() {
                        parts.push(View::List {
                            ordered: false,
                            items: slide
                                .bullets
                                .iter()
                                .map(|b| View::text(b.clone()))
                                .collect(),
                        });
                    }
                    View::stack(parts)
                })
                .collect(),
        });

        View::stack(children)
    }

    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &self.actions
    }
}
