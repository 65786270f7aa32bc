//! Long-form research report
//!
//! The researcher agent emits a markdown body; it is parsed with
//! pulldown-cmark into headings, paragraphs, and code blocks so the host
//! renders structure instead of a wall of text.

use crate::action::{ArtifactAction, CopyJsonAction, PrintAction};
use crate::definition::{ArtifactTypeDefinition, Icon};
use crate::defs::parse_payload;
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RenderState, View};
use pulldown_cmark::{CodeBlockKind, Event, Parser as MdParser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Research report payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchReportPayload {
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Markdown body
    pub content: Option<String>,
    pub sources: Vec<Source>,
}

/// Cited source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Source {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// Walk markdown events into view nodes
fn markdown_to_views(content: &str) -> Vec<View> {
    let mut views = Vec::new();
    let mut text_run = String::new();
    let mut heading_level: Option<u8> = None;
    let mut code_language: Option<Option<String>> = None;

    let flush_text = |run: &mut String, views: &mut Vec<View>| {
        let trimmed = run.trim();
        if !trimmed.is_empty() {
            views.push(View::text(trimmed.to_string()));
        }
        run.clear();
    };

    for event in MdParser::new(content) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush_text(&mut text_run, &mut views);
                heading_level = Some(level as u8);
            }
            Event::End(TagEnd::Heading(_)) => {
                let level = heading_level.take().unwrap_or(2);
                let text = std::mem::take(&mut text_run);
                views.push(View::heading(level, text.trim().to_string()));
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                flush_text(&mut text_run, &mut views);
                code_language = Some(match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                        Some(lang.to_string())
                    }
                    _ => None,
                });
            }
            Event::End(TagEnd::CodeBlock) => {
                let language = code_language.take().flatten();
                views.push(View::CodeBlock {
                    language,
                    code: std::mem::take(&mut text_run).trim_end().to_string(),
                });
            }
            Event::End(TagEnd::Paragraph) => flush_text(&mut text_run, &mut views),
            Event::Text(text) | Event::Code(text) => text_run.push_str(&text),
            Event::SoftBreak | Event::HardBreak => text_run.push(' '),
            _ => {}
        }
    }
    flush_text(&mut text_run, &mut views);
    views
}

/// Type definition for `research_report`
pub struct ResearchReportDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
}

impl ResearchReportDefinition {
    /// Definition with copy and print actions
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction), Arc::new(PrintAction)],
        }
    }
}

impl Default for ResearchReportDefinition {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactTypeDefinition for ResearchReportDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ResearchReport
    }

    fn title(&self) -> &str {
        "Research report"
    }

    fn description(&self) -> &str {
        "Long-form research with cited sources"
    }

    fn icon(&self) -> Icon {
        Icon::BookOpen
    }

    fn render(&self, data: &Value, _state: &RenderState) -> View {
        let Some(payload) = parse_payload::<ResearchReportPayload>(data) else {
            return View::Empty;
        };
        if payload.title.is_none() && payload.content.is_none() {
            return View::Empty;
        }

        let mut children = Vec::new();
        if let Some(title) = &payload.title {
            children.push(View::heading(2, title.clone()));
        }
        if let Some(summary) = &payload.summary {
            children.push(View::text(summary.clone()));
        }
        if let Some(content) = &payload.content {
            children.extend(markdown_to_views(content));
        }
        if !payload.sources.is_empty() {
            let items = payload
                .sources
                .iter()
                .filter_map(|source| match (&source.title, &source.url) {
                    (Some(title), Some(url)) => Some(View::Link {
                        url: url.clone(),
                        label: title.clone(),
                    }),
                    (None, Some(url)) => Some(View::Link {
                        url: url.clone(),
                        label: url.clone(),
                    }),
                    (Some(title), None) => Some(View::text(title.clone())),
                    (None, None) => None,
                })
                .collect();
            children.push(View::section(
                "Sources",
                vec![View::List {
                    ordered: true,
                    items,
                }],
            ));
        }

        View::stack(children)
    }

    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn markdown_body_becomes_structure() {
        let data = json!({
            "title": "Catering market scan",
            "content": "# Findings\nDemand is up.\n\n## Methods\nWe sampled 40 vendors.\n```json\n{\"n\": 40}\n```",
        });
        let view = ResearchReportDefinition::new().render(&data, &RenderState::default());

        assert!(view.contains_text("Catering market scan"));
        assert!(view.contains_text("Findings"));
        assert!(view.contains_text("Demand is up."));
        assert!(view.contains_text("We sampled 40 vendors."));
        assert!(view.contains_text("{\"n\": 40}"));
    }

    #[test]
    fn sources_render_as_links() {
        let data = json!({
            "title": "Scan",
            "sources": [{"title": "Census", "url": "https://example.com/census"}],
        });
        let view = ResearchReportDefinition::new().render(&data, &RenderState::default());
        assert!(view.contains_text("Sources"));
        assert!(view.contains_text("Census"));
    }

    #[test]
    fn needs_title_or_content() {
        let data = json!({"summary": "only a summary"});
        assert!(ResearchReportDefinition::new()
            .render(&data, &RenderState::default())
            .is_empty());
    }

    #[test]
    fn fenced_language_is_preserved() {
        let views = markdown_to_views("```rust\nfn main() {}\n```");
        assert_eq!(
            views,
            vec![View::CodeBlock {
                language: Some("rust".to_string()),
                code: "fn main() {}".to_string(),
            }]
        );
    }
}
