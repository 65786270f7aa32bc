//! Tool invocation outcome
//!
//! Shows what a tool call did: a status badge, then either an error banner
//! or the tool's output. An errored run shows the error only — no output
//! table.

use crate::action::{ActionError, ArtifactAction, CopyJsonAction, ToolbarItem};
use crate::context::ToolbarContext;
use crate::definition::{ArtifactTypeDefinition, Icon};
use crate::defs::parse_payload;
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RenderState, Tone, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Tool run payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolRunPayload {
    pub tool_name: Option<String>,
    /// `pending`, `ok`, or `error`
    pub status: Option<String>,
    pub output: Option<Value>,
    pub output_summary: Option<String>,
    pub error: Option<String>,
}

fn status_tone(status: &str) -> Tone {
    match status {
        "pending" => Tone::Info,
        "ok" => Tone::Success,
        "error" => Tone::Danger,
        _ => Tone::Neutral,
    }
}

/// Renders a JSON object as a two-column table, anything else as code
fn render_output(output: &Value) -> View {
    match output {
        Value::Object(entries) => View::Table {
            headers: vec!["Field".to_string(), "Value".to_string()],
            rows: entries
                .iter()
                .map(|(key, value)| {
                    let rendered = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    vec![key.clone(), rendered]
                })
                .collect(),
        },
        other => View::CodeBlock {
            language: Some("json".to_string()),
            code: serde_json::to_string_pretty(other).unwrap_or_default(),
        },
    }
}

/// Asks the assistant to run the tool again
struct RerunItem;

impl ToolbarItem for RerunItem {
    fn icon(&self) -> Icon {
        Icon::MessageSquare
    }

    fn description(&self) -> &str {
        "Re-run this tool"
    }

    fn invoke(&self, cx: &ToolbarContext<'_>) -> Result<(), ActionError> {
        let payload: ToolRunPayload = parse_payload(cx.data)
            .ok_or_else(|| ActionError::Failed("unreadable tool run payload".to_string()))?;
        let tool = payload.tool_name.unwrap_or_else(|| "the last".to_string());
        cx.chat
            .send_message(&format!("Please re-run the {tool} tool."))?;
        Ok(())
    }
}

/// Type definition for `tool_run`
pub struct ToolRunDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
    toolbar: Vec<Arc<dyn ToolbarItem>>,
}

impl ToolRunDefinition {
    /// Definition with copy action and re-run toolbar item
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction)],
            toolbar: vec![Arc::new(RerunItem)],
        }
    }
}

impl Default for ToolRunDefinition {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactTypeDefinition for ToolRunDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ToolRun
    }

    fn title(&self) -> &str {
        "Tool run"
    }

    fn description(&self) -> &str {
        "Outcome of a tool invocation"
    }

    fn icon(&self) -> Icon {
        Icon::Wrench
    }

    fn render(&self, data: &Value, _state: &RenderState) -> View {
        let Some(payload) = parse_payload::<ToolRunPayload>(data) else {
            return View::Empty;
        };
        let Some(tool_name) = payload.tool_name else {
            return View::Empty;
        };

        let mut children = vec![View::heading(3, format!("Tool: {tool_name}"))];
        let status = payload.status.as_deref().unwrap_or("pending");
        children.push(View::badge(status, status_tone(status)));

        match status {
            "error" => {
                let message = payload.error.unwrap_or_else(|| "unknown error".to_string());
                children.push(View::banner(Tone::Danger, message));
            }
            "pending" => children.push(View::text("Running…")),
            _ => {
                if let Some(summary) = &payload.output_summary {
                    children.push(View::text(summary.clone()));
                }
                if let Some(output) = &payload.output {
                    children.push(render_output(output));
                }
            }
        }

        View::stack(children)
    }

    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &self.actions
    }

    fn toolbar(&self) -> &[Arc<dyn ToolbarItem>] {
        &self.toolbar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ChannelChat, MockEffectSink};
    use serde_json::json;

    #[test]
    fn errored_run_shows_banner_without_output_table() {
        let data = json!({
            "toolName": "web_search",
            "status": "error",
            "error": "timeout",
            "output": {"ignored": true},
        });
        let view = ToolRunDefinition::new().render(&data, &RenderState::default());

        let banners = view.find_banners();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0], (Tone::Danger, "timeout"));
        assert!(!view.has_table());
    }

    #[test]
    fn ok_run_shows_summary_and_output_table() {
        let data = json!({
            "toolName": "meal_filter",
            "status": "ok",
            "outputSummary": "12 matches",
            "output": {"matches": 12, "source": "doordash"},
        });
        let view = ToolRunDefinition::new().render(&data, &RenderState::default());

        assert!(view.contains_text("12 matches"));
        assert!(view.has_table());
        assert!(view.find_banners().is_empty());
    }

    #[test]
    fn pending_run_shows_progress_text() {
        let data = json!({"toolName": "web_search", "status": "pending"});
        let view = ToolRunDefinition::new().render(&data, &RenderState::default());
        assert!(view.contains_text("Running…"));
    }

    #[test]
    fn missing_tool_name_renders_empty() {
        let data = json!({"status": "ok"});
        assert!(ToolRunDefinition::new()
            .render(&data, &RenderState::default())
            .is_empty());
    }

    #[test]
    fn rerun_item_mentions_the_tool() {
        let data = json!({"toolName": "web_search", "status": "error"});
        let (chat, mut receiver) = ChannelChat::new();
        let effects = MockEffectSink::new();
        let cx = ToolbarContext {
            kind: &ArtifactKind::ToolRun,
            data: &data,
            metadata: json!({}),
            chat: &chat,
            effects: &effects,
        };

        RerunItem.invoke(&cx).unwrap();
        assert_eq!(
            receiver.try_recv().unwrap(),
            "Please re-run the web_search tool."
        );
    }
}
