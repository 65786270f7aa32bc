//! Task checklist
//!
//! Seeds `completedCount`/`totalCount` into the metadata bag on first mount
//! so actions and the view share one tally instead of re-counting.

use crate::action::{ArtifactAction, CopyJsonAction};
use crate::context::MetadataHandle;
use crate::definition::{ArtifactTypeDefinition, Icon};
use crate::defs::parse_payload;
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RenderState, Tone, View};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// Todo list payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoListPayload {
    pub title: Option<String>,
    pub items: Option<Vec<TodoItem>>,
}

/// One checklist item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoItem {
    pub text: Option<String>,
    pub done: bool,
}

/// Type definition for `todo_list`
pub struct TodoListDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
}

impl TodoListDefinition {
    /// Definition with the copy action
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction)],
        }
    }
}

impl Default for TodoListDefinition {
    fn default() -> Self {
        Self::new()
    }
}

fn tally(items: &[TodoItem]) -> (usize, usize) {
    let done = items.iter().filter(|item| item.done).count();
    (done, items.len())
}

#[async_trait]
impl ArtifactTypeDefinition for TodoListDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::TodoList
    }

    fn title(&self) -> &str {
        "Todo list"
    }

    fn description(&self) -> &str {
        "Checklist of tasks"
    }

    fn icon(&self) -> Icon {
        Icon::CheckSquare
    }

    fn render(&self, data: &Value, state: &RenderState) -> View {
        let Some(payload) = parse_payload::<TodoListPayload>(data) else {
            return View::Empty;
        };
        let Some(items) = payload.items else {
            return View::Empty;
        };

        let mut children = Vec::new();
        if let Some(title) = &payload.title {
            children.push(View::heading(3, title.clone()));
        }

        // Prefer the initialized tally; recompute when metadata is absent.
        let (done, total) = match (
            state
                .metadata_field("completedCount")
                .and_then(Value::as_u64),
            state.metadata_field("totalCount").and_then(Value::as_u64),
        ) {
            (Some(done), Some(total)) => (done as usize, total as usize),
            _ => tally(&items),
        };
        children.push(View::badge(
            format!("{done}/{total} done"),
            if done == total && total > 0 {
                Tone::Success
            } else {
                Tone::Info
            },
        ));

        children.push(View::List {
            ordered: false,
            items: items
                .iter()
                .map(|item| {
                    let mark = if item.done { "[x]" } else { "[ ]" };
                    let text = item.text.clone().unwrap_or_default();
                    View::text(format!("{mark} {text}"))
                })
                .collect(),
        });

        View::stack(children)
    }

    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &self.actions
    }

    fn initialize(&self, data: &Value, metadata: &MetadataHandle) {
        let Some(payload) = parse_payload::<TodoListPayload>(data) else {
            return;
        };
        let (done, total) = tally(&payload.items.unwrap_or_default());
        metadata.merge(json!({
            "completedCount": done,
            "totalCount": total,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn renders_progress_and_checkmarks() {
        let data = json!({
            "title": "Launch prep",
            "items": [
                {"text": "Book venue", "done": true},
                {"text": "Send invites", "done": false},
            ],
        });
        let view = TodoListDefinition::new().render(&data, &RenderState::default());

        assert!(view.contains_text("Launch prep"));
        assert!(view.contains_text("1/2 done"));
        assert!(view.contains_text("[x] Book venue"));
        assert!(view.contains_text("[ ] Send invites"));
    }

    #[test]
    fn initialize_seeds_tally_metadata() {
        let data = json!({
            "items": [{"text": "a", "done": true}, {"text": "b", "done": true}],
        });
        let slot = Arc::new(Mutex::new(json!({})));
        let handle = MetadataHandle::from_slot(&slot);

        TodoListDefinition::new().initialize(&data, &handle);
        assert_eq!(
            *slot.lock(),
            json!({"completedCount": 2, "totalCount": 2})
        );
    }

    #[test]
    fn initialize_is_idempotent() {
        let data = json!({"items": [{"text": "a", "done": false}]});
        let slot = Arc::new(Mutex::new(json!({})));
        let handle = MetadataHandle::from_slot(&slot);

        let def = TodoListDefinition::new();
        def.initialize(&data, &handle);
        let first = slot.lock().clone();
        def.initialize(&data, &handle);
        assert_eq!(*slot.lock(), first);
    }

    #[test]
    fn render_prefers_seeded_tally() {
        let data = json!({"items": [{"text": "a", "done": false}]});
        let state = RenderState {
            metadata: json!({"completedCount": 4, "totalCount": 5}),
            ..RenderState::default()
        };
        let view = TodoListDefinition::new().render(&data, &state);
        assert!(view.contains_text("4/5 done"));
    }

    #[test]
    fn missing_items_renders_empty() {
        let data = json!({"title": "Empty"});
        assert!(TodoListDefinition::new()
            .render(&data, &RenderState::default())
            .is_empty());
    }
}
