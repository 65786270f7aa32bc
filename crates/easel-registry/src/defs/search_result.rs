//! Web search results

use crate::action::{ActionError, ArtifactAction, CopyJsonAction, ToolbarItem};
use crate::context::ToolbarContext;
use crate::definition::{ArtifactTypeDefinition, Icon};
use crate::defs::parse_payload;
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RenderState, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Search result payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResultPayload {
    pub query: Option<String>,
    pub results: Vec<SearchHit>,
}

/// One search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchHit {
    pub title: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
}

/// Opens the first hit in the surrounding browser
struct OpenFirstResultItem;

impl ToolbarItem for OpenFirstResultItem {
    fn icon(&self) -> Icon {
        Icon::ExternalLink
    }

    fn description(&self) -> &str {
        "Open top result"
    }

    fn invoke(&self, cx: &ToolbarContext<'_>) -> Result<(), ActionError> {
        let payload: SearchResultPayload = parse_payload(cx.data)
            .ok_or_else(|| ActionError::Failed("unreadable search payload".to_string()))?;
        let url = payload
            .results
            .iter()
            .find_map(|hit| hit.url.clone())
            .ok_or_else(|| ActionError::Failed("no result url".to_string()))?;
        cx.effects.open_external(&url)?;
        Ok(())
    }
}

/// Type definition for `search_result`
pub struct SearchResultDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
    toolbar: Vec<Arc<dyn ToolbarItem>>,
}

impl SearchResultDefinition {
    /// Definition with copy action and open-top-result toolbar item
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction)],
            toolbar: vec![Arc::new(OpenFirstResultItem)],
        }
    }
}

impl Default for SearchResultDefinition {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactTypeDefinition for SearchResultDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::SearchResult
    }

    fn title(&self) -> &str {
        "Search results"
    }

    fn description(&self) -> &str {
        "Results of a web search"
    }

    fn icon(&self) -> Icon {
        Icon::Search
    }

    fn render(&self, data: &Value, _state: &RenderState) -> View {
        let Some(payload) = parse_payload::<SearchResultPayload>(data) else {
            return View::Empty;
        };
        let Some(query) = payload.query else {
            return View::Empty;
        };

        let mut children = vec![View::heading(3, format!("Search: {query}"))];
        let items: Vec<View> = payload
            .results
            .iter()
            .map(|hit| {
                let mut parts = Vec::new();
                match (&hit.title, &hit.url) {
                    (Some(title), Some(url)) => parts.push(View::Link {
                        url: url.clone(),
                        label: title.clone(),
                    }),
                    (Some(title), None) => parts.push(View::text(title.clone())),
                    (None, Some(url)) => parts.push(View::Link {
                        url: url.clone(),
                        label: url.clone(),
                    }),
                    (None, None) => {}
                }
                if let Some(snippet) = &hit.snippet {
                    parts.push(View::text(snippet.clone()));
                }
                View::stack(parts)
            })
            .collect();
        children.push(View::List {
            ordered: false,
            items,
        });

        View::stack(children)
    }

    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &self.actions
    }

    fn toolbar(&self) -> &[Arc<dyn ToolbarItem>] {
        &self.toolbar
    }
}
