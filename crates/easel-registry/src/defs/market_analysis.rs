//! Market analysis

use crate::action::{ArtifactAction, CopyJsonAction};
use crate::definition::{ArtifactTypeDefinition, Icon};
use crate::defs::parse_payload;
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RenderState, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Market analysis payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketAnalysisPayload {
    pub market: Option<String>,
    pub summary: Option<String>,
    pub segments: Vec<Segment>,
    pub trends: Vec<String>,
}

/// One market segment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Segment {
    pub name: Option<String>,
    pub size: Option<String>,
    pub growth: Option<String>,
}

/// Type definition for `market_analysis`
pub struct MarketAnalysisDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
}

impl MarketAnalysisDefinition {
    /// Definition with the copy action
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction)],
        }
    }
}

impl Default for MarketAnalysisDefinition {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactTypeDefinition for MarketAnalysisDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::MarketAnalysis
    }

    fn title(&self) -> &str {
        "Market analysis"
    }

    fn description(&self) -> &str {
        "Segments and trends for a market"
    }

    fn icon(&self) -> Icon {
        Icon::TrendingUp
    }

    fn render(&self, data: &Value, _state: &RenderState) -> View {
        let Some(payload) = parse_payload::<MarketAnalysisPayload>(data) else {
            return View::Empty;
        };
        let Some(market) = payload.market else {
            return View::Empty;
        };

        let mut children = vec![View::heading(2, market)];
        if let Some(summary) = &payload.summary {
            children.push(View::text(summary.clone()));
        }
        if !payload.segments.is_empty() {
            children.push(View::Table {
                headers: vec![
                    "Segment".to_string(),
                    "Size".to_string(),
                    "Growth".to_string(),
                ],
                rows: payload
                    .segments
                    .iter()
                    .map(|s| {
                        vec![
                            s.name.clone().unwrap_or_default(),
                            s.size.clone().unwrap_or_default(),
                            s.growth.clone().unwrap_or_default(),
                        ]
                    })
                    .collect(),
            });
        }
        if !payload.trends.is_empty() {
            children.push(View::section(
                "Trends",
                vec![View::List {
                    ordered: false,
                    items: payload.trends.iter().map(|t| View::text(t.clone())).collect(),
                }],
            ));
        }

        View::stack(children)
    }

    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &self.actions
    }
}
