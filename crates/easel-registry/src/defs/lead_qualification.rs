//! Sales lead qualification

use crate::action::{ArtifactAction, CopyJsonAction};
use crate::definition::{ArtifactTypeDefinition, Icon};
use crate::defs::parse_payload;
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RenderState, Tone, View};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Lead qualification payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadQualificationPayload {
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub size_bucket: Option<String>,
    pub vertical: Option<String>,
    /// Fit score on a 0..100 scale; out-of-range values are clamped
    pub ideal_fit_score: Option<f64>,
    pub ideal_fit_reason: Option<String>,
    pub recommended_next_step: Option<String>,
    pub notes: Option<String>,
}

/// Tone bucket for a fit score
fn score_tone(score: f64) -> Tone {
    if score >= 70.0 {
        Tone::Success
    } else if score >= 40.0 {
        Tone::Warning
    } else {
        Tone::Danger
    }
}

/// Type definition for `lead_qualification`
pub struct LeadQualificationDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
}

impl LeadQualificationDefinition {
    /// Definition with the copy action
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction)],
        }
    }
}

impl Default for LeadQualificationDefinition {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactTypeDefinition for LeadQualificationDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::LeadQualification
    }

    fn title(&self) -> &str {
        "Lead qualification"
    }

    fn description(&self) -> &str {
        "Fit assessment for a sales lead"
    }

    fn icon(&self) -> Icon {
        Icon::Target
    }

    fn render(&self, data: &Value, _state: &RenderState) -> View {
        let Some(payload) = parse_payload::<LeadQualificationPayload>(data) else {
            return View::Empty;
        };
        let Some(company) = payload.company_name else {
            return View::Empty;
        };

        let mut children = vec![View::heading(2, company)];

        if let Some(score) = payload.ideal_fit_score {
            let score = score.clamp(0.0, 100.0);
            children.push(View::badge(
                format!("Fit {}/100", score.round() as i64),
                score_tone(score),
            ));
        }

        if let Some(website) = &payload.website {
            children.push(View::Link {
                url: website.clone(),
                label: website.clone(),
            });
        }

        let mut facts = Vec::new();
        if let Some(size) = &payload.size_bucket {
            facts.push(("Size".to_string(), size.clone()));
        }
        if let Some(vertical) = &payload.vertical {
            facts.push(("Vertical".to_string(), vertical.clone()));
        }
        if !facts.is_empty() {
            children.push(View::KeyValue { pairs: facts });
        }

        if let Some(reason) = &payload.ideal_fit_reason {
            children.push(View::section("Why", vec![View::text(reason.clone())]));
        }
        if let Some(next_step) = &payload.recommended_next_step {
            children.push(View::section(
                "Recommended next step",
                vec![View::text(next_step.clone())],
            ));
        }
        if let Some(notes) = &payload.notes {
            children.push(View::section("Notes", vec![View::text(notes.clone())]));
        }

        View::stack(children)
    }

    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &self.actions
    }

    fn payload_schema(&self) -> Option<schemars::schema::RootSchema> {
        Some(schema_for!(LeadQualificationPayload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_score_badge_with_tone() {
        let data = json!({
            "companyName": "Acme Robotics",
            "idealFitScore": 82,
            "idealFitReason": "Large distributed workforce",
            "recommendedNextStep": "Book a demo",
        });
        let view = LeadQualificationDefinition::new().render(&data, &RenderState::default());

        assert!(view.contains_text("Acme Robotics"));
        assert!(view.contains_text("Fit 82/100"));
        assert!(view.contains_text("Book a demo"));
    }

    #[test]
    fn score_tones_bucket_correctly() {
        assert_eq!(score_tone(82.0), Tone::Success);
        assert_eq!(score_tone(55.0), Tone::Warning);
        assert_eq!(score_tone(12.0), Tone::Danger);
    }

    #[test]
    fn out_of_range_score_is_clamped() {
        let data = json!({"companyName": "Acme", "idealFitScore": 140});
        let view = LeadQualificationDefinition::new().render(&data, &RenderState::default());
        assert!(view.contains_text("Fit 100/100"));
    }

    #[test]
    fn missing_company_renders_empty() {
        let data = json!({"idealFitScore": 50});
        assert!(LeadQualificationDefinition::new()
            .render(&data, &RenderState::default())
            .is_empty());
    }
}
