//! Office catering program plan
//!
//! Days of planned meals for an office over a date range, with budget and
//! dietary constraints. The plan generator emits this after the meal tools
//! have run.

use crate::action::{ArtifactAction, CopyJsonAction, PrintAction};
use crate::definition::{ArtifactTypeDefinition, Icon};
use crate::defs::{format_price, parse_payload};
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RenderState, Tone, View};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Program plan payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramPlanPayload {
    /// Office the plan is for
    pub office_id: Option<String>,
    /// Covered date range
    pub time_range: Option<TimeRange>,
    /// Budget per person per meal
    pub budget_per_person: Option<f64>,
    /// ISO currency code
    pub currency: Option<String>,
    /// Planned meals, one entry per day
    pub meals_by_day: Option<Vec<PlanDay>>,
    /// Free-form constraints the planner honored
    pub constraints: Option<Value>,
    /// Planner notes
    pub notes: Option<String>,
}

/// Covered date range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// One day of the plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanDay {
    pub date: Option<String>,
    pub meals: Vec<PlanMeal>,
    pub notes: Option<String>,
}

/// One planned meal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanMeal {
    pub name: Option<String>,
    /// Meal slot: breakfast, lunch, dinner
    #[serde(rename = "type")]
    pub meal_type: Option<String>,
    pub cuisine: Option<String>,
    pub dietary_tags: Vec<String>,
    pub estimated_price_per_person: Option<f64>,
    pub description: Option<String>,
}

/// Type definition for `program_plan`
pub struct ProgramPlanDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
}

impl ProgramPlanDefinition {
    /// Definition with copy and print actions
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction), Arc::new(PrintAction)],
        }
    }
}

impl Default for ProgramPlanDefinition {
    fn default() -> Self {
        Self::new()
    }
}

fn render_meal(meal: &PlanMeal, currency: Option<&str>) -> View {
    let mut children = Vec::new();
    if let Some(name) = &meal.name {
        children.push(View::text(name.clone()));
    }
    if let Some(meal_type) = &meal.meal_type {
        children.push(View::badge(meal_type.clone(), Tone::Info));
    }
    if let Some(cuisine) = &meal.cuisine {
        children.push(View::badge(cuisine.clone(), Tone::Neutral));
    }
    for tag in &meal.dietary_tags {
        children.push(View::badge(tag.clone(), Tone::Success));
    }
    if let Some(price) = format_price(meal.estimated_price_per_person, currency) {
        children.push(View::text(format!("{price} per person")));
    }
    if let Some(description) = &meal.description {
        children.push(View::text(description.clone()));
    }
    View::stack(children)
}

#[async_trait]
impl ArtifactTypeDefinition for ProgramPlanDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ProgramPlan
    }

    fn title(&self) -> &str {
        "Program plan"
    }

    fn description(&self) -> &str {
        "Office catering plan across a date range"
    }

    fn icon(&self) -> Icon {
        Icon::Calendar
    }

    fn render(&self, data: &Value, _state: &RenderState) -> View {
        let Some(payload) = parse_payload::<ProgramPlanPayload>(data) else {
            return View::Empty;
        };
        let Some(days) = payload.meals_by_day else {
            return View::Empty;
        };

        let mut children = Vec::new();
        let heading = match &payload.office_id {
            Some(office) => format!("Catering plan — {office}"),
            None => "Catering plan".to_string(),
        };
        children.push(View::heading(2, heading));

        let mut facts = Vec::new();
        if let Some(range) = &payload.time_range {
            if let (Some(start), Some(end)) = (&range.start_date, &range.end_date) {
                facts.push(("Dates".to_string(), format!("{start} to {end}")));
            }
        }
        if let Some(budget) = format_price(payload.budget_per_person, payload.currency.as_deref())
        {
            facts.push(("Budget".to_string(), format!("{budget} per person")));
        }
        if !facts.is_empty() {
            children.push(View::KeyValue { pairs: facts });
        }

        let currency = payload.currency.as_deref();
        for day in &days {
            let title = day.date.clone().unwrap_or_else(|| "Unscheduled".to_string());
            let mut body: Vec<View> =
                day.meals.iter().map(|m| render_meal(m, currency)).collect();
            if let Some(notes) = &day.notes {
                body.push(View::text(notes.clone()));
            }
            children.push(View::section(title, body));
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
        Some(schema_for!(ProgramPlanPayload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition() -> ProgramPlanDefinition {
        ProgramPlanDefinition::new()
    }

    #[test]
    fn renders_days_and_meal_slots() {
        let data = json!({
            "officeId": "nyc-hq",
            "timeRange": {"startDate": "2025-12-01", "endDate": "2025-12-05"},
            "currency": "USD",
            "mealsByDay": [{
                "date": "2025-12-01",
                "meals": [{
                    "name": "Chicken Bowl",
                    "type": "lunch",
                    "dietaryTags": ["Gluten-Free"],
                }],
            }],
        });

        let view = definition().render(&data, &RenderState::default());
        assert!(view.contains_text("nyc-hq"));
        assert!(view.contains_text("2025-12-01"));
        assert!(view.contains_text("Chicken Bowl"));
        assert!(view.contains_text("lunch"));
        assert!(view.contains_text("Gluten-Free"));
    }

    #[test]
    fn missing_days_renders_empty() {
        let data = json!({"officeId": "nyc-hq", "currency": "USD"});
        assert!(definition()
            .render(&data, &RenderState::default())
            .is_empty());
    }

    #[test]
    fn shape_mismatch_renders_empty() {
        let data = json!("not an object");
        assert!(definition()
            .render(&data, &RenderState::default())
            .is_empty());
    }

    #[test]
    fn budget_line_uses_currency() {
        let data = json!({
            "budgetPerPerson": 18.0,
            "currency": "USD",
            "mealsByDay": [],
        });
        let view = definition().render(&data, &RenderState::default());
        assert!(view.contains_text("18.00 USD per person"));
    }

    #[test]
    fn schema_names_payload_fields() {
        let schema = definition().payload_schema().unwrap();
        let json = serde_json::to_value(schema).unwrap();
        assert!(json["properties"].get("mealsByDay").is_some());
    }
}
