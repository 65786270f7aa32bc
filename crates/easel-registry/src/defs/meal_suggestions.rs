//! Restaurant meal suggestions
//!
//! A card grid of dishes matching a query near a location. The producer
//! tools are inconsistent about `displayIndex` (duplicates, gaps), so this
//! definition carries a custom processor that re-indexes suggestions before
//! anything renders them.

use crate::action::{ArtifactAction, CopyJsonAction};
use crate::definition::{ArtifactTypeDefinition, Icon, ProcessError};
use crate::defs::{format_price, parse_payload};
use async_trait::async_trait;
use easel_artifact::{ArtifactKind, RawArtifactRecord, RenderState, Tone, View};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Meal suggestions payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MealSuggestionsPayload {
    pub query: Option<String>,
    pub location: Option<String>,
    /// Filter set the tool applied; shape varies by tool version
    pub filters: Option<Value>,
    pub suggestions: Option<Vec<MealSuggestion>>,
}

/// One suggested dish
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MealSuggestion {
    pub id: Option<String>,
    /// 1-based position in the grid
    pub display_index: Option<u32>,
    pub restaurant_name: Option<String>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub doordash_url: Option<String>,
    pub tags: Vec<String>,
}

/// Type definition for `meal_suggestions`
pub struct MealSuggestionsDefinition {
    actions: Vec<Arc<dyn ArtifactAction>>,
}

impl MealSuggestionsDefinition {
    /// Definition with the copy action
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: vec![Arc::new(CopyJsonAction)],
        }
    }
}

impl Default for MealSuggestionsDefinition {
    fn default() -> Self {
        Self::new()
    }
}

fn render_suggestion(suggestion: &MealSuggestion) -> View {
    let mut parts = Vec::new();
    if let Some(url) = &suggestion.image_url {
        parts.push(View::Image {
            url: url.clone(),
            alt: suggestion.title.clone().unwrap_or_default(),
        });
    }
    if let Some(title) = &suggestion.title {
        parts.push(View::heading(4, title.clone()));
    }
    if let Some(restaurant) = &suggestion.restaurant_name {
        parts.push(View::text(restaurant.clone()));
    }
    for tag in &suggestion.tags {
        parts.push(View::badge(tag.clone(), Tone::Neutral));
    }
    if let Some(price) = format_price(suggestion.price, suggestion.currency.as_deref()) {
        parts.push(View::text(price));
    }
    if let Some(rating) = suggestion.rating {
        parts.push(View::text(format!("{rating:.1} ★")));
    }
    if let Some(url) = &suggestion.doordash_url {
        parts.push(View::Link {
            url: url.clone(),
            label: "Order on DoorDash".to_string(),
        });
    }
    View::stack(parts)
}

#[async_trait]
impl ArtifactTypeDefinition for MealSuggestionsDefinition {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::MealSuggestions
    }

    fn title(&self) -> &str {
        "Meal suggestions"
    }

    fn description(&self) -> &str {
        "Dishes matching a query near a location"
    }

    fn icon(&self) -> Icon {
        Icon::Utensils
    }

    fn render(&self, data: &Value, _state: &RenderState) -> View {
        let Some(payload) = parse_payload::<MealSuggestionsPayload>(data) else {
            return View::Empty;
        };
        let Some(suggestions) = payload.suggestions else {
            return View::Empty;
        };

        let header = match &payload.location {
            Some(location) => format!("Found {} options in {location}", suggestions.len()),
            None => format!("Found {} options", suggestions.len()),
        };
        let mut children = vec![View::heading(3, header)];
        if let Some(query) = &payload.query {
            children.push(View::text(format!("Query: {query}")));
        }
        children.push(View::List {
            ordered: false,
            items: suggestions.iter().map(render_suggestion).collect(),
        });

        View::stack(children)
    }

    fn actions(&self) -> &[Arc<dyn ArtifactAction>] {
        &self.actions
    }

    /// Re-index `displayIndex` to the 1-based grid order
    ///
    /// Starts from the default unwrap so the wrapper-precedence rule stays
    /// in one place; only the suggestion list is reshaped.
    async fn process(&self, raw: &RawArtifactRecord) -> Option<Result<Value, ProcessError>> {
        let mut data = raw.unwrap_content();
        if let Some(items) = data.get_mut("suggestions").and_then(Value::as_array_mut) {
            for (position, item) in items.iter_mut().enumerate() {
                let Some(entry) = item.as_object_mut() else {
                    return Some(Err(ProcessError(format!(
                        "suggestion at position {position} is not an object"
                    ))));
                };
                entry.insert(
                    "displayIndex".to_string(),
                    Value::from(u32::try_from(position).unwrap_or(u32::MAX).saturating_add(1)),
                );
            }
        }
        Some(Ok(data))
    }

    fn payload_schema(&self) -> Option<schemars::schema::RootSchema> {
        Some(schema_for!(MealSuggestionsPayload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_counts_options_in_location() {
        let data = json!({
            "query": "tacos",
            "location": "Austin, TX",
            "suggestions": [],
        });
        let view = MealSuggestionsDefinition::new().render(&data, &RenderState::default());
        assert!(view.contains_text("Found 0 options in Austin, TX"));
    }

    #[test]
    fn missing_suggestions_renders_empty() {
        let data = json!({"query": "tacos", "location": "Austin, TX"});
        assert!(MealSuggestionsDefinition::new()
            .render(&data, &RenderState::default())
            .is_empty());
    }

    #[test]
    fn suggestion_cards_carry_link_and_price() {
        let data = json!({
            "query": "tacos",
            "location": "Austin, TX",
            "suggestions": [{
                "title": "Al Pastor",
                "restaurantName": "Taqueria Uno",
                "price": 11.5,
                "currency": "USD",
                "doordashUrl": "https://doordash.example/al-pastor",
                "tags": ["spicy"],
            }],
        });
        let view = MealSuggestionsDefinition::new().render(&data, &RenderState::default());
        assert!(view.contains_text("Found 1 options in Austin, TX"));
        assert!(view.contains_text("Al Pastor"));
        assert!(view.contains_text("Taqueria Uno"));
        assert!(view.contains_text("11.50 USD"));
        assert!(view.contains_text("Order on DoorDash"));
    }

    #[tokio::test]
    async fn process_reindexes_display_order() {
        let raw = RawArtifactRecord::new("meal_suggestions").with_artifact(json!({
            "query": "tacos",
            "suggestions": [
                {"title": "A", "displayIndex": 7},
                {"title": "B"},
                {"title": "C", "displayIndex": 7},
            ],
        }));

        let data = MealSuggestionsDefinition::new()
            .process(&raw)
            .await
            .unwrap()
            .unwrap();
        let indexes: Vec<u64> = data["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["displayIndex"].as_u64().unwrap())
            .collect();
        assert_eq!(indexes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn process_rejects_non_object_suggestions() {
        let raw = RawArtifactRecord::new("meal_suggestions")
            .with_payload(json!({"suggestions": ["not an object"]}));

        let result = MealSuggestionsDefinition::new().process(&raw).await.unwrap();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn process_passes_through_without_suggestions() {
        let raw = RawArtifactRecord::new("meal_suggestions")
            .with_payload(json!({"query": "tacos"}));

        let data = MealSuggestionsDefinition::new()
            .process(&raw)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(data, json!({"query": "tacos"}));
    }
}
