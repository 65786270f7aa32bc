//! Builtin artifact type definitions
//!
//! One module per kind. Every render in here is tolerant: payloads are
//! parsed into defaulted serde structs, and a missing core field yields
//! [`easel_artifact::View::Empty`] rather than an error.

mod lead_qualification;
mod market_analysis;
mod meal_suggestions;
mod presentation;
mod program_plan;
mod research_report;
mod search_result;
mod todo_list;
mod tool_run;
mod youtube_transcript;

pub use lead_qualification::{LeadQualificationDefinition, LeadQualificationPayload};
pub use market_analysis::{MarketAnalysisDefinition, MarketAnalysisPayload};
pub use meal_suggestions::{MealSuggestion, MealSuggestionsDefinition, MealSuggestionsPayload};
pub use presentation::{PresentationDefinition, PresentationPayload};
pub use program_plan::{PlanDay, PlanMeal, ProgramPlanDefinition, ProgramPlanPayload};
pub use research_report::{ResearchReportDefinition, ResearchReportPayload};
pub use search_result::{SearchResultDefinition, SearchResultPayload};
pub use todo_list::{TodoListDefinition, TodoListPayload};
pub use tool_run::{ToolRunDefinition, ToolRunPayload};
pub use youtube_transcript::{YoutubeTranscriptDefinition, YoutubeTranscriptPayload};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a payload into a defaulted struct, `None` on shape mismatch
pub(crate) fn parse_payload<T: DeserializeOwned>(data: &Value) -> Option<T> {
    serde_json::from_value(data.clone()).ok()
}

/// Human price string, when a price is present
pub(crate) fn format_price(price: Option<f64>, currency: Option<&str>) -> Option<String> {
    price.map(|p| match currency {
        Some(code) => format!("{p:.2} {code}"),
        None => format!("{p:.2}"),
    })
}
