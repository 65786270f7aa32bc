//! Artifact kind tags
//!
//! Every artifact a tool or agent emits carries a string tag identifying its
//! kind. The tag set is open-ended at runtime: tools the registry has never
//! heard of may appear, so [`ArtifactKind`] carries an explicit
//! [`ArtifactKind::Other`] bucket instead of letting unknown tags propagate
//! as missing values.

use serde::{Deserialize, Serialize};

/// Kind tag for an artifact
///
/// Conversion from a tag string is total: every string maps to a kind, with
/// unrecognized tags landing in [`ArtifactKind::Other`]. Round-trip holds for
/// all kinds: `ArtifactKind::from_tag(k.tag()) == k`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArtifactKind {
    /// Office catering program plan
    ProgramPlan,
    /// Sales lead qualification
    LeadQualification,
    /// Web search results
    SearchResult,
    /// Tool invocation outcome
    ToolRun,
    /// Restaurant meal suggestions
    MealSuggestions,
    /// Long-form research report
    ResearchReport,
    /// Market analysis
    MarketAnalysis,
    /// Slide presentation outline
    Presentation,
    /// YouTube video transcript
    YoutubeTranscript,
    /// Task checklist
    TodoList,
    /// Any tag the registry does not know about
    Other(String),
}

/// Tags with a dedicated kind variant
pub const KNOWN_TAGS: [&str; 10] = [
    "program_plan",
    "lead_qualification",
    "search_result",
    "tool_run",
    "meal_suggestions",
    "research_report",
    "market_analysis",
    "presentation",
    "youtube_transcript",
    "todo_list",
];

impl ArtifactKind {
    /// Resolve a tag string to a kind
    ///
    /// Total: unrecognized tags become [`ArtifactKind::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "program_plan" => ArtifactKind::ProgramPlan,
            "lead_qualification" => ArtifactKind::LeadQualification,
            "search_result" => ArtifactKind::SearchResult,
            "tool_run" => ArtifactKind::ToolRun,
            "meal_suggestions" => ArtifactKind::MealSuggestions,
            "research_report" => ArtifactKind::ResearchReport,
            "market_analysis" => ArtifactKind::MarketAnalysis,
            "presentation" => ArtifactKind::Presentation,
            "youtube_transcript" => ArtifactKind::YoutubeTranscript,
            "todo_list" => ArtifactKind::TodoList,
            other => ArtifactKind::Other(other.to_string()),
        }
    }

    /// Tag string for this kind
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            ArtifactKind::ProgramPlan => "program_plan",
            ArtifactKind::LeadQualification => "lead_qualification",
            ArtifactKind::SearchResult => "search_result",
            ArtifactKind::ToolRun => "tool_run",
            ArtifactKind::MealSuggestions => "meal_suggestions",
            ArtifactKind::ResearchReport => "research_report",
            ArtifactKind::MarketAnalysis => "market_analysis",
            ArtifactKind::Presentation => "presentation",
            ArtifactKind::YoutubeTranscript => "youtube_transcript",
            ArtifactKind::TodoList => "todo_list",
            ArtifactKind::Other(tag) => tag,
        }
    }

    /// Whether this kind has a dedicated variant (not [`ArtifactKind::Other`])
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, ArtifactKind::Other(_))
    }
}

impl From<String> for ArtifactKind {
    fn from(tag: String) -> Self {
        ArtifactKind::from_tag(&tag)
    }
}

impl From<ArtifactKind> for String {
    fn from(kind: ArtifactKind) -> Self {
        kind.tag().to_string()
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve_to_known_kinds() {
        for tag in KNOWN_TAGS {
            let kind = ArtifactKind::from_tag(tag);
            assert!(kind.is_known(), "tag {tag} should be known");
            assert_eq!(kind.tag(), tag);
        }
    }

    #[test]
    fn unknown_tag_lands_in_other() {
        let kind = ArtifactKind::from_tag("unknown_future_type");
        assert_eq!(
            kind,
            ArtifactKind::Other("unknown_future_type".to_string())
        );
        assert!(!kind.is_known());
        assert_eq!(kind.tag(), "unknown_future_type");
    }

    #[test]
    fn round_trip_through_tag() {
        let kinds = [
            ArtifactKind::ProgramPlan,
            ArtifactKind::ToolRun,
            ArtifactKind::Other("custom".to_string()),
        ];
        for kind in kinds {
            assert_eq!(ArtifactKind::from_tag(kind.tag()), kind);
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_any_tag_round_trips(tag in "[a-z_]{0,32}") {
            let kind = ArtifactKind::from_tag(&tag);
            proptest::prop_assert_eq!(kind.tag(), tag.as_str());
        }
    }

    #[test]
    fn serde_round_trip_as_plain_string() {
        let kind = ArtifactKind::MealSuggestions;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"meal_suggestions\"");

        let back: ArtifactKind = serde_json::from_str("\"presentation\"").unwrap();
        assert_eq!(back, ArtifactKind::Presentation);

        let other: ArtifactKind = serde_json::from_str("\"not_a_thing\"").unwrap();
        assert_eq!(other, ArtifactKind::Other("not_a_thing".to_string()));
    }
}
