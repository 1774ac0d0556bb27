use serde::{Deserialize, Serialize};

use crate::status::{Severity, StatusIndicator};

/// Top-level shape of the dataset document: `{ "countries": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryDocument {
    #[serde(default)]
    pub countries: Vec<Country>,
}

/// One tracked country in the snapshot. `name` is the sole join key across
/// views and must be unique within a loaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub name: String,

    /// Two-letter code, used only for the decorative flag glyph.
    #[serde(default)]
    pub iso2: String,

    #[serde(default)]
    pub status_indicator: StatusIndicator,

    /// V-Dem electoral democracy index, [0,1] or null.
    #[serde(default)]
    pub polyarchy_index: Option<f64>,

    /// V-Dem liberal democracy index, [0,1] or null.
    #[serde(default)]
    pub libdem_index: Option<f64>,

    /// Bertelsmann Transformation Index governance score, [0,10] or null.
    #[serde(default, rename = "BTI_governance_score")]
    pub bti_governance_score: Option<f64>,

    /// Aggregate key-event counter, 0 when absent.
    #[serde(default, rename = "DEED_event_counts")]
    pub deed_event_counts: u64,

    /// Episodes of Regime Transformation, in source order.
    #[serde(default, rename = "ERT_episodes")]
    pub ert_episodes: Vec<Episode>,

    #[serde(default)]
    pub recent_events: Vec<RecentEvent>,

    /// Electoral-democracy index history, chronologically ordered.
    #[serde(default)]
    pub polyarchy_trend: Vec<TrendPoint>,
}

/// A discrete named interval of democratic change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    #[serde(rename = "type")]
    pub episode_type: String,
    pub start_year: i32,
    /// None = ongoing.
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub description: String,
}

impl Episode {
    /// "2016–2020" or "2016–ongoing" when the episode has not closed.
    pub fn span_label(&self) -> String {
        match self.end_year {
            Some(end) => format!("{}–{}", self.start_year, end),
            None => format!("{}–ongoing", self.start_year),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentEvent {
    pub year: i32,
    #[serde(default)]
    pub severity: Severity,
    pub event: String,
}

/// One sample of a [0,1] time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_deserializes_with_defaults() {
        let json = r#"{ "name": "Atlantis" }"#;
        let country: Country = serde_json::from_str(json).unwrap();

        assert_eq!(country.name, "Atlantis");
        assert_eq!(country.status_indicator, StatusIndicator::Unknown);
        assert_eq!(country.polyarchy_index, None);
        assert_eq!(country.deed_event_counts, 0);
        assert!(country.ert_episodes.is_empty());
        assert!(country.polyarchy_trend.is_empty());
    }

    #[test]
    fn test_document_keys_map_to_fields() {
        let json = r#"{
            "name": "Hungary",
            "iso2": "HU",
            "status_indicator": "Backsliding",
            "polyarchy_index": 0.46,
            "BTI_governance_score": 5.2,
            "DEED_event_counts": 14,
            "ERT_episodes": [
                { "type": "autocratization", "start_year": 2010, "end_year": null, "description": "Gradual erosion" }
            ]
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();

        assert_eq!(country.status_indicator, StatusIndicator::Backsliding);
        assert_eq!(country.bti_governance_score, Some(5.2));
        assert_eq!(country.deed_event_counts, 14);
        assert_eq!(country.ert_episodes.len(), 1);
        assert_eq!(country.ert_episodes[0].span_label(), "2010–ongoing");
    }

    #[test]
    fn test_episode_span_label_closed() {
        let episode = Episode {
            episode_type: "democratization".to_string(),
            start_year: 1983,
            end_year: Some(1999),
            description: String::new(),
        };
        assert_eq!(episode.span_label(), "1983–1999");
    }
}
