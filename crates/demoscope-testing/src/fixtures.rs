//! Country record builders for unit tests.

use demoscope_types::{Country, Episode, RecentEvent, Severity, StatusIndicator, TrendPoint};

/// A bare record: name and iso2 only, everything else absent/default.
pub fn country(name: &str, iso2: &str) -> Country {
    Country {
        name: name.to_string(),
        iso2: iso2.to_string(),
        status_indicator: StatusIndicator::Unknown,
        polyarchy_index: None,
        libdem_index: None,
        bti_governance_score: None,
        deed_event_counts: 0,
        ert_episodes: Vec::new(),
        recent_events: Vec::new(),
        polyarchy_trend: Vec::new(),
    }
}

pub fn country_with_status(name: &str, iso2: &str, status: StatusIndicator) -> Country {
    Country {
        status_indicator: status,
        ..country(name, iso2)
    }
}

pub fn country_with_bti(name: &str, bti: Option<f64>) -> Country {
    Country {
        bti_governance_score: bti,
        ..country(name, "XX")
    }
}

/// A fully populated record for renderer tests.
pub fn rich_country(name: &str, iso2: &str) -> Country {
    Country {
        status_indicator: StatusIndicator::Backsliding,
        polyarchy_index: Some(0.46),
        libdem_index: Some(0.37),
        bti_governance_score: Some(5.2),
        deed_event_counts: 14,
        ert_episodes: vec![Episode {
            episode_type: "autocratization".to_string(),
            start_year: 2010,
            end_year: None,
            description: "Gradual erosion of judicial independence".to_string(),
        }],
        recent_events: vec![RecentEvent {
            year: 2024,
            severity: Severity::High,
            event: "Media authority reorganized under executive control".to_string(),
        }],
        polyarchy_trend: trend(&[0.62, 0.58, 0.55, 0.51, 0.49, 0.46]),
        ..country(name, iso2)
    }
}

/// A [0,1] series starting at 2010, one sample per year.
pub fn trend(values: &[f64]) -> Vec<TrendPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| TrendPoint {
            year: 2010 + i as i32,
            value,
        })
        .collect()
}
