use std::collections::HashMap;

use demoscope_types::StatusIndicator;
use once_cell::sync::Lazy;

/// Terminal-agnostic color triple. The CLI maps these onto its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fill for geometry features with no corresponding dataset record. Such
/// features are non-interactive: no click, no tooltip.
pub const NO_DATA_FILL: Rgb = Rgb(70, 70, 76);

/// Numeric geometry identifiers (ISO 3166-1 numeric) for the tracked set
/// plus comparison countries across continents. This is the sole bridge
/// between geometry features and dataset records; the join key on the
/// dataset side is the country name.
pub static TRACKED_COUNTRY_IDS: Lazy<HashMap<u64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (32, "Argentina"),
        (36, "Australia"),
        (76, "Brazil"),
        (112, "Belarus"),
        (124, "Canada"),
        (152, "Chile"),
        (188, "Costa Rica"),
        (222, "El Salvador"),
        (250, "France"),
        (268, "Georgia"),
        (276, "Germany"),
        (348, "Hungary"),
        (356, "India"),
        (376, "Israel"),
        (380, "Italy"),
        (392, "Japan"),
        (410, "South Korea"),
        (484, "Mexico"),
        (554, "New Zealand"),
        (558, "Nicaragua"),
        (578, "Norway"),
        (608, "Philippines"),
        (616, "Poland"),
        (643, "Russia"),
        (688, "Serbia"),
        (710, "South Africa"),
        (724, "Spain"),
        (752, "Sweden"),
        (788, "Tunisia"),
        (792, "Turkey"),
        (826, "United Kingdom"),
        (840, "United States"),
        (862, "Venezuela"),
    ])
});

/// Resolve a geometry feature identifier to a country name, if tracked.
pub fn country_name_for_id(id: u64) -> Option<&'static str> {
    TRACKED_COUNTRY_IDS.get(&id).copied()
}

/// The fixed categorical palette. `Unknown` gets a distinct fallback color
/// so an unrecognized status is visible rather than invisible.
pub fn status_fill(status: StatusIndicator) -> Rgb {
    match status {
        StatusIndicator::Stable => Rgb(46, 160, 67),
        StatusIndicator::Recovering => Rgb(63, 185, 80),
        StatusIndicator::AtRisk => Rgb(210, 153, 34),
        StatusIndicator::Backsliding => Rgb(219, 109, 40),
        StatusIndicator::Autocracy => Rgb(218, 54, 51),
        StatusIndicator::Unknown => Rgb(110, 118, 129),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_holds_roughly_thirty_identifiers() {
        assert!(TRACKED_COUNTRY_IDS.len() >= 30);
    }

    #[test]
    fn test_known_identifier_resolves() {
        assert_eq!(country_name_for_id(32), Some("Argentina"));
        assert_eq!(country_name_for_id(348), Some("Hungary"));
    }

    #[test]
    fn test_unknown_identifier_is_untracked() {
        assert_eq!(country_name_for_id(4), None);
    }

    #[test]
    fn test_each_category_has_a_distinct_fill() {
        let mut fills: Vec<Rgb> = StatusIndicator::CATEGORIES
            .iter()
            .map(|&s| status_fill(s))
            .collect();
        fills.push(status_fill(StatusIndicator::Unknown));
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
