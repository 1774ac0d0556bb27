use std::cmp::Ordering;

use demoscope_types::Country;

use crate::criteria::{Criteria, SortKey, SortOrder, StatusFilter};

// Missing numeric values sort lowest in ascending order. Indices live in
// [0,1] and BTI in [0,10], so -1.0 is strictly below any real value; event
// counts default to 0 in the schema already.
const MISSING_SCORE: f64 = -1.0;

/// Derive the filtered, ordered country list for the current criteria.
///
/// Pure: never mutates its input, fabricates no records, and is
/// deterministic (the sort is stable, so records comparing equal keep their
/// snapshot order).
pub fn derive<'a>(countries: &'a [Country], criteria: &Criteria) -> Vec<&'a Country> {
    let search = criteria.search_text.trim().to_lowercase();

    let mut selected: Vec<&Country> = countries
        .iter()
        .filter(|country| matches_status(country, criteria.status_filter))
        .filter(|country| search.is_empty() || country.name.to_lowercase().contains(&search))
        .collect();

    selected.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, criteria.sort_key);
        match criteria.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    selected
}

fn matches_status(country: &Country, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::One(status) => country.status_indicator == status,
    }
}

fn compare_by_key(a: &Country, b: &Country, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Polyarchy => compare_scores(a.polyarchy_index, b.polyarchy_index),
        SortKey::Libdem => compare_scores(a.libdem_index, b.libdem_index),
        SortKey::Bti => compare_scores(a.bti_governance_score, b.bti_governance_score),
        SortKey::Events => a.deed_event_counts.cmp(&b.deed_event_counts),
    }
}

fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(MISSING_SCORE);
    let b = b.unwrap_or(MISSING_SCORE);
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use demoscope_testing::fixtures::{country, country_with_bti, country_with_status};
    use demoscope_types::StatusIndicator;

    fn sample() -> Vec<Country> {
        vec![
            country_with_status("Argentina", "AR", StatusIndicator::Recovering),
            country_with_status("Hungary", "HU", StatusIndicator::Backsliding),
            country_with_status("Sweden", "SE", StatusIndicator::Stable),
            country_with_status("Venezuela", "VE", StatusIndicator::Autocracy),
        ]
    }

    #[test]
    fn test_search_matches_case_insensitive_substring() {
        let countries = sample();
        let criteria = Criteria {
            search_text: "arg".to_string(),
            ..Criteria::default()
        };

        let result = derive(&countries, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Argentina");
    }

    #[test]
    fn test_status_filter_keeps_only_matching_records() {
        let countries = sample();
        let criteria = Criteria {
            status_filter: StatusFilter::One(StatusIndicator::Backsliding),
            ..Criteria::default()
        };

        let result = derive(&countries, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Hungary");
    }

    #[test]
    fn test_result_is_subsequence_of_input() {
        let countries = sample();
        let result = derive(&countries, &Criteria::default());

        assert!(result.len() <= countries.len());
        for picked in &result {
            assert!(countries.iter().any(|c| c.name == picked.name));
        }
    }

    #[test]
    fn test_missing_bti_sorts_after_scored_in_descending_order() {
        let countries = vec![
            country_with_bti("Tunisia", Some(4.1)),
            country_with_bti("Atlantis", None),
            country_with_bti("Chile", Some(8.5)),
        ];
        let criteria = Criteria {
            sort_key: SortKey::Bti,
            sort_order: SortOrder::Desc,
            ..Criteria::default()
        };

        let result = derive(&countries, &criteria);
        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Chile", "Tunisia", "Atlantis"]);
    }

    #[test]
    fn test_sort_is_deterministic() {
        let countries = sample();
        let criteria = Criteria {
            sort_key: SortKey::Polyarchy,
            sort_order: SortOrder::Desc,
            ..Criteria::default()
        };

        let first: Vec<&str> = derive(&countries, &criteria)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        let second: Vec<&str> = derive(&countries, &criteria)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_keys_preserve_input_order() {
        // All fixture countries carry no polyarchy score, so every key is the
        // missing sentinel and the stable sort must keep snapshot order.
        let countries = vec![country("Benin", "BJ"), country("Albania", "AL")];
        let criteria = Criteria {
            sort_key: SortKey::Polyarchy,
            ..Criteria::default()
        };

        let names: Vec<&str> = derive(&countries, &criteria)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Benin", "Albania"]);
    }

    #[test]
    fn test_name_sort_descending() {
        let countries = sample();
        let criteria = Criteria {
            sort_order: SortOrder::Desc,
            ..Criteria::default()
        };

        let names: Vec<&str> = derive(&countries, &criteria)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Venezuela", "Sweden", "Hungary", "Argentina"]);
    }
}
