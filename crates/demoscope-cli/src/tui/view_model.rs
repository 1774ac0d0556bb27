use demoscope_engine::format::{flag_glyph, fmt_bti, fmt_index};
use demoscope_types::{Country, StatusIndicator};

/// Per-frame row projection of a country record. Owned, so renderers can
/// write layout hit maps back into the app state without fighting the
/// borrow on the dataset snapshot.
#[derive(Debug, Clone)]
pub struct CountryRow {
    pub name: String,
    pub flag: String,
    pub status: StatusIndicator,
    pub polyarchy: String,
    pub libdem: String,
    pub bti: String,
    pub events: u64,
}

impl CountryRow {
    pub fn from_country(country: &Country) -> Self {
        Self {
            name: country.name.clone(),
            flag: flag_glyph(&country.iso2),
            status: country.status_indicator,
            polyarchy: fmt_index(country.polyarchy_index),
            libdem: fmt_index(country.libdem_index),
            bti: fmt_bti(country.bti_governance_score),
            events: country.deed_event_counts,
        }
    }
}

/// Content of the shared tooltip for a hovered country, in every view.
pub fn tooltip_lines(country: &Country) -> Vec<String> {
    vec![
        format!("{} {}", flag_glyph(&country.iso2), country.name),
        format!("Status: {}", country.status_indicator.as_str()),
        format!("Electoral: {}", fmt_index(country.polyarchy_index)),
        format!("Liberal: {}", fmt_index(country.libdem_index)),
        format!("BTI: {}", fmt_bti(country.bti_governance_score)),
    ]
}
