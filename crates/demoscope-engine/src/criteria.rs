use demoscope_types::StatusIndicator;

/// Status filter: everything, or one of the five categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    One(StatusIndicator),
}

impl StatusFilter {
    /// Cycle through the six filter options in a fixed order
    /// (all, then the five categories in legend order).
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::One(StatusIndicator::CATEGORIES[0]),
            Self::One(status) => {
                let idx = StatusIndicator::CATEGORIES
                    .iter()
                    .position(|c| *c == status);
                match idx {
                    Some(i) if i + 1 < StatusIndicator::CATEGORIES.len() => {
                        Self::One(StatusIndicator::CATEGORIES[i + 1])
                    }
                    _ => Self::All,
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::One(status) => status.as_str(),
        }
    }
}

/// Sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Polyarchy,
    Libdem,
    Bti,
    Events,
}

impl SortKey {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Polyarchy,
        Self::Libdem,
        Self::Bti,
        Self::Events,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Polyarchy => "polyarchy",
            Self::Libdem => "lib. democracy",
            Self::Bti => "BTI",
            Self::Events => "events",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// The ephemeral filter/sort selection. Independent of the dataset; reset
/// only by explicit user action.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub status_filter: StatusFilter,
    pub search_text: String,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_cycles_through_all_six_options() {
        let mut filter = StatusFilter::All;
        let mut seen = vec![filter];
        for _ in 0..5 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(filter.next(), StatusFilter::All);
    }

    #[test]
    fn test_sort_key_cycle_wraps() {
        let mut key = SortKey::Name;
        for _ in 0..SortKey::ALL.len() {
            key = key.next();
        }
        assert_eq!(key, SortKey::Name);
    }
}
