use serde::{Deserialize, Serialize};

// NOTE: Schema Design Goals
//
// 1. Tolerance: the source dataset is produced by an external ETL pipeline and
//    is consumed as-is. Unrecognized or absent classification strings must
//    degrade to `Unknown`, never fail deserialization.
// 2. Case-insensitivity: status comparisons are case-insensitive everywhere;
//    parsing normalizes once so the rest of the system compares enum values.

/// Regime-status classification driving color encoding across all views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum StatusIndicator {
    Stable,
    Recovering,
    AtRisk,
    Backsliding,
    Autocracy,
    /// Fallback for absent or unrecognized values.
    #[default]
    Unknown,
}

impl StatusIndicator {
    /// The five recognized categories, in legend order. `Unknown` is excluded.
    pub const CATEGORIES: [Self; 5] = [
        Self::Stable,
        Self::Recovering,
        Self::AtRisk,
        Self::Backsliding,
        Self::Autocracy,
    ];

    /// Parse a raw dataset string, case-insensitively. Anything unrecognized
    /// maps to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "stable" => Self::Stable,
            "recovering" => Self::Recovering,
            "at risk" => Self::AtRisk,
            "backsliding" => Self::Backsliding,
            "autocracy" => Self::Autocracy,
            _ => Self::Unknown,
        }
    }

    /// Canonical label as it appears in the dataset and the legend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Recovering => "recovering",
            Self::AtRisk => "at risk",
            Self::Backsliding => "backsliding",
            Self::Autocracy => "autocracy",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for StatusIndicator {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<StatusIndicator> for String {
    fn from(status: StatusIndicator) -> Self {
        status.as_str().to_string()
    }
}

/// Severity of a recorded key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    High,
    Medium,
    #[default]
    Low,
}

impl Severity {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(StatusIndicator::parse("Stable"), StatusIndicator::Stable);
        assert_eq!(StatusIndicator::parse("AT RISK"), StatusIndicator::AtRisk);
        assert_eq!(
            StatusIndicator::parse("  backsliding "),
            StatusIndicator::Backsliding
        );
    }

    #[test]
    fn test_unrecognized_status_degrades_to_unknown() {
        assert_eq!(StatusIndicator::parse("flourishing"), StatusIndicator::Unknown);
        assert_eq!(StatusIndicator::parse(""), StatusIndicator::Unknown);
    }

    #[test]
    fn test_status_round_trips_through_json() {
        for status in StatusIndicator::CATEGORIES {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));

            let deserialized: StatusIndicator = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, status);
        }
    }

    #[test]
    fn test_severity_fallback() {
        assert_eq!(Severity::parse("HIGH"), Severity::High);
        assert_eq!(Severity::parse("moderate"), Severity::Low);
    }
}
