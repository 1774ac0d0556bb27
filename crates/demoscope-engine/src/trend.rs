use demoscope_types::TrendPoint;

/// Reference gridline heights for the fixed [0,1] value domain.
pub const GRIDLINES: [f64; 3] = [0.25, 0.5, 0.75];

/// Year labels are drawn at every third data point.
pub const TICK_STRIDE: usize = 3;

/// Whole-series color classification.
///
/// Deliberately a two-point heuristic rather than a regression or slope fit:
/// the value at the midpoint index is compared with the value at the last
/// index, and a non-decreasing pair classifies the whole series as improving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Improving,
    Declining,
}

/// Geometry description of a per-country time-series chart. The terminal
/// layer draws this verbatim; everything here is plain data.
#[derive(Debug, Clone)]
pub struct TrendChart {
    pub points: Vec<TrendPoint>,
    /// (point index, year) pairs for the x-axis labels.
    pub year_ticks: Vec<(usize, i32)>,
    pub direction: TrendDirection,
    /// Numeric label attached to the final point.
    pub final_label: String,
}

/// Build the chart description for a chronologically ordered series.
///
/// Returns `None` for degenerate input (fewer than 2 points); callers render
/// an explanatory placeholder instead of a chart.
pub fn build_trend_chart(series: &[TrendPoint]) -> Option<TrendChart> {
    if series.len() < 2 {
        return None;
    }

    let midpoint = series[series.len() / 2].value;
    let last = series[series.len() - 1].value;
    let direction = if last >= midpoint {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    };

    let year_ticks = series
        .iter()
        .enumerate()
        .filter(|(i, _)| i % TICK_STRIDE == 0)
        .map(|(i, p)| (i, p.year))
        .collect();

    Some(TrendChart {
        points: series.to_vec(),
        year_ticks,
        direction,
        final_label: format!("{:.2}", last),
    })
}
