use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use demoscope_engine::{build_trend_chart, trend::GRIDLINES, TrendChart, TrendDirection};
use demoscope_types::TrendPoint;

// Vertical head/foot room so year labels and the final-value label stay
// inside the canvas.
const Y_MIN: f64 = -0.12;
const Y_MAX: f64 = 1.06;

/// Interpolation steps for the filled area under the series line.
const FILL_STEPS: usize = 120;

pub(crate) fn render_trend(f: &mut Frame, area: Rect, series: &[TrendPoint]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Electoral democracy over time ");

    let Some(chart) = build_trend_chart(series) else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Not enough history to chart (need at least two points).",
            Style::default().fg(Color::Gray),
        )))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let (line_color, fill_color, dot_color) = match chart.direction {
        TrendDirection::Improving => (
            Color::Green,
            Color::Rgb(18, 68, 36),
            Color::LightGreen,
        ),
        TrendDirection::Declining => (
            Color::Red,
            Color::Rgb(80, 26, 26),
            Color::LightRed,
        ),
    };

    let first_year = chart.points[0].year as f64;
    let last_year = chart.points[chart.points.len() - 1].year as f64;
    // Degenerate x span would collapse the projection.
    let x_bounds = if last_year > first_year {
        [first_year, last_year]
    } else {
        [first_year - 1.0, first_year + 1.0]
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds([Y_MIN, Y_MAX])
        .paint(|ctx| paint_chart(ctx, &chart, x_bounds, line_color, fill_color, dot_color))
        .block(block);
    f.render_widget(canvas, area);
}

fn paint_chart(
    ctx: &mut Context,
    chart: &TrendChart,
    x_bounds: [f64; 2],
    line_color: Color,
    fill_color: Color,
    dot_color: Color,
) {
    // Reference gridlines with value labels.
    for &level in &GRIDLINES {
        ctx.draw(&CanvasLine {
            x1: x_bounds[0],
            y1: level,
            x2: x_bounds[1],
            y2: level,
            color: Color::Rgb(46, 48, 56),
        });
        ctx.print(
            x_bounds[0],
            level,
            Line::styled(format!("{:.2}", level), Style::default().fg(Color::DarkGray)),
        );
    }

    // Semi-transparent reading of the area under the line: dense vertical
    // strokes in a dimmed tone.
    let span = x_bounds[1] - x_bounds[0];
    for step in 0..=FILL_STEPS {
        let x = x_bounds[0] + span * step as f64 / FILL_STEPS as f64;
        if let Some(value) = interpolate(&chart.points, x) {
            ctx.draw(&CanvasLine {
                x1: x,
                y1: 0.0,
                x2: x,
                y2: value,
                color: fill_color,
            });
        }
    }

    // Connecting line.
    for window in chart.points.windows(2) {
        ctx.draw(&CanvasLine {
            x1: window[0].year as f64,
            y1: window[0].value,
            x2: window[1].year as f64,
            y2: window[1].value,
            color: line_color,
        });
    }

    // Marker dot per data point.
    let coords: Vec<(f64, f64)> = chart
        .points
        .iter()
        .map(|p| (p.year as f64, p.value))
        .collect();
    ctx.draw(&Points {
        coords: &coords,
        color: dot_color,
    });

    // Year labels every third point.
    for &(idx, year) in &chart.year_ticks {
        ctx.print(
            chart.points[idx].year as f64,
            Y_MIN + 0.04,
            Line::styled(year.to_string(), Style::default().fg(Color::Gray)),
        );
    }

    // Numeric label at the final point.
    let last = &chart.points[chart.points.len() - 1];
    ctx.print(
        last.year as f64,
        (last.value + 0.05).min(Y_MAX - 0.02),
        Line::styled(
            chart.final_label.clone(),
            Style::default().fg(dot_color),
        ),
    );
}

fn interpolate(points: &[TrendPoint], x: f64) -> Option<f64> {
    for window in points.windows(2) {
        let (x0, y0) = (window[0].year as f64, window[0].value);
        let (x1, y1) = (window[1].year as f64, window[1].value);
        if x >= x0 && x <= x1 {
            if x1 == x0 {
                return Some(y0);
            }
            return Some(y0 + (y1 - y0) * (x - x0) / (x1 - x0));
        }
    }
    None
}
