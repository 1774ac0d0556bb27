use geo::MultiPolygon;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use demoscope_engine::{country_name_for_id, status_fill, NO_DATA_FILL};
use demoscope_types::StatusIndicator;

use super::{dataset_notice, fill_color, render_notice, status_color, Component};
use crate::tui::app::{AppState, MapViewport};

const LEGEND_WIDTH: u16 = 22;

pub(crate) struct MapComponent;

impl Component for MapComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        state.map_viewport = None;

        let block = Block::default().borders(Borders::ALL).title(" World map ");
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if let Some(message) = state.geometry.failure() {
            // Inline within the map panel only; the next activation retries.
            let error = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("Failed to load world geometry: {message}"),
                    Style::default().fg(Color::LightRed),
                )),
                Line::from(Span::styled(
                    "Switch views and return to the map to retry.",
                    Style::default().fg(Color::Gray),
                )),
            ])
            .wrap(Wrap { trim: true });
            f.render_widget(error, inner);
            return;
        }

        if state.geometry.geometry().is_none() {
            render_notice(f, inner, "Loading world geometry…", Color::Gray);
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(LEGEND_WIDTH)])
            .split(inner);

        let mut canvas_area = columns[0];
        if let Some((text, color)) = dataset_notice(state) {
            // The map is a valid, empty highlight state before the dataset
            // arrives; say so instead of erroring.
            let note_area = Rect::new(canvas_area.x, canvas_area.y, canvas_area.width, 1);
            f.render_widget(
                Paragraph::new(Span::styled(text, Style::default().fg(color))),
                note_area,
            );
            canvas_area.y += 1;
            canvas_area.height = canvas_area.height.saturating_sub(1);
        }

        let Some(world) = state.geometry.geometry() else {
            return;
        };
        let x_bounds = world.x_bounds;
        let y_bounds = world.y_bounds;

        // One fill decision per feature: dataset-matched features take their
        // status color, the rest the neutral no-data fill.
        let fills: Vec<Color> = world
            .features
            .iter()
            .map(|feature| {
                feature
                    .id
                    .and_then(country_name_for_id)
                    .and_then(|name| state.country_by_name(name))
                    .map(|country| status_color(country.status_indicator))
                    .unwrap_or(fill_color(NO_DATA_FILL))
            })
            .collect();

        let hovered = state.hovered_feature.filter(|&idx| idx < world.features.len());
        let epsilon = (y_bounds[1] - y_bounds[0]) / 300.0;

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for (idx, feature) in world.features.iter().enumerate() {
                    if Some(idx) == hovered {
                        continue;
                    }
                    outline(ctx, &feature.polygons, fills[idx], 0.0);
                }
                // The hovered feature paints last (raised stacking order)
                // with a doubled, brightened border.
                if let Some(idx) = hovered {
                    let highlight = brighten(fills[idx]);
                    outline(ctx, &world.features[idx].polygons, highlight, 0.0);
                    outline(ctx, &world.features[idx].polygons, highlight, epsilon);
                    outline(ctx, &world.features[idx].polygons, highlight, -epsilon);
                }
            });
        f.render_widget(canvas, canvas_area);

        state.map_viewport = Some(MapViewport {
            inner: canvas_area,
            x_bounds,
            y_bounds,
        });

        render_legend(f, columns[1]);
    }
}

fn outline(
    ctx: &mut ratatui::widgets::canvas::Context,
    polygons: &MultiPolygon<f64>,
    color: Color,
    y_offset: f64,
) {
    for polygon in &polygons.0 {
        for window in polygon.exterior().0.windows(2) {
            ctx.draw(&CanvasLine {
                x1: window[0].x,
                y1: window[0].y + y_offset,
                x2: window[1].x,
                y2: window[1].y + y_offset,
                color,
            });
        }
    }
}

fn brighten(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            r.saturating_add(70),
            g.saturating_add(70),
            b.saturating_add(70),
        ),
        other => other,
    }
}

fn render_legend(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = StatusIndicator::CATEGORIES
        .iter()
        .map(|&status| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(fill_color(status_fill(status)))),
                Span::raw(status.as_str()),
            ])
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled("■ ", Style::default().fg(fill_color(NO_DATA_FILL))),
        Span::styled("no data", Style::default().fg(Color::Gray)),
    ]));

    let legend = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " Legend ",
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(legend, area);
}
