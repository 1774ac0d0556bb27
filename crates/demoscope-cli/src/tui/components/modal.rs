use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use demoscope_engine::format::{flag_glyph, fmt_bti, fmt_index};
use demoscope_types::{Country, Severity};

use super::{status_color, trend, Component};
use crate::tui::app::AppState;

const BAR_WIDTH: usize = 24;

// Threshold color bands for the normalized score bars.
const BAND_HIGH: f64 = 0.65;
const BAND_MID: f64 = 0.40;

pub(crate) struct ModalComponent;

impl Component for ModalComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(modal) = &state.modal else {
            return;
        };
        let fraction = modal.bars.fraction();
        let Some(country) = state.country_by_name(&modal.country).cloned() else {
            return;
        };

        let rect = centered_rect(area, 84, 90);
        f.render_widget(Clear, rect);

        let title = format!(" {} {} ", flag_glyph(&country.iso2), country.name);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // status badge
                Constraint::Length(3), // score bars
                Constraint::Min(4),    // episodes | events
                Constraint::Length(9), // trend chart
            ])
            .split(inner);

        let badge = Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::styled(
                country.status_indicator.as_str(),
                Style::default()
                    .fg(status_color(country.status_indicator))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        f.render_widget(Paragraph::new(badge), sections[0]);

        render_bars(f, sections[1], &country, fraction);
        render_lists(f, sections[2], &country);
        trend::render_trend(f, sections[3], &country.polyarchy_trend);

        state.modal_area = Some(rect);
    }
}

fn render_bars(f: &mut Frame, area: Rect, country: &Country, fraction: f64) {
    let bars = vec![
        score_bar(
            "Electoral democracy",
            country.polyarchy_index,
            1.0,
            fmt_index(country.polyarchy_index),
            fraction,
        ),
        score_bar(
            "Liberal democracy  ",
            country.libdem_index,
            1.0,
            fmt_index(country.libdem_index),
            fraction,
        ),
        score_bar(
            "BTI governance     ",
            country.bti_governance_score,
            10.0,
            fmt_bti(country.bti_governance_score),
            fraction,
        ),
    ];
    f.render_widget(Paragraph::new(bars), area);
}

/// One percentage-filled bar. The fill width is the normalized value scaled
/// by the animation fraction; missing values draw an empty track and the
/// placeholder text.
fn score_bar(
    label: &str,
    value: Option<f64>,
    scale: f64,
    text: String,
    fraction: f64,
) -> Line<'static> {
    let normalized = value.map(|v| (v / scale).clamp(0.0, 1.0));

    let (filled, color) = match normalized {
        Some(n) => {
            let band = if n >= BAND_HIGH {
                Color::Green
            } else if n >= BAND_MID {
                Color::Yellow
            } else {
                Color::Red
            };
            ((n * fraction * BAR_WIDTH as f64).round() as usize, band)
        }
        None => (0, Color::DarkGray),
    };
    let filled = filled.min(BAR_WIDTH);

    Line::from(vec![
        Span::styled(format!("{label} "), Style::default().fg(Color::Gray)),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(Color::Rgb(50, 52, 60)),
        ),
        Span::styled(format!(" {text}"), Style::default().fg(Color::White)),
    ])
}

fn render_lists(f: &mut Frame, area: Rect, country: &Country) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_episodes(f, halves[0], country);
    render_events(f, halves[1], country);
}

fn render_episodes(f: &mut Frame, area: Rect, country: &Country) {
    let mut lines = Vec::new();
    if country.ert_episodes.is_empty() {
        lines.push(Line::from(Span::styled(
            "No recorded episodes.",
            Style::default().fg(Color::Gray),
        )));
    } else {
        for episode in &country.ert_episodes {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("▸ {} ", episode.episode_type),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(episode.span_label(), Style::default().fg(Color::White)),
            ]));
            if !episode.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", episode.description),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
    }

    let episodes = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Episodes "))
        .wrap(Wrap { trim: true });
    f.render_widget(episodes, area);
}

fn render_events(f: &mut Frame, area: Rect, country: &Country) {
    let mut lines = Vec::new();
    if country.recent_events.is_empty() {
        lines.push(Line::from(Span::styled(
            "No recent events recorded.",
            Style::default().fg(Color::Gray),
        )));
    } else {
        for event in &country.recent_events {
            lines.push(Line::from(vec![
                Span::styled("● ", Style::default().fg(severity_color(event.severity))),
                Span::styled(
                    format!("{} ", event.year),
                    Style::default().fg(Color::White),
                ),
                Span::styled(event.event.clone(), Style::default().fg(Color::Gray)),
            ]));
        }
    }

    let events = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Recent events "))
        .wrap(Wrap { trim: true });
    f.render_widget(events, area);
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::LightRed,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Gray,
    }
}

pub(crate) fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{AppState, DatasetState};
    use demoscope_runtime::DatasetStore;
    use demoscope_testing::fixtures::{country, rich_country};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_modal(state: &mut AppState) -> String {
        let backend = TestBackend::new(90, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                ModalComponent.render(f, area, state);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_episode_list_shows_explicit_message() {
        // A bare record: no episodes, no events, no scores, no status.
        let mut state = AppState::new();
        state.dataset = DatasetState::Ready(DatasetStore::new(vec![country("Atlantis", "")]));
        state.open_modal("Atlantis".to_string());

        let screen = draw_modal(&mut state);
        assert!(screen.contains("No recorded episodes."));
        assert!(screen.contains("No recent events recorded."));
        assert!(!screen.contains("▸"));
        // Unrecognized status degrades to the fallback badge, never a panic.
        assert!(screen.contains("unknown"));
        // Missing scores format as the placeholder.
        assert!(screen.contains("—"));
    }

    #[test]
    fn test_populated_record_renders_episode_and_event_blocks() {
        let mut state = AppState::new();
        state.dataset = DatasetState::Ready(DatasetStore::new(vec![rich_country("Hungary", "HU")]));
        state.open_modal("Hungary".to_string());

        let screen = draw_modal(&mut state);
        assert!(screen.contains("autocratization"));
        assert!(screen.contains("2010–ongoing"));
        assert!(screen.contains("backsliding"));
        assert!(!screen.contains("No recorded episodes."));
    }
}
