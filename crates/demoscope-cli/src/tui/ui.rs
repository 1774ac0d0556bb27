use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveView, AppState};
use super::components::{
    Component, GridComponent, MapComponent, ModalComponent, TableComponent,
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], state);

    match state.view {
        ActiveView::Grid => GridComponent.render(f, chunks[1], state),
        ActiveView::Table => TableComponent.render(f, chunks[1], state),
        ActiveView::Map => MapComponent.render(f, chunks[1], state),
    }

    render_footer(f, chunks[2]);

    if state.modal.is_some() {
        ModalComponent.render(f, chunks[1], state);
    }

    state.tooltip.render(f);
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let mut title = vec![
        Span::styled(
            "demoscope",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for (view, label) in [
        (ActiveView::Grid, "[1] grid"),
        (ActiveView::Table, "[2] table"),
        (ActiveView::Map, "[3] map"),
    ] {
        let style = if state.view == view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        title.push(Span::styled(label, style));
        title.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(title)), rows[0]);

    let visible = state.visible().len();
    let total = state.countries().len();
    let search = if state.search_mode {
        format!("{}▏", state.criteria.search_text)
    } else if state.criteria.search_text.is_empty() {
        "(none)".to_string()
    } else {
        state.criteria.search_text.clone()
    };

    let criteria = Line::from(vec![
        Span::styled("status: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.criteria.status_filter.label(),
            Style::default().fg(Color::White),
        ),
        Span::styled(" │ sort: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!(
                "{} {}",
                state.criteria.sort_key.label(),
                state.criteria.sort_order.label()
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(" │ search: ", Style::default().fg(Color::Gray)),
        Span::styled(
            search,
            if state.search_mode {
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            },
        ),
        Span::styled(
            format!(" │ {}/{} shown", visible, total),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(criteria), rows[1]);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let hints = Line::from(Span::styled(
        " tab/1/2/3 view · f filter · s sort · o order · / search · r reset · ↑↓ select · enter open · q quit",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(hints), area);
}
