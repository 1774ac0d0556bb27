use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use demoscope_engine::SortKey;

use super::{dataset_notice, render_notice, status_color, Component};
use crate::tui::app::AppState;
use crate::tui::view_model::CountryRow;

pub(crate) struct TableComponent;

impl Component for TableComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        state.table_rows.clear();

        if let Some((text, color)) = dataset_notice(state) {
            render_notice(f, area, &text, color);
            return;
        }

        let rows: Vec<CountryRow> = state
            .visible()
            .iter()
            .map(|c| CountryRow::from_country(c))
            .collect();

        if rows.is_empty() {
            render_notice(
                f,
                area,
                "No countries match the current filters.",
                Color::Gray,
            );
            return;
        }

        let selected = state.selection.min(rows.len() - 1);
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);

        let header = Row::new(vec![
            header_cell("Country", SortKey::Name, state),
            Cell::from("Status"),
            header_cell("Electoral", SortKey::Polyarchy, state),
            header_cell("Liberal", SortKey::Libdem, state),
            header_cell("BTI", SortKey::Bti, state),
            header_cell("Events", SortKey::Events, state),
        ])
        .style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        );

        let body: Vec<Row> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let hovered = state.hovered_item.as_deref() == Some(row.name.as_str());
                let style = if idx == selected {
                    Style::default()
                        .bg(Color::Rgb(38, 42, 52))
                        .add_modifier(Modifier::BOLD)
                } else if hovered {
                    Style::default().bg(Color::Rgb(30, 32, 40))
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(format!("{} {}", row.flag, row.name)),
                    Cell::from(Span::styled(
                        row.status.as_str(),
                        Style::default().fg(status_color(row.status)),
                    )),
                    Cell::from(row.polyarchy.clone()),
                    Cell::from(row.libdem.clone()),
                    Cell::from(row.bti.clone()),
                    Cell::from(row.events.to_string()),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            body,
            [
                Constraint::Min(18),
                Constraint::Length(12),
                Constraint::Length(11),
                Constraint::Length(9),
                Constraint::Length(8),
                Constraint::Length(7),
            ],
        )
        .header(header)
        .block(block);

        f.render_widget(table, area);

        // Row hit map: the header occupies the first inner line, each data
        // row one line below it, clipped to the panel.
        for (idx, row) in rows.iter().enumerate() {
            let y = inner.y + 1 + idx as u16;
            if y >= inner.y + inner.height {
                break;
            }
            state
                .table_rows
                .push((Rect::new(inner.x, y, inner.width, 1), row.name.clone()));
        }
    }
}

fn header_cell<'a>(label: &'a str, key: SortKey, state: &AppState) -> Cell<'a> {
    if state.criteria.sort_key == key {
        let arrow = match state.criteria.sort_order {
            demoscope_engine::SortOrder::Asc => "▲",
            demoscope_engine::SortOrder::Desc => "▼",
        };
        Cell::from(format!("{label} {arrow}"))
    } else {
        Cell::from(label)
    }
}
