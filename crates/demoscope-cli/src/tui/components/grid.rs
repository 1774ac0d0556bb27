use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{dataset_notice, render_notice, status_color, Component};
use crate::tui::app::AppState;
use crate::tui::view_model::CountryRow;

const COLUMNS: u16 = 3;
const CARD_HEIGHT: u16 = 6;

pub(crate) struct GridComponent;

impl Component for GridComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        state.grid_cells.clear();

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
        let card_width = (area.width / COLUMNS).max(18);

        for (idx, row) in rows.iter().enumerate() {
            let column = idx as u16 % COLUMNS;
            let grid_row = idx as u16 / COLUMNS;
            let y = area.y + grid_row * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            let rect =
                Rect::new(area.x + column * card_width, y, card_width, CARD_HEIGHT).intersection(area);
            if rect.width < 6 || rect.height < 3 {
                continue;
            }

            let hovered = state.hovered_item.as_deref() == Some(row.name.as_str());
            let border_style = if idx == selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if hovered {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let card = Paragraph::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} ", row.flag)),
                    Span::styled(
                        row.name.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("● {}", row.status.as_str()),
                    Style::default().fg(status_color(row.status)),
                )),
                Line::from(vec![
                    Span::styled("E ", Style::default().fg(Color::Gray)),
                    Span::styled(row.polyarchy.clone(), Style::default().fg(Color::White)),
                    Span::styled("  L ", Style::default().fg(Color::Gray)),
                    Span::styled(row.libdem.clone(), Style::default().fg(Color::White)),
                ]),
                Line::from(vec![
                    Span::styled("BTI ", Style::default().fg(Color::Gray)),
                    Span::styled(row.bti.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!(" · {} events", row.events),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
            ])
            .block(Block::default().borders(Borders::ALL).border_style(border_style));

            f.render_widget(card, rect);
            state.grid_cells.push((rect, row.name.clone()));
        }
    }
}
