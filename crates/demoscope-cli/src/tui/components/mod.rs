use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use demoscope_engine::{status_fill, Rgb};
use demoscope_types::StatusIndicator;

use super::app::{AppState, DatasetState};

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod grid;
pub(crate) mod map;
pub(crate) mod modal;
pub(crate) mod table;
pub(crate) mod trend;

pub(crate) use grid::GridComponent;
pub(crate) use map::MapComponent;
pub(crate) use modal::ModalComponent;
pub(crate) use table::TableComponent;

pub(crate) fn fill_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(crate) fn status_color(status: StatusIndicator) -> Color {
    fill_color(status_fill(status))
}

/// Centered inline message, used for loading and failure states.
pub(crate) fn render_notice(f: &mut Frame, area: Rect, text: &str, color: Color) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let notice = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    f.render_widget(notice, line.intersection(area));
}

/// The grid and table views are blank until the startup fetch resolves;
/// a load failure is surfaced inline with no automatic retry.
pub(crate) fn dataset_notice(state: &AppState) -> Option<(String, Color)> {
    match &state.dataset {
        DatasetState::Loading => Some(("Loading dataset…".to_string(), Color::Gray)),
        DatasetState::Failed(message) => Some((
            format!("Failed to load dataset: {message}"),
            Color::LightRed,
        )),
        DatasetState::Ready(_) => None,
    }
}
