use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use geo::{Contains, Point};
use ratatui::layout::{Position, Rect};

use demoscope_engine::{country_name_for_id, derive, Criteria};
use demoscope_runtime::{DatasetStore, GeometryCache};
use demoscope_types::Country;

use super::animate::BarAnimation;
use super::tooltip::Tooltip;
use super::view_model::tooltip_lines;

/// The three mutually exclusive presentations. Exactly one is active;
/// the inactive two keep their state (the map's geometry cache in
/// particular survives view switches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Grid,
    Table,
    Map,
}

impl ActiveView {
    pub fn next(self) -> Self {
        match self {
            Self::Grid => Self::Table,
            Self::Table => Self::Map,
            Self::Map => Self::Grid,
        }
    }
}

/// Startup dataset fetch, resolved exactly once. A failure leaves the
/// session without data until restart; there is no automatic retry.
#[derive(Debug, Default)]
pub enum DatasetState {
    #[default]
    Loading,
    Ready(DatasetStore),
    Failed(String),
}

/// One selected country shown in full, plus its bar-animation driver.
#[derive(Debug)]
pub struct ModalState {
    pub country: String,
    pub bars: BarAnimation,
}

/// Where the map canvas landed last frame, for cursor hit testing.
#[derive(Debug, Clone, Copy)]
pub struct MapViewport {
    pub inner: Rect,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

pub struct AppState {
    pub view: ActiveView,
    pub criteria: Criteria,
    pub search_mode: bool,
    pub dataset: DatasetState,
    pub geometry: GeometryCache,
    pub selection: usize,
    pub modal: Option<ModalState>,
    pub tooltip: Tooltip,

    // Layout hit maps, rewritten by the renderers each frame.
    pub grid_cells: Vec<(Rect, String)>,
    pub table_rows: Vec<(Rect, String)>,
    pub map_viewport: Option<MapViewport>,
    pub modal_area: Option<Rect>,

    pub hovered_item: Option<String>,
    pub hovered_feature: Option<usize>,

    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ActiveView::Grid,
            criteria: Criteria::default(),
            search_mode: false,
            dataset: DatasetState::Loading,
            geometry: GeometryCache::default(),
            selection: 0,
            modal: None,
            tooltip: Tooltip::default(),
            grid_cells: Vec::new(),
            table_rows: Vec::new(),
            map_viewport: None,
            modal_area: None,
            hovered_item: None,
            hovered_feature: None,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The immutable snapshot, or an empty slice before it arrives.
    pub fn countries(&self) -> &[Country] {
        match &self.dataset {
            DatasetState::Ready(store) => store.countries(),
            _ => &[],
        }
    }

    /// Re-run the pure derivation for the current criteria.
    pub fn visible(&self) -> Vec<&Country> {
        derive(self.countries(), &self.criteria)
    }

    pub fn country_by_name(&self, name: &str) -> Option<&Country> {
        match &self.dataset {
            DatasetState::Ready(store) => store.get(name),
            _ => None,
        }
    }

    pub fn selected_name(&self) -> Option<String> {
        let visible = self.visible();
        if visible.is_empty() {
            return None;
        }
        let idx = self.selection.min(visible.len() - 1);
        Some(visible[idx].name.clone())
    }

    pub fn open_modal(&mut self, name: String) {
        if self.country_by_name(&name).is_some() {
            self.tooltip.hide();
            self.modal = Some(ModalState {
                country: name,
                bars: BarAnimation::start(),
            });
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.modal_area = None;
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        if self.view != view {
            self.view = view;
            self.tooltip.hide();
            self.hovered_item = None;
            self.hovered_feature = None;
        }
    }

    /// Advance animations once per render tick.
    pub fn on_tick(&mut self) {
        if let Some(modal) = &mut self.modal {
            modal.bars.tick();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.search_mode {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.search_mode = false,
                KeyCode::Backspace => {
                    let _ = self.criteria.search_text.pop();
                }
                KeyCode::Char(c) => self.criteria.search_text.push(c),
                _ => {}
            }
            return;
        }

        if self.modal.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.close_modal();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.switch_view(ActiveView::Grid),
            KeyCode::Char('2') => self.switch_view(ActiveView::Table),
            KeyCode::Char('3') => self.switch_view(ActiveView::Map),
            KeyCode::Tab => self.switch_view(self.view.next()),
            KeyCode::Char('f') => {
                self.criteria.status_filter = self.criteria.status_filter.next();
            }
            KeyCode::Char('s') => self.criteria.sort_key = self.criteria.sort_key.next(),
            KeyCode::Char('o') => self.criteria.sort_order = self.criteria.sort_order.toggle(),
            KeyCode::Char('/') => self.search_mode = true,
            KeyCode::Char('r') => self.criteria = Criteria::default(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selection = self.selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.visible().len();
                if len > 0 {
                    self.selection = (self.selection + 1).min(len - 1);
                }
            }
            KeyCode::Enter => match self.view {
                ActiveView::Grid | ActiveView::Table => {
                    if let Some(name) = self.selected_name() {
                        self.open_modal(name);
                    }
                }
                ActiveView::Map => {
                    if let Some(name) = self.hovered_match() {
                        self.open_modal(name);
                    }
                }
            },
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => self.update_hover(mouse.column, mouse.row),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.modal.is_some() {
            // Clicks on the overlay background dismiss the detail view;
            // clicks inside its body do nothing.
            let inside = self
                .modal_area
                .is_some_and(|area| area.contains(Position::new(column, row)));
            if !inside {
                self.close_modal();
            }
            return;
        }

        match self.view {
            ActiveView::Grid => {
                if let Some(name) = hit(&self.grid_cells, column, row) {
                    self.open_modal(name);
                }
            }
            ActiveView::Table => {
                if let Some(name) = hit(&self.table_rows, column, row) {
                    self.open_modal(name);
                }
            }
            ActiveView::Map => {
                // Matched features only; unmatched geometry is inert.
                if let Some(name) = self.feature_match_at(column, row) {
                    self.open_modal(name);
                }
            }
        }
    }

    fn update_hover(&mut self, column: u16, row: u16) {
        if self.modal.is_some() {
            self.tooltip.hide();
            return;
        }

        match self.view {
            ActiveView::Grid | ActiveView::Table => {
                let cells = match self.view {
                    ActiveView::Grid => &self.grid_cells,
                    _ => &self.table_rows,
                };
                match hit(cells, column, row) {
                    Some(name) => {
                        let lines = self.country_by_name(&name).map(tooltip_lines);
                        self.hovered_item = Some(name);
                        match lines {
                            Some(lines) => self.tooltip.show(lines, (column, row)),
                            None => self.tooltip.hide(),
                        }
                    }
                    None => {
                        self.hovered_item = None;
                        self.tooltip.hide();
                    }
                }
            }
            ActiveView::Map => {
                // Unmatched geometry is inert: no raised border, no tooltip.
                match self.feature_match_at(column, row) {
                    Some(name) => {
                        self.hovered_feature = self.feature_at(column, row);
                        match self.country_by_name(&name).map(tooltip_lines) {
                            Some(lines) => self.tooltip.show(lines, (column, row)),
                            None => self.tooltip.hide(),
                        }
                    }
                    None => {
                        self.hovered_feature = None;
                        self.tooltip.hide();
                    }
                }
            }
        }
    }

    /// Index of the geometry feature under the cursor, if any.
    fn feature_at(&self, column: u16, row: u16) -> Option<usize> {
        let viewport = self.map_viewport?;
        if !viewport.inner.contains(Position::new(column, row)) {
            return None;
        }
        let world = self.geometry.geometry()?;

        let [x0, x1] = viewport.x_bounds;
        let [y0, y1] = viewport.y_bounds;
        let inner = viewport.inner;
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let wx = x0 + ((column - inner.x) as f64 + 0.5) / inner.width as f64 * (x1 - x0);
        let wy = y1 - ((row - inner.y) as f64 + 0.5) / inner.height as f64 * (y1 - y0);
        let point = Point::new(wx, wy);

        world
            .features
            .iter()
            .position(|feature| feature.polygons.contains(&point))
    }

    /// Name of the tracked, dataset-matched country under the cursor.
    /// Features without a table entry or a dataset record produce nothing.
    fn feature_match_at(&self, column: u16, row: u16) -> Option<String> {
        let idx = self.feature_at(column, row)?;
        let id = self.geometry.geometry()?.features[idx].id?;
        let name = country_name_for_id(id)?;
        self.country_by_name(name).map(|c| c.name.clone())
    }

    fn hovered_match(&self) -> Option<String> {
        let idx = self.hovered_feature?;
        let id = self.geometry.geometry()?.features.get(idx)?.id?;
        let name = country_name_for_id(id)?;
        self.country_by_name(name).map(|c| c.name.clone())
    }
}

fn hit(cells: &[(Rect, String)], column: u16, row: u16) -> Option<String> {
    let position = Position::new(column, row);
    cells
        .iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, name)| name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use demoscope_testing::fixtures::{country_with_status, rich_country};
    use demoscope_types::StatusIndicator;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new();
        state.dataset = DatasetState::Ready(DatasetStore::new(vec![
            country_with_status("Argentina", "AR", StatusIndicator::Recovering),
            rich_country("Hungary", "HU"),
        ]));
        state
    }

    #[test]
    fn test_initial_view_is_grid() {
        assert_eq!(AppState::new().view, ActiveView::Grid);
    }

    #[test]
    fn test_view_keys_switch_presentation() {
        let mut state = ready_state();
        state.handle_key(key(KeyCode::Char('2')));
        assert_eq!(state.view, ActiveView::Table);
        state.handle_key(key(KeyCode::Char('3')));
        assert_eq!(state.view, ActiveView::Map);
        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.view, ActiveView::Grid);
    }

    #[test]
    fn test_search_mode_captures_characters() {
        let mut state = ready_state();
        state.handle_key(key(KeyCode::Char('/')));
        state.handle_key(key(KeyCode::Char('a')));
        state.handle_key(key(KeyCode::Char('r')));
        state.handle_key(key(KeyCode::Char('g')));
        assert_eq!(state.criteria.search_text, "arg");
        assert_eq!(state.visible().len(), 1);

        state.handle_key(key(KeyCode::Enter));
        assert!(!state.search_mode);
        // 'r' outside search mode resets the criteria instead of typing.
        state.handle_key(key(KeyCode::Char('r')));
        assert!(state.criteria.search_text.is_empty());
    }

    #[test]
    fn test_enter_opens_modal_for_selected_country() {
        let mut state = ready_state();
        state.handle_key(key(KeyCode::Enter));
        assert_eq!(state.modal.as_ref().unwrap().country, "Argentina");
    }

    #[test]
    fn test_escape_closes_modal_before_quitting() {
        let mut state = ready_state();
        state.handle_key(key(KeyCode::Enter));
        assert!(state.modal.is_some());

        state.handle_key(key(KeyCode::Esc));
        assert!(state.modal.is_none());
        assert!(!state.should_quit);

        state.handle_key(key(KeyCode::Esc));
        assert!(state.should_quit);
    }

    #[test]
    fn test_selection_clamps_to_visible_list() {
        let mut state = ready_state();
        for _ in 0..10 {
            state.handle_key(key(KeyCode::Down));
        }
        assert_eq!(state.selection, 1);
        state.handle_key(key(KeyCode::Up));
        assert_eq!(state.selection, 0);
    }

    #[test]
    fn test_modal_never_opens_for_unknown_name() {
        let mut state = ready_state();
        state.open_modal("Atlantis".to_string());
        assert!(state.modal.is_none());
    }

    /// Three squares: id 32 (Argentina, tracked + in dataset), id 348
    /// (Hungary, same), id 999 (not in the identifier table).
    fn map_state() -> AppState {
        let raw = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","id":32,"properties":{},
             "geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[4.0,0.0],[4.0,4.0],[0.0,4.0],[0.0,0.0]]]}},
            {"type":"Feature","id":348,"properties":{},
             "geometry":{"type":"Polygon","coordinates":[[[10.0,0.0],[12.0,0.0],[12.0,2.0],[10.0,2.0],[10.0,0.0]]]}},
            {"type":"Feature","id":999,"properties":{},
             "geometry":{"type":"Polygon","coordinates":[[[16.0,0.0],[20.0,0.0],[20.0,4.0],[16.0,4.0],[16.0,0.0]]]}}
        ]}"#;

        let mut state = ready_state();
        state.switch_view(ActiveView::Map);
        assert!(state.geometry.request_load());
        state
            .geometry
            .complete(demoscope_runtime::parse_world_geometry(raw));
        state.map_viewport = Some(MapViewport {
            inner: Rect::new(0, 0, 40, 20),
            x_bounds: [0.0, 20.0],
            y_bounds: [0.0, 4.0],
        });
        state
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_hovering_a_matched_feature_shows_the_tooltip() {
        let mut state = map_state();
        // Column 3 / row 9 lands inside the id=32 square.
        state.handle_mouse(mouse(MouseEventKind::Moved, 3, 9));
        assert!(state.tooltip.is_visible());
        assert!(state.hovered_feature.is_some());
    }

    #[test]
    fn test_unmatched_feature_is_inert() {
        let mut state = map_state();
        // Column 35 / row 9 lands inside the id=999 square, which has no
        // identifier-table entry.
        state.handle_mouse(mouse(MouseEventKind::Moved, 35, 9));
        assert!(!state.tooltip.is_visible());
        assert!(state.hovered_feature.is_none());

        state.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 35, 9));
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_clicking_a_matched_feature_opens_its_detail_view() {
        let mut state = map_state();
        // Column 21 / row 15 lands inside the id=348 square.
        state.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 21, 15));
        assert_eq!(state.modal.as_ref().unwrap().country, "Hungary");
    }

    #[test]
    fn test_map_before_dataset_load_is_empty_but_valid() {
        let mut state = map_state();
        state.dataset = DatasetState::Loading;

        state.handle_mouse(mouse(MouseEventKind::Moved, 3, 9));
        assert!(!state.tooltip.is_visible());

        state.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 9));
        assert!(state.modal.is_none());
    }
}
