use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// The single shared floating overlay. One instance lives in the app state;
/// whichever view is visible owns it, sets its content on hover-enter,
/// repositions it on hover-move and hides it on hover-leave.
#[derive(Debug, Default)]
pub struct Tooltip {
    visible: bool,
    lines: Vec<String>,
    /// Terminal cell of the cursor the box is pinned near.
    anchor: (u16, u16),
}

/// Offset from the cursor so the box does not sit under it.
const CURSOR_GAP: u16 = 2;

impl Tooltip {
    pub fn show(&mut self, lines: Vec<String>, anchor: (u16, u16)) {
        self.visible = true;
        self.lines = lines;
        self.anchor = anchor;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pin the box near the anchor, flipping left/up when it would spill
    /// past the viewport edge so it always renders fully inside `area`.
    pub fn placement(&self, area: Rect) -> Rect {
        let width = (self
            .lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16
            + 4)
        .min(area.width);
        let height = (self.lines.len() as u16 + 2).min(area.height);

        let (cx, cy) = self.anchor;

        let mut x = cx.saturating_add(CURSOR_GAP);
        if x + width > area.x + area.width {
            x = cx.saturating_sub(width + CURSOR_GAP).max(area.x);
        }

        let mut y = cy.saturating_add(1);
        if y + height > area.y + area.height {
            y = cy.saturating_sub(height).max(area.y);
        }

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Drawn last so the box floats above every view.
    pub fn render(&self, f: &mut Frame) {
        if !self.visible || self.lines.is_empty() {
            return;
        }

        let rect = self.placement(f.area());
        let text: Vec<Line> = self.lines.iter().map(|l| Line::from(l.as_str())).collect();
        let paragraph = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(Clear, rect);
        f.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tooltip_at(anchor: (u16, u16)) -> Tooltip {
        let mut tooltip = Tooltip::default();
        tooltip.show(
            vec!["Hungary".to_string(), "Polyarchy: 0.46".to_string()],
            anchor,
        );
        tooltip
    }

    #[test]
    fn test_box_sits_right_of_cursor_with_room() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = tooltip_at((10, 5)).placement(area);
        assert!(rect.x > 10);
        assert!(rect.x + rect.width <= 80);
        assert!(rect.y + rect.height <= 24);
    }

    #[test]
    fn test_box_flips_left_at_the_right_edge() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = tooltip_at((78, 5)).placement(area);
        assert!(rect.x < 78);
        assert!(rect.x + rect.width <= 80);
    }

    #[test]
    fn test_box_flips_up_at_the_bottom_edge() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = tooltip_at((10, 23)).placement(area);
        assert!(rect.y < 23);
        assert!(rect.y + rect.height <= 24);
    }

    #[test]
    fn test_hidden_after_hover_leave() {
        let mut tooltip = tooltip_at((10, 5));
        assert!(tooltip.is_visible());
        tooltip.hide();
        assert!(!tooltip.is_visible());
    }
}
