//! Pointer tracking and the decorative cursor follower.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::theme::colors;

/// Last observed pointer cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub column: u16,
    pub row: u16,
}

impl PointerPosition {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// The follower stays hidden until the pointer has left column zero
    pub fn is_visible(&self) -> bool {
        self.column > 0
    }
}

/// Draws a dot under the pointer
pub struct CursorFollower {
    position: PointerPosition,
}

impl CursorFollower {
    pub fn new(position: PointerPosition) -> Self {
        Self { position }
    }
}

impl Widget for CursorFollower {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.position.is_visible() {
            return;
        }
        let PointerPosition { column, row } = self.position;
        if column < area.left() || column >= area.right() || row < area.top() || row >= area.bottom() {
            return;
        }
        let cell = &mut buf[(column, row)];
        cell.set_char('●');
        cell.set_style(Style::default().fg(colors::CURSOR));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_in_column_zero() {
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        CursorFollower::new(PointerPosition::new(0, 2)).render(area, &mut buf);
        assert_eq!(buf[(0, 2)].symbol(), " ");
    }

    #[test]
    fn test_drawn_at_pointer() {
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        CursorFollower::new(PointerPosition::new(3, 1)).render(area, &mut buf);
        assert_eq!(buf[(3, 1)].symbol(), "●");
    }

    #[test]
    fn test_outside_area_is_ignored() {
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        CursorFollower::new(PointerPosition::new(9, 9)).render(area, &mut buf);
        assert!(buf.content().iter().all(|c| c.symbol() == " "));
    }
}
