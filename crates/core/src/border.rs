//! Arena border - the rectangle the snake must stay strictly inside.

use crate::types::Position;

/// Axis-aligned rectangle, edges inclusive.
///
/// The edge cells themselves are walls: a head on any edge (or beyond it) has
/// breached the border. Playable cells are strictly inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Border {
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Arena for a `rows` x `cols` terminal, starting one row below `top`.
    ///
    /// Horizontally the arena spans the middle half of the screen. Vertically
    /// it is two thirds of the screen tall, clamped to the last visible row.
    ///
    /// ```
    /// use tui_snake_core::Border;
    ///
    /// let b = Border::layout(24, 80, 4);
    /// assert_eq!((b.top, b.left, b.bottom, b.right), (5, 20, 21, 60));
    /// ```
    pub fn layout(rows: u16, cols: u16, top: i32) -> Self {
        let rows = rows as i32;
        let cols = cols as i32;
        let top = top + 1;
        let bottom = (top + rows * 2 / 3).min(rows - 1).max(top);
        Self {
            top,
            left: cols / 4,
            bottom,
            right: cols / 2 + cols / 4,
        }
    }

    /// True when `pos` is a playable cell (not on or past an edge).
    pub fn strictly_contains(&self, pos: Position) -> bool {
        pos.row > self.top && pos.row < self.bottom && pos.col > self.left && pos.col < self.right
    }

    /// True when `pos` touches or crosses the rectangle.
    pub fn is_breached(&self, pos: Position) -> bool {
        !self.strictly_contains(pos)
    }

    pub fn inner_height(&self) -> i32 {
        (self.bottom - self.top - 1).max(0)
    }

    pub fn inner_width(&self) -> i32 {
        (self.right - self.left - 1).max(0)
    }

    /// Number of playable cells.
    pub fn interior_area(&self) -> usize {
        (self.inner_height() as usize) * (self.inner_width() as usize)
    }

    /// Playable cells in row-major order.
    pub fn interior_cells(&self) -> impl Iterator<Item = Position> + '_ {
        ((self.top + 1)..self.bottom)
            .flat_map(move |row| ((self.left + 1)..self.right).map(move |col| Position::new(row, col)))
    }

    /// Clamp `pos` into the playable area.
    pub fn clamp_inside(&self, pos: Position) -> Position {
        let row = pos.row.min(self.bottom - 1).max(self.top + 1);
        let col = pos.col.min(self.right - 1).max(self.left + 1);
        Position::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_edge_is_a_wall() {
        let b = Border::new(2, 5, 20, 60);
        assert!(b.is_breached(Position::new(2, 30)));
        assert!(b.is_breached(Position::new(20, 30)));
        assert!(b.is_breached(Position::new(10, 5)));
        assert!(b.is_breached(Position::new(10, 60)));
        assert!(!b.is_breached(Position::new(10, 30)));
    }

    #[test]
    fn cells_past_the_edge_are_breaches() {
        let b = Border::new(2, 5, 20, 60);
        assert!(b.is_breached(Position::new(-1, 30)));
        assert!(b.is_breached(Position::new(10, 61)));
    }

    #[test]
    fn interior_matches_area() {
        let b = Border::new(0, 0, 4, 5);
        let cells: Vec<_> = b.interior_cells().collect();
        assert_eq!(cells.len(), b.interior_area());
        assert_eq!(cells.len(), 3 * 4);
        assert!(cells.iter().all(|&p| b.strictly_contains(p)));
        assert_eq!(cells[0], Position::new(1, 1));
    }

    #[test]
    fn layout_clamps_to_screen() {
        let b = Border::layout(10, 40, 5);
        assert_eq!(b.top, 6);
        assert_eq!(b.bottom, 9);
        assert_eq!(b.left, 10);
        assert_eq!(b.right, 30);
    }

    #[test]
    fn degenerate_layout_has_no_interior() {
        let b = Border::layout(3, 4, 5);
        assert_eq!(b.interior_area(), 0);
        assert_eq!(b.interior_cells().count(), 0);
    }

    #[test]
    fn clamp_moves_outside_points_in() {
        let b = Border::new(2, 5, 20, 60);
        assert_eq!(b.clamp_inside(Position::new(0, 100)), Position::new(3, 59));
        assert_eq!(b.clamp_inside(Position::new(10, 10)), Position::new(10, 10));
    }
}
