//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

impl CellStyle {
    pub fn cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().cell(' ')
    }
}

/// 2D framebuffer of styled character cells, addressed as `(x, y)` =
/// `(column, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `s` starting at signed `(row, col)`.
    ///
    /// Characters falling outside the buffer are dropped, so callers can pass
    /// arena coordinates without checking them first.
    pub fn put_str(&mut self, row: i32, col: i32, s: &str, style: CellStyle) {
        let Ok(y) = u16::try_from(row) else {
            return;
        };
        for (i, ch) in s.chars().enumerate() {
            let x = col + i as i32;
            if x < 0 {
                continue;
            }
            if x >= self.width as i32 {
                break;
            }
            self.set(x as u16, y, style.cell(ch));
        }
    }

    /// Outline the rectangle with corners `(top, left)` and `(bottom, right)`.
    pub fn draw_rect(&mut self, top: i32, left: i32, bottom: i32, right: i32, style: CellStyle) {
        if bottom <= top || right <= left {
            return;
        }
        for col in left + 1..right {
            self.put_str(top, col, "─", style);
            self.put_str(bottom, col, "─", style);
        }
        for row in top + 1..bottom {
            self.put_str(row, left, "│", style);
            self.put_str(row, right, "│", style);
        }
        self.put_str(top, left, "┌", style);
        self.put_str(top, right, "┐", style);
        self.put_str(bottom, left, "└", style);
        self.put_str(bottom, right, "┘", style);
    }

    /// Characters of row `y`, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let mut line: String = (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect();
        line.truncate(line.trim_end().len());
        line
    }

    /// Whole buffer as text, one line per row.
    pub fn text(&self) -> String {
        let mut all = String::new();
        for y in 0..self.height {
            all.push_str(&self.row_text(y));
            all.push('\n');
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_negative_and_overflowing_columns() {
        let mut fb = FrameBuffer::new(5, 2);
        let style = CellStyle::default();
        fb.put_str(0, -2, "abcdef", style);
        assert_eq!(fb.row_text(0), "cdef");
        fb.put_str(1, 3, "xyz", style);
        assert_eq!(fb.row_text(1), "   xy");
        fb.put_str(-1, 0, "zz", style);
        fb.put_str(9, 0, "zz", style);
        assert_eq!(fb.text(), "cdef\n   xy\n");
    }

    #[test]
    fn draw_rect_places_corners() {
        let mut fb = FrameBuffer::new(6, 4);
        fb.draw_rect(0, 1, 3, 4, CellStyle::default());
        assert_eq!(fb.get(1, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(4, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(1, 3).unwrap().ch, '└');
        assert_eq!(fb.get(4, 3).unwrap().ch, '┘');
        assert_eq!(fb.get(2, 0).unwrap().ch, '─');
        assert_eq!(fb.get(1, 1).unwrap().ch, '│');
        assert_eq!(fb.get(2, 1).unwrap().ch, ' ');
    }

    #[test]
    fn resize_keeps_dimensions_in_sync() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(4, 3);
        assert_eq!((fb.width(), fb.height()), (4, 3));
        assert!(fb.get(3, 2).is_some());
        assert!(fb.get(4, 0).is_none());
    }
}
