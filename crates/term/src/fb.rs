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

    /// Each channel raised by `amount`, clamped at 255.
    pub const fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn plain(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
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
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Row-major grid of styled terminal cells.
///
/// Every write is clipped to the buffer, so callers can draw at any
/// coordinate without checking the size first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            cols: 0,
            rows: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.cols
    }

    pub fn height(&self) -> u16 {
        self.rows
    }

    /// Change the size in place. Existing content is not preserved in any
    /// meaningful layout; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.cols = width;
        self.rows = height;
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    fn row_slice_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        if y >= self.rows {
            return None;
        }
        let cols = usize::from(self.cols);
        let start = usize::from(y) * cols;
        Some(&mut self.cells[start..start + cols])
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(self.cells[usize::from(y) * usize::from(self.cols) + usize::from(x)])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self
            .row_slice_mut(y)
            .and_then(|row| row.get_mut(usize::from(x)))
        {
            *slot = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let Some(row) = self.row_slice_mut(y) else {
            return;
        };
        let tail = row.get_mut(usize::from(x)..).unwrap_or_default();
        for (slot, ch) in tail.iter_mut().zip(s.chars()) {
            *slot = Cell { ch, style };
        }
    }

    /// Write `value` in decimal without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [b'0'; 10];
        let mut start = digits.len();
        let mut n = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, &d) in digits[start..].iter().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, char::from(d), style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let x0 = usize::from(x);
        let x1 = usize::from(x.saturating_add(w)).min(usize::from(self.cols));
        if x0 >= x1 {
            return;
        }
        for row_y in y..y.saturating_add(h) {
            match self.row_slice_mut(row_y) {
                Some(row) => row[x0..x1].fill(Cell { ch, style }),
                None => break,
            }
        }
    }

    /// The characters of row `y` as a string (for tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.cols)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_digits_left_to_right() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        fb.put_u32(1, 0, 4096, style);
        fb.put_u32(8, 0, 0, style);
        assert_eq!(fb.row_text(0), " 4096   0   ");
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "SCORE", CellStyle::default());
        assert_eq!(fb.row_text(0), "  SC");
    }

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.fill_rect(1, 1, 10, 10, '#', CellStyle::default());
        assert_eq!(fb.row_text(0), "   ");
        assert_eq!(fb.row_text(1), " ##");
    }

    #[test]
    fn lighten_saturates() {
        assert_eq!(Rgb::new(250, 0, 128).lighten(50), Rgb::new(255, 50, 178));
    }
}
