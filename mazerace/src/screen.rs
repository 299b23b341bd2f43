//! Off-screen cell buffer and frame diffing.

use std::ops::BitOr;

use mazerace_core::{Point, Range};

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The terminal's own colour.
    pub const DEFAULT: Self = Self(0);

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Each component multiplied by `pct`/100.
    pub fn scaled(self, pct: u32) -> Self {
        let f = |c: u8| ((c as u32 * pct) / 100).min(255) as u8;
        Self::from_rgb(f(self.r()), f(self.g()), f(self.b()))
    }
}

/// Bitmask of text attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct AttrMask(pub u8);

impl AttrMask {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const REVERSE: Self = Self(1 << 2);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for AttrMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrMask,
}

impl Style {
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: Color::DEFAULT,
            attrs: AttrMask::NONE,
        }
    }

    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub const fn with_attrs(mut self, attrs: AttrMask) -> Self {
        self.attrs = attrs;
        self
    }
}

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// A `height × width` buffer of cells. Positions are (row, column).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Screen {
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::of_size(height.max(0), width.max(0));
        Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Change the size, clearing every cell.
    pub fn resize(&mut self, width: i32, height: i32) {
        if width != self.width() || height != self.height() {
            *self = Self::new(width, height);
        } else {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// The cell at `p`, or the default cell if out of bounds.
    pub fn at(&self, p: Point) -> Cell {
        self.bounds
            .index(p)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Set the cell at `p`. Out-of-bounds writes are dropped.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Write `text` starting at `p`, clipped at the right edge. Returns the
    /// column after the last character.
    pub fn text(&mut self, p: Point, text: &str, style: Style) -> i32 {
        let mut col = p.col;
        for ch in text.chars() {
            self.set(Point::new(p.row, col), Cell::new(ch, style));
            col += 1;
        }
        col
    }

    /// The characters of row `row`, trailing spaces trimmed.
    pub fn row_text(&self, row: i32) -> String {
        let s: String = (0..self.width())
            .map(|col| self.at(Point::new(row, col)).ch)
            .collect();
        s.trim_end().to_string()
    }
}

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Point,
}

/// The cells to redraw to turn one screen into the next.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    /// Set when the whole screen is sent: the terminal must be cleared first.
    pub full: bool,
}

/// Compute the difference between two screens.
///
/// When the sizes differ the whole of `curr` is emitted with `full` set.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let full = prev.bounds != curr.bounds;
    let cells = curr
        .bounds
        .iter()
        .zip(curr.cells.iter())
        .filter(|&(p, c)| full || prev.at(p) != *c)
        .map(|(pos, &cell)| FrameCell { cell, pos })
        .collect();
    Frame { cells, full }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_at() {
        let mut s = Screen::new(4, 3);
        s.set(Point::new(2, 1), Cell::new('X', Style::default()));
        assert_eq!(s.at(Point::new(2, 1)).ch, 'X');
        assert_eq!(s.at(Point::new(10, 10)), Cell::default());
        s.set(Point::new(-1, 0), Cell::new('Y', Style::default()));
    }

    #[test]
    fn text_is_clipped() {
        let mut s = Screen::new(5, 1);
        let end = s.text(Point::new(0, 2), "hello", Style::default());
        assert_eq!(end, 7);
        assert_eq!(s.row_text(0), "  hel");
    }

    #[test]
    fn frame_holds_only_changes() {
        let a = Screen::new(3, 2);
        let mut b = a.clone();
        b.set(Point::new(0, 1), Cell::new('A', Style::default()));
        let frame = compute_frame(&a, &b);
        assert!(!frame.full);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Point::new(0, 1));
        assert_eq!(frame.cells[0].cell.ch, 'A');
        assert!(compute_frame(&b, &b).cells.is_empty());
    }

    #[test]
    fn resize_gives_full_frame() {
        let a = Screen::new(3, 2);
        let mut b = a.clone();
        b.resize(4, 2);
        let frame = compute_frame(&a, &b);
        assert!(frame.full);
        assert_eq!(frame.cells.len(), 8);
    }

    #[test]
    fn color_components() {
        let c = Color::from_rgb(120, 220, 255);
        assert_eq!((c.r(), c.g(), c.b()), (120, 220, 255));
        assert_eq!(c.scaled(50), Color::from_rgb(60, 110, 127));
    }
}
