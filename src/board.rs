//! Square grid of stone occupancy.
//!
//! The board is the single source of truth for which points hold stones.
//! Points are `(row, col)` pairs with row 0 at the top, matching how the
//! board is drawn. Vertex notation (`"D4"`) counts rows from the bottom.

use std::fmt;

use log::warn;

use crate::constants::{COLUMN_LETTERS, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Parse a GTP color argument (`b`, `black`, `w`, `white`).
    pub fn parse(s: &str) -> Option<Color> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A board coordinate as `(row, col)`.
pub type Point = (usize, usize);

/// Read-only copy of the grid, one `Vec` per row.
pub type BoardView = Vec<Vec<Option<Color>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// An empty `size` x `size` board. A zero size is allowed and simply has no points.
    ///
    /// The side length is limited to sizes whose square fits in `usize`;
    /// anything larger yields a board with no points.
    pub fn new(size: usize) -> Self {
        let Some(area) = size.checked_mul(size) else {
            warn!("Board size {size} is too large, using an empty board");
            return Self {
                size: 0,
                cells: Vec::new(),
            };
        };
        Self {
            size,
            cells: vec![None; area],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    /// Stone at `pt`, or `None` for an empty or off-board point.
    pub fn get(&self, pt: Point) -> Option<Color> {
        if !self.contains(pt) {
            return None;
        }
        self.cells[self.idx(pt)]
    }

    /// Overwrite a point. Off-board points are ignored.
    pub(crate) fn set(&mut self, pt: Point, stone: Option<Color>) {
        if self.contains(pt) {
            let i = self.idx(pt);
            self.cells[i] = stone;
        }
    }

    pub fn is_empty_at(&self, pt: Point) -> bool {
        self.contains(pt) && self.get(pt).is_none()
    }

    /// The 4-connected on-board neighbors of `pt`.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        v.into_iter()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| (row, col)))
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Snapshot of the grid for renderers.
    pub fn view(&self) -> BoardView {
        self.cells
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Parse a vertex such as `"D4"` into a point on this board.
    ///
    /// Columns use letters skipping `I`; rows count up from the bottom edge.
    pub fn parse_vertex(&self, s: &str) -> Option<Point> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.iter().position(|&b| b as char == letter)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: usize = digits.parse().ok()?;
        if number == 0 || number > self.size {
            return None;
        }
        let pt = (self.size - number, col);
        self.contains(pt).then_some(pt)
    }

    /// Vertex name of a point, e.g. `(15, 3)` on 19x19 is `"D4"`.
    pub fn vertex_name(&self, (row, col): Point) -> Option<String> {
        if !self.contains((row, col)) {
            return None;
        }
        let letter = *COLUMN_LETTERS.get(col)? as char;
        Some(format!("{letter}{}", self.size - row))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.get((row, col)).map_or(GLYPH_EMPTY, Color::glyph);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
