use crate::error::{Result, SnakeError};
use crate::glyph::Glyph;
use crate::snake::Coordinates;

/// Rectangular grid of glyphs, `height` rows of `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    rows: Vec<Vec<Glyph>>,
}

impl Board {
    /// An empty board of the given size.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, |_, _| Glyph::Empty)
    }

    /// A board whose outermost ring is wall and everything else empty.
    pub fn walled(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, |x, y| {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                Glyph::Wall
            } else {
                Glyph::Empty
            }
        })
    }

    fn filled(width: usize, height: usize, glyph_at: impl Fn(usize, usize) -> Glyph) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SnakeError::malformed(0, "board must have at least one cell"));
        }
        let mut rows = Vec::new();
        rows.try_reserve_exact(height)?;
        for y in 0..height {
            let mut row = Vec::new();
            row.try_reserve_exact(width)?;
            row.extend((0..width).map(|x| glyph_at(x, y)));
            rows.push(row);
        }
        Ok(Board { width, height, rows })
    }

    /// Builds a board from already parsed rows; all rows must share one width.
    pub(crate) fn from_rows(rows: Vec<Vec<Glyph>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(SnakeError::malformed(0, "board must have at least one cell"));
        }
        if let Some(line) = rows.iter().position(|row| row.len() != width) {
            return Err(SnakeError::malformed(
                line + 1,
                format!("expected {} cells, found {}", width, rows[line].len()),
            ));
        }
        Ok(Board { width, height, rows })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_in_bound(&self, position: &Coordinates) -> bool {
        self.index(position).is_some()
    }

    fn index(&self, position: &Coordinates) -> Option<(usize, usize)> {
        let x = usize::try_from(position.x()).ok()?;
        let y = usize::try_from(position.y()).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    pub fn get(&self, position: &Coordinates) -> Option<Glyph> {
        self.index(position).map(|(x, y)| self.rows[y][x])
    }

    /// Writes `glyph` and returns what was there, or `None` when off the board.
    pub fn set(&mut self, position: &Coordinates, glyph: Glyph) -> Option<Glyph> {
        let (x, y) = self.index(position)?;
        Some(std::mem::replace(&mut self.rows[y][x], glyph))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinates, Glyph)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, glyph)| (Coordinates::new(x as i32, y as i32), *glyph))
        })
    }

    pub fn count(&self, glyph: Glyph) -> usize {
        self.cells().filter(|(_, candidate)| *candidate == glyph).count()
    }

    pub fn empty_cells(&self) -> Vec<Coordinates> {
        self.cells()
            .filter(|(_, glyph)| *glyph == Glyph::Empty)
            .map(|(position, _)| position)
            .collect()
    }
}
