//! # Glyph grids
use std::fmt::{self, Write};

/// Glyph for black pixels
pub const INK: char = '#';
/// Glyph for every other pixel
pub const NO_INK: char = ' ';

/// Pick the glyph for a pixel
pub fn glyph(ink: bool) -> char {
    if ink {
        INK
    } else {
        NO_INK
    }
}

/// A decoded image as rows of characters
///
/// Every row has exactly [`GlyphGrid::width`] glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl GlyphGrid {
    pub(crate) fn new(width: usize, rows: Vec<Vec<char>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self { width, rows }
    }

    /// Number of glyphs per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// All rows, in output order
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// A single row
    pub fn row(&self, index: usize) -> Option<&[char]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// The rows as strings
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.iter().collect())
    }

    /// Return the underlying rows
    pub fn into_rows(self) -> Vec<Vec<char>> {
        self.rows
    }
}

impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &ch in row {
                f.write_char(ch)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{glyph, GlyphGrid};

    fn grid() -> GlyphGrid {
        GlyphGrid::new(3, vec![vec!['#', ' ', ' '], vec![' ', '#', '#']])
    }

    #[test]
    fn display() {
        assert_eq!(grid().to_string(), "#  \n ##\n");
        assert_eq!(
            grid().lines().collect::<Vec<_>>(),
            vec!["#  ".to_string(), " ##".to_string()]
        );
        assert_eq!(grid().row(1), Some(&[' ', '#', '#'][..]));
        assert_eq!(grid().row(2), None);
    }

    #[test]
    fn empty() {
        let grid = GlyphGrid::new(0, vec![]);
        assert_eq!(grid.to_string(), "");
        assert_eq!(grid.height(), 0);
    }

    #[test]
    fn glyphs() {
        assert_eq!(glyph(true), '#');
        assert_eq!(glyph(false), ' ');
    }
}
