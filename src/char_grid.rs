use core::fmt;
use grid_util::{Grid as ValueGrid, Point, SimpleGrid as SimpleValueGrid};

use crate::FILL;

/// [CharGrid] holds the raw characters of a map in a dense [SimpleValueGrid]. The width is the
/// length of the longest row and the height the number of rows; rows shorter than the width are
/// padded with [FILL], which is never traversable. The grid is immutable after parsing.
#[derive(Clone, Debug)]
pub struct CharGrid {
    cells: SimpleValueGrid<char>,
    width: usize,
    height: usize,
}

impl CharGrid {
    /// Parses rows separated by line breaks (`\n` or `\r\n`). A trailing line break does not
    /// start an extra row, so empty text yields a 0x0 grid.
    pub fn parse(text: &str) -> CharGrid {
        let rows = text
            .lines()
            .map(|line| line.chars().collect::<Vec<char>>())
            .collect::<Vec<_>>();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = SimpleValueGrid::new(width, height, FILL);
        for (y, row) in rows.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                cells.set(x, y, c);
            }
        }
        CharGrid {
            cells,
            width,
            height,
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    /// Returns the character at `(x, y)`, or [None] if the cell lies outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if self.in_bounds(x, y) {
            Some(self.cells.get(x as usize, y as usize))
        } else {
            None
        }
    }
    pub fn get_point(&self, point: Point) -> Option<char> {
        self.get(point.x, point.y)
    }
    /// The full row `y` including padding, or an empty string if out of range.
    pub fn row(&self, y: i32) -> String {
        (0..self.width as i32)
            .filter_map(|x| self.get(x, y))
            .collect()
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            writeln!(f, "{}", self.row(y))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_follow_longest_row() {
        let grid = CharGrid::parse("##\n#a##\n#\n");
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(1, 1), Some('a'));
        assert_eq!(grid.get(3, 1), Some('#'));
    }

    #[test]
    fn short_rows_are_padded() {
        let grid = CharGrid::parse("####\n#\n");
        assert_eq!(grid.get(1, 1), Some(FILL));
        assert_eq!(grid.get(3, 1), Some(FILL));
        assert_eq!(grid.row(1), "#   ");
    }

    #[test]
    fn out_of_bounds_is_absent() {
        let grid = CharGrid::parse("ab\ncd");
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get_point(Point::new(1, 1)), Some('d'));
    }

    #[test]
    fn empty_text_gives_empty_grid() {
        let grid = CharGrid::parse("");
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn display_reproduces_map() {
        let grid = CharGrid::parse("#a#\r\n# #\r\n");
        assert_eq!(grid.to_string(), "#a#\n# #\n");
    }
}
