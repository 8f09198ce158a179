use std::fmt;

/// The maximum number of rows or columns in a [`Grid`].
pub const MAX_SIZE: usize = 64;

/// Indicates that a grid could not be constructed from the given rows.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShapeError {
    /// Indicates that the grid would exceed [`MAX_SIZE`] rows or columns.
    TooLarge { num_rows: usize, num_cols: usize },
    /// Indicates that a row's length differs from the first row's length.
    UnevenRow { row: usize, expected_len: usize, actual_len: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeError::TooLarge { num_rows, num_cols } => write!(
                f,
                "grid size {}x{} exceeds the maximum of {}x{}",
                num_rows, num_cols, MAX_SIZE, MAX_SIZE
            ),
            ShapeError::UnevenRow {
                row,
                expected_len,
                actual_len,
            } => write!(
                f,
                "row {} has length {}, but every row must have length {}",
                row, actual_len, expected_len
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// A rectangular character grid.
///
/// A grid is immutable once constructed. Characters are addressed by
/// zero-based `(row, col)`, with rows running top-to-bottom and columns
/// left-to-right.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    num_rows: usize,
    num_cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Constructs a `Grid` from the given rows.
    ///
    /// Every row must have the same length as the first row, and neither
    /// dimension may exceed [`MAX_SIZE`]. An empty row list yields an empty
    /// grid in which no word can be found.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, ShapeError> {
        let num_rows = rows.len();
        let num_cols = rows
            .first()
            .map_or(0, |row| row.as_ref().chars().count());
        if num_rows > MAX_SIZE || num_cols > MAX_SIZE {
            return Err(ShapeError::TooLarge { num_rows, num_cols });
        }
        let mut cells = Vec::with_capacity(num_rows * num_cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let row_len = row.chars().count();
            if row_len != num_cols {
                return Err(ShapeError::UnevenRow {
                    row: index,
                    expected_len: num_cols,
                    actual_len: row_len,
                });
            }
            cells.extend(row.chars());
        }
        Ok(Grid {
            num_rows,
            num_cols,
            cells,
        })
    }

    /// Returns the number of rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns in the grid.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the character at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.num_rows || col >= self.num_cols {
            return None;
        }
        Some(self.cells[row * self.num_cols + col])
    }

    /// Converts `(row, col)` to an index into a row-major cell buffer.
    ///
    /// Callers must have bounds-checked the coordinates already.
    pub(crate) fn cell_index(&self, row: usize, col: usize) -> usize {
        row * self.num_cols + col
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_rows_stores_cells_row_major() {
        let grid = Grid::from_rows(&["abc", "def"]).unwrap();

        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.num_cols(), 3);
        assert_eq!(grid.get(0, 0), Some('a'));
        assert_eq!(grid.get(0, 2), Some('c'));
        assert_eq!(grid.get(1, 0), Some('d'));
        assert_eq!(grid.get(1, 2), Some('f'));
    }

    #[test]
    fn get_out_of_bounds() {
        let grid = Grid::from_rows(&["abc", "def"]).unwrap();

        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn from_rows_empty() {
        let rows: Vec<&str> = Vec::new();
        let grid = Grid::from_rows(&rows).unwrap();

        assert_eq!(grid.num_rows(), 0);
        assert_eq!(grid.num_cols(), 0);
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn from_rows_too_many_rows() {
        let rows = vec!["a"; MAX_SIZE + 1];

        assert_eq!(
            Grid::from_rows(&rows),
            Err(ShapeError::TooLarge {
                num_rows: 65,
                num_cols: 1,
            })
        );
    }

    #[test]
    fn from_rows_too_many_cols() {
        let long_row = "a".repeat(MAX_SIZE + 1);

        assert_eq!(
            Grid::from_rows(&[long_row.as_str()]),
            Err(ShapeError::TooLarge {
                num_rows: 1,
                num_cols: 65,
            })
        );
    }

    #[test]
    fn from_rows_uneven_row() {
        assert_eq!(
            Grid::from_rows(&["abc", "de", "fgh"]),
            Err(ShapeError::UnevenRow {
                row: 1,
                expected_len: 3,
                actual_len: 2,
            })
        );
    }

    #[test]
    fn max_size_is_accepted() {
        let rows = vec!["a".repeat(MAX_SIZE); MAX_SIZE];
        let grid = Grid::from_rows(&rows).unwrap();

        assert_eq!(grid.num_rows(), MAX_SIZE);
        assert_eq!(grid.num_cols(), MAX_SIZE);
    }
}
