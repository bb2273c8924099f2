use std::fmt;

use thiserror::Error;

use crate::render;
use crate::render::Glyphs;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("A grid needs at least one row and one column")]
    Empty,

    #[error("A {height} by {width} grid does not fit in memory")]
    TooLarge { height: usize, width: usize },

    #[error("Row {row} has {got} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// A rectangular snapshot of cell states.
///
/// Cells live in a single buffer, row after row, so `(row, col)` is found at
/// `row * width + col`. Once handed out, a grid is only ever read: stepping
/// builds a new one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,

    /// Number of rows
    height: usize,

    /// Number of columns
    width: usize,
}

impl Grid {
    /// Create an all-dead grid of `height` rows and `width` columns
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        // A `Vec` holds at most `isize::MAX` bytes
        let len = height
            .checked_mul(width)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { height, width })?;

        Ok(Self {
            cells: vec![false; len],
            height,
            width,
        })
    }

    /// Create an all-dead `size` by `size` grid
    pub fn square(size: usize) -> Result<Self, GridError> {
        Self::new(size, size)
    }

    /// Build a grid out of nested rows. Every row must have the same length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[bool]>,
    {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };

        let width = first.as_ref().len();
        let mut grid = Self::new(rows.len(), width)?;

        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();

            if cells.len() != width {
                return Err(GridError::Jagged {
                    row,
                    expected: width,
                    got: cells.len(),
                });
            }

            grid.cells[row * width..(row + 1) * width].copy_from_slice(cells);
        }

        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// State of the cell at `(row, col)`, or `None` past the edge
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Like `get`, but the coordinate must be in bounds.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height, "row is out of bounds");
        assert!(col < self.width, "col is out of bounds");

        self.cells[self.index(row, col)]
    }

    /// Sets a single cell. Only used while a grid is being built.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(row < self.height, "row is out of bounds");
        assert!(col < self.width, "col is out of bounds");

        let i = self.index(row, col);
        self.cells[i] = alive;
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self, Glyphs::default()))
    }
}

#[cfg(test)]
mod test {
    use super::Grid;
    use super::GridError;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::square(5).unwrap();

        assert_eq!(grid.height(), 5);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn zero_sized_grid() {
        assert_eq!(Grid::new(0, 4), Err(GridError::Empty));
        assert_eq!(Grid::new(4, 0), Err(GridError::Empty));
        assert_eq!(Grid::from_rows::<Vec<bool>>(&[]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(&[[F; 0]]), Err(GridError::Empty));
    }

    #[test]
    fn oversized_grid() {
        let height = usize::MAX / 2 + 1;

        assert_eq!(
            Grid::new(height, 2),
            Err(GridError::TooLarge { height, width: 2 })
        );
        assert_eq!(
            Grid::square(usize::MAX),
            Err(GridError::TooLarge {
                height: usize::MAX,
                width: usize::MAX
            })
        );
        assert_eq!(
            Grid::new(usize::MAX, 1),
            Err(GridError::TooLarge {
                height: usize::MAX,
                width: 1
            })
        );
    }

    #[test]
    fn jagged_rows() {
        let rows = vec![vec![T, F, T], vec![F, T], vec![T, F, T]];

        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::Jagged {
                row: 1,
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn rectangular_addressing() {
        let grid = Grid::from_rows(&[[F, T, F, F], [F, F, F, T]]).unwrap();

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 4);
        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(1, 3));
        assert!(!grid.is_alive(1, 1));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 4), None);

        let rows: Vec<&[bool]> = grid.rows().collect();
        assert_eq!(rows, [&[F, T, F, F][..], &[F, F, F, T][..]]);
    }

    #[test]
    fn equality_checks_dimensions_and_cells() {
        let a = Grid::from_rows(&[[T, F], [F, T]]).unwrap();
        let b = Grid::from_rows(&[[T, F], [F, T]]).unwrap();
        let flipped = Grid::from_rows(&[[T, F], [T, T]]).unwrap();
        let wide = Grid::from_rows(&[[T, F, F, T]]).unwrap();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, flipped);

        // same cells, different shape
        assert_ne!(a, wide);
        assert_ne!(Grid::new(2, 3).unwrap(), Grid::new(3, 2).unwrap());
    }

    #[test]
    #[should_panic(expected = "col is out of bounds")]
    fn set_out_of_bounds() {
        let mut grid = Grid::square(3).unwrap();
        grid.set(0, 3, true);
    }
}
