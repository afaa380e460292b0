use std::ops::{Index, IndexMut};

/// Dense two dimensional container with dimensions fixed at construction.
///
/// Cells are stored in row-major order. Every access is bounds-checked and
/// panics when the coordinate falls outside the grid: an out of range access
/// is always a bug in the caller, never something to recover from.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    storage: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a `rows` x `columns` grid where every cell is a clone of `fill`.
    ///
    /// Zero rows or zero columns are valid and produce an empty grid.
    pub fn new(rows: usize, columns: usize, fill: T) -> Self {
        let len = rows
            .checked_mul(columns)
            .unwrap_or_else(|| panic!("grid of {rows}x{columns} overflows usize"));
        Grid {
            rows,
            columns,
            storage: vec![fill; len],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid from nested rows.
    ///
    /// Panics if the rows do not all have the same length.
    pub fn from_rows(contents: Vec<Vec<T>>) -> Self {
        let columns = contents.first().map_or(0, Vec::len);
        assert!(
            contents.iter().all(|row| row.len() == columns),
            "all rows of a grid must have {columns} columns"
        );
        let rows = contents.len();
        Grid {
            rows,
            columns,
            storage: contents.into_iter().flatten().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> &T {
        let offset = self.offset(row, column);
        &self.storage[offset]
    }

    pub fn set(&mut self, row: usize, column: usize, value: T) {
        let offset = self.offset(row, column);
        self.storage[offset] = value;
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "index out of range: ({row}, {column}) in a {}x{} grid",
            self.rows,
            self.columns
        );
        row * self.columns + column
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        self.get(row, column)
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        let offset = self.offset(row, column);
        &mut self.storage[offset]
    }
}

// Compares storage only: a 2x3 and a 3x2 grid with the same cells are equal.
impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T: Eq> Eq for Grid<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_fill(rows in 0..16usize, columns in 0..16usize, fill: u8) {
            let grid = Grid::new(rows, columns, fill);
            prop_assert_eq!(grid.rows(), rows);
            prop_assert_eq!(grid.columns(), columns);
            for row in 0..rows {
                for column in 0..columns {
                    prop_assert_eq!(*grid.get(row, column), fill);
                }
            }
        }

        #[test]
        fn test_set_touches_one_cell(
            rows in 1..10usize,
            columns in 1..10usize,
            row_seed: usize,
            column_seed: usize,
        ) {
            let row = row_seed % rows;
            let column = column_seed % columns;
            let mut grid = Grid::new(rows, columns, 0u32);
            grid.set(row, column, 7);
            for r in 0..rows {
                for c in 0..columns {
                    let expected = if (r, c) == (row, column) { 7 } else { 0 };
                    prop_assert_eq!(grid[(r, c)], expected);
                }
            }
        }
    }

    #[test]
    fn test_zero_sized_dimensions() {
        let single_row: Grid<Vec<u8>> = Grid::new(1, 0, vec![]);
        assert_eq!(single_row.rows(), 1);
        assert_eq!(single_row.columns(), 0);

        let single_cell = Grid::new(1, 1, vec!['a']);
        assert_eq!(single_cell.get(0, 0), &vec!['a']);
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid[(0, 2)], 3);
        assert_eq!(grid[(1, 0)], 4);
    }

    #[test]
    fn test_index_mut() {
        let mut grid = Grid::new(2, 2, String::new());
        grid[(1, 1)].push_str("edit");
        assert_eq!(grid.get(1, 1), "edit");
        assert_eq!(grid.get(0, 0), "");
    }

    #[test]
    fn test_equality_compares_storage() {
        let a = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let b = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let c = Grid::from_rows(vec![vec![1, 2], vec![3, 5]]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(Grid::<u8>::from_rows(vec![]), Grid::new(0, 4, 0));
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_row_out_of_range() {
        let grid = Grid::new(2, 3, 0);
        grid.get(2, 0);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_column_out_of_range() {
        let mut grid = Grid::new(2, 3, 0);
        grid.set(0, 3, 1);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_empty_grid_has_no_cells() {
        let grid = Grid::new(0, 0, 0);
        grid.get(0, 0);
    }

    #[test]
    #[should_panic(expected = "columns")]
    fn test_ragged_rows() {
        Grid::from_rows(vec![vec![1, 2], vec![3]]);
    }
}
