use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::cell::{Cell, CellState};
use crate::error::GridError;

/// A (row, column) location. Validity is relative to a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move coordinate by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move coordinate one unit in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.row, coordinate.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size rectangular collection of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid with the given dimensions
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::NoRows);
        }
        if columns == 0 {
            return Err(GridError::NoColumns);
        }

        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::new(); rows * columns],
        })
    }

    /// Build a grid from a surface that declares its cell count row by row.
    ///
    /// Every row must declare the same number of cells as the first one.
    pub fn from_row_lengths<I>(row_lengths: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut rows = 0;
        let mut columns = None;

        for (row, found) in row_lengths.into_iter().enumerate() {
            match columns {
                None => columns = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedRow {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        Self::new(rows, columns.unwrap_or(0))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check if a coordinate is within the grid bounds
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index_of(coordinate).is_some()
    }

    /// Bounded lookup; `None` means the coordinate is outside the grid.
    pub fn cell_at(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.index_of(coordinate).map(|index| &self.cells[index])
    }

    pub fn cell_at_mut(&mut self, coordinate: Coordinate) -> Option<&mut Cell> {
        self.index_of(coordinate).map(|index| &mut self.cells[index])
    }

    /// State of the cell at `coordinate`, if it exists
    pub fn state_at(&self, coordinate: Coordinate) -> Option<CellState> {
        self.cell_at(coordinate).map(Cell::state)
    }

    /// All cells in row-major order with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Cell)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let coordinate = Coordinate::new((index / columns) as i32, (index % columns) as i32);
            (coordinate, cell)
        })
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| cell.state() == state).count()
    }

    fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        let row = usize::try_from(coordinate.row).ok()?;
        let col = usize::try_from(coordinate.col).ok()?;
        (row < self.rows && col < self.columns).then(|| row * self.columns + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_movement() {
        let pos = Coordinate::new(5, 5);
        assert_eq!(pos.moved_in_direction(Direction::Left), Coordinate::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Right), Coordinate::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Coordinate::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Coordinate::new(6, 5));
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 6).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.columns(), 6);
        assert_eq!(grid.count(CellState::Empty), 24);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(Grid::new(0, 5), Err(GridError::NoRows));
        assert_eq!(Grid::new(5, 0), Err(GridError::NoColumns));
        assert_eq!(Grid::from_row_lengths(Vec::new()), Err(GridError::NoRows));
    }

    #[test]
    fn test_from_row_lengths() {
        let grid = Grid::from_row_lengths([3, 3, 3, 3]).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.columns(), 3);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert_eq!(
            Grid::from_row_lengths([3, 3, 2]),
            Err(GridError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 10).unwrap();

        assert!(grid.contains(Coordinate::new(0, 0)));
        assert!(grid.contains(Coordinate::new(19, 9)));
        assert!(!grid.contains(Coordinate::new(-1, 0)));
        assert!(!grid.contains(Coordinate::new(0, -1)));
        assert!(!grid.contains(Coordinate::new(20, 0)));
        assert!(!grid.contains(Coordinate::new(0, 10)));
        assert!(grid.cell_at(Coordinate::new(20, 0)).is_none());
    }

    #[test]
    fn test_cell_lookup_is_row_major() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.cell_at_mut(Coordinate::new(1, 2))
            .unwrap()
            .set_as_target();

        assert_eq!(grid.state_at(Coordinate::new(1, 2)), Some(CellState::Target));
        assert_eq!(grid.state_at(Coordinate::new(2, 1)), Some(CellState::Empty));

        let targets: Vec<_> = grid
            .iter()
            .filter(|(_, cell)| cell.state() == CellState::Target)
            .map(|(coordinate, _)| coordinate)
            .collect();
        assert_eq!(targets, vec![Coordinate::new(1, 2)]);
    }
}
