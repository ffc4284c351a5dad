//! Gravity-drop board for connect-N.

use serde::{Deserialize, Serialize};

/// Index of a player within a game's roster (join order).
pub type Seat = usize;

/// A cell coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate one step away along `(d_row, d_col)`,
    /// or `None` when the step would leave the non-negative quadrant.
    pub fn step(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size rows × columns grid. Cells are never cleared once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Cells in row-major order.
    cells: Vec<Option<Seat>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the occupant of a cell, `None` for empty or out-of-bounds cells.
    pub fn get(&self, coord: Coord) -> Option<Seat> {
        if coord.row >= self.rows || coord.col >= self.columns {
            return None;
        }
        self.cells[coord.row * self.columns + coord.col]
    }

    /// A column is full once its top cell is occupied.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(Coord::new(0, col)).is_some()
    }

    /// The board is full once every top-row cell is occupied.
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Finds the row a piece dropped into `col` would land in.
    ///
    /// Returns `None` if the column is full or out of bounds. Otherwise the
    /// piece rests directly above the highest occupied cell, or on the
    /// bottom row when the column is empty.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.columns || self.rows == 0 || self.is_column_full(col) {
            return None;
        }

        let landing = (1..self.rows)
            .find(|&row| self.get(Coord::new(row, col)).is_some())
            .map(|occupied| occupied - 1)
            .unwrap_or(self.rows - 1);

        Some(landing)
    }

    /// Drops a piece for `seat` into `col`, returning where it landed.
    pub fn drop_piece(&mut self, col: usize, seat: Seat) -> Option<Coord> {
        let row = self.landing_row(col)?;
        self.cells[row * self.columns + col] = Some(seat);
        Some(Coord::new(row, col))
    }

    /// Formats the board as a human-readable grid, top row first.
    ///
    /// Empty cells print as `.`; occupied cells print the 1-based seat.
    pub fn display(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let line = (0..self.columns)
                .map(|col| match self.get(Coord::new(row, col)) {
                    Some(seat) => (seat + 1).to_string(),
                    None => ".".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line);
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_column_lands_on_bottom_row() {
        let board = Board::new(4, 4);
        assert_eq!(board.landing_row(2), Some(3));
    }

    #[test]
    fn test_pieces_stack_upward() {
        let mut board = Board::new(4, 3);
        for expected_row in (0..4).rev() {
            let coord = board.drop_piece(1, 0).expect("column has room");
            assert_eq!(coord, Coord::new(expected_row, 1));
        }
        assert!(board.is_column_full(1));
        assert_eq!(board.drop_piece(1, 0), None);
        assert!(!board.is_full());
    }

    #[test]
    fn test_out_of_bounds_column_rejected() {
        let mut board = Board::new(4, 4);
        assert_eq!(board.landing_row(4), None);
        assert_eq!(board.drop_piece(7, 1), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 2);
        for col in 0..2 {
            board.drop_piece(col, 0);
            board.drop_piece(col, 1);
        }
        assert!(board.is_full());
        assert_eq!(board.display(), "2 2\n1 1");
    }

    #[test]
    fn test_step_stops_at_negative_edge() {
        assert_eq!(Coord::new(0, 2).step(-1, 0), None);
        assert_eq!(Coord::new(1, 0).step(1, -1), None);
        assert_eq!(Coord::new(1, 1).step(-1, 1), Some(Coord::new(0, 2)));
    }
}
