use super::player::PlayerId;

pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;

/// Smallest board that can hold a line of four in every direction.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("board must be at least 4x4, got {width}x{height}")]
pub struct InvalidDimension {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column is full")]
    ColumnFull,

    #[error("column is out of range")]
    InvalidColumn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    /// Create a new empty board. Both dimensions must be at least
    /// [`MIN_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidDimension> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(InvalidDimension { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `height - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.cells[row * self.width + col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col).is_some()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, piece: PlayerId) -> Result<usize, DropError> {
        if col >= self.width {
            return Err(DropError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(DropError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..self.height).rev() {
            if self.get(row, col).is_none() {
                self.cells[row * self.width + col] = Some(piece);
                return Ok(row);
            }
        }

        unreachable!("column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check if the last move at (row, col) resulted in a win.
    ///
    /// Counts contiguous same-player pieces on both sides of the placed cell
    /// along each of the four line directions, which covers every four-cell
    /// window the placed cell could be part of.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let Some(piece) = self.get(row, col) else {
            return false;
        };

        // horizontal, vertical, diagonal \, diagonal /
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let run = 1
                + self.count_run(row, col, piece, dr, dc)
                + self.count_run(row, col, piece, -dr, -dc);
            run >= 4
        })
    }

    /// Count contiguous `piece` cells starting one step from (row, col) in
    /// direction (dr, dc).
    fn count_run(&self, row: usize, col: usize, piece: PlayerId, dr: isize, dc: isize) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < self.height
            && (c as usize) < self.width
            && self.get(r as usize, c as usize) == Some(piece)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_COLS, DEFAULT_ROWS).expect("default board size is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerId = PlayerId::One;
    const P2: PlayerId = PlayerId::Two;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..board.height() {
            for col in 0..board.width() {
                assert_eq!(board.get(row, col), None);
            }
        }
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert!(Board::new(3, 6).is_err());
        assert!(Board::new(7, 3).is_err());
        assert!(Board::new(0, 0).is_err());
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_invalid_dimension_message() {
        let err = Board::new(2, 9).unwrap_err();
        assert_eq!(err.to_string(), "board must be at least 4x4, got 2x9");
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        // Drop first piece in column 3
        let row = board.drop_piece(3, P1).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Some(P1));

        // Drop second piece in same column
        let row = board.drop_piece(3, P2).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Some(P2));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();

        // Fill column 0
        for _ in 0..board.height() {
            board.drop_piece(0, P1).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, P2), Err(DropError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(7, P1), Err(DropError::InvalidColumn));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..board.width() {
            for _ in 0..board.height() {
                board.drop_piece(col, P1).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win_from_any_cell() {
        let mut board = Board::default();
        // Horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, P1).unwrap();
        }
        // A win regardless of which of the four cells was placed last
        for col in 0..4 {
            assert!(board.check_win(5, col));
        }
        assert!(!board.check_win(5, 4));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, P2).unwrap();
        }
        for row in 2..6 {
            assert!(board.check_win(row, 3));
        }
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Build a / diagonal for P1 rising from column 0
        board.drop_piece(0, P1).unwrap();

        board.drop_piece(1, P2).unwrap();
        board.drop_piece(1, P1).unwrap();

        board.drop_piece(2, P2).unwrap();
        board.drop_piece(2, P2).unwrap();
        board.drop_piece(2, P1).unwrap();

        board.drop_piece(3, P2).unwrap();
        board.drop_piece(3, P2).unwrap();
        board.drop_piece(3, P2).unwrap();
        let row = board.drop_piece(3, P1).unwrap();

        assert!(board.check_win(row, 3));
        // Also detectable from the bottom end of the diagonal
        assert!(board.check_win(5, 0));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Build a \ diagonal for P1 falling toward column 6
        board.drop_piece(6, P1).unwrap();

        board.drop_piece(5, P2).unwrap();
        board.drop_piece(5, P1).unwrap();

        board.drop_piece(4, P2).unwrap();
        board.drop_piece(4, P2).unwrap();
        board.drop_piece(4, P1).unwrap();

        board.drop_piece(3, P2).unwrap();
        board.drop_piece(3, P2).unwrap();
        board.drop_piece(3, P2).unwrap();
        let row = board.drop_piece(3, P1).unwrap();

        assert!(board.check_win(row, 3));
        assert!(board.check_win(5, 6));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, P1).unwrap();
        }
        assert!(!board.check_win(5, 1));
    }

    #[test]
    fn test_opponent_piece_breaks_run() {
        let mut board = Board::default();
        board.drop_piece(0, P1).unwrap();
        board.drop_piece(1, P1).unwrap();
        board.drop_piece(2, P2).unwrap();
        board.drop_piece(3, P1).unwrap();
        board.drop_piece(4, P1).unwrap();
        assert!(!board.check_win(5, 1));
        assert!(!board.check_win(5, 3));
    }

    #[test]
    fn test_minimum_board_win() {
        let mut board = Board::new(4, 4).unwrap();
        for _ in 0..4 {
            board.drop_piece(2, P1).unwrap();
        }
        assert!(board.check_win(0, 2));
    }

    #[test]
    fn test_wide_board_gravity() {
        let mut board = Board::new(9, 8).unwrap();
        let row = board.drop_piece(8, P1).unwrap();
        assert_eq!(row, 7);
        assert_eq!(board.drop_piece(9, P1), Err(DropError::InvalidColumn));
    }
}
