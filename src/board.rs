use std::fmt;

use crate::config::Opening;
use crate::error::{OthelloError, OthelloResult};
use crate::types::{BOARD_WIDTH, Cell, Color, Position, Score};

const NUM_SQUARES: usize = (BOARD_WIDTH as usize) * (BOARD_WIDTH as usize);

/// Othello board state represented by two bitboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the standard initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self::with_opening(Opening::Standard)
    }

    /// Creates an initial board with the four centre discs laid out by `opening`.
    pub fn with_opening(opening: Opening) -> Self {
        let diagonal = bit(27) | bit(36);
        let anti_diagonal = bit(28) | bit(35);
        match opening.main_diagonal() {
            Color::White => Self {
                black: anti_diagonal,
                white: diagonal,
            },
            Color::Black => Self {
                black: diagonal,
                white: anti_diagonal,
            },
        }
    }

    /// Builds a board from raw masks. Squares set in both masks count as black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    pub fn get(&self, row: u8, col: u8) -> OthelloResult<Cell> {
        Ok(self.cell(Position::new(row, col)?))
    }

    pub fn cell(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Puts a disc of `color` on the empty square `pos`.
    /// An occupied square is left untouched and reported as an illegal move.
    pub fn place(&mut self, pos: Position, color: Color) -> OthelloResult<()> {
        if !self.cell(pos).is_empty() {
            return Err(OthelloError::IllegalMove {
                position: pos,
                color,
            });
        }
        self.set(pos, color);
        Ok(())
    }

    /// Turns the disc on `pos` over to `color`.
    pub(crate) fn set(&mut self, pos: Position, color: Color) {
        let square = bit(pos.index());
        match color {
            Color::Black => {
                self.black |= square;
                self.white &= !square;
            }
            Color::White => {
                self.white |= square;
                self.black &= !square;
            }
        }
    }

    pub fn count_by_color(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black.count_ones() as u8,
            Color::White => self.white.count_ones() as u8,
        }
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.count_by_color(Color::Black),
            white: self.count_by_color(Color::White),
        }
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - (self.black | self.white).count_ones() as u8
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (idx, cell) in board.iter_mut().enumerate() {
            *cell = self.cell(Position::from_index(idx)).code();
        }
        board
    }

    /// All 64 squares in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..NUM_SQUARES).map(Position::from_index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Self::positions() {
            let symbol = match self.cell(pos) {
                Cell::Empty => '.',
                Cell::Black => 'B',
                Cell::White => 'W',
            };
            write!(f, "{symbol}")?;
            if pos.col() == BOARD_WIDTH - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn bit(idx: usize) -> u64 {
    if idx < NUM_SQUARES { 1u64 << idx } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn initial_board_has_the_standard_cross() {
        let board = Board::new();

        assert_eq!(board.get(3, 3), Ok(Cell::White));
        assert_eq!(board.get(4, 4), Ok(Cell::White));
        assert_eq!(board.get(3, 4), Ok(Cell::Black));
        assert_eq!(board.get(4, 3), Ok(Cell::Black));
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.score(), Score { black: 2, white: 2 });
    }

    #[test]
    fn swapped_opening_mirrors_colors() {
        let board = Board::with_opening(Opening::Swapped);

        assert_eq!(board.get(3, 3), Ok(Cell::Black));
        assert_eq!(board.get(4, 4), Ok(Cell::Black));
        assert_eq!(board.get(4, 3), Ok(Cell::White));
        assert_eq!(board.get(3, 4), Ok(Cell::White));
    }

    #[test]
    fn get_reports_out_of_bounds() {
        let board = Board::new();

        assert_eq!(
            board.get(8, 2),
            Err(OthelloError::OutOfBounds { row: 8, col: 2 })
        );
        assert_eq!(
            board.get(0, 8),
            Err(OthelloError::OutOfBounds { row: 0, col: 8 })
        );
    }

    #[test]
    fn place_and_set_update_counts() {
        let mut board = Board::new();

        board.place(pos(0, 0), Color::Black).unwrap();
        assert_eq!(board.count_by_color(Color::Black), 3);

        board.set(pos(3, 3), Color::Black);
        assert_eq!(board.get(3, 3), Ok(Cell::Black));
        assert_eq!(board.score(), Score { black: 4, white: 1 });
        assert_eq!(board.empty_count(), 59);
    }

    #[test]
    fn place_on_occupied_square_is_rejected_without_change() {
        let mut board = Board::new();
        let before = board;

        assert_eq!(
            board.place(pos(3, 3), Color::Black),
            Err(OthelloError::IllegalMove {
                position: pos(3, 3),
                color: Color::Black,
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn place_only_touches_the_validated_square() {
        let mut board = Board::new();

        assert!(Position::new(0, 9).is_err());
        board.place(pos(0, 7), Color::Black).unwrap();

        assert_eq!(board.get(0, 7), Ok(Cell::Black));
        assert_eq!(board.get(1, 1), Ok(Cell::Empty));
        assert_eq!(board.empty_count(), 59);
    }

    #[test]
    fn to_array_and_display_agree() {
        let board = Board::new();
        let cells = board.to_array();

        assert_eq!(cells[27], 2);
        assert_eq!(cells[28], 1);
        assert_eq!(cells.iter().filter(|&&c| c != 0).count(), 4);

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[3], "...WB...");
        assert_eq!(lines[4], "...BW...");
    }

    #[test]
    fn overlapping_masks_resolve_to_black() {
        let board = Board::from_bitboards(1, 1 | 2);

        assert_eq!(board.get(0, 0), Ok(Cell::Black));
        assert_eq!(board.get(0, 1), Ok(Cell::White));
    }
}
