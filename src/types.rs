use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OthelloError, OthelloResult};

pub const BOARD_WIDTH: u8 = 8;
pub const PLAYER_BLACK: u8 = 1;
pub const PLAYER_WHITE: u8 = 2;

/// One of the two players, and the color of their discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Wire code used by [`GameSnapshot`]: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => PLAYER_BLACK,
            Color::White => PLAYER_WHITE,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            PLAYER_BLACK => Some(Color::Black),
            PLAYER_WHITE => Some(Color::White),
            _ => None,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// State of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        self.color().map_or(0, Color::code)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A board coordinate. Always within the 8x8 board once constructed.
///
/// The fields are private, so [`Position::new`] is the only way in:
///
/// ```compile_fail
/// let off_board = othello::Position { row: 0, col: 9 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> OthelloResult<Self> {
        if row >= BOARD_WIDTH || col >= BOARD_WIDTH {
            return Err(OthelloError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major square index in `0..64`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_WIDTH as usize + self.col as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_WIDTH as usize) as u8,
            col: (idx % BOARD_WIDTH as usize) as u8,
        }
    }

    /// The square `(d_row, d_col)` away, if it is on the board.
    pub(crate) fn step(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = (self.row as i8).checked_add(d_row)?;
        let col = (self.col as i8).checked_add(d_col)?;
        let width = BOARD_WIDTH as i8;
        if (0..width).contains(&row) && (0..width).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Disc counts, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    pub fn outcome(self) -> Outcome {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Color::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl From<Score> for (u8, u8) {
    fn from(score: Score) -> Self {
        (score.black, score.white)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

/// Where the game stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    BlackToMove,
    WhiteToMove,
    GameOver,
}

impl Phase {
    pub fn to_move(color: Color) -> Self {
        match color {
            Color::Black => Phase::BlackToMove,
            Color::White => Phase::WhiteToMove,
        }
    }
}

/// What a successful move did to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub placed: Position,
    /// Captured squares in row-major order.
    pub flipped: Vec<Position>,
    pub next: Phase,
    /// `true` when the opponent had no reply and the mover keeps the turn.
    pub opponent_forfeited: bool,
}

/// Public game state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// 64 cells in row-major order: 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last move left the opponent without a reply.
    /// - `false` otherwise, including before the first move.
    pub is_pass: bool,
    /// Contract:
    /// - After a move: flipped squares (0..=63).
    /// - After a reset: empty.
    pub flipped: Vec<u8>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub score: Score,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_coordinates_off_the_board() {
        assert_eq!(
            Position::new(8, 0),
            Err(OthelloError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            Position::new(3, 200),
            Err(OthelloError::OutOfBounds { row: 3, col: 200 })
        );
        assert!(Position::new(7, 7).is_ok());
    }

    #[test]
    fn step_stops_at_the_edge() {
        let corner = Position::new(0, 7).unwrap();

        assert_eq!(corner.step(-1, 0), None);
        assert_eq!(corner.step(0, 1), None);
        assert_eq!(corner.step(1, -1), Position::new(1, 6).ok());
    }

    #[test]
    fn step_with_huge_offsets_leaves_the_board() {
        let corner = Position::new(7, 7).unwrap();

        assert_eq!(corner.step(i8::MAX, 0), None);
        assert_eq!(corner.step(0, i8::MIN), None);
    }

    #[test]
    fn accessors_return_the_validated_coordinates() {
        let pos = Position::new(2, 5).unwrap();

        assert_eq!((pos.row(), pos.col()), (2, 5));
        assert_eq!(pos.index(), 21);
        assert_eq!(Position::from_index(21), pos);
    }

    #[test]
    fn tie_is_a_draw() {
        let score = Score { black: 32, white: 32 };

        assert_eq!(score.outcome(), Outcome::Draw);
        assert_eq!(
            Score { black: 40, white: 24 }.outcome(),
            Outcome::Winner(Color::Black)
        );
    }
}
