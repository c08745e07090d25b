use tracing::{debug, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{OthelloError, OthelloResult};
use crate::types::{
    Cell, Color, GameResult, GameSnapshot, MoveOutcome, Phase, Position, Score,
};

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether `color` placing at `pos` brackets a run of opposing discs in one direction.
///
/// The square next to `pos` must hold the opponent; an own disc there rejects the
/// direction immediately. After that the walk succeeds on the first own disc and
/// fails on a gap or at the edge. Anything other than one of the eight unit
/// directions captures nothing.
pub fn direction_captures(
    board: &Board,
    pos: Position,
    d_row: i8,
    d_col: i8,
    color: Color,
) -> bool {
    if !DIRECTIONS.contains(&(d_row, d_col)) {
        return false;
    }
    let Some(mut cursor) = pos.step(d_row, d_col) else {
        return false;
    };
    if board.cell(cursor).color() != Some(color.opponent()) {
        return false;
    }

    loop {
        match cursor.step(d_row, d_col) {
            None => return false,
            Some(next) => match board.cell(next).color() {
                None => return false,
                Some(c) if c == color => return true,
                Some(_) => cursor = next,
            },
        }
    }
}

/// An empty square is legal when at least one direction captures.
pub fn is_legal_at(board: &Board, pos: Position, color: Color) -> bool {
    if !board.cell(pos).is_empty() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(d_row, d_col)| direction_captures(board, pos, d_row, d_col, color))
}

/// Places `color` at `pos` and turns over every captured disc.
/// Caller contract: `is_legal_at(board, pos, color)` holds.
/// Returns the flipped squares in row-major order.
fn place_and_flip(
    board: &mut Board,
    pos: Position,
    color: Color,
) -> OthelloResult<Vec<Position>> {
    board.place(pos, color)?;

    let mut flipped = Vec::new();
    for (d_row, d_col) in DIRECTIONS {
        if !direction_captures(board, pos, d_row, d_col, color) {
            continue;
        }
        let mut cursor = pos.step(d_row, d_col);
        while let Some(square) = cursor {
            if board.cell(square).color() == Some(color) {
                break;
            }
            board.set(square, color);
            flipped.push(square);
            cursor = square.step(d_row, d_col);
        }
    }

    flipped.sort_unstable();
    Ok(flipped)
}

/// One game of Othello: the board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    config: GameConfig,
    current_player: Color,
    is_game_over: bool,
    is_pass: bool,
    flipped: Vec<Position>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            board: Board::with_opening(config.opening),
            config,
            current_player: Color::Black,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Back to the configured opening with black to move.
    pub fn reset_game(&mut self) {
        *self = Self::with_config(self.config);
        debug!(opening = ?self.config.opening, "game reset");
    }

    pub fn cell_state(&self, row: u8, col: u8) -> OthelloResult<Cell> {
        self.board.get(row, col)
    }

    pub fn is_legal_move(&self, row: u8, col: u8, color: Color) -> OthelloResult<bool> {
        let pos = Position::new(row, col)?;
        Ok(is_legal_at(&self.board, pos, color))
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        Board::positions().any(|pos| is_legal_at(&self.board, pos, color))
    }

    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        Board::positions()
            .filter(|&pos| is_legal_at(&self.board, pos, color))
            .collect()
    }

    pub fn current_turn(&self) -> Color {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn phase(&self) -> Phase {
        if self.is_game_over {
            Phase::GameOver
        } else {
            Phase::to_move(self.current_player)
        }
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// `None` while the game is still running.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over {
            return None;
        }
        let score = self.score();
        Some(GameResult {
            score,
            outcome: score.outcome(),
        })
    }

    /// Squares flipped by the most recent move.
    pub fn last_flipped(&self) -> &[Position] {
        &self.flipped
    }

    /// Plays `color` at (`row`, `col`), flips every captured disc and hands the turn on.
    /// Nothing changes when the move is rejected.
    pub fn play_move(&mut self, row: u8, col: u8, color: Color) -> OthelloResult<MoveOutcome> {
        let pos = Position::new(row, col)?;
        if self.is_game_over {
            return Err(OthelloError::GameOver);
        }
        if color != self.current_player {
            return Err(OthelloError::OutOfTurn {
                expected: self.current_player,
                got: color,
            });
        }
        if !is_legal_at(&self.board, pos, color) {
            trace!(%pos, %color, "rejected illegal move");
            return Err(OthelloError::IllegalMove {
                position: pos,
                color,
            });
        }

        let flipped = place_and_flip(&mut self.board, pos, color)?;
        debug!(%pos, %color, flipped = flipped.len(), "move played");
        self.flipped = flipped.clone();
        let opponent_forfeited = self.advance_turn(color);

        Ok(MoveOutcome {
            placed: pos,
            flipped,
            next: self.phase(),
            opponent_forfeited,
        })
    }

    /// Decides who moves after `mover`. Returns `true` when the opponent forfeits.
    fn advance_turn(&mut self, mover: Color) -> bool {
        let opponent = mover.opponent();
        self.is_pass = false;

        if self.has_legal_move(opponent) {
            self.current_player = opponent;
        } else if self.has_legal_move(mover) {
            self.current_player = mover;
            self.is_pass = true;
            debug!(%opponent, "no legal move, turn forfeited");
        } else {
            self.is_game_over = true;
            let score = self.score();
            debug!(black = score.black, white = score.white, "game over");
        }

        self.is_pass
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let score = self.score();
        GameSnapshot {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.code(),
            black_count: score.black,
            white_count: score.white,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.iter().map(|p| p.index() as u8).collect(),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Color) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
