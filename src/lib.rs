use wasm_bindgen::prelude::*;

pub mod board;
pub mod bridge;
pub mod config;
pub mod error;
pub mod game;
pub mod types;

pub use board::Board;
pub use config::{GameConfig, Opening};
pub use error::{OthelloError, OthelloResult};
pub use game::GameEngine;
pub use types::{
    Cell, Color, GameResult, GameSnapshot, MoveOutcome, Outcome, Phase, Position, Score,
};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
