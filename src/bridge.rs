use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::GameEngine;
use crate::types::Color;

/// One game exposed to JavaScript. Players are passed as 1=black, 2=white.
#[wasm_bindgen]
pub struct OthelloGame {
    engine: GameEngine,
}

#[wasm_bindgen]
impl OthelloGame {
    /// `config` may be `undefined`, `null` or `{ opening: "standard" | "swapped" }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<OthelloGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            engine: GameEngine::with_config(config),
        })
    }

    pub fn reset(&mut self) {
        self.engine.reset_game();
    }

    #[wasm_bindgen(js_name = isLegalMove)]
    pub fn is_legal_move(&self, row: u8, col: u8, player: u8) -> Result<bool, JsError> {
        Ok(self.engine.is_legal_move(row, col, player_color(player)?)?)
    }

    /// Plays a move and returns the new state.
    pub fn play(&mut self, row: u8, col: u8, player: u8) -> Result<JsValue, JsError> {
        self.engine.play_move(row, col, player_color(player)?)?;
        self.state()
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.snapshot())?)
    }

    pub fn cell(&self, row: u8, col: u8) -> Result<u8, JsError> {
        Ok(self.engine.cell_state(row, col)?.code())
    }

    /// Legal squares for the player to move, as `{ row, col }` objects.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        let moves = if self.engine.is_game_over() {
            Vec::new()
        } else {
            self.engine.legal_moves(self.engine.current_turn())
        };
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.engine.current_turn().code()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// Final result, or `undefined` while the game is running.
    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.result())?)
    }
}

fn player_color(player: u8) -> Result<Color, JsError> {
    Color::from_code(player)
        .ok_or_else(|| JsError::new(&format!("invalid player value: {player}")))
}
