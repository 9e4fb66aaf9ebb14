//! JavaScript bindings for browser front ends.

use wasm_bindgen::prelude::*;

use crate::game::GameSession;

#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Current `GameState` snapshot.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.to_game_state())
    }

    /// Plays for the side to move and returns the new snapshot.
    pub fn place(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        self.session
            .play(row, col)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.state()
    }

    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.get_legal_moves())
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}
