//! Browser boundary
//!
//! A thin `wasm_bindgen` wrapper the page script drives from
//! `requestAnimationFrame` and its keyboard/touch handlers. Drawing, assets
//! and DOM wiring stay on the JS side; it reads [`Snapshot`] as JSON.

use wasm_bindgen::prelude::*;

use crate::seed_from_f64;
use crate::sim::{GameState, Snapshot};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Sky Climb core loaded");
}

/// Caller's seed, or the clock when none was given
fn clock_or(seed: Option<f64>) -> Result<u64, JsValue> {
    match seed {
        Some(value) => seed_from_f64(value)
            .ok_or_else(|| JsValue::from_str("seed must be a non-negative whole number below 2^53")),
        None => Ok(seed_from_f64(js_sys::Date::now()).unwrap_or(0)),
    }
}

/// Game instance owned by the page
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
}

#[wasm_bindgen]
impl WebGame {
    /// New run. Seeds from the clock when `seed` is omitted; `tuning_json`
    /// overrides the default balance.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>, tuning_json: Option<String>) -> Result<WebGame, JsValue> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Tuning::default(),
        };
        let seed = clock_or(seed)?;
        let state = GameState::with_tuning(seed, tuning).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebGame { state })
    }

    /// Restart with a fresh clock seed
    pub fn reset(&mut self) {
        let seed = seed_from_f64(js_sys::Date::now()).unwrap_or(0);
        self.state.reset_with_seed(seed);
    }

    /// Advance one frame; returns true once the run has ended
    pub fn step(&mut self) -> bool {
        self.state.step().ended
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[wasm_bindgen(js_name = setHorizontalIntent)]
    pub fn set_horizontal_intent(&mut self, left: bool, right: bool) {
        self.state.set_horizontal_intent(left, right);
    }

    #[wasm_bindgen(js_name = requestJump)]
    pub fn request_jump(&mut self) {
        self.state.request_jump();
    }

    #[wasm_bindgen(js_name = requestAbility)]
    pub fn request_ability(&mut self) {
        self.state.request_ability();
    }

    /// Current frame as JSON for the renderer
    pub fn snapshot(&self) -> Result<String, JsValue> {
        let snapshot: Snapshot = self.state.snapshot();
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
