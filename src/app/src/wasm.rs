//! WebAssembly FFI bindings for the Crux Core
//!
//! Browser shells call into the core through these functions. Events, effects
//! and view models cross the boundary bincode-serialized.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up logging to the browser console when the module is loaded
#[wasm_bindgen(start)]
pub fn init_wasm() {
    // Fails only when a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Process an event from JavaScript, returning the effects to run
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .map_err(|e| JsValue::from_str(&format!("failed to process event: {e}")))?;
    Ok(effects)
}

/// Answer an effect (HTTP response, elapsed delay) by its id
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    let mut effects = Vec::new();
    CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    )
    .map_err(|e| JsValue::from_str(&format!("failed to handle response: {e}")))?;
    Ok(effects)
}

/// Current view model
#[wasm_bindgen]
pub fn view() -> Result<Vec<u8>, JsValue> {
    let mut view = Vec::new();
    CORE.view(&mut view)
        .map_err(|e| JsValue::from_str(&format!("failed to get view model: {e}")))?;
    Ok(view)
}
