//! Browser bindings
//!
//! The page owns the canvas, the ticker and the textures. It forwards
//! pointer-down events and frame times here and reads the handle angle back.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::controller::{VaultController, VaultObserver};
use crate::settings::Settings;
use crate::sim::{ClickOutcome, VaultPhase};

/// Forwards lifecycle callbacks to JS functions
struct JsObserver {
    on_reset: js_sys::Function,
    on_vault_open: js_sys::Function,
}

impl JsObserver {
    fn call(callback: &js_sys::Function, name: &str) {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            log::error!("{} callback threw: {:?}", name, e);
        }
    }
}

impl VaultObserver for JsObserver {
    fn on_reset(&mut self) {
        Self::call(&self.on_reset, "onReset");
    }

    fn on_vault_open(&mut self) {
        Self::call(&self.on_vault_open, "onVaultOpen");
    }
}

/// Vault game handle exposed to JS
#[wasm_bindgen]
pub struct WebVault {
    controller: VaultController<JsObserver>,
}

#[wasm_bindgen]
impl WebVault {
    #[wasm_bindgen(constructor)]
    pub fn new(on_reset: js_sys::Function, on_vault_open: js_sys::Function) -> WebVault {
        let settings = Settings::load();
        log::set_max_level(settings.log_level_filter());
        let seed = settings.seed.unwrap_or_else(super::random_seed);
        let observer = JsObserver {
            on_reset,
            on_vault_open,
        };
        WebVault {
            controller: VaultController::new(&settings, seed, observer),
        }
    }

    /// Dial center in client coordinates (call on resize)
    #[wasm_bindgen(js_name = setCenter)]
    pub fn set_center(&mut self, x: f32, y: f32) {
        self.controller.set_center(Vec2::new(x, y));
    }

    /// Returns true if the click was accepted
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.controller.pointer_down(Vec2::new(x, y)) != ClickOutcome::Ignored
    }

    /// Advance by a frame's elapsed milliseconds
    pub fn update(&mut self, delta_ms: f32) {
        self.controller.update(delta_ms * 0.001);
    }

    #[wasm_bindgen(js_name = handleAngle)]
    pub fn handle_angle(&self) -> f64 {
        self.controller.handle_angle()
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.controller.phase() == VaultPhase::Open
    }

    /// Seconds spent on the current combination (for the timer text)
    #[wasm_bindgen(js_name = elapsedSecs)]
    pub fn elapsed_secs(&self) -> f32 {
        self.controller.cycle_elapsed()
    }

    #[wasm_bindgen(js_name = forceReset)]
    pub fn force_reset(&mut self) {
        self.controller.force_reset();
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Info until WebVault::new applies the configured level
    let _ = console_log::init_with_level(log::Level::Trace);
    log::set_max_level(log::LevelFilter::Info);
    log::info!("Vault Lock (web) ready");
}
