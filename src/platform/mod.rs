//! Platform abstraction layer
//!
//! Browser bindings live in `web`; native builds drive the controller
//! directly (see the demo binary).

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a new run when settings don't pin one
#[cfg(target_arch = "wasm32")]
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64 ^ js_sys::Date::now() as u64
}

/// Seed for a new run when settings don't pin one
#[cfg(not(target_arch = "wasm32"))]
pub fn random_seed() -> u64 {
    rand::random()
}
