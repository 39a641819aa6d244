//! Platform abstraction layer
//!
//! The browser page owns the canvas, layout measurement and the
//! `requestAnimationFrame` clock; it drives the simulation through the
//! bindings in `web` (wasm32 only).

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebSimulation;
