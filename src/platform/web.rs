//! wasm-bindgen surface for the browser
//!
//! JS calls `step()` once per animation frame, pushes resize/layout
//! measurements, and reads the committed frame back as flat buffers.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::settings::Settings;
use crate::sim::{Rect, SimState, tick};

/// Floats per body in [`WebSimulation::bodies`]
pub const BODY_STRIDE: usize = 4;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Fission Balls starting...");
}

#[wasm_bindgen]
pub struct WebSimulation {
    state: SimState,
}

#[wasm_bindgen]
impl WebSimulation {
    /// Seed a scene from a settings JSON document and the current canvas size
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str, width: f32, height: f32) -> Result<WebSimulation, JsValue> {
        let mut settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        settings.viewport = (width, height);
        // Layout is measured after startup
        settings.container = None;
        Ok(Self {
            state: SimState::seeded(&settings),
        })
    }

    /// Advance one tick; returns the population
    pub fn step(&mut self) -> u32 {
        tick(&mut self.state).population as u32
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.set_viewport(width, height);
    }

    pub fn set_container(&mut self, left: f32, right: f32, top: f32, bottom: f32) {
        self.state.set_container(Some(Rect::new(left, right, top, bottom)));
    }

    pub fn clear_container(&mut self) {
        self.state.set_container(None);
    }

    /// `[x, y, radius, generation]` per body
    pub fn bodies(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.state.bodies.len() * BODY_STRIDE);
        for body in &self.state.bodies {
            out.extend([body.pos.x, body.pos.y, body.radius, body.generation as f32]);
        }
        out
    }

    /// `[x, y, size, rotation]`
    pub fn cutter(&self) -> Vec<f32> {
        let cutter = &self.state.cutter;
        vec![cutter.pos.x, cutter.pos.y, cutter.size, cutter.rotation]
    }

    /// Triangle corners as `[x0, y0, x1, y1, x2, y2]`
    pub fn cutter_vertices(&self) -> Vec<f32> {
        self.state
            .cutter
            .vertices()
            .iter()
            .flat_map(|v: &Vec2| [v.x, v.y])
            .collect()
    }

    /// Whole committed frame as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.state.frame()).unwrap_or_default()
    }
}
