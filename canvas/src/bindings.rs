//! JavaScript surface of the engine.
//!
//! A page creates one [`SightlineView`] per canvas and forwards DOM events as
//! plain numbers and strings. Every command returns the resulting actions as
//! a JSON array (see [`crate::engine::actions_json`]); rejected input comes
//! back as an error string suitable for showing next to the form field.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::camera::Point;
use crate::engine::{Action, Engine, actions_json};
use crate::input::{Button, WheelDelta};
use crate::validate::InputError;

#[wasm_bindgen]
pub struct SightlineView {
    engine: Engine,
}

fn encode(actions: &[Action]) -> Result<String, JsValue> {
    actions_json(actions).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn answer(result: Result<Vec<Action>, InputError>) -> Result<String, JsValue> {
    result.map_err(|e| JsValue::from_str(&e.to_string())).and_then(|actions| encode(&actions))
}

#[wasm_bindgen]
impl SightlineView {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { engine: Engine::new(canvas) }
    }

    /// Form fields are passed through as typed.
    pub fn add_observer(&mut self, height: &str, offset: &str, color: &str) -> Result<String, JsValue> {
        answer(self.engine.on_add_observer(height, offset, color))
    }

    pub fn set_planet_radius(&mut self, radius: &str) -> Result<String, JsValue> {
        answer(self.engine.on_set_planet_radius(radius))
    }

    pub fn set_zoom(&mut self, zoom: &str) -> Result<String, JsValue> {
        answer(self.engine.on_set_zoom(zoom))
    }

    pub fn reset_camera(&mut self) -> Result<String, JsValue> {
        encode(&self.engine.reset_camera())
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.engine.set_viewport(width_css, height_css, dpr);
    }

    /// `button` is `MouseEvent.button`; codes other than 0-2 are ignored.
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        match Button::from_dom(button) {
            Some(button) => encode(&self.engine.on_pointer_down(Point::new(x, y), button)),
            None => encode(&[]),
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        encode(&self.engine.on_pointer_move(Point::new(x, y)))
    }

    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        match Button::from_dom(button) {
            Some(button) => encode(&self.engine.on_pointer_up(Point::new(x, y), button)),
            None => encode(&[]),
        }
    }

    pub fn wheel(&mut self, x: f64, y: f64, dx: f64, dy: f64) -> Result<String, JsValue> {
        encode(&self.engine.on_wheel(Point::new(x, y), WheelDelta { dx, dy }))
    }

    /// Call once per animation frame.
    pub fn render(&self) -> Result<(), JsValue> {
        self.engine.render()
    }

    pub fn describe_all(&self) -> Vec<String> {
        self.engine.describe_all()
    }

    pub fn summaries_json(&self) -> Result<String, JsValue> {
        self.engine.core.summaries_json().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn planet_label(&self) -> String {
        self.engine.planet_label()
    }

    pub fn zoom_label(&self) -> String {
        self.engine.zoom_label()
    }
}
