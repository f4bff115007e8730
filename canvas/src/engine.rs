use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::doc::{Observer, ObserverId, ObserverRegistry, ObserverSummary};
use crate::input::{Button, InputState, WheelDelta};
use crate::planet::Planet;
use crate::render;
use crate::validate::{self, InputError};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Action {
    /// A new observer was appended; the host appends its description.
    ObserverAdded { id: ObserverId },
    /// Every observer was recomputed; the host rebuilds the details panel
    /// from [`EngineCore::describe_all`] and the planet label.
    PlanetResized { radius_km: f64 },
    /// The zoom changed; the host refreshes its zoom field.
    ZoomChanged(f64),
    SetCursor(String),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// This is the whole session: planet, observers, and camera. Every mutation
/// goes through one of the handlers below and is fully applied (including the
/// observer recompute after a radius change) before it returns, so the next
/// frame always sees consistent state.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub planet: Planet,
    pub observers: ObserverRegistry,
    pub camera: Camera,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            planet: Planet::default(),
            observers: ObserverRegistry::new(),
            camera: Camera::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

fn reject(err: InputError) -> InputError {
    tracing::warn!(%err, "input rejected");
    err
}

/// Encode handler actions as a JSON array for a JS host.
///
/// # Errors
///
/// Returns `Err` if serialization fails.
pub fn actions_json(actions: &[Action]) -> Result<String, serde_json::Error> {
    serde_json::to_string(actions)
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with the given planet radius, already validated.
    #[must_use]
    pub fn with_planet_radius(radius_km: f64) -> Self {
        Self { planet: Planet::new(radius_km), ..Self::default() }
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio. The camera pivot
    /// follows the viewport center.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
        self.camera.recenter(Point::new(width_css * 0.5, height_css * 0.5));
    }

    // --- Commands ---

    /// Add an observer `height_km` above the surface and `offset_km` to the
    /// side, drawn in `color`.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite heights, non-finite offsets, and
    /// placements too large for the current scale, without touching the
    /// session.
    pub fn on_add_observer(&mut self, height_km: f64, offset_km: f64, color: &str) -> Result<Vec<Action>, InputError> {
        let height_km = validate::height(height_km).map_err(reject)?;
        let offset_km = validate::offset(offset_km).map_err(reject)?;
        validate::placement(&self.planet, height_km, offset_km).map_err(reject)?;

        let id = self.observers.add(&self.planet, height_km, offset_km, color);
        tracing::debug!(id, height_km, offset_km, color, "observer added");
        Ok(vec![Action::ObserverAdded { id }, Action::RenderNeeded])
    }

    /// [`Self::on_add_observer`] for raw form text.
    ///
    /// # Errors
    ///
    /// Rejects text that is not a number, then as [`Self::on_add_observer`].
    pub fn on_add_observer_input(&mut self, height: &str, offset: &str, color: &str) -> Result<Vec<Action>, InputError> {
        let height_km = validate::parse_number("height", height).map_err(reject)?;
        let offset_km = validate::parse_number("offset", offset).map_err(reject)?;
        self.on_add_observer(height_km, offset_km, color)
    }

    /// Change the represented planet radius and recompute every observer.
    ///
    /// # Errors
    ///
    /// Rejects zero, negative, subnormal, or non-finite radii, and radii that
    /// would push an existing observer out of range, without touching the
    /// session.
    pub fn on_set_planet_radius(&mut self, radius_km: f64) -> Result<Vec<Action>, InputError> {
        let radius_km = validate::planet_radius(radius_km).map_err(reject)?;
        validate::rescale(&self.planet, &self.observers, radius_km).map_err(reject)?;

        self.planet.set_represented_radius(radius_km);
        self.observers.recompute_all(&self.planet);
        tracing::info!(radius_km, observers = self.observers.len(), "planet resized");
        Ok(vec![Action::PlanetResized { radius_km }, Action::RenderNeeded])
    }

    /// [`Self::on_set_planet_radius`] for raw form text.
    ///
    /// # Errors
    ///
    /// Rejects text that is not a number, then as [`Self::on_set_planet_radius`].
    pub fn on_set_planet_radius_input(&mut self, radius: &str) -> Result<Vec<Action>, InputError> {
        let radius_km = validate::parse_number("radius", radius).map_err(reject)?;
        self.on_set_planet_radius(radius_km)
    }

    /// Set the zoom directly.
    ///
    /// # Errors
    ///
    /// Rejects zero, negative, or non-finite factors.
    pub fn on_set_zoom(&mut self, zoom: f64) -> Result<Vec<Action>, InputError> {
        self.camera.zoom = validate::zoom(zoom).map_err(reject)?;
        tracing::debug!(zoom, "zoom set");
        Ok(vec![Action::ZoomChanged(self.camera.zoom), Action::RenderNeeded])
    }

    /// [`Self::on_set_zoom`] for raw form text.
    ///
    /// # Errors
    ///
    /// Rejects text that is not a number, then as [`Self::on_set_zoom`].
    pub fn on_set_zoom_input(&mut self, zoom: &str) -> Result<Vec<Action>, InputError> {
        let zoom = validate::parse_number("zoom", zoom).map_err(reject)?;
        self.on_set_zoom(zoom)
    }

    /// Bring the top of the planet back to the viewport center.
    pub fn reset_camera(&mut self) -> Vec<Action> {
        self.camera.reset(self.planet.sim_radius());
        tracing::debug!(offset_x = self.camera.offset.x, offset_y = self.camera.offset.y, "camera reset");
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Start a drag. The secondary button is left to the host's context menu.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if !button.pans() {
            return Vec::new();
        }
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::SetCursor("grabbing".to_owned())]
    }

    /// Follow the pointer while a drag is in progress.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let Some(last_screen) = self.input.last_screen() else {
            return Vec::new();
        };
        self.camera.pan(last_screen, screen_pt);
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::RenderNeeded]
    }

    /// End a drag.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        if !self.input.is_panning() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor("grab".to_owned())]
    }

    /// Step the zoom by one notch per wheel event.
    pub fn on_wheel(&mut self, _screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let before = self.camera.zoom;
        self.camera.wheel_zoom(delta.dy);
        if (self.camera.zoom - before).abs() < f64::EPSILON {
            return Vec::new();
        }
        tracing::debug!(zoom = self.camera.zoom, "wheel zoom");
        vec![Action::ZoomChanged(self.camera.zoom), Action::RenderNeeded]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up an observer by id.
    #[must_use]
    pub fn observer(&self, id: ObserverId) -> Option<&Observer> {
        self.observers.get(id)
    }

    /// Details-panel line for one observer.
    #[must_use]
    pub fn describe(&self, id: ObserverId) -> Option<String> {
        self.observers.describe(&self.planet, id)
    }

    /// Details-panel lines for every observer, in id order.
    #[must_use]
    pub fn describe_all(&self) -> Vec<String> {
        self.summaries().iter().map(ToString::to_string).collect()
    }

    /// Kilometer/degree summary for one observer.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownObserver`] for an id that was never handed out.
    pub fn summary(&self, id: ObserverId) -> Result<ObserverSummary, InputError> {
        self.observers.summary(&self.planet, id).ok_or(InputError::UnknownObserver(id))
    }

    /// Summaries of every observer, in id order.
    #[must_use]
    pub fn summaries(&self) -> Vec<ObserverSummary> {
        self.observers.summaries(&self.planet)
    }

    /// Summaries of every observer as a JSON array, for hosts that build the
    /// details panel themselves.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn summaries_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.summaries())
    }

    /// Current planet size for display, e.g. `6371km`.
    #[must_use]
    pub fn planet_label(&self) -> String {
        self.planet.label()
    }

    /// Current zoom for the zoom field, two decimals.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{:.2}", self.camera.zoom)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
///
/// The host calls [`Engine::render`] once per animation frame; it redraws from
/// current state and keeps nothing between frames.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, sized to the
    /// canvas and focused on the planet origin.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let mut core = EngineCore::new();
        core.set_viewport(f64::from(canvas.width()), f64::from(canvas.height()), 1.0);
        Self { canvas, core }
    }

    // --- Delegated commands ---

    /// # Errors
    ///
    /// See [`EngineCore::on_add_observer_input`].
    pub fn on_add_observer(&mut self, height: &str, offset: &str, color: &str) -> Result<Vec<Action>, InputError> {
        self.core.on_add_observer_input(height, offset, color)
    }

    /// # Errors
    ///
    /// See [`EngineCore::on_set_planet_radius_input`].
    pub fn on_set_planet_radius(&mut self, radius: &str) -> Result<Vec<Action>, InputError> {
        self.core.on_set_planet_radius_input(radius)
    }

    /// # Errors
    ///
    /// See [`EngineCore::on_set_zoom_input`].
    pub fn on_set_zoom(&mut self, zoom: &str) -> Result<Vec<Action>, InputError> {
        self.core.on_set_zoom_input(zoom)
    }

    pub fn reset_camera(&mut self) -> Vec<Action> {
        self.core.reset_camera()
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a drawing call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx: js_sys::Object = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
        let ctx = ctx.dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(
            &ctx,
            &self.core.planet,
            &self.core.observers,
            &self.core.camera,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn describe(&self, id: ObserverId) -> Option<String> {
        self.core.describe(id)
    }

    #[must_use]
    pub fn describe_all(&self) -> Vec<String> {
        self.core.describe_all()
    }

    #[must_use]
    pub fn planet_label(&self) -> String {
        self.core.planet_label()
    }

    #[must_use]
    pub fn zoom_label(&self) -> String {
        self.core.zoom_label()
    }
}
