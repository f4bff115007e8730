//! Horizon line-of-sight engine for a circular planet.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and also
//! builds natively for headless use. It owns the whole session: the planet
//! and its km/unit scale, the observers and their cached sightlines, and the
//! pan/zoom camera. The host page wires DOM events and form fields to
//! [`bindings::SightlineView`], shows the returned [`engine::Action`]s, and
//! calls its `render` once per animation frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bindings`] | `#[wasm_bindgen]` surface for the JS page |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] session |
//! | [`doc`] | Observer records and the append-only registry |
//! | [`geometry`] | Tangent point, sightline length, and depression angle |
//! | [`planet`] | Planet circle and its represented radius |
//! | [`units`] | Kilometer ↔ simulation-unit conversion |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the drag state machine |
//! | [`validate`] | Boundary checks for user-entered values |
//! | [`render`] | Scene rendering to a `Canvas2D` context |
//! | [`consts`] | Shared numeric constants (planet scale, zoom limits, colors) |

pub mod bindings;
pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod planet;
pub mod render;
pub mod units;
pub mod validate;
