//! Scene drawing: the planet disc, then each observer's sightline and markers.
//!
//! Nothing outside this module talks to [`web_sys::CanvasRenderingContext2d`].
//! State comes in by shared reference and is never modified here.
//!
//! Each shape's path is traced in world space under the camera transform, and
//! the transform is popped before painting, so strokes are one screen pixel
//! wide whatever the zoom.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::{MARKER_RADIUS_PX, OUTLINE_COLOR, PLANET_FILL};
use crate::doc::{Observer, ObserverRegistry};
use crate::planet::Planet;

/// Clear the viewport and paint one frame.
///
/// Viewport size is in CSS pixels and is scaled by `dpr` for the backing store.
///
/// # Errors
///
/// Propagates the first failing context call.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    planet: &Planet,
    observers: &ObserverRegistry,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    let circle = planet.circle();
    trace_in_world(ctx, camera, |ctx| ctx.arc(circle.x, circle.y, circle.radius, 0.0, TAU))?;
    paint(ctx, OUTLINE_COLOR, Some(PLANET_FILL));

    let marker_radius = camera.screen_dist_to_world(MARKER_RADIUS_PX);
    observers.iter().try_for_each(|observer| draw_observer(ctx, camera, observer, marker_radius))
}

fn draw_observer(
    ctx: &CanvasRenderingContext2d,
    camera: &Camera,
    observer: &Observer,
    marker_radius: f64,
) -> Result<(), JsValue> {
    let from = observer.sim_point;
    let to = observer.horizon.intersect_point;

    trace_in_world(ctx, camera, |ctx| {
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        Ok(())
    })?;
    paint(ctx, OUTLINE_COLOR, None);

    for at in [from, to] {
        trace_in_world(ctx, camera, |ctx| dot(ctx, at, marker_radius))?;
        paint(ctx, &observer.color, Some(&observer.color));
    }
    Ok(())
}

/// Begin a new path and let `trace` build it under the camera transform.
/// The transform is restored before returning; the path is left current.
fn trace_in_world<F>(ctx: &CanvasRenderingContext2d, camera: &Camera, trace: F) -> Result<(), JsValue>
where
    F: FnOnce(&CanvasRenderingContext2d) -> Result<(), JsValue>,
{
    ctx.save();
    // translate(center) ∘ scale(zoom) ∘ translate(-center) ∘ translate(offset)
    let result = ctx
        .translate(camera.center.x, camera.center.y)
        .and_then(|()| ctx.scale(camera.zoom, camera.zoom))
        .and_then(|()| ctx.translate(camera.offset.x - camera.center.x, camera.offset.y - camera.center.y))
        .and_then(|()| {
            ctx.begin_path();
            trace(ctx)
        });
    ctx.restore();
    result
}

fn dot(ctx: &CanvasRenderingContext2d, at: Point, radius: f64) -> Result<(), JsValue> {
    ctx.arc(at.x, at.y, radius, 0.0, TAU)
}

fn paint(ctx: &CanvasRenderingContext2d, stroke: &str, fill: Option<&str>) {
    ctx.set_stroke_style_str(stroke);
    ctx.stroke();
    if let Some(fill) = fill {
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }
}
