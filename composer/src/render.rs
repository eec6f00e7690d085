//! Rendering: draws one surface to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only surface state and produces pixels — it does not
//! mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::composer::Composer::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::GUIDE_STROKE;
use crate::surface::Surface;

/// Draw the full surface: background band, logo, then visible guides.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. a detached context).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    surface: &Surface,
    logo_image: Option<&HtmlImageElement>,
) -> Result<(), JsValue> {
    let width = surface.kind.width();
    let height = surface.kind.height();

    // Layer 1: clear and paint the background band.
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(&surface.background.fill);
    ctx.fill_rect(0.0, 0.0, surface.background.width, surface.background.height);

    // Layer 2: the logo, scaled uniformly.
    if let (Some(logo), Some(image)) = (surface.logo.as_ref(), logo_image) {
        let top_left = logo.top_left();
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            top_left.x,
            top_left.y,
            logo.scaled_width(),
            logo.scaled_height(),
        )?;
    }

    // Layer 3: transient alignment guides.
    if surface.guides.vertical.visible {
        stroke_guide(ctx, surface.mid_x(), 0.0, surface.mid_x(), height);
    }
    if surface.guides.horizontal.visible {
        stroke_guide(ctx, 0.0, surface.mid_y(), width, surface.mid_y());
    }

    Ok(())
}

fn stroke_guide(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.set_stroke_style_str(GUIDE_STROKE);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}
