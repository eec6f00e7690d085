//! Canvas composer engine for the logo template tool.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! four fixed-size drawing surfaces (landscape/portrait × agency/endcard),
//! places one uploaded logo consistently across all of them, handles the
//! drag/snap gesture with transient alignment guides, keeps a single
//! background color in sync, and serializes each surface to a PNG data URL
//! for export to the server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | Surface kinds, fixed geometry table, per-surface state |
//! | [`logo`] | Logo placement record: natural size, fit scale, anchored position |
//! | [`composer`] | Testable [`composer::ComposerCore`] and the canvas-owning shell |
//! | [`hit`] | Point-in-logo hit testing for pointer-down dispatch |
//! | [`input`] | The drag gesture state machine |
//! | [`render`] | Drawing a surface to a 2D context |
//! | [`net`] | Export wire types and the `/save-images` request |
//! | [`host`] | DOM wiring: inputs, buttons, pointer events, alerts (wasm only) |
//! | [`consts`] | Shared numeric constants (fit box, snap threshold, offsets) |

pub mod composer;
pub mod consts;
pub mod hit;
#[cfg(target_arch = "wasm32")]
pub mod host;
pub mod input;
pub mod logo;
pub mod net;
pub mod render;
pub mod surface;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point invoked by the host page once the wasm module is loaded.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    host::boot()
}
