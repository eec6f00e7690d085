//! Top-level composer: the testable core and the canvas-owning shell.
//!
//! `ComposerCore` holds all state transitions — surface initialization,
//! logo placement, the drag/snap gesture, alignment controls, background
//! color sync, and export preparation — with no browser dependencies, so
//! it can be tested natively. `Composer` wraps the core together with the
//! four `HtmlCanvasElement`s and is the only place surfaces are turned
//! into pixels or data URLs.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::consts::SNAP_THRESHOLD;
use crate::hit;
use crate::input::DragState;
use crate::logo::{LogoPlacement, OriginX, OriginY};
use crate::net::ExportImages;
use crate::render;
use crate::surface::{Point, Surface, SurfaceKind};

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Core composer state — everything that doesn't depend on canvas elements.
pub struct ComposerCore {
    surfaces: [Surface; 4],
    background_color: String,
    drag: DragState,
}

impl ComposerCore {
    /// Build the four surfaces with a shared background color.
    #[must_use]
    pub fn new(background_color: &str) -> Self {
        Self {
            surfaces: SurfaceKind::ALL.map(|kind| Surface::new(kind, background_color)),
            background_color: background_color.to_owned(),
            drag: DragState::Idle,
        }
    }

    /// Rebuild every surface from scratch with the given color. Drops any
    /// placed logo and hides all guides; idempotent for a fixed color.
    pub fn initialize(&mut self, background_color: &str) {
        self.surfaces = SurfaceKind::ALL.map(|kind| Surface::new(kind, background_color));
        self.background_color = background_color.to_owned();
        self.drag = DragState::Idle;
    }

    // --- Logo ingestion ---

    /// Place an independent copy of a freshly decoded logo on every
    /// surface: horizontal center, fixed top offset, shared fit scale.
    /// Replaces any existing copies. Returns the scale that was applied.
    pub fn place_logo(&mut self, natural_width: f64, natural_height: f64) -> f64 {
        let scale = LogoPlacement::fit_scale(natural_width, natural_height);
        for surface in &mut self.surfaces {
            surface.logo = Some(LogoPlacement::centered_top(
                natural_width,
                natural_height,
                scale,
                surface.kind.width(),
            ));
        }
        scale
    }

    // --- Drag and snap ---

    /// Pointer-down on a surface. Starts a drag when the point lands on
    /// that surface's logo; returns whether a drag began. The pointer
    /// position and logo center are captured as grab anchors.
    pub fn pointer_down(&mut self, kind: SurfaceKind, at: Point) -> bool {
        let surface = &self.surfaces[kind.index()];
        let Some(logo) = surface.logo.as_ref() else {
            return false;
        };
        if !hit::hit_logo(logo, at) {
            return false;
        }
        self.drag = DragState::Dragging { kind, grabbed_at: at, center_at_grab: logo.center() };
        true
    }

    /// Pointer-move. Computes the target center absolutely from the grab
    /// anchors (logo center at grab plus the total pointer delta), then
    /// snaps each axis independently when that target comes within
    /// [`SNAP_THRESHOLD`] of the surface midline, showing the matching
    /// guide inside the band and hiding it outside. The target never
    /// includes a previously applied snap, so the logo releases as soon
    /// as the pointer leaves the band, however small the per-event
    /// deltas. Returns whether a drag is active (i.e. a redraw is
    /// needed).
    pub fn pointer_move(&mut self, at: Point) -> bool {
        let DragState::Dragging { kind, grabbed_at, center_at_grab } = self.drag else {
            return false;
        };
        let surface = &mut self.surfaces[kind.index()];
        let mid_x = surface.kind.width() / 2.0;
        let mid_y = surface.kind.height() / 2.0;
        let target = Point::new(
            center_at_grab.x + (at.x - grabbed_at.x),
            center_at_grab.y + (at.y - grabbed_at.y),
        );

        let (snap_vertical, snap_horizontal);
        {
            let Some(logo) = surface.logo.as_mut() else {
                return false;
            };
            snap_vertical = (target.x - mid_x).abs() < SNAP_THRESHOLD;
            if snap_vertical {
                logo.left = mid_x;
                logo.origin_x = OriginX::Center;
            } else {
                logo.set_center_x(target.x);
            }
            snap_horizontal = (target.y - mid_y).abs() < SNAP_THRESHOLD;
            if snap_horizontal {
                logo.top = mid_y;
                logo.origin_y = OriginY::Center;
            } else {
                logo.set_center_y(target.y);
            }
        }
        surface.guides.vertical.visible = snap_vertical;
        surface.guides.horizontal.visible = snap_horizontal;
        true
    }

    /// Pointer-up. Ends the drag and unconditionally hides both guides of
    /// the dragged surface; the logo keeps its final (possibly snapped)
    /// position. Returns the surface that needs a redraw.
    pub fn pointer_up(&mut self) -> Option<SurfaceKind> {
        let DragState::Dragging { kind, .. } = self.drag else {
            return None;
        };
        self.drag = DragState::Idle;
        self.surfaces[kind.index()].guides.hide_both();
        Some(kind)
    }

    /// The surface currently being dragged, if any.
    #[must_use]
    pub fn drag_surface(&self) -> Option<SurfaceKind> {
        self.drag.surface()
    }

    // --- Alignment controls ---

    /// Center the logo horizontally; vertical position untouched.
    /// No-op (returns false) when the surface has no logo.
    pub fn center_horizontal(&mut self, kind: SurfaceKind) -> bool {
        let mid_x = kind.width() / 2.0;
        let Some(logo) = self.surfaces[kind.index()].logo.as_mut() else {
            return false;
        };
        logo.left = mid_x;
        logo.origin_x = OriginX::Center;
        true
    }

    /// Reset the logo's vertical position to the fixed top offset;
    /// horizontal position untouched. Despite the control's name this
    /// does not center on the vertical midline — observed behavior of
    /// the original tool, preserved deliberately.
    pub fn center_vertical(&mut self, kind: SurfaceKind) -> bool {
        let Some(logo) = self.surfaces[kind.index()].logo.as_mut() else {
            return false;
        };
        logo.top = crate::consts::LOGO_TOP_OFFSET;
        logo.origin_y = OriginY::Top;
        true
    }

    /// Restore the original center-top placement, preserving the scale.
    pub fn reset_logo(&mut self, kind: SurfaceKind) -> bool {
        let mid_x = kind.width() / 2.0;
        let Some(logo) = self.surfaces[kind.index()].logo.as_mut() else {
            return false;
        };
        logo.left = mid_x;
        logo.top = crate::consts::LOGO_TOP_OFFSET;
        logo.origin_x = OriginX::Center;
        logo.origin_y = OriginY::Top;
        true
    }

    // --- Background color ---

    /// Apply a new shared background color to every surface's
    /// non-interactive fill. Guides and logos are untouched.
    pub fn set_background_color(&mut self, color: &str) {
        self.background_color = color.to_owned();
        for surface in &mut self.surfaces {
            surface.background.fill = color.to_owned();
        }
    }

    /// The current shared background color.
    #[must_use]
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    // --- Export ---

    /// Force-hide every guide on every surface ahead of serialization,
    /// regardless of current visibility.
    pub fn prepare_export(&mut self) {
        for surface in &mut self.surfaces {
            surface.guides.hide_both();
        }
    }

    // --- Queries ---

    /// The full state of one surface.
    #[must_use]
    pub fn surface(&self, kind: SurfaceKind) -> &Surface {
        &self.surfaces[kind.index()]
    }

    /// The logo copy on one surface, if placed.
    #[must_use]
    pub fn logo(&self, kind: SurfaceKind) -> Option<&LogoPlacement> {
        self.surfaces[kind.index()].logo.as_ref()
    }
}

/// The full composer: wraps [`ComposerCore`] and owns the four canvas
/// elements plus the shared logo bitmap.
pub struct Composer {
    canvases: [HtmlCanvasElement; 4],
    contexts: [CanvasRenderingContext2d; 4],
    logo_image: Option<HtmlImageElement>,
    pub core: ComposerCore,
}

impl Composer {
    /// Bind to the four canvas mount points in `document`, size each to
    /// its surface's pixel dimensions, and build a fresh core.
    ///
    /// # Errors
    ///
    /// Returns `Err` when a mount point is missing, is not a canvas, or
    /// a 2D context cannot be obtained.
    pub fn new(document: &Document, background_color: &str) -> Result<Self, JsValue> {
        let mut canvases = Vec::with_capacity(4);
        let mut contexts = Vec::with_capacity(4);
        for kind in SurfaceKind::ALL {
            let element = document
                .get_element_by_id(kind.mount_id())
                .ok_or_else(|| JsValue::from_str(&format!("missing canvas mount: {}", kind.mount_id())))?;
            let canvas: HtmlCanvasElement = element.dyn_into()?;
            canvas.set_width(kind.width_px());
            canvas.set_height(kind.height_px());
            let context = canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
                .dyn_into::<CanvasRenderingContext2d>()?;
            canvases.push(canvas);
            contexts.push(context);
        }

        Ok(Self {
            canvases: to_array(canvases)?,
            contexts: to_array(contexts)?,
            logo_image: None,
            core: ComposerCore::new(background_color),
        })
    }

    /// The canvas element backing one surface, for event wiring.
    #[must_use]
    pub fn canvas(&self, kind: SurfaceKind) -> &HtmlCanvasElement {
        &self.canvases[kind.index()]
    }

    /// Adopt a decoded logo bitmap and place a copy on every surface.
    pub fn set_logo(&mut self, image: HtmlImageElement, natural_width: f64, natural_height: f64) {
        self.core.place_logo(natural_width, natural_height);
        self.logo_image = Some(image);
    }

    /// Redraw one surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self, kind: SurfaceKind) -> Result<(), JsValue> {
        render::draw(
            &self.contexts[kind.index()],
            self.core.surface(kind),
            self.logo_image.as_ref(),
        )
    }

    /// Redraw all four surfaces.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render_all(&self) -> Result<(), JsValue> {
        for kind in SurfaceKind::ALL {
            self.render(kind)?;
        }
        Ok(())
    }

    /// Serialize one surface to a PNG data URL.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot be serialized.
    pub fn to_data_url(&self, kind: SurfaceKind) -> Result<String, JsValue> {
        self.canvases[kind.index()].to_data_url()
    }

    /// Serialize all four surfaces for the export request.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any canvas cannot be serialized.
    pub fn export_images(&self) -> Result<ExportImages, JsValue> {
        Ok(ExportImages {
            landscape_agency: self.to_data_url(SurfaceKind::LandscapeAgency)?,
            landscape_endcard: self.to_data_url(SurfaceKind::LandscapeEndcard)?,
            portrait_agency: self.to_data_url(SurfaceKind::PortraitAgency)?,
            portrait_endcard: self.to_data_url(SurfaceKind::PortraitEndcard)?,
        })
    }
}

fn to_array<T>(items: Vec<T>) -> Result<[T; 4], JsValue> {
    items
        .try_into()
        .map_err(|_| JsValue::from_str("expected exactly four surfaces"))
}
