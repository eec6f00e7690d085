//! Logo placement: natural size, uniform fit scale, and anchored position.
//!
//! One placement exists per surface; all four are created from the same
//! upload with the same scale, then repositioned independently. Positions
//! are anchored: `left` is either the left edge or the horizontal center
//! of the logo depending on `origin_x`, and `top` is either the top edge
//! or the vertical center depending on `origin_y`. Snapping flips an axis
//! origin to `Center` and it stays flipped for the rest of the session,
//! which matches the original tool's behavior.

#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

use crate::consts::{LOGO_MAX_HEIGHT, LOGO_MAX_WIDTH, LOGO_TOP_OFFSET};
use crate::surface::Point;

/// Horizontal anchor for `left`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OriginX {
    #[default]
    Left,
    Center,
}

/// Vertical anchor for `top`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OriginY {
    #[default]
    Top,
    Center,
}

/// One surface's copy of the uploaded logo.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoPlacement {
    /// Natural image width in pixels.
    pub natural_width: f64,
    /// Natural image height in pixels.
    pub natural_height: f64,
    /// Uniform scale applied to both axes.
    pub scale: f64,
    /// Anchored horizontal position; meaning depends on `origin_x`.
    pub left: f64,
    /// Anchored vertical position; meaning depends on `origin_y`.
    pub top: f64,
    pub origin_x: OriginX,
    pub origin_y: OriginY,
}

impl LogoPlacement {
    /// Uniform scale that fits a `natural_width` × `natural_height` image
    /// inside the maximum logo box, never upscaling.
    #[must_use]
    pub fn fit_scale(natural_width: f64, natural_height: f64) -> f64 {
        if natural_width <= 0.0 || natural_height <= 0.0 {
            return 1.0;
        }
        1.0_f64
            .min(LOGO_MAX_WIDTH / natural_width)
            .min(LOGO_MAX_HEIGHT / natural_height)
    }

    /// The initial placement on a surface of the given width: horizontal
    /// center, fixed offset from the top, center/top anchored.
    #[must_use]
    pub fn centered_top(natural_width: f64, natural_height: f64, scale: f64, surface_width: f64) -> Self {
        Self {
            natural_width,
            natural_height,
            scale,
            left: surface_width / 2.0,
            top: LOGO_TOP_OFFSET,
            origin_x: OriginX::Center,
            origin_y: OriginY::Top,
        }
    }

    /// Rendered width after scaling.
    #[must_use]
    pub fn scaled_width(&self) -> f64 {
        self.natural_width * self.scale
    }

    /// Rendered height after scaling.
    #[must_use]
    pub fn scaled_height(&self) -> f64 {
        self.natural_height * self.scale
    }

    /// Center point of the rendered logo, resolving both anchors.
    #[must_use]
    pub fn center(&self) -> Point {
        let x = match self.origin_x {
            OriginX::Center => self.left,
            OriginX::Left => self.left + self.scaled_width() / 2.0,
        };
        let y = match self.origin_y {
            OriginY::Center => self.top,
            OriginY::Top => self.top + self.scaled_height() / 2.0,
        };
        Point::new(x, y)
    }

    /// Top-left corner of the rendered logo, resolving both anchors.
    #[must_use]
    pub fn top_left(&self) -> Point {
        let x = match self.origin_x {
            OriginX::Center => self.left - self.scaled_width() / 2.0,
            OriginX::Left => self.left,
        };
        let y = match self.origin_y {
            OriginY::Center => self.top - self.scaled_height() / 2.0,
            OriginY::Top => self.top,
        };
        Point::new(x, y)
    }

    /// Move the logo so its center's x lands on `x`, respecting the
    /// current horizontal anchor.
    pub fn set_center_x(&mut self, x: f64) {
        self.left = match self.origin_x {
            OriginX::Center => x,
            OriginX::Left => x - self.scaled_width() / 2.0,
        };
    }

    /// Move the logo so its center's y lands on `y`, respecting the
    /// current vertical anchor.
    pub fn set_center_y(&mut self, y: f64) {
        self.top = match self.origin_y {
            OriginY::Center => y,
            OriginY::Top => y - self.scaled_height() / 2.0,
        };
    }
}
