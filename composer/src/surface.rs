//! Surface model: the four output variants and their per-surface state.
//!
//! A surface is one of the four fixed-size canvases the tool composites.
//! Each carries a background rectangle sized to its visible region, a pair
//! of midline alignment guides (hidden by default), and at most one logo
//! placement. The guide pair is an explicit typed record stored per
//! surface, so guide visibility can never leak across surfaces.
//!
//! Only the background rectangle participates in background-color sync;
//! guides and the logo are excluded by construction.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::consts::AGENCY_BAND_HEIGHT;
use crate::logo::LogoPlacement;

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One of the four output image variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    LandscapeAgency,
    LandscapeEndcard,
    PortraitAgency,
    PortraitEndcard,
}

impl SurfaceKind {
    /// All four variants in canonical order.
    pub const ALL: [SurfaceKind; 4] = [
        SurfaceKind::LandscapeAgency,
        SurfaceKind::LandscapeEndcard,
        SurfaceKind::PortraitAgency,
        SurfaceKind::PortraitEndcard,
    ];

    /// Stable index into per-surface arrays, matching [`Self::ALL`] order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::LandscapeAgency => 0,
            Self::LandscapeEndcard => 1,
            Self::PortraitAgency => 2,
            Self::PortraitEndcard => 3,
        }
    }

    /// Kebab-case key used by the `data-canvas` attribute on the host page.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LandscapeAgency => "landscape-agency",
            Self::LandscapeEndcard => "landscape-endcard",
            Self::PortraitAgency => "portrait-agency",
            Self::PortraitEndcard => "portrait-endcard",
        }
    }

    /// Parse a `data-canvas` attribute value.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "landscape-agency" => Some(Self::LandscapeAgency),
            "landscape-endcard" => Some(Self::LandscapeEndcard),
            "portrait-agency" => Some(Self::PortraitAgency),
            "portrait-endcard" => Some(Self::PortraitEndcard),
            _ => None,
        }
    }

    /// Snake-case key used in the export request body.
    #[must_use]
    pub fn export_key(self) -> &'static str {
        match self {
            Self::LandscapeAgency => "landscape_agency",
            Self::LandscapeEndcard => "landscape_endcard",
            Self::PortraitAgency => "portrait_agency",
            Self::PortraitEndcard => "portrait_endcard",
        }
    }

    /// DOM id of this surface's canvas mount point.
    #[must_use]
    pub fn mount_id(self) -> &'static str {
        match self {
            Self::LandscapeAgency => "landscape-agency-canvas",
            Self::LandscapeEndcard => "landscape-endcard-canvas",
            Self::PortraitAgency => "portrait-agency-canvas",
            Self::PortraitEndcard => "portrait-endcard-canvas",
        }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width_px(self) -> u32 {
        match self {
            Self::LandscapeAgency | Self::LandscapeEndcard => 1920,
            Self::PortraitAgency | Self::PortraitEndcard => 1080,
        }
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height_px(self) -> u32 {
        match self {
            Self::LandscapeAgency | Self::LandscapeEndcard => 1080,
            Self::PortraitAgency | Self::PortraitEndcard => 1920,
        }
    }

    /// Canvas width in canvas units.
    #[must_use]
    pub fn width(self) -> f64 {
        f64::from(self.width_px())
    }

    /// Canvas height in canvas units.
    #[must_use]
    pub fn height(self) -> f64 {
        f64::from(self.height_px())
    }

    /// Height of the background band. Agency variants paint a short band
    /// across the top; endcard variants fill the whole canvas.
    #[must_use]
    pub fn band_height(self) -> f64 {
        match self {
            Self::LandscapeAgency | Self::PortraitAgency => AGENCY_BAND_HEIGHT,
            Self::LandscapeEndcard | Self::PortraitEndcard => self.height(),
        }
    }
}

/// Non-interactive background rectangle covering a surface's visible region.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundRect {
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// A single midline alignment guide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuideLine {
    pub visible: bool,
}

/// The vertical and horizontal guide for one surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuidePair {
    pub vertical: GuideLine,
    pub horizontal: GuideLine,
}

impl GuidePair {
    /// Hide both guides, e.g. at drag end or before export.
    pub fn hide_both(&mut self) {
        self.vertical.visible = false;
        self.horizontal.visible = false;
    }
}

/// Full per-surface state.
#[derive(Debug, Clone)]
pub struct Surface {
    pub kind: SurfaceKind,
    pub background: BackgroundRect,
    pub guides: GuidePair,
    pub logo: Option<LogoPlacement>,
}

impl Surface {
    /// Build a fresh surface: background sized to the visible region and
    /// filled with `fill`, guides hidden, no logo.
    #[must_use]
    pub fn new(kind: SurfaceKind, fill: &str) -> Self {
        Self {
            kind,
            background: BackgroundRect {
                width: kind.width(),
                height: kind.band_height(),
                fill: fill.to_owned(),
            },
            guides: GuidePair::default(),
            logo: None,
        }
    }

    /// Horizontal midpoint of the canvas.
    #[must_use]
    pub fn mid_x(&self) -> f64 {
        self.kind.width() / 2.0
    }

    /// Vertical midpoint of the canvas.
    #[must_use]
    pub fn mid_y(&self) -> f64 {
        self.kind.height() / 2.0
    }
}
