//! Shared numeric constants for the composer crate.

// ── Logo fit ────────────────────────────────────────────────────

/// Maximum logo width after scaling, in canvas units.
pub const LOGO_MAX_WIDTH: f64 = 300.0;

/// Maximum logo height after scaling, in canvas units.
pub const LOGO_MAX_HEIGHT: f64 = 100.0;

/// Vertical offset from the surface top at which a fresh logo is placed.
pub const LOGO_TOP_OFFSET: f64 = 50.0;

// ── Snapping ────────────────────────────────────────────────────

/// Distance from a surface midline within which a dragged logo snaps.
pub const SNAP_THRESHOLD: f64 = 10.0;

// ── Surfaces ────────────────────────────────────────────────────

/// Height of the background band on agency variants. Endcard variants
/// fill the whole canvas instead.
pub const AGENCY_BAND_HEIGHT: f64 = 134.0;

/// Stroke color for the transient alignment guides.
pub const GUIDE_STROKE: &str = "rgba(255, 0, 0, 0.5)";
