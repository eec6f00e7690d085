//! The drag gesture state machine.
//!
//! Exactly one logo copy can be dragged at a time. The active variant
//! carries the surface it belongs to plus two anchors captured at
//! pointer-down: the pointer position and the logo center. Every move
//! computes the target center absolutely from those anchors, so a snap
//! applied on one event never feeds into the next.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::surface::{Point, SurfaceKind};

/// Drag state for the whole composer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A logo copy is being moved.
    Dragging {
        /// Surface whose logo is being dragged.
        kind: SurfaceKind,
        /// Pointer position at pointer-down, in canvas coordinates.
        grabbed_at: Point,
        /// Logo center at pointer-down, in canvas coordinates.
        center_at_grab: Point,
    },
}

impl DragState {
    /// The surface being dragged, if any.
    #[must_use]
    pub fn surface(self) -> Option<SurfaceKind> {
        match self {
            Self::Idle => None,
            Self::Dragging { kind, .. } => Some(kind),
        }
    }
}
