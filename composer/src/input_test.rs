use super::*;

#[test]
fn default_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
}

#[test]
fn idle_has_no_surface() {
    assert_eq!(DragState::Idle.surface(), None);
}

#[test]
fn dragging_reports_its_surface() {
    let state = DragState::Dragging {
        kind: SurfaceKind::PortraitEndcard,
        grabbed_at: Point::new(12.0, 34.0),
        center_at_grab: Point::new(540.0, 100.0),
    };
    assert_eq!(state.surface(), Some(SurfaceKind::PortraitEndcard));
}

#[test]
fn dragging_carries_grab_anchors() {
    let state = DragState::Dragging {
        kind: SurfaceKind::LandscapeAgency,
        grabbed_at: Point::new(5.0, -2.5),
        center_at_grab: Point::new(960.0, 100.0),
    };
    let DragState::Dragging { grabbed_at, center_at_grab, .. } = state else {
        panic!("expected dragging");
    };
    assert_eq!(grabbed_at, Point::new(5.0, -2.5));
    assert_eq!(center_at_grab, Point::new(960.0, 100.0));
}
