//! Hit-testing: does a pointer-down land on a surface's logo?

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::logo::LogoPlacement;
use crate::surface::Point;

/// Whether `at` falls inside the rendered bounds of `logo`.
#[must_use]
pub fn hit_logo(logo: &LogoPlacement, at: Point) -> bool {
    let top_left = logo.top_left();
    at.x >= top_left.x
        && at.x <= top_left.x + logo.scaled_width()
        && at.y >= top_left.y
        && at.y <= top_left.y + logo.scaled_height()
}
