use glam::IVec2;

use crate::types::Vector2;

/// Sign of `v` as -1, 0 or 1. Unlike [`f64::signum`], zero maps to zero.
#[inline]
pub(crate) fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Round `value` to the next integer grid line in the direction of `delta`.
///
/// The value is nudged by `epsilon` before rounding so that a coordinate already
/// sitting on a line advances to the following one instead of selecting the
/// same line again. With `delta == 0` the value is returned unchanged.
#[inline]
pub fn next_grid_line(value: f64, delta: f64, epsilon: f64) -> f64 {
    if delta > 0.0 {
        (value + epsilon).ceil()
    } else if delta < 0.0 {
        (value - epsilon).floor()
    } else {
        value
    }
}

/// Cell that `point` lies just inside of when travelling along `direction`.
///
/// A point on a grid line is attributed to the cell being entered, not the one
/// being left.
#[inline]
pub fn containing_cell(point: Vector2, direction: Vector2, epsilon: f64) -> IVec2 {
    IVec2::new(
        (point.x + sign(direction.x) * epsilon).floor() as i32,
        (point.y + sign(direction.y) * epsilon).floor() as i32,
    )
}
