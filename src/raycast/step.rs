use crate::raycast::snap::next_grid_line;
use crate::types::Vector2;

/// Advance the ray through `p1 -> p2` to its next grid-line crossing after `p2`.
///
/// Both the next vertical line and the next horizontal line are intersected
/// with the ray and the crossing nearer to `p2` wins. On an exact tie (a corner
/// hit) the vertical-line crossing is kept.
///
/// A ray too steep for a finite slope is stepped as a vertical one.
///
/// `p1` and `p2` must differ; a zero direction returns `p2` unchanged.
pub fn ray_step(p1: Vector2, p2: Vector2, epsilon: f64) -> Vector2 {
    let d = p2 - p1;

    // y = k * x + c through p1 and p2.
    let k = d.y / d.x;
    let c = p1.y - k * p1.x;

    if d.x == 0.0 || !k.is_finite() || !c.is_finite() {
        return Vector2::new(p2.x, next_grid_line(p2.y, d.y, epsilon));
    }

    let x = next_grid_line(p2.x, d.x, epsilon);
    let mut next = Vector2::new(x, k * x + c);

    if k != 0.0 {
        let y = next_grid_line(p2.y, d.y, epsilon);
        let candidate = Vector2::new((y - c) / k, y);
        if p2.distance_to(candidate) < p2.distance_to(next) {
            next = candidate;
        }
    }

    next
}
