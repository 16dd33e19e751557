/// Nudge applied before rounding to the next grid line, in cell units.
///
/// Tuned for unit cells. A grid with a different cell size needs a value
/// re-derived against that size; see [`crate::raycast::GridTracer::with_epsilon`].
pub const DEFAULT_EPSILON: f64 = 1e-3;

pub const DEFAULT_COLUMNS: u32 = 10;
pub const DEFAULT_ROWS: u32 = 10;

pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;
