use glam::IVec2;

use crate::types::Vector2;

pub mod snap;
pub mod step;
pub mod trace;

pub use snap::{containing_cell, next_grid_line};
pub use step::ray_step;
pub use trace::{GridTracer, Trace, TraceIter, trace};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TraceStep {
    /// Boundary crossing, or the aim point for the first step.
    pub point: Vector2,
    /// Cell the point lies just inside of along the direction of travel.
    pub cell: IVec2,
    /// Distance from the ray origin (cell units).
    pub distance: f64,
}
