use glam::IVec2;
use tracing::{debug, warn};

use crate::raycast::TraceStep;
use crate::raycast::snap::containing_cell;
use crate::raycast::step::ray_step;
use crate::types::{DEFAULT_EPSILON, GridExtent, TraceError, Vector2};

/// Steps rays across a fixed grid extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTracer {
    extent: GridExtent,
    epsilon: f64,
}

impl Default for GridTracer {
    fn default() -> Self {
        Self::new(GridExtent::default())
    }
}

impl GridTracer {
    pub fn new(extent: GridExtent) -> Self {
        Self {
            extent,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Override the snapping tolerance. It must be positive and below half a
    /// cell, otherwise a snap could stall on a line or jump over one.
    pub fn with_epsilon(mut self, epsilon: f64) -> Result<Self, TraceError> {
        if !epsilon.is_finite() || epsilon <= 0.0 || epsilon >= 0.5 {
            return Err(TraceError::InvalidEpsilon(epsilon));
        }
        self.epsilon = epsilon;
        Ok(self)
    }

    pub fn extent(&self) -> &GridExtent {
        &self.extent
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Lazily walk the ray from `origin` through `aim` until it leaves the grid.
    pub fn iter(&self, origin: Vector2, aim: Vector2) -> Result<TraceIter, TraceError> {
        for point in [origin, aim] {
            if !point.is_finite() {
                return Err(TraceError::NonFinitePoint(point));
            }
        }
        if origin == aim {
            return Err(TraceError::DegenerateRay { origin, aim });
        }

        Ok(TraceIter {
            extent: self.extent,
            epsilon: self.epsilon,
            origin,
            p1: origin,
            p2: aim,
            steps: 0,
            budget: self.extent.max_steps(),
            finished: false,
        })
    }

    /// Collect every boundary crossing from `aim` up to and including the first
    /// point outside the grid.
    pub fn trace(&self, origin: Vector2, aim: Vector2) -> Result<Trace, TraceError> {
        let steps = self.iter(origin, aim)?.collect::<Result<Vec<_>, _>>()?;
        Ok(Trace { origin, steps })
    }
}

/// Trace a ray over `extent` with the default tolerance.
pub fn trace(origin: Vector2, aim: Vector2, extent: GridExtent) -> Result<Trace, TraceError> {
    GridTracer::new(extent).trace(origin, aim)
}

pub struct TraceIter {
    extent: GridExtent,
    epsilon: f64,
    origin: Vector2,
    /// Previous crossing (the ray origin before the first step).
    p1: Vector2,
    /// Crossing to be emitted next.
    p2: Vector2,
    steps: usize,
    budget: usize,
    finished: bool,
}

impl TraceIter {
    /// Number of ray steps taken so far.
    pub fn steps_taken(&self) -> usize {
        self.steps
    }
}

impl Iterator for TraceIter {
    type Item = Result<TraceStep, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.steps > self.budget {
            self.finished = true;
            warn!(budget = self.budget, point = ?self.p2, "trace did not leave the grid");
            return Some(Err(TraceError::IterationBudgetExceeded {
                budget: self.budget,
            }));
        }

        let cell = containing_cell(self.p2, self.p2 - self.p1, self.epsilon);
        let step = TraceStep {
            point: self.p2,
            cell,
            distance: self.origin.distance_to(self.p2),
        };

        if self.extent.contains(cell) {
            let next = ray_step(self.p1, self.p2, self.epsilon);
            tracing::trace!(from = ?self.p2, to = ?next, cell = ?cell, "ray step");
            self.p1 = self.p2;
            self.p2 = next;
            self.steps += 1;
        } else {
            debug!(exit = ?self.p2, cell = ?cell, steps = self.steps, "ray left the grid");
            self.finished = true;
        }

        Some(Ok(step))
    }
}

/// Ordered boundary crossings of one ray. Never empty: the first element is the
/// aim point and the last lies in a cell outside the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    origin: Vector2,
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.steps.iter().map(|s| s.point)
    }

    /// Cells the crossings lie in; only the last one is outside the grid.
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.steps.iter().map(|s| s.cell)
    }

    /// The exit point.
    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    /// Consecutive line segments starting at the origin, ready to draw.
    pub fn segments(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        std::iter::once(self.origin)
            .chain(self.points())
            .zip(self.points())
    }

    pub fn into_points(self) -> Vec<Vector2> {
        self.steps.into_iter().map(|s| s.point).collect()
    }
}
