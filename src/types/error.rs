use thiserror::Error;

use crate::types::Vector2;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("degenerate ray: origin {origin:?} equals aim {aim:?}")]
    DegenerateRay { origin: Vector2, aim: Vector2 },
    #[error("non-finite point: {0:?}")]
    NonFinitePoint(Vector2),
    #[error("trace exceeded its budget of {budget} steps")]
    IterationBudgetExceeded { budget: usize },
    #[error("invalid extent: {0}")]
    InvalidExtent(String),
    #[error("invalid epsilon {0}: must be finite and within (0, 0.5)")]
    InvalidEpsilon(f64),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
