pub mod loaders;
pub mod raycast;
pub mod types;
pub mod visualization;

pub use loaders::config::{TracerConfig, load_config};
pub use raycast::{GridTracer, Trace, TraceStep, trace};
pub use types::{GridExtent, TraceError, Vector2};
