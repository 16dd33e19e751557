pub mod constants;
pub mod error;
pub mod extent;
pub mod vector2;

pub use constants::*;
pub use error::TraceError;
pub use extent::GridExtent;
pub use vector2::Vector2;
