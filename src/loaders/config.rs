use std::path::Path;

use glam::UVec2;
use serde::Deserialize;

use crate::raycast::GridTracer;
use crate::types::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_COLUMNS, DEFAULT_EPSILON, DEFAULT_ROWS,
    GridExtent, TraceError, Vector2,
};

/// Tracer and viewer settings, usually read from a YAML file.
///
/// Every field is optional:
///
/// ```yaml
/// columns: 10
/// rows: 10
/// epsilon: 0.001
/// origin: [4.4, 3.3]
/// canvas: [800, 800]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TracerConfig {
    #[serde(default = "default_columns")]
    pub columns: u32,
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(
        default = "default_epsilon",
        deserialize_with = "deserialize_epsilon"
    )]
    pub epsilon: f64,
    /// Fixed ray origin in grid coordinates.
    #[serde(default = "default_origin")]
    pub origin: Vector2,
    /// Canvas size in pixels as `[width, height]`.
    #[serde(default = "default_canvas")]
    pub canvas: [u32; 2],
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            epsilon: default_epsilon(),
            origin: default_origin(),
            canvas: default_canvas(),
        }
    }
}

fn default_columns() -> u32 {
    DEFAULT_COLUMNS
}

fn default_rows() -> u32 {
    DEFAULT_ROWS
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

/// 0.44 of the way across and 0.33 of the way down the default grid.
fn default_origin() -> Vector2 {
    Vector2::new(4.4, 3.3)
}

fn default_canvas() -> [u32; 2] {
    [DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT]
}

fn deserialize_epsilon<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value > 0.0 && value < 0.5 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(
            "epsilon must be in the range (0.0, 0.5)",
        ))
    }
}

impl TracerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TraceError> {
        let config: TracerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), TraceError> {
        self.extent()?;
        if !self.origin.is_finite() {
            return Err(TraceError::NonFinitePoint(self.origin));
        }
        if self.canvas[0] == 0 || self.canvas[1] == 0 {
            return Err(TraceError::InvalidExtent(format!(
                "canvas must be at least 1x1 pixels, got {}x{}",
                self.canvas[0], self.canvas[1]
            )));
        }
        Ok(())
    }

    pub fn extent(&self) -> Result<GridExtent, TraceError> {
        GridExtent::new(self.columns, self.rows)
    }

    pub fn canvas_size(&self) -> UVec2 {
        UVec2::from_array(self.canvas)
    }

    /// Build a tracer for the configured extent and tolerance.
    pub fn tracer(&self) -> Result<GridTracer, TraceError> {
        GridTracer::new(self.extent()?).with_epsilon(self.epsilon)
    }
}

pub fn load_config(yaml_path: impl AsRef<Path>) -> Result<TracerConfig, TraceError> {
    let yaml_str = std::fs::read_to_string(yaml_path.as_ref())?;
    TracerConfig::from_yaml_str(&yaml_str)
}
