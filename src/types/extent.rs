//! Grid bounds in cell units.

use glam::{IVec2, UVec2};

use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, TraceError, Vector2};

/// Traversable area `[0, columns) x [0, rows)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtent {
    columns: u32,
    rows: u32,
}

impl Default for GridExtent {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl GridExtent {
    pub fn new(columns: u32, rows: u32) -> Result<Self, TraceError> {
        if columns == 0 || rows == 0 {
            return Err(TraceError::InvalidExtent(format!(
                "grid must have at least one cell, got {columns}x{rows}"
            )));
        }
        Ok(Self { columns, rows })
    }

    pub fn square(size: u32) -> Result<Self, TraceError> {
        Self::new(size, size)
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.columns, self.rows)
    }

    /// The extent as a vector, for scaling between grid and canvas space.
    pub fn as_vector(&self) -> Vector2 {
        Vector2::new(self.columns as f64, self.rows as f64)
    }

    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        // Negative indices wrap to large u32 values and fail the comparison.
        (cell.x as u32) < self.columns && (cell.y as u32) < self.rows
    }

    /// Upper bound on ray steps before a trace must have left the grid.
    pub fn max_steps(&self) -> usize {
        self.columns as usize + self.rows as usize + 1
    }
}
