//! Raster preview of a grid and a traced ray.
//!
//! Canvas pixels map onto grid coordinates by plain scaling: pixel `(0, 0)` is
//! the grid corner `(0, 0)` and `y` grows downwards in both spaces.

use glam::{UVec2, Vec2};
use image::{Rgba, RgbaImage};

use crate::raycast::Trace;
use crate::types::{GridExtent, Vector2};

pub const BACKGROUND: Rgba<u8> = Rgba([0x18, 0x18, 0x18, 0xff]);
pub const GRID_LINE: Rgba<u8> = Rgba([0x40, 0x40, 0x40, 0xff]);
pub const RAY: Rgba<u8> = Rgba([0xff, 0xc0, 0xcb, 0xff]);

/// Stroke width of grid lines and ray segments, in cells.
pub const LINE_WIDTH: f32 = 0.03;
/// Radius of the markers drawn on the origin and every crossing, in cells.
pub const MARKER_RADIUS: f32 = 0.2;

/// Map a canvas pixel position into grid coordinates.
pub fn pixel_to_grid(pixel: Vector2, canvas: UVec2, extent: &GridExtent) -> Vector2 {
    pixel
        .div(Vector2::new(canvas.x as f64, canvas.y as f64))
        .mul(extent.as_vector())
}

/// Map a grid coordinate onto the canvas.
pub fn grid_to_pixel(point: Vector2, canvas: UVec2, extent: &GridExtent) -> Vector2 {
    point
        .div(extent.as_vector())
        .mul(Vector2::new(canvas.x as f64, canvas.y as f64))
}

/// Draw the grid, the ray origin and, if present, the trace on a fresh canvas.
///
/// Markers and strokes are sized against the smaller of the two cell
/// dimensions so they stay round on non-square cells.
pub fn render_scene(
    extent: &GridExtent,
    origin: Vector2,
    trace: Option<&Trace>,
    canvas: UVec2,
) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(canvas.x, canvas.y, BACKGROUND);

    let cell_px = canvas.as_vec2() / extent.size().as_vec2();
    let unit = cell_px.x.min(cell_px.y);
    let half_width = (0.5 * LINE_WIDTH * unit).max(0.75);
    let radius = MARKER_RADIUS * unit;
    let to_px = |p: Vector2| {
        let px = grid_to_pixel(p, canvas, extent);
        Vec2::new(px.x as f32, px.y as f32)
    };

    for x in 0..=extent.columns() {
        let px = x as f32 * cell_px.x;
        stroke_segment(
            &mut img,
            Vec2::new(px, 0.0),
            Vec2::new(px, canvas.y as f32),
            half_width,
            GRID_LINE,
        );
    }
    for y in 0..=extent.rows() {
        let py = y as f32 * cell_px.y;
        stroke_segment(
            &mut img,
            Vec2::new(0.0, py),
            Vec2::new(canvas.x as f32, py),
            half_width,
            GRID_LINE,
        );
    }

    fill_disc(&mut img, to_px(origin), radius, RAY);

    if let Some(trace) = trace {
        for (from, to) in trace.segments() {
            stroke_segment(&mut img, to_px(from), to_px(to), half_width, RAY);
        }
        for point in trace.points() {
            fill_disc(&mut img, to_px(point), radius, RAY);
        }
    }

    img
}

/// Pixel range `[lo, hi)` covering `[min, max]`, clamped to `0..len`.
fn pixel_span(min: f32, max: f32, len: u32) -> (u32, u32) {
    let lo = min.floor().max(0.0).min(len as f32) as u32;
    let hi = (max.ceil() + 1.0).max(0.0).min(len as f32) as u32;
    (lo, hi)
}

fn fill_disc(img: &mut RgbaImage, center: Vec2, radius: f32, color: Rgba<u8>) {
    let (x0, x1) = pixel_span(center.x - radius, center.x + radius, img.width());
    let (y0, y1) = pixel_span(center.y - radius, center.y + radius, img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance_squared(center) <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn stroke_segment(img: &mut RgbaImage, a: Vec2, b: Vec2, half_width: f32, color: Rgba<u8>) {
    let min = a.min(b) - Vec2::splat(half_width);
    let max = a.max(b) + Vec2::splat(half_width);
    let (x0, x1) = pixel_span(min.x, max.x, img.width());
    let (y0, y1) = pixel_span(min.y, max.y, img.height());

    let ab = b - a;
    let len_sq = ab.length_squared();
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let t = if len_sq > 0.0 {
                ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            if p.distance(a + ab * t) <= half_width {
                img.put_pixel(x, y, color);
            }
        }
    }
}
