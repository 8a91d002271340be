//! Line and triangle drawing
//! Everything is built from `interpolate_*` and `Canvas::put_pixel`.

use std::ops::RangeInclusive;

use super::canvas::Canvas;
use super::interpolate::{interpolate_f32, interpolate_f32_at, interpolate_i32};
use super::types::{Color, Point, Vertex};

/// Sort three items by ascending y with the swaps 1/0, 2/0, 2/1
fn sort_by_y<T: Copy>(mut v0: T, mut v1: T, mut v2: T, y: impl Fn(&T) -> i32) -> (T, T, T) {
    if y(&v1) < y(&v0) {
        std::mem::swap(&mut v0, &mut v1);
    }
    if y(&v2) < y(&v0) {
        std::mem::swap(&mut v0, &mut v2);
    }
    if y(&v2) < y(&v1) {
        std::mem::swap(&mut v1, &mut v2);
    }
    (v0, v1, v2)
}

/// Join the short edges v0→v1 and v1→v2 into one sequence as long as v0→v2.
/// The last value of the first edge repeats the first value of the second.
fn join_short_edges<T>(mut first: Vec<T>, second: Vec<T>) -> Vec<T> {
    first.pop();
    first.extend(second);
    first
}

/// Which of the two full-height edges is on the left, decided once at the
/// middle scanline. The edges share both endpoints and cannot cross.
fn long_edge_is_left(long: &[i32], joined: &[i32]) -> bool {
    let m = long.len() / 2;
    match (long.get(m), joined.get(m)) {
        (Some(l), Some(j)) => l < j,
        _ => false,
    }
}

/// `lo..=hi` cut down to `bounds`; empty when they do not overlap
fn clamp_span(lo: i32, hi: i32, bounds: (i32, i32)) -> RangeInclusive<i32> {
    lo.max(bounds.0)..=hi.min(bounds.1)
}

/// Value of a per-step sequence that starts at `start`
fn step_value<T: Copy>(values: &[T], start: i32, at: i32) -> Option<T> {
    values.get((at as i64 - start as i64) as usize).copied()
}

impl Canvas {
    /// Draw a segment, stepping one pixel at a time along the longer axis
    pub fn draw_line(&mut self, p0: Point, p1: Point, color: Color) {
        let (mut p0, mut p1) = (p0, p1);
        let dx = (p1.x as i64 - p0.x as i64).abs();
        let dy = (p1.y as i64 - p0.y as i64).abs();

        if dx > dy {
            // More horizontal
            if p0.x > p1.x {
                std::mem::swap(&mut p0, &mut p1);
            }
            let ys = interpolate_i32(p0.x, p0.y, p1.x, p1.y);
            for x in clamp_span(p0.x, p1.x, self.x_bounds()) {
                if let Some(y) = step_value(&ys, p0.x, x) {
                    self.put_pixel(x, y, color);
                }
            }
        } else {
            // More vertical (or a single point)
            if p0.y > p1.y {
                std::mem::swap(&mut p0, &mut p1);
            }
            let xs = interpolate_i32(p0.y, p0.x, p1.y, p1.x);
            for y in clamp_span(p0.y, p1.y, self.y_bounds()) {
                if let Some(x) = step_value(&xs, p0.y, y) {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Outline only
    pub fn draw_wireframe_triangle(&mut self, p0: Point, p1: Point, p2: Point, color: Color) {
        self.draw_line(p0, p1, color);
        self.draw_line(p1, p2, color);
        self.draw_line(p2, p0, color);
    }

    /// Single-color fill
    pub fn draw_filled_triangle(&mut self, p0: Point, p1: Point, p2: Point, color: Color) {
        let (p0, p1, p2) = sort_by_y(p0, p1, p2, |p| p.y);

        let x01 = interpolate_i32(p0.y, p0.x, p1.y, p1.x);
        let x12 = interpolate_i32(p1.y, p1.x, p2.y, p2.x);
        let x02 = interpolate_i32(p0.y, p0.x, p2.y, p2.x);
        let x012 = join_short_edges(x01, x12);

        let (x_left, x_right) = if long_edge_is_left(&x02, &x012) {
            (x02, x012)
        } else {
            (x012, x02)
        };

        let x_bounds = self.x_bounds();
        for y in clamp_span(p0.y, p2.y, self.y_bounds()) {
            let row = (step_value(&x_left, p0.y, y), step_value(&x_right, p0.y, y));
            let (Some(xl), Some(xr)) = row else {
                break;
            };
            for x in clamp_span(xl, xr, x_bounds) {
                self.put_pixel(x, y, color);
            }
        }
    }

    /// Fill with `color` scaled per pixel by the interpolated vertex `h`
    pub fn draw_shaded_triangle(&mut self, v0: Vertex, v1: Vertex, v2: Vertex, color: Color) {
        let (v0, v1, v2) = sort_by_y(v0, v1, v2, |v| v.y);

        let x01 = interpolate_i32(v0.y, v0.x, v1.y, v1.x);
        let h01 = interpolate_f32(v0.y, v0.h, v1.y, v1.h);
        let x12 = interpolate_i32(v1.y, v1.x, v2.y, v2.x);
        let h12 = interpolate_f32(v1.y, v1.h, v2.y, v2.h);
        let x02 = interpolate_i32(v0.y, v0.x, v2.y, v2.x);
        let h02 = interpolate_f32(v0.y, v0.h, v2.y, v2.h);

        let x012 = join_short_edges(x01, x12);
        let h012 = join_short_edges(h01, h12);

        let ((x_left, h_left), (x_right, h_right)) = if long_edge_is_left(&x02, &x012) {
            ((x02, h02), (x012, h012))
        } else {
            ((x012, h012), (x02, h02))
        };

        // Only the on-canvas part of each span is evaluated; h at a pixel is
        // the same value the full span sequence would hold there
        let x_bounds = self.x_bounds();
        for y in clamp_span(v0.y, v2.y, self.y_bounds()) {
            let row = (
                step_value(&x_left, v0.y, y),
                step_value(&h_left, v0.y, y),
                step_value(&x_right, v0.y, y),
                step_value(&h_right, v0.y, y),
            );
            let (Some(xl), Some(hl), Some(xr), Some(hr)) = row else {
                break;
            };
            for x in clamp_span(xl, xr, x_bounds) {
                let h = interpolate_f32_at(xl, hl, xr, hr, x);
                self.put_pixel(x, y, color.scale(h));
            }
        }
    }
}
