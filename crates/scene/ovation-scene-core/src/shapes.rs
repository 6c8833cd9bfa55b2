//! Shape constructors. All take an explicit `Style`; there is no process-wide
//! default style state.
//!
//! Curved outlines (circle, arc, rounded corners) are emitted as dense
//! polylines; the segment counts below keep them visually smooth at stage
//! scale while staying cheap to resample.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::bbox::BBox;
use crate::drawable::{Drawable, Style};
use crate::geometry::{PathData, Polyline};

const CIRCLE_SEGMENTS: usize = 64;
const CORNER_SEGMENTS: usize = 8;

pub fn line(start: [f32; 2], end: [f32; 2], style: Style) -> Drawable {
    Drawable::polyline(Polyline::open(vec![start, end]), style)
}

pub fn polyline(points: Vec<[f32; 2]>, style: Style) -> Drawable {
    Drawable::polyline(Polyline::open(points), style)
}

/// Closed polygon through the given vertices.
pub fn polygon(points: Vec<[f32; 2]>, style: Style) -> Drawable {
    Drawable::polyline(Polyline::closed(points), style)
}

/// Axis-aligned rectangle centered on the origin.
pub fn rectangle(width: f32, height: f32, style: Style) -> Drawable {
    let hw = 0.5 * width;
    let hh = 0.5 * height;
    polygon(
        vec![[-hw, -hh], [hw, -hh], [hw, hh], [-hw, hh]],
        style,
    )
}

/// Rectangle with quarter-circle corners of the given radius.
pub fn rounded_rectangle(width: f32, height: f32, radius: f32, style: Style) -> Drawable {
    let hw = 0.5 * width;
    let hh = 0.5 * height;
    let r = radius.clamp(0.0, hw.min(hh));
    if r <= f32::EPSILON {
        return rectangle(width, height, style);
    }
    // Corner centers and the start angle of each quarter arc, counterclockwise
    // from the bottom-right.
    let corners = [
        ([hw - r, -hh + r], -FRAC_PI_2),
        ([hw - r, hh - r], 0.0),
        ([-hw + r, hh - r], FRAC_PI_2),
        ([-hw + r, -hh + r], PI),
    ];
    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for (center, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let a = start + FRAC_PI_2 * (i as f32 / CORNER_SEGMENTS as f32);
            points.push([center[0] + r * a.cos(), center[1] + r * a.sin()]);
        }
    }
    polygon(points, style)
}

/// Circle of radius `r` centered on the origin.
pub fn circle(r: f32, style: Style) -> Drawable {
    let points = (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let a = TAU * (i as f32 / CIRCLE_SEGMENTS as f32);
            [r * a.cos(), r * a.sin()]
        })
        .collect();
    polygon(points, style)
}

/// Circular arc of `sweep` radians starting at `start` (radians,
/// counterclockwise), centered on the origin.
pub fn arc(r: f32, start: f32, sweep: f32, style: Style) -> Drawable {
    let n = ((CIRCLE_SEGMENTS as f32) * (sweep.abs() / TAU)).ceil().max(2.0) as usize;
    let points = (0..=n)
        .map(|i| {
            let a = start + sweep * (i as f32 / n as f32);
            [r * a.cos(), r * a.sin()]
        })
        .collect();
    polyline(points, style)
}

/// Small filled circle used as a point marker.
pub fn dot(center: [f32; 2], style: Style) -> Drawable {
    circle(0.08, style).at(center)
}

/// Straight arrow from `start` to `end` with a triangular tip.
pub fn arrow(start: [f32; 2], end: [f32; 2], style: Style) -> Drawable {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON {
        return line(start, end, style);
    }
    let tip = (0.25_f32).min(0.5 * len);
    let ux = dx / len;
    let uy = dy / len;
    // Perpendicular half-width of the tip.
    let half = 0.5 * tip;
    let base = [end[0] - ux * tip, end[1] - uy * tip];
    let shaft = Polyline::open(vec![start, base]);
    let head = Polyline::closed(vec![
        [base[0] - uy * half, base[1] + ux * half],
        end,
        [base[0] + uy * half, base[1] - ux * half],
    ]);
    Drawable::path(
        PathData {
            subpaths: vec![shaft, head],
        },
        style,
    )
}

/// Rounded rectangle surrounding a bbox with `buff` of margin.
pub fn surrounding_rect(bbox: &BBox, buff: f32, corner_radius: f32, style: Style) -> Drawable {
    let grown = bbox.grown(buff);
    let c = grown.center();
    rounded_rectangle(grown.width(), grown.height(), corner_radius, style).at(c)
}
