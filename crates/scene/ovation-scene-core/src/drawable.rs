//! Drawable payloads: geometry + style + local transform.
//!
//! Parent/child links and sibling order live in the store arena, not here;
//! the payload is what reactive redraw replaces in place.

use ovation_api_core::Transform2D;
use serde::{Deserialize, Serialize};

use crate::geometry::{Geometry, PathData, Polyline};

/// Stroke/fill attributes. Plain `Copy` data; construction takes styles
/// explicitly rather than consulting process-wide defaults.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub stroke: [f32; 4],
    pub fill: [f32; 4],
    pub stroke_width: f32,
    /// Master opacity multiplying both stroke and fill alpha.
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: [1.0, 1.0, 1.0, 1.0],
            fill: [0.0, 0.0, 0.0, 0.0],
            stroke_width: 4.0,
            opacity: 1.0,
        }
    }
}

impl Style {
    pub fn stroked(stroke: [f32; 4]) -> Self {
        Self {
            stroke,
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: [f32; 4]) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub name: Option<String>,
    pub geometry: Geometry,
    pub style: Style,
    pub transform: Transform2D,
}

impl Default for Drawable {
    fn default() -> Self {
        Self {
            name: None,
            geometry: Geometry::Empty,
            style: Style::default(),
            transform: Transform2D::default(),
        }
    }
}

impl Drawable {
    /// Geometry-less group node.
    pub fn group() -> Self {
        Self::default()
    }

    pub fn path(path: PathData, style: Style) -> Self {
        Self {
            geometry: Geometry::Path(path),
            style,
            ..Self::default()
        }
    }

    pub fn polyline(polyline: Polyline, style: Style) -> Self {
        Self::path(PathData::single(polyline), style)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn at(mut self, translation: [f32; 2]) -> Self {
        self.transform.translation = translation;
        self
    }
}
