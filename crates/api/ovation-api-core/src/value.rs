//! Value: runtime instances flowing through the frame stream.
//! All numeric payloads use f32.

use serde::{Deserialize, Serialize};

/// Lightweight kind enum for pattern matching and quick dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Vec2,
    ColorRgba,
    Points,
    Transform2D,
}

/// Planar transform in TRS decomposition. The decomposition is the
/// interpolation parameterization; the affine matrix is derived from it for
/// composition and point mapping, never the other way around.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transform2D {
    pub translation: [f32; 2],
    /// Rotation angle in radians, counterclockwise.
    pub rotation: f32,
    pub scale: [f32; 2],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: [0.0, 0.0],
            rotation: 0.0,
            scale: [1.0, 1.0],
        }
    }
}

impl Transform2D {
    pub fn from_translation(translation: [f32; 2]) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Scalar float
    Float(f32),

    /// 2D vector
    Vec2([f32; 2]),

    /// RGBA color (linear by convention)
    ColorRgba([f32; 4]),

    /// Ordered point sequence (a single open polyline's worth of points)
    Points(Vec<[f32; 2]>),

    /// Planar TRS transform
    Transform2D(Transform2D),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::ColorRgba(_) => ValueKind::ColorRgba,
            Value::Points(_) => ValueKind::Points,
            Value::Transform2D(_) => ValueKind::Transform2D,
        }
    }

    /// Convenience constructors
    pub fn f(v: f32) -> Self {
        Value::Float(v)
    }

    pub fn vec2(x: f32, y: f32) -> Self {
        Value::Vec2([x, y])
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Value::ColorRgba([r, g, b, a])
    }

    /// Extract a scalar, or `None` for any other kind.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}
