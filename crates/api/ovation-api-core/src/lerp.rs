//! Interpolation helpers:
//! - lerp_value (kind-specific component-wise blend)
//! - Transform2D blends in TRS space: translation/scale component-wise,
//!   rotation as an angle (never matrix-entry lerp)
//! - Points blends pairwise and requires equal cardinality; callers resample
//!   beforehand (the scene crate owns resampling)

use crate::value::{Transform2D, Value};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_rgba(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ]
}

/// Blend two transforms in their TRS parameterization.
#[inline]
pub fn lerp_transform(a: &Transform2D, b: &Transform2D, t: f32) -> Transform2D {
    Transform2D {
        translation: lerp_vec2(a.translation, b.translation, t),
        rotation: lerp_f32(a.rotation, b.rotation, t),
        scale: lerp_vec2(a.scale, b.scale, t),
    }
}

/// Linear interpolation across Value kinds.
///
/// `Points` requires equal cardinality on both sides; mismatched lengths (or
/// mismatched kinds) fall back to the left operand, since resampling policy
/// belongs to the caller.
pub fn lerp_value(a: &Value, b: &Value, t: f32) -> Value {
    match (a, b) {
        (Value::Float(va), Value::Float(vb)) => Value::Float(lerp_f32(*va, *vb, t)),
        (Value::Vec2(va), Value::Vec2(vb)) => Value::Vec2(lerp_vec2(*va, *vb, t)),
        (Value::ColorRgba(ca), Value::ColorRgba(cb)) => Value::ColorRgba(lerp_rgba(*ca, *cb, t)),
        (Value::Points(pa), Value::Points(pb)) if pa.len() == pb.len() => Value::Points(
            pa.iter()
                .zip(pb.iter())
                .map(|(p, q)| lerp_vec2(*p, *q, t))
                .collect(),
        ),
        (Value::Transform2D(ta), Value::Transform2D(tb)) => {
            Value::Transform2D(lerp_transform(ta, tb, t))
        }
        _ => a.clone(),
    }
}
