//! Affine derivation for `Transform2D`.
//!
//! The TRS decomposition is the canonical representation; the `glam::Affine2`
//! form is derived on demand for composition and point mapping. Composition
//! of two TRS transforms is performed on the affine matrices (the composite
//! may contain shear and is deliberately never decomposed back).

use glam::{Affine2, Vec2};
use ovation_api_core::Transform2D;

/// Derive the affine matrix of a TRS transform.
#[inline]
pub fn affine_of(t: &Transform2D) -> Affine2 {
    Affine2::from_scale_angle_translation(
        Vec2::new(t.scale[0], t.scale[1]),
        t.rotation,
        Vec2::new(t.translation[0], t.translation[1]),
    )
}

/// Map a point through an affine.
#[inline]
pub fn apply(affine: &Affine2, p: [f32; 2]) -> [f32; 2] {
    let v = affine.transform_point2(Vec2::new(p[0], p[1]));
    [v.x, v.y]
}

/// Flatten an affine into column-major `[m00, m01, m10, m11, tx, ty]` for
/// serialization in snapshots.
#[inline]
pub fn to_cols(affine: &Affine2) -> [f32; 6] {
    let m = affine.matrix2;
    let t = affine.translation;
    [m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y, t.x, t.y]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trs_order_is_scale_then_rotate_then_translate() {
        let t = Transform2D {
            translation: [10.0, 0.0],
            rotation: std::f32::consts::FRAC_PI_2,
            scale: [2.0, 2.0],
        };
        // (1, 0) -> scale (2, 0) -> rotate (0, 2) -> translate (10, 2)
        let p = apply(&affine_of(&t), [1.0, 0.0]);
        assert!((p[0] - 10.0).abs() < 1e-5);
        assert!((p[1] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn composition_is_associative() {
        let a = affine_of(&Transform2D {
            translation: [1.0, 2.0],
            rotation: 0.3,
            scale: [2.0, 0.5],
        });
        let b = affine_of(&Transform2D {
            translation: [-3.0, 0.25],
            rotation: -1.1,
            scale: [1.5, 1.5],
        });
        let c = affine_of(&Transform2D {
            translation: [0.0, -1.0],
            rotation: 2.0,
            scale: [0.75, 3.0],
        });
        let p = [0.7, -0.2];
        let left = apply(&((a * b) * c), p);
        let right = apply(&(a * (b * c)), p);
        assert!((left[0] - right[0]).abs() < 1e-4);
        assert!((left[1] - right[1]).abs() < 1e-4);
    }
}
