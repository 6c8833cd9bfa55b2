//! Rate functions mapping elapsed fraction to progress fraction.
//!
//! The default is the quintic smoothstep `6t^5 - 15t^4 + 10t^3`: zero first
//! and second derivative at both ends, which is what gives the ease-in-ease-
//! out feel. `Linear` is opt-in per animation or per batch; the quadratic
//! pair covers asymmetric entrances/exits.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Quintic smoothstep (ease-in-ease-out).
    #[default]
    Smooth,
    Linear,
    /// Quadratic ease-in.
    EaseIn,
    /// Quadratic ease-out.
    EaseOut,
}

impl Easing {
    /// Map `t` in [0,1] to progress in [0,1]. Inputs are clamped; both
    /// endpoints are exact for every curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Smooth => t * t * t * (t * (6.0 * t - 15.0) + 10.0),
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for e in [Easing::Smooth, Easing::Linear, Easing::EaseIn, Easing::EaseOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
            assert_eq!(e.apply(-0.5), 0.0);
            assert_eq!(e.apply(1.5), 1.0);
        }
    }

    #[test]
    fn smooth_is_monotonic_and_symmetric() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let v = Easing::Smooth.apply(t);
            assert!(v >= prev, "not monotonic at t={t}");
            prev = v;
        }
        assert!((Easing::Smooth.apply(0.5) - 0.5).abs() < 1e-6);
        let a = Easing::Smooth.apply(0.25);
        let b = Easing::Smooth.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-5);
    }
}
