//! Path geometry and the arc-length toolkit.
//!
//! Model:
//! - A `Polyline` is an ordered run of points, optionally closed.
//! - `PathData` is an ordered list of polyline subpaths.
//! - `Geometry` is either `Empty` (a pure group node) or `Path(PathData)`.
//!
//! The toolkit provides arc length, uniform arc-length resampling (direction-
//! and endpoint-preserving), and prefix extraction used by reveal animations.

use ovation_api_core::lerp_vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<[f32; 2]>,
    pub closed: bool,
}

impl Polyline {
    pub fn open(points: Vec<[f32; 2]>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<[f32; 2]>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Sample `n + 1` points of `f` over `[x0, x1]`, e.g. for function graphs.
    pub fn sampled(x0: f32, x1: f32, n: usize, mut f: impl FnMut(f32) -> f32) -> Self {
        let n = n.max(1);
        let mut points = Vec::with_capacity(n + 1);
        for i in 0..=n {
            let x = x0 + (x1 - x0) * (i as f32 / n as f32);
            points.push([x, f(x)]);
        }
        Self::open(points)
    }

    /// Total polygonal arc length, including the closing segment when closed.
    pub fn arc_length(&self) -> f32 {
        let mut len = 0.0;
        for seg in self.points.windows(2) {
            len += dist(seg[0], seg[1]);
        }
        if self.closed && self.points.len() > 1 {
            len += dist(*self.points.last().unwrap(), self.points[0]);
        }
        len
    }

    /// Resample to exactly `n` points, uniformly spaced by arc length.
    ///
    /// Open polylines keep their first and last points exactly; closed ones
    /// distribute `n` samples over the closed length starting at point 0.
    /// Direction is always preserved. Degenerate inputs (fewer than two
    /// distinct points) repeat the available point.
    pub fn resampled(&self, n: usize) -> Polyline {
        let n = n.max(1);
        if self.points.is_empty() {
            return Polyline {
                points: Vec::new(),
                closed: self.closed,
            };
        }
        let total = self.arc_length();
        if self.points.len() == 1 || total <= f32::EPSILON {
            return Polyline {
                points: vec![self.points[0]; n],
                closed: self.closed,
            };
        }

        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let target = if self.closed {
                total * (i as f32) / (n as f32)
            } else {
                total * (i as f32) / ((n - 1) as f32)
            };
            out.push(self.point_at_length(target, total));
        }
        if !self.closed {
            // Pin the endpoints against accumulated float error.
            out[0] = self.points[0];
            out[n - 1] = *self.points.last().unwrap();
        }
        Polyline {
            points: out,
            closed: self.closed,
        }
    }

    /// Open prefix of this polyline covering the first `keep` of arc length.
    pub fn prefix(&self, keep: f32) -> Polyline {
        let total = self.arc_length();
        if keep >= total || self.points.len() < 2 {
            return self.clone();
        }
        let mut out = vec![self.points[0]];
        let mut walked = 0.0;
        for (a, b) in self.segments() {
            let seg = dist(a, b);
            if seg <= f32::EPSILON {
                continue;
            }
            if walked + seg >= keep {
                let t = (keep - walked) / seg;
                out.push(lerp_vec2(a, b, t));
                break;
            }
            walked += seg;
            out.push(b);
        }
        Polyline::open(out)
    }

    /// Point at the given arc length along the polyline (clamped).
    fn point_at_length(&self, target: f32, total: f32) -> [f32; 2] {
        let target = target.clamp(0.0, total);
        let mut walked = 0.0;
        for (a, b) in self.segments() {
            let seg = dist(a, b);
            if seg <= f32::EPSILON {
                continue;
            }
            if walked + seg >= target {
                let t = (target - walked) / seg;
                return lerp_vec2(a, b, t);
            }
            walked += seg;
        }
        *self.points.last().unwrap()
    }

    /// Iterate segments in order, including the closing one when closed.
    fn segments(&self) -> impl Iterator<Item = ([f32; 2], [f32; 2])> + '_ {
        let wrap = if self.closed && self.points.len() > 1 {
            Some((*self.points.last().unwrap(), self.points[0]))
        } else {
            None
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(wrap.into_iter())
    }
}

/// Ordered list of subpaths; subpath order is reveal order.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PathData {
    pub subpaths: Vec<Polyline>,
}

impl PathData {
    pub fn single(polyline: Polyline) -> Self {
        Self {
            subpaths: vec![polyline],
        }
    }

    pub fn arc_length(&self) -> f32 {
        self.subpaths.iter().map(Polyline::arc_length).sum()
    }

    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(|s| s.points.len()).sum()
    }

    /// Prefix of this path covering `alpha` of the total arc length.
    ///
    /// Earlier subpaths are revealed in full before later ones begin; the
    /// in-progress subpath is truncated as an open polyline so the reveal is
    /// continuous rather than stepping subpath by subpath.
    pub fn partial(&self, alpha: f32) -> PathData {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha >= 1.0 {
            return self.clone();
        }
        let total = self.arc_length();
        if total <= f32::EPSILON {
            // Zero-length content has nothing to reveal gradually.
            return if alpha > 0.0 {
                self.clone()
            } else {
                PathData::default()
            };
        }
        let mut keep = alpha * total;
        let mut out = Vec::new();
        for sub in &self.subpaths {
            let len = sub.arc_length();
            if keep <= 0.0 {
                break;
            }
            if len <= keep {
                out.push(sub.clone());
                keep -= len;
            } else {
                out.push(sub.prefix(keep));
                break;
            }
        }
        PathData { subpaths: out }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum Geometry {
    /// Pure group node with no geometry of its own.
    #[default]
    Empty,
    Path(PathData),
}

impl Geometry {
    pub fn path(&self) -> Option<&PathData> {
        match self {
            Geometry::Empty => None,
            Geometry::Path(p) => Some(p),
        }
    }

    pub fn has_points(&self) -> bool {
        self.path().map(|p| p.point_count() > 0).unwrap_or(false)
    }
}

#[inline]
fn dist(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resample_preserves_endpoints_direction_and_length() {
        let line = Polyline::open(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 2.0], [4.0, 2.0]]);
        let total = line.arc_length();
        let r = line.resampled(12);
        assert_eq!(r.points.len(), 12);
        assert_eq!(r.points[0], [0.0, 0.0]);
        assert_eq!(r.points[11], [4.0, 2.0]);
        // Uniform spacing over a polygonal path keeps the total length.
        assert!((r.arc_length() - total).abs() < 1e-4);
        // First resampled step points in the original initial direction.
        assert!(r.points[1][0] > 0.0);
        assert_eq!(r.points[1][1], 0.0);
    }

    #[test]
    fn resample_closed_distributes_over_closed_length() {
        let square = Polyline::closed(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let r = square.resampled(8);
        assert_eq!(r.points.len(), 8);
        assert!(r.closed);
        assert_eq!(r.points[0], [0.0, 0.0]);
        // Perimeter 4, spacing 0.5: second sample is the midpoint of the first side.
        assert!((r.points[1][0] - 0.5).abs() < 1e-5);
        assert!(r.points[1][1].abs() < 1e-5);
    }

    #[test]
    fn resample_degenerate_repeats_point() {
        let dot = Polyline::open(vec![[2.0, 3.0]]);
        let r = dot.resampled(5);
        assert_eq!(r.points, vec![[2.0, 3.0]; 5]);
    }

    #[test]
    fn partial_is_continuous_across_subpaths() {
        let path = PathData {
            subpaths: vec![
                Polyline::open(vec![[0.0, 0.0], [1.0, 0.0]]),
                Polyline::open(vec![[0.0, 1.0], [3.0, 1.0]]),
            ],
        };
        // Total length 4; alpha 0.5 keeps the first subpath plus 1.0 of the second.
        let half = path.partial(0.5);
        assert_eq!(half.subpaths.len(), 2);
        assert_eq!(half.subpaths[0].points.len(), 2);
        let tail = half.subpaths[1].points.last().unwrap();
        assert!((tail[0] - 1.0).abs() < 1e-5);
        assert_eq!(path.partial(1.0), path);
        assert_eq!(path.partial(0.0).subpaths.len(), 0);
    }
}
