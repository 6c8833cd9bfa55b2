//! Axis-aligned bounding boxes with edge/corner anchor points.
//!
//! Layout operators and edge-anchored animations address boxes by `Edge` and
//! `Corner` rather than raw coordinates, so placement stays bbox-relative and
//! resolution independent.

use serde::{Deserialize, Serialize};

/// Stage-relative direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Up,
    Down,
}

impl Edge {
    /// Unit vector pointing out of the given edge.
    #[inline]
    pub fn direction(&self) -> [f32; 2] {
        match self {
            Edge::Left => [-1.0, 0.0],
            Edge::Right => [1.0, 0.0],
            Edge::Up => [0.0, 1.0],
            Edge::Down => [0.0, -1.0],
        }
    }

    #[inline]
    pub fn opposite(&self) -> Edge {
        match self {
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
            Edge::Up => Edge::Down,
            Edge::Down => Edge::Up,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Corner {
    #[inline]
    pub fn direction(&self) -> [f32; 2] {
        match self {
            Corner::UpLeft => [-1.0, 1.0],
            Corner::UpRight => [1.0, 1.0],
            Corner::DownLeft => [-1.0, -1.0],
            Corner::DownRight => [1.0, -1.0],
        }
    }
}

/// Axis-aligned box; `min`/`max` are inclusive extremes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl BBox {
    pub fn of_point(p: [f32; 2]) -> Self {
        Self { min: p, max: p }
    }

    pub fn of_points(points: &[[f32; 2]]) -> Option<Self> {
        let mut it = points.iter();
        let first = *it.next()?;
        let mut bb = BBox::of_point(first);
        for p in it {
            bb.include(*p);
        }
        Some(bb)
    }

    pub fn include(&mut self, p: [f32; 2]) {
        self.min[0] = self.min[0].min(p[0]);
        self.min[1] = self.min[1].min(p[1]);
        self.max[0] = self.max[0].max(p[0]);
        self.max[1] = self.max[1].max(p[1]);
    }

    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            min: [self.min[0].min(other.min[0]), self.min[1].min(other.min[1])],
            max: [self.max[0].max(other.max[0]), self.max[1].max(other.max[1])],
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    #[inline]
    pub fn center(&self) -> [f32; 2] {
        [
            0.5 * (self.min[0] + self.max[0]),
            0.5 * (self.min[1] + self.max[1]),
        ]
    }

    /// Midpoint of the given edge.
    pub fn edge_point(&self, edge: Edge) -> [f32; 2] {
        let c = self.center();
        match edge {
            Edge::Left => [self.min[0], c[1]],
            Edge::Right => [self.max[0], c[1]],
            Edge::Up => [c[0], self.max[1]],
            Edge::Down => [c[0], self.min[1]],
        }
    }

    pub fn corner_point(&self, corner: Corner) -> [f32; 2] {
        match corner {
            Corner::UpLeft => [self.min[0], self.max[1]],
            Corner::UpRight => [self.max[0], self.max[1]],
            Corner::DownLeft => [self.min[0], self.min[1]],
            Corner::DownRight => [self.max[0], self.min[1]],
        }
    }

    /// Box grown by `buff` on all sides.
    pub fn grown(&self, buff: f32) -> BBox {
        BBox {
            min: [self.min[0] - buff, self.min[1] - buff],
            max: [self.max[0] + buff, self.max[1] + buff],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        let bb = BBox {
            min: [-1.0, -2.0],
            max: [3.0, 4.0],
        };
        assert_eq!(bb.center(), [1.0, 1.0]);
        assert_eq!(bb.edge_point(Edge::Left), [-1.0, 1.0]);
        assert_eq!(bb.edge_point(Edge::Up), [1.0, 4.0]);
        assert_eq!(bb.corner_point(Corner::DownRight), [3.0, -2.0]);
        assert_eq!(bb.width(), 4.0);
        assert_eq!(bb.height(), 6.0);
    }
}
