//! Bounding-box relative layout operators.
//!
//! Every operator computes a target translation from bbox relationships, so
//! placement is resolution independent and composes with prior transforms.
//! The `Frame` defines the stage rectangle used by edge/corner placement.

use glam::Vec2;
use ovation_api_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::bbox::{BBox, Corner, Edge};
use crate::error::SceneError;
use crate::store::SceneStore;
use crate::transform::apply;

/// Default gap between a drawable and its layout reference.
pub const DEFAULT_BUFF: f32 = 0.5;

/// Stage rectangle, centered on the origin.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
}

impl Default for Frame {
    /// 8 units tall at 16:9.
    fn default() -> Self {
        Self {
            width: 8.0 * 16.0 / 9.0,
            height: 8.0,
        }
    }
}

impl Frame {
    pub fn bbox(&self) -> BBox {
        BBox {
            min: [-0.5 * self.width, -0.5 * self.height],
            max: [0.5 * self.width, 0.5 * self.height],
        }
    }
}

impl SceneStore {
    /// Translate a subtree by a world-space delta.
    pub fn shift(&mut self, id: NodeId, delta: [f32; 2]) -> Result<(), SceneError> {
        let parent_inv = self.parent_world_transform(id)?.inverse();
        let local = parent_inv.transform_vector2(Vec2::new(delta[0], delta[1]));
        let t = &mut self.payload_mut(id)?.transform.translation;
        t[0] += local.x;
        t[1] += local.y;
        Ok(())
    }

    /// Move a subtree so its bbox center lands on `point` (world space).
    pub fn move_to(&mut self, id: NodeId, point: [f32; 2]) -> Result<(), SceneError> {
        let c = self.layout_bbox(id)?.center();
        self.shift(id, [point[0] - c[0], point[1] - c[1]])
    }

    /// Center the subtree on the stage origin.
    pub fn center(&mut self, id: NodeId) -> Result<(), SceneError> {
        self.move_to(id, [0.0, 0.0])
    }

    /// Match `other`'s bbox coordinate along the axis of `edge`; the other
    /// axis is left untouched.
    pub fn align_to(&mut self, id: NodeId, other: NodeId, edge: Edge) -> Result<(), SceneError> {
        let own = self.layout_bbox(id)?.edge_point(edge);
        let target = self.layout_bbox(other)?.edge_point(edge);
        let delta = match edge {
            Edge::Left | Edge::Right => [target[0] - own[0], 0.0],
            Edge::Up | Edge::Down => [0.0, target[1] - own[1]],
        };
        self.shift(id, delta)
    }

    /// Place a subtree adjacent to `other` on its `edge` side with gap
    /// `buff`, centered on the perpendicular axis.
    pub fn next_to(
        &mut self,
        id: NodeId,
        other: NodeId,
        edge: Edge,
        buff: f32,
    ) -> Result<(), SceneError> {
        let dir = edge.direction();
        let anchor = self.layout_bbox(other)?.edge_point(edge);
        let own = self.layout_bbox(id)?.edge_point(edge.opposite());
        let target = [anchor[0] + dir[0] * buff, anchor[1] + dir[1] * buff];
        self.shift(id, [target[0] - own[0], target[1] - own[1]])
    }

    /// Lay out siblings in sequence along `edge`, each `buff` from the
    /// previous. The first node stays where it is.
    pub fn arrange(&mut self, ids: &[NodeId], edge: Edge, buff: f32) -> Result<(), SceneError> {
        for pair in ids.windows(2) {
            self.next_to(pair[1], pair[0], edge, buff)?;
        }
        Ok(())
    }

    /// Move a subtree so its bbox sits `buff` inside the frame's edge; the
    /// perpendicular position is unchanged.
    pub fn to_edge(
        &mut self,
        id: NodeId,
        edge: Edge,
        buff: f32,
        frame: &Frame,
    ) -> Result<(), SceneError> {
        let own = self.layout_bbox(id)?.edge_point(edge);
        let dir = edge.direction();
        let stage = frame.bbox().edge_point(edge);
        let target = [stage[0] - dir[0] * buff, stage[1] - dir[1] * buff];
        let delta = match edge {
            Edge::Left | Edge::Right => [target[0] - own[0], 0.0],
            Edge::Up | Edge::Down => [0.0, target[1] - own[1]],
        };
        self.shift(id, delta)
    }

    /// Move a subtree so its bbox corner sits `buff` inside the frame corner.
    pub fn to_corner(
        &mut self,
        id: NodeId,
        corner: Corner,
        buff: f32,
        frame: &Frame,
    ) -> Result<(), SceneError> {
        let own = self.layout_bbox(id)?.corner_point(corner);
        let dir = corner.direction();
        let stage = frame.bbox().corner_point(corner);
        let target = [stage[0] - dir[0] * buff, stage[1] - dir[1] * buff];
        self.shift(id, [target[0] - own[0], target[1] - own[1]])
    }

    /// Scale a subtree about its own bbox center.
    pub fn scale_by(&mut self, id: NodeId, factor: f32) -> Result<(), SceneError> {
        let before = self.layout_bbox(id)?.center();
        {
            let s = &mut self.payload_mut(id)?.transform.scale;
            s[0] *= factor;
            s[1] *= factor;
        }
        let after = self.layout_bbox(id)?.center();
        self.shift(id, [before[0] - after[0], before[1] - after[1]])
    }

    /// Rotate a subtree about its own bbox center.
    pub fn rotate_by(&mut self, id: NodeId, angle: f32) -> Result<(), SceneError> {
        let before = self.layout_bbox(id)?.center();
        self.payload_mut(id)?.transform.rotation += angle;
        let after = self.layout_bbox(id)?.center();
        self.shift(id, [before[0] - after[0], before[1] - after[1]])
    }

    /// Bbox used by layout: the subtree's geometry box, or the node's world
    /// origin when the subtree carries no points.
    pub fn layout_bbox(&self, id: NodeId) -> Result<BBox, SceneError> {
        match self.bbox(id)? {
            Some(bb) => Ok(bb),
            None => {
                let origin = apply(&self.world_transform(id)?, [0.0, 0.0]);
                Ok(BBox::of_point(origin))
            }
        }
    }
}
