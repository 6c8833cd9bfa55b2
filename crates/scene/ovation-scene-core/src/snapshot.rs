//! Scene snapshots: the checkpoint state reference.
//!
//! A snapshot is the flattened, draw-ordered scene with world transforms
//! resolved, sufficient for a viewer to render the instant without replaying
//! the animations that produced it. `PartialEq` so idempotence is testable.

use ovation_api_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::drawable::Style;
use crate::error::SceneError;
use crate::geometry::Geometry;
use crate::store::SceneStore;
use crate::transform::to_cols;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: NodeId,
    pub name: Option<String>,
    pub parent: Option<NodeId>,
    /// World affine, column-major `[m00, m01, m10, m11, tx, ty]`.
    pub world: [f32; 6],
    pub geometry: Geometry,
    pub style: Style,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Nodes in draw order.
    pub nodes: Vec<SnapshotNode>,
}

impl SceneSnapshot {
    pub fn capture(store: &SceneStore) -> Result<Self, SceneError> {
        let mut nodes = Vec::new();
        for id in store.draw_order() {
            let payload = store.payload(id)?;
            nodes.push(SnapshotNode {
                id,
                name: payload.name.clone(),
                parent: store.parent(id)?,
                world: to_cols(&store.world_transform(id)?),
                geometry: payload.geometry.clone(),
                style: payload.style,
            });
        }
        Ok(Self { nodes })
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }
}
