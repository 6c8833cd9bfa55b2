//! SceneStore: arena-owned drawable hierarchy.
//!
//! - Nodes are keyed by dense `NodeId`; freed slots stay tombstoned so ids
//!   are never reused within a presentation.
//! - Parents exclusively own children; removing a node removes its subtree.
//! - Sibling order is insertion order and determines draw order.
//! - World transforms are child-local pre-multiplied by the parent's world
//!   transform, recomputed lazily on read: the store keeps a mutation epoch
//!   and each node caches `(epoch, Affine2)`.

use glam::Affine2;
use ovation_api_core::{IdAllocator, NodeId};
use std::cell::Cell;

use crate::bbox::BBox;
use crate::drawable::Drawable;
use crate::error::SceneError;
use crate::transform::{affine_of, apply};

#[derive(Debug)]
struct Node {
    payload: Drawable,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// World-transform cache, valid while the stored epoch matches the store's.
    world: Cell<Option<(u64, Affine2)>>,
}

#[derive(Debug, Default)]
pub struct SceneStore {
    nodes: Vec<Option<Node>>,
    roots: Vec<NodeId>,
    ids: IdAllocator,
    epoch: u64,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a drawable at the end of `parent`'s child order (root order
    /// when `None`). Fails if the parent is not present.
    pub fn add(&mut self, drawable: Drawable, parent: Option<NodeId>) -> Result<NodeId, SceneError> {
        if let Some(p) = parent {
            if !self.contains(p) {
                return Err(SceneError::InvalidReference { id: p });
            }
        }
        let id = self.ids.alloc_node();
        debug_assert_eq!(id.0 as usize, self.nodes.len());
        self.nodes.push(Some(Node {
            payload: drawable,
            parent,
            children: Vec::new(),
            world: Cell::new(None),
        }));
        match parent {
            Some(p) => self.node_mut_unchecked(p).children.push(id),
            None => self.roots.push(id),
        }
        self.bump_epoch();
        Ok(id)
    }

    /// Detach a node and all of its descendants. Returns every removed id in
    /// draw order, the target first.
    pub fn remove(&mut self, id: NodeId) -> Result<Vec<NodeId>, SceneError> {
        let parent = self.node(id)?.parent;
        let removed = self.collect_subtree(id);
        for rid in &removed {
            self.nodes[rid.0 as usize] = None;
        }
        match parent {
            Some(p) => self.node_mut_unchecked(p).children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }
        self.bump_epoch();
        Ok(removed)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id.0 as usize), Some(Some(_)))
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn payload(&self, id: NodeId) -> Result<&Drawable, SceneError> {
        Ok(&self.node(id)?.payload)
    }

    /// Mutable payload access. Any mutation may move geometry, so the world
    /// transform caches of the whole store are invalidated.
    pub fn payload_mut(&mut self, id: NodeId) -> Result<&mut Drawable, SceneError> {
        if !self.contains(id) {
            return Err(SceneError::InvalidReference { id });
        }
        self.bump_epoch();
        Ok(&mut self.node_mut_unchecked(id).payload)
    }

    /// Replace a node's payload in place, keeping identity, children and
    /// position in the draw order. Used by reactive redraw.
    pub fn replace_payload(&mut self, id: NodeId, drawable: Drawable) -> Result<(), SceneError> {
        *self.payload_mut(id)? = drawable;
        Ok(())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, SceneError> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], SceneError> {
        Ok(&self.node(id)?.children)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// All live ids in draw order (roots in order, subtrees depth-first).
    pub fn draw_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        for root in &self.roots {
            self.push_subtree(*root, &mut out);
        }
        out
    }

    /// Effective transform: parent world x local, cached per epoch.
    pub fn world_transform(&self, id: NodeId) -> Result<Affine2, SceneError> {
        let node = self.node(id)?;
        if let Some((epoch, cached)) = node.world.get() {
            if epoch == self.epoch {
                return Ok(cached);
            }
        }
        let local = affine_of(&node.payload.transform);
        let world = match node.parent {
            Some(p) => self.world_transform(p)? * local,
            None => local,
        };
        node.world.set(Some((self.epoch, world)));
        Ok(world)
    }

    /// Parent-space transform of `id`'s parent (identity for roots).
    pub fn parent_world_transform(&self, id: NodeId) -> Result<Affine2, SceneError> {
        match self.node(id)?.parent {
            Some(p) => self.world_transform(p),
            None => Ok(Affine2::IDENTITY),
        }
    }

    /// World-space axis-aligned box of the subtree's geometry; `None` when the
    /// subtree carries no points.
    pub fn bbox(&self, id: NodeId) -> Result<Option<BBox>, SceneError> {
        if !self.contains(id) {
            return Err(SceneError::InvalidReference { id });
        }
        let mut ids = Vec::new();
        self.push_subtree(id, &mut ids);
        let mut acc: Option<BBox> = None;
        for nid in ids {
            let node = self.node(nid)?;
            let Some(path) = node.payload.geometry.path() else {
                continue;
            };
            let world = self.world_transform(nid)?;
            for sub in &path.subpaths {
                for p in &sub.points {
                    let wp = apply(&world, *p);
                    match &mut acc {
                        Some(bb) => bb.include(wp),
                        None => acc = Some(BBox::of_point(wp)),
                    }
                }
            }
        }
        Ok(acc)
    }

    fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.nodes
            .get(id.0 as usize)
            .and_then(|n| n.as_ref())
            .ok_or(SceneError::InvalidReference { id })
    }

    fn node_mut_unchecked(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.0 as usize]
            .as_mut()
            .expect("checked live node")
    }

    fn collect_subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.push_subtree(id, &mut out);
        out
    }

    fn push_subtree(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        if let Ok(children) = self.children(id) {
            for c in children.to_vec() {
                self.push_subtree(c, out);
            }
        }
    }

    #[inline]
    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::Style;
    use crate::geometry::Polyline;

    fn line(a: [f32; 2], b: [f32; 2]) -> Drawable {
        Drawable::polyline(Polyline::open(vec![a, b]), Style::default())
    }

    #[test]
    fn add_requires_live_parent() {
        let mut store = SceneStore::new();
        let err = store.add(Drawable::group(), Some(NodeId(5))).unwrap_err();
        assert_eq!(err, SceneError::InvalidReference { id: NodeId(5) });
    }

    #[test]
    fn remove_detaches_subtree_and_reports_ids() {
        let mut store = SceneStore::new();
        let root = store.add(Drawable::group(), None).unwrap();
        let a = store.add(line([0.0, 0.0], [1.0, 0.0]), Some(root)).unwrap();
        let b = store.add(line([0.0, 0.0], [0.0, 1.0]), Some(a)).unwrap();
        let other = store.add(Drawable::group(), None).unwrap();

        let removed = store.remove(a).unwrap();
        assert_eq!(removed, vec![a, b]);
        assert!(!store.contains(a));
        assert!(!store.contains(b));
        assert!(store.contains(root));
        assert!(store.contains(other));
        assert!(store.children(root).unwrap().is_empty());
    }

    #[test]
    fn sibling_order_is_insertion_order() {
        let mut store = SceneStore::new();
        let root = store.add(Drawable::group(), None).unwrap();
        let a = store.add(Drawable::group(), Some(root)).unwrap();
        let b = store.add(Drawable::group(), Some(root)).unwrap();
        assert_eq!(store.draw_order(), vec![root, a, b]);
    }

    #[test]
    fn world_transform_composes_through_parents() {
        let mut store = SceneStore::new();
        let root = store.add(Drawable::group(), None).unwrap();
        store.payload_mut(root).unwrap().transform.translation = [10.0, 0.0];
        let child = store.add(line([0.0, 0.0], [1.0, 0.0]), Some(root)).unwrap();
        store.payload_mut(child).unwrap().transform.translation = [0.0, 2.0];

        let world = store.world_transform(child).unwrap();
        let p = apply(&world, [1.0, 0.0]);
        assert!((p[0] - 11.0).abs() < 1e-5);
        assert!((p[1] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn world_transform_cache_invalidates_on_mutation() {
        let mut store = SceneStore::new();
        let root = store.add(Drawable::group(), None).unwrap();
        let child = store.add(line([0.0, 0.0], [1.0, 0.0]), Some(root)).unwrap();
        let before = store.world_transform(child).unwrap();
        store.payload_mut(root).unwrap().transform.translation = [3.0, 0.0];
        let after = store.world_transform(child).unwrap();
        assert_ne!(
            apply(&before, [0.0, 0.0])[0],
            apply(&after, [0.0, 0.0])[0]
        );
    }

    #[test]
    fn bbox_covers_transformed_subtree() {
        let mut store = SceneStore::new();
        let group = store.add(Drawable::group(), None).unwrap();
        store.payload_mut(group).unwrap().transform.translation = [5.0, 5.0];
        store.add(line([-1.0, 0.0], [1.0, 0.0]), Some(group)).unwrap();
        store.add(line([0.0, -1.0], [0.0, 1.0]), Some(group)).unwrap();

        let bb = store.bbox(group).unwrap().unwrap();
        assert_eq!(bb.min, [4.0, 4.0]);
        assert_eq!(bb.max, [6.0, 6.0]);

        // A geometry-less subtree has no box.
        let empty = store.add(Drawable::group(), None).unwrap();
        assert!(store.bbox(empty).unwrap().is_none());
    }
}
