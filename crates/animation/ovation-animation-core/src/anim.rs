//! Animation specifications and the morph alignment policy.
//!
//! An `Animation` is a kind plus optional per-animation duration and easing
//! overrides. Start states are captured when `play` begins (engine.rs); the
//! destination is explicit in the kind.

use ovation_api_core::{Attr, NodeId, TrackerId, Value};
use ovation_scene_core::{Drawable, Edge, PathData, Polyline};

use crate::easing::Easing;

#[derive(Clone, Debug)]
pub enum AnimKind {
    /// Reveal the subtree's leaf paths in draw order as a growing arc-length
    /// prefix.
    Create { node: NodeId },
    /// Same reveal as `Create` with slower default pacing.
    Write { node: NodeId },
    /// Opacity ramp 0 -> full, drifting in along `shift`.
    FadeIn { node: NodeId, shift: [f32; 2] },
    /// Opacity ramp full -> 0, drifting out along `shift`; the target is
    /// removed from the store when the batch completes.
    FadeOut { node: NodeId, shift: [f32; 2] },
    /// Scale 0 -> full about the midpoint of the given bbox edge.
    GrowFromEdge { node: NodeId, edge: Edge },
    /// Point-resampled interpolation of geometry, style and transform toward
    /// a destination payload.
    Morph {
        node: NodeId,
        target: Box<Drawable>,
    },
    /// Generic attribute tween.
    Tween {
        node: NodeId,
        attr: Attr,
        to: Value,
    },
    /// Linear tracker interpolation, bumping the version every sampled step.
    TrackerTo { tracker: TrackerId, to: Value },
}

#[derive(Clone, Debug)]
pub struct Animation {
    pub kind: AnimKind,
    /// Per-animation duration override; the batch takes the max.
    pub run_time: Option<f32>,
    /// Per-animation easing override; falls back to the batch, then `Smooth`.
    pub easing: Option<Easing>,
}

impl Animation {
    fn new(kind: AnimKind) -> Self {
        Self {
            kind,
            run_time: None,
            easing: None,
        }
    }

    pub fn create(node: NodeId) -> Self {
        Self::new(AnimKind::Create { node })
    }

    pub fn write(node: NodeId) -> Self {
        Self::new(AnimKind::Write { node })
    }

    pub fn fade_in(node: NodeId) -> Self {
        Self::new(AnimKind::FadeIn {
            node,
            shift: [0.0, 0.0],
        })
    }

    pub fn fade_in_from(node: NodeId, shift: [f32; 2]) -> Self {
        Self::new(AnimKind::FadeIn { node, shift })
    }

    pub fn fade_out(node: NodeId) -> Self {
        Self::new(AnimKind::FadeOut {
            node,
            shift: [0.0, 0.0],
        })
    }

    pub fn fade_out_toward(node: NodeId, shift: [f32; 2]) -> Self {
        Self::new(AnimKind::FadeOut { node, shift })
    }

    pub fn grow_from_edge(node: NodeId, edge: Edge) -> Self {
        Self::new(AnimKind::GrowFromEdge { node, edge })
    }

    pub fn morph(node: NodeId, target: Drawable) -> Self {
        Self::new(AnimKind::Morph {
            node,
            target: Box::new(target),
        })
    }

    pub fn tween(node: NodeId, attr: Attr, to: Value) -> Self {
        Self::new(AnimKind::Tween { node, attr, to })
    }

    pub fn tracker_to(tracker: TrackerId, to: Value) -> Self {
        Self::new(AnimKind::TrackerTo { tracker, to })
    }

    pub fn with_run_time(mut self, run_time: f32) -> Self {
        self.run_time = Some(run_time);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// Pair up two paths' subpaths and resample each pair to a common point
/// count so they interpolate without visual discontinuity.
///
/// Policy: the shorter subpath list is padded by repeating its last subpath;
/// each pair is resampled to the larger cardinality with uniform arc-length
/// spacing (direction- and endpoint-preserving). The end state is snapped to
/// the destination exactly, so padding never leaks into the final geometry.
/// When either side has no subpaths at all there is nothing to pair and the
/// result is empty.
pub fn align_paths(source: &PathData, target: &PathData) -> Vec<(Polyline, Polyline)> {
    if source.subpaths.is_empty() || target.subpaths.is_empty() {
        return Vec::new();
    }
    let count = source.subpaths.len().max(target.subpaths.len());
    let mut pairs = Vec::with_capacity(count);
    for i in 0..count {
        let a = &source.subpaths[i.min(source.subpaths.len() - 1)];
        let b = &target.subpaths[i.min(target.subpaths.len() - 1)];
        let n = a.points.len().max(b.points.len());
        pairs.push((a.resampled(n), b.resampled(n)));
    }
    pairs
}
