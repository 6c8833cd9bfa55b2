//! Reactive bindings: dependency-declared production functions that
//! recompute a drawable when tracked values change.
//!
//! Dependencies are explicit: the declared list is unioned with the reads
//! observed while the production function runs (a dependency-collecting
//! trial evaluation happens at construction, and every later evaluation can
//! widen the set further). Any tracker write observed during production is a
//! `DependencyCycle`: the write either feeds this binding or another one
//! whose evaluation order is unspecified, and both are feedback.

use ovation_api_core::{BindingId, NodeId, TrackerId, Value};
use ovation_scene_core::Drawable;
use std::fmt;

use crate::error::EngineError;
use crate::tracker::TrackerTable;

/// Read/write recorder handed to production functions.
pub struct ReactiveCtx<'a> {
    trackers: &'a TrackerTable,
    reads: Vec<TrackerId>,
    writes: Vec<TrackerId>,
}

impl<'a> ReactiveCtx<'a> {
    pub(crate) fn new(trackers: &'a TrackerTable) -> Self {
        Self {
            trackers,
            reads: Vec::new(),
            writes: Vec::new(),
        }
    }

    /// Read a tracker, recording the dependency. Unknown trackers read as a
    /// neutral scalar 0.0 (fail-soft; declared deps are validated at
    /// construction).
    pub fn get(&mut self, id: TrackerId) -> Value {
        if !self.reads.contains(&id) {
            self.reads.push(id);
        }
        self.trackers
            .get(id)
            .map(|t| t.value.clone())
            .unwrap_or(Value::Float(0.0))
    }

    /// Scalar convenience over [`ReactiveCtx::get`].
    pub fn get_f32(&mut self, id: TrackerId) -> f32 {
        self.get(id).as_float().unwrap_or(0.0)
    }

    /// Record a write attempt. The write is never applied: writes inside a
    /// production function are feedback and fail the evaluation.
    pub fn set(&mut self, id: TrackerId, _value: Value) {
        self.writes.push(id);
    }
}

type ProduceFn = Box<dyn FnMut(&mut ReactiveCtx) -> Drawable>;

/// A live binding: production function, effective dependency set, and the
/// node whose payload it replaces in place.
pub struct ReactiveBinding {
    pub id: BindingId,
    pub node: NodeId,
    deps: Vec<TrackerId>,
    /// Version of each dependency at last evaluation, parallel to `deps`.
    seen: Vec<u64>,
    produce: ProduceFn,
}

impl ReactiveBinding {
    pub(crate) fn new(id: BindingId, node: NodeId, deps: Vec<TrackerId>, produce: ProduceFn) -> Self {
        let seen = vec![0; deps.len()];
        Self {
            id,
            node,
            deps,
            seen,
            produce,
        }
    }

    pub fn deps(&self) -> &[TrackerId] {
        &self.deps
    }

    /// True when any dependency's version differs from the one captured at
    /// last evaluation.
    pub fn dirty(&self, trackers: &TrackerTable) -> bool {
        self.deps
            .iter()
            .zip(self.seen.iter())
            .any(|(dep, seen)| trackers.version(*dep) != Some(*seen))
    }

    /// Run the production function, widen the dependency set with observed
    /// reads, refresh seen versions, and reject tracker writes.
    pub fn evaluate(&mut self, trackers: &TrackerTable) -> Result<Drawable, EngineError> {
        let mut ctx = ReactiveCtx::new(trackers);
        let drawable = (self.produce)(&mut ctx);
        if let Some(tracker) = ctx.writes.first() {
            return Err(EngineError::DependencyCycle {
                binding: self.id,
                tracker: *tracker,
            });
        }
        for read in ctx.reads {
            if !self.deps.contains(&read) {
                self.deps.push(read);
                self.seen.push(0);
            }
        }
        for (dep, seen) in self.deps.iter().zip(self.seen.iter_mut()) {
            *seen = trackers.version(*dep).unwrap_or(0);
        }
        Ok(drawable)
    }
}

impl fmt::Debug for ReactiveBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveBinding")
            .field("id", &self.id)
            .field("node", &self.node)
            .field("deps", &self.deps)
            .field("seen", &self.seen)
            .finish_non_exhaustive()
    }
}
