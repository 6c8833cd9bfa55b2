//! Engine: data ownership and the blocking play/wait/checkpoint API.
//!
//! Single-threaded and frame-stepped: the virtual clock advances in exact
//! `1/fps` increments derived from an integer frame counter, and every call
//! that would block (`play`, `wait`) runs to logical completion before
//! returning. Each frame: advance clock -> sample every animation -> apply ->
//! reactive pass -> emit `FrameOutputs`.

use ovation_api_core::{
    lerp_rgba, lerp_transform, lerp_value, lerp_vec2, Attr, AttrPath, IdAllocator, NodeId,
    Transform2D, TrackerId, Value,
};
use ovation_scene_core::transform::apply;
use ovation_scene_core::{
    Drawable, Edge, Frame, Geometry, PathData, Polyline, SceneSnapshot, SceneStore, Style,
};

use crate::anim::{align_paths, AnimKind, Animation};
use crate::binding::{ReactiveBinding, ReactiveCtx};
use crate::config::Config;
use crate::easing::Easing;
use crate::error::EngineError;
use crate::outputs::{Change, EngineEvent, FrameOutputs, Recording};
use crate::slides::{SlideEntry, SlideIndex};
use crate::timeline::{Step, Timeline};
use crate::tracker::TrackerTable;

/// Options for one `play` call.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlayOpts {
    /// Shared run time override for the whole batch.
    pub run_time: Option<f32>,
    /// Batch easing; per-animation overrides win.
    pub easing: Option<Easing>,
}

impl PlayOpts {
    pub fn run_time(run_time: f32) -> Self {
        Self {
            run_time: Some(run_time),
            easing: None,
        }
    }

    pub fn linear(run_time: f32) -> Self {
        Self {
            run_time: Some(run_time),
            easing: Some(Easing::Linear),
        }
    }
}

/// Options for a `wipe` transition.
#[derive(Copy, Clone, Debug)]
pub struct WipeOpts {
    pub run_time: Option<f32>,
    /// Drift direction; both groups move toward this stage edge.
    pub toward: Edge,
}

impl Default for WipeOpts {
    fn default() -> Self {
        Self {
            run_time: None,
            toward: Edge::Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EngineState {
    Idle,
    Playing,
}

/// Captured start state of one animation in a running batch.
enum Runtime {
    Reveal {
        /// Leaf path nodes in draw order with their pristine geometry and
        /// arc length.
        leaves: Vec<(NodeId, PathData, f32)>,
        total: f32,
    },
    Fade {
        node: NodeId,
        shift: [f32; 2],
        base_opacity: f32,
        base_translation: [f32; 2],
        out: bool,
    },
    Grow {
        node: NodeId,
        pristine: Transform2D,
        /// Fixed point in parent space.
        anchor: [f32; 2],
    },
    Morph {
        node: NodeId,
        pairs: Vec<(Polyline, Polyline)>,
        start_style: Style,
        start_transform: Transform2D,
        target: Box<Drawable>,
    },
    Tween {
        node: NodeId,
        attr: Attr,
        from: Value,
        to: Value,
    },
    TrackerTo {
        tracker: TrackerId,
        from: Value,
        to: Value,
    },
}

struct ActiveAnim {
    easing: Option<Easing>,
    runtime: Runtime,
}

/// The presentation engine: drawable store, trackers, reactive bindings,
/// timeline and slide bookkeeping behind one sequential call stream.
pub struct Engine {
    cfg: Config,
    state: EngineState,
    /// Virtual frame counter; time = frame / fps.
    frame: u64,

    scene: SceneStore,
    trackers: TrackerTable,
    bindings: Vec<ReactiveBinding>,
    ids: IdAllocator,

    timeline: Timeline,
    slides: SlideIndex,
    recording: Recording,
    last_checkpoint_end: f32,

    // Flushed into the next emitted frame.
    pending_changes: Vec<Change>,
    pending_events: Vec<EngineEvent>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        let recording = Recording::new(cfg.fps);
        Self {
            cfg,
            state: EngineState::Idle,
            frame: 0,
            scene: SceneStore::new(),
            trackers: TrackerTable::new(),
            bindings: Vec::new(),
            ids: IdAllocator::new(),
            timeline: Timeline::default(),
            slides: SlideIndex::default(),
            recording,
            last_checkpoint_end: 0.0,
            pending_changes: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Current virtual time in seconds.
    #[inline]
    pub fn time(&self) -> f32 {
        self.frame as f32 / self.cfg.fps as f32
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Stage rectangle for layout calls.
    pub fn stage(&self) -> Frame {
        self.cfg.frame
    }

    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    /// Direct store access for construction and layout between plays. No
    /// external mutation happens while a `play` call is executing; the
    /// sequential `&mut` API enforces that.
    pub fn scene_mut(&mut self) -> &mut SceneStore {
        &mut self.scene
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn slides(&self) -> &SlideIndex {
        &self.slides
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Snapshot of the scene as it stands now.
    pub fn snapshot(&self) -> Result<SceneSnapshot, EngineError> {
        Ok(SceneSnapshot::capture(&self.scene)?)
    }

    /// Flush any trailing outputs and hand over the frame stream and slide
    /// index.
    pub fn finish(mut self) -> (Recording, SlideIndex) {
        if !self.pending_changes.is_empty() || !self.pending_events.is_empty() {
            self.emit_frame();
        }
        (self.recording, self.slides)
    }

    // ---- store operations -------------------------------------------------

    /// Insert a drawable (at the end of the parent's child order) and emit a
    /// `NodeAdded` event carrying the payload.
    pub fn add(&mut self, drawable: Drawable, parent: Option<NodeId>) -> Result<NodeId, EngineError> {
        let node = self.scene.add(drawable.clone(), parent)?;
        self.pending_events.push(EngineEvent::NodeAdded {
            node,
            parent,
            drawable,
        });
        Ok(node)
    }

    /// Detach a subtree, retiring any reactive bindings bound into it.
    pub fn remove(&mut self, id: NodeId) -> Result<Vec<NodeId>, EngineError> {
        let removed = self.scene.remove(id)?;
        self.retire_bindings(&removed);
        for r in &removed {
            self.pending_events.push(EngineEvent::NodeRemoved { node: *r });
        }
        Ok(removed)
    }

    // ---- trackers ---------------------------------------------------------

    pub fn create_tracker(&mut self, value: Value) -> TrackerId {
        let id = self.ids.alloc_tracker();
        self.trackers.insert(id, value);
        id
    }

    pub fn tracker(&self, id: TrackerId) -> Result<Value, EngineError> {
        self.trackers
            .get(id)
            .map(|t| t.value.clone())
            .ok_or_else(|| EngineError::invalid_tracker(id))
    }

    pub fn set_tracker(&mut self, id: TrackerId, value: Value) -> Result<(), EngineError> {
        if !self.trackers.set(id, value.clone()) {
            return Err(EngineError::invalid_tracker(id));
        }
        self.pending_changes.push(Change {
            path: AttrPath::tracker(id),
            value,
        });
        Ok(())
    }

    /// Animation interpolating the tracker linearly (in value space) from its
    /// value at animation start to `to` over the play's run time.
    pub fn animate_tracker(&self, id: TrackerId, to: Value) -> Animation {
        Animation::tracker_to(id, to)
    }

    // ---- reactive bindings ------------------------------------------------

    /// Register a production function re-evaluated whenever one of its
    /// dependencies changes. Runs a dependency-collecting trial evaluation
    /// immediately: observed reads widen `deps`, and a tracker write fails
    /// with `DependencyCycle` before any frame is rendered. The produced
    /// drawable is inserted under `parent` and replaced in place on
    /// re-evaluation.
    pub fn always_redraw<F>(
        &mut self,
        deps: &[TrackerId],
        parent: Option<NodeId>,
        produce: F,
    ) -> Result<NodeId, EngineError>
    where
        F: FnMut(&mut ReactiveCtx) -> Drawable + 'static,
    {
        for dep in deps {
            if !self.trackers.contains(*dep) {
                return Err(EngineError::invalid_tracker(*dep));
            }
        }
        let id = self.ids.alloc_binding();
        // Placeholder node id until the trial evaluation produces the payload.
        let mut binding = ReactiveBinding::new(id, NodeId(u32::MAX), deps.to_vec(), Box::new(produce));
        let drawable = binding.evaluate(&self.trackers)?;
        let node = self.add(drawable, parent)?;
        binding.node = node;
        log::debug!("bind b{} -> n{} deps={:?}", id.0, node.0, binding.deps());
        self.bindings.push(binding);
        Ok(node)
    }

    // ---- playback ---------------------------------------------------------

    /// Run a batch of animations concurrently over a shared run time,
    /// blocking until logical completion. The whole batch is validated
    /// before anything is mutated.
    pub fn play(&mut self, anims: Vec<Animation>, opts: PlayOpts) -> Result<(), EngineError> {
        for anim in &anims {
            self.validate(anim)?;
        }
        let run_time = self.batch_run_time(&anims, opts.run_time);
        let count = anims.len();
        let start_time = self.time();

        let mut active = Vec::with_capacity(count);
        for anim in anims {
            active.push(self.capture(anim)?);
        }

        log::debug!("play: {count} animations over {run_time:.3}s at t={start_time:.3}");
        self.state = EngineState::Playing;
        self.pending_events.push(EngineEvent::PlayStarted {
            animations: count,
            run_time,
        });

        let frames = self.frames_for(run_time);
        for k in 1..=frames {
            self.frame += 1;
            let t = ((k as f32 / self.cfg.fps as f32) / run_time).clamp(0.0, 1.0);
            let last = k == frames;
            for anim in &mut active {
                let p = if last {
                    1.0
                } else {
                    anim.easing.or(opts.easing).unwrap_or_default().apply(t)
                };
                Self::apply_active(
                    &mut self.scene,
                    &mut self.trackers,
                    &mut self.pending_changes,
                    &mut self.pending_events,
                    anim,
                    p,
                )?;
            }
            self.reactive_pass()?;
            self.emit_frame();
        }

        // Exit animations retire their targets once the batch is done.
        for anim in &active {
            if let Runtime::Fade { node, out: true, .. } = anim.runtime {
                if self.scene.contains(node) {
                    self.remove(node)?;
                }
            }
        }

        let realized = frames as f32 / self.cfg.fps as f32;
        self.timeline.push(Step::Play {
            start: start_time,
            run_time: realized,
        });
        self.pending_events
            .push(EngineEvent::PlayFinished { run_time: realized });
        self.state = EngineState::Idle;
        Ok(())
    }

    /// Hold for `duration`; the reactive pass still runs every frame.
    pub fn wait(&mut self, duration: f32) -> Result<(), EngineError> {
        let start_time = self.time();
        log::debug!("wait: {duration:.3}s at t={start_time:.3}");
        self.state = EngineState::Playing;
        let frames = self.frames_for(duration);
        for _ in 0..frames {
            self.frame += 1;
            self.reactive_pass()?;
            self.emit_frame();
        }
        let realized = frames as f32 / self.cfg.fps as f32;
        self.timeline.push(Step::Wait {
            start: start_time,
            duration: realized,
        });
        self.pending_events
            .push(EngineEvent::WaitFinished { duration: realized });
        self.state = EngineState::Idle;
        Ok(())
    }

    // ---- checkpoints and wipes --------------------------------------------

    /// Record a slide boundary. Only valid while idle; returns the new
    /// slide's ordinal index.
    pub fn checkpoint(&mut self) -> Result<usize, EngineError> {
        if self.state != EngineState::Idle {
            return Err(EngineError::InvalidCheckpoint {
                state: "playing".to_string(),
            });
        }
        let end_time = self.time();
        let index = self.slides.len();
        let snapshot = SceneSnapshot::capture(&self.scene)?;
        log::debug!(
            "checkpoint {index}: [{:.3}, {end_time:.3})",
            self.last_checkpoint_end
        );
        self.slides.entries.push(SlideEntry {
            index,
            start_time: self.last_checkpoint_end,
            end_time,
            snapshot,
        });
        self.last_checkpoint_end = end_time;
        self.timeline.push(Step::Checkpoint {
            index,
            time: end_time,
        });
        self.pending_events
            .push(EngineEvent::CheckpointRecorded { index });
        Ok(index)
    }

    /// Fade the outgoing group off the stage while the incoming group drifts
    /// in, as one atomic play batch: a checkpoint can never land mid-wipe.
    /// Outgoing nodes are removed when the batch completes.
    pub fn wipe(
        &mut self,
        outgoing: &[NodeId],
        incoming: &[NodeId],
        opts: WipeOpts,
    ) -> Result<(), EngineError> {
        let dir = opts.toward.direction();
        let span = match opts.toward {
            Edge::Left | Edge::Right => self.cfg.frame.width,
            Edge::Up | Edge::Down => self.cfg.frame.height,
        };
        let shift = [dir[0] * span, dir[1] * span];
        log::debug!(
            "wipe: {} out, {} in toward {:?}",
            outgoing.len(),
            incoming.len(),
            opts.toward
        );
        let mut anims = Vec::with_capacity(outgoing.len() + incoming.len());
        for id in outgoing {
            anims.push(Animation::fade_out_toward(*id, shift));
        }
        for id in incoming {
            anims.push(Animation::fade_in_from(*id, shift));
        }
        self.play(
            anims,
            PlayOpts {
                run_time: opts.run_time,
                easing: None,
            },
        )
    }

    // ---- internals --------------------------------------------------------

    fn validate(&self, anim: &Animation) -> Result<(), EngineError> {
        match &anim.kind {
            AnimKind::Create { node }
            | AnimKind::Write { node }
            | AnimKind::FadeIn { node, .. }
            | AnimKind::FadeOut { node, .. }
            | AnimKind::GrowFromEdge { node, .. }
            | AnimKind::Tween { node, .. } => {
                if !self.scene.contains(*node) {
                    return Err(EngineError::invalid_node(*node));
                }
            }
            AnimKind::Morph { node, target } => {
                if !self.scene.contains(*node) {
                    return Err(EngineError::invalid_node(*node));
                }
                if !self.scene.payload(*node)?.geometry.has_points() {
                    return Err(EngineError::MismatchedMorph {
                        node: *node,
                        reason: "source has no point data to resample from".to_string(),
                    });
                }
                if !target.geometry.has_points() {
                    return Err(EngineError::MismatchedMorph {
                        node: *node,
                        reason: "destination has no point data".to_string(),
                    });
                }
            }
            AnimKind::TrackerTo { tracker, .. } => {
                if !self.trackers.contains(*tracker) {
                    return Err(EngineError::invalid_tracker(*tracker));
                }
            }
        }
        Ok(())
    }

    fn default_run_time(&self, anim: &Animation) -> f32 {
        anim.run_time.unwrap_or(match anim.kind {
            AnimKind::Write { .. } => self.cfg.write_run_time,
            _ => self.cfg.default_run_time,
        })
    }

    fn batch_run_time(&self, anims: &[Animation], explicit: Option<f32>) -> f32 {
        explicit
            .unwrap_or_else(|| {
                anims
                    .iter()
                    .map(|a| self.default_run_time(a))
                    .fold(self.cfg.default_run_time, f32::max)
            })
            .max(f32::EPSILON)
    }

    #[inline]
    fn frames_for(&self, duration: f32) -> u64 {
        ((duration * self.cfg.fps as f32).ceil() as u64).max(1)
    }

    /// Capture an animation's start state. Runs after batch validation.
    fn capture(&mut self, anim: Animation) -> Result<ActiveAnim, EngineError> {
        let runtime = match anim.kind {
            AnimKind::Create { node } | AnimKind::Write { node } => {
                let mut leaves = Vec::new();
                let mut total = 0.0;
                let mut ids = vec![node];
                let mut i = 0;
                while i < ids.len() {
                    let id = ids[i];
                    ids.extend_from_slice(self.scene.children(id)?);
                    if let Geometry::Path(path) = &self.scene.payload(id)?.geometry {
                        let len = path.arc_length();
                        leaves.push((id, path.clone(), len));
                        total += len;
                    }
                    i += 1;
                }
                Runtime::Reveal { leaves, total }
            }
            AnimKind::FadeIn { node, shift } => {
                let payload = self.scene.payload(node)?;
                Runtime::Fade {
                    node,
                    shift,
                    base_opacity: payload.style.opacity,
                    base_translation: payload.transform.translation,
                    out: false,
                }
            }
            AnimKind::FadeOut { node, shift } => {
                let payload = self.scene.payload(node)?;
                Runtime::Fade {
                    node,
                    shift,
                    base_opacity: payload.style.opacity,
                    base_translation: payload.transform.translation,
                    out: true,
                }
            }
            AnimKind::GrowFromEdge { node, edge } => {
                let pristine = self.scene.payload(node)?.transform;
                let world_anchor = self.scene.layout_bbox(node)?.edge_point(edge);
                let inv = self.scene.parent_world_transform(node)?.inverse();
                Runtime::Grow {
                    node,
                    pristine,
                    anchor: apply(&inv, world_anchor),
                }
            }
            AnimKind::Morph { node, target } => {
                let payload = self.scene.payload(node)?;
                let source = payload.geometry.path().cloned().unwrap_or_default();
                let target_path = target.geometry.path().cloned().unwrap_or_default();
                Runtime::Morph {
                    node,
                    pairs: align_paths(&source, &target_path),
                    start_style: payload.style,
                    start_transform: payload.transform,
                    target,
                }
            }
            AnimKind::Tween { node, attr, to } => {
                let mut from = read_attr(self.scene.payload(node)?, attr);
                // Point tweens resample the start to the destination's
                // cardinality so the blend is defined.
                if let (Value::Points(f), Value::Points(t)) = (&from, &to) {
                    if f.len() != t.len() {
                        let resampled = Polyline::open(f.clone()).resampled(t.len().max(1));
                        from = Value::Points(resampled.points);
                    }
                }
                Runtime::Tween {
                    node,
                    attr,
                    from,
                    to,
                }
            }
            AnimKind::TrackerTo { tracker, to } => Runtime::TrackerTo {
                tracker,
                from: self.tracker(tracker)?,
                to,
            },
        };
        Ok(ActiveAnim {
            easing: anim.easing,
            runtime,
        })
    }

    /// Apply one animation at progress `p`. At `p == 1` every attribute is
    /// set to exactly its destination value.
    fn apply_active(
        scene: &mut SceneStore,
        trackers: &mut TrackerTable,
        changes: &mut Vec<Change>,
        events: &mut Vec<EngineEvent>,
        anim: &mut ActiveAnim,
        p: f32,
    ) -> Result<(), EngineError> {
        match &anim.runtime {
            Runtime::Reveal { leaves, total } => {
                let mut budget = p * total;
                for (node, pristine, len) in leaves {
                    let geometry = if p >= 1.0 {
                        pristine.clone()
                    } else if *len <= budget {
                        budget -= len;
                        pristine.clone()
                    } else {
                        let alpha = if *len > 0.0 { budget / len } else { 1.0 };
                        budget = 0.0;
                        pristine.partial(alpha)
                    };
                    scene.payload_mut(*node)?.geometry = Geometry::Path(geometry);
                    events.push(EngineEvent::NodeRedrawn {
                        node: *node,
                        drawable: scene.payload(*node)?.clone(),
                    });
                }
            }
            Runtime::Fade {
                node,
                shift,
                base_opacity,
                base_translation,
                out,
            } => {
                let (opacity, translation) = if *out {
                    (
                        base_opacity * (1.0 - p),
                        [
                            base_translation[0] + shift[0] * p,
                            base_translation[1] + shift[1] * p,
                        ],
                    )
                } else if p >= 1.0 {
                    (*base_opacity, *base_translation)
                } else {
                    (
                        base_opacity * p,
                        [
                            base_translation[0] - shift[0] * (1.0 - p),
                            base_translation[1] - shift[1] * (1.0 - p),
                        ],
                    )
                };
                let payload = scene.payload_mut(*node)?;
                payload.style.opacity = opacity;
                payload.transform.translation = translation;
                changes.push(Change {
                    path: AttrPath::node(*node, Attr::Opacity),
                    value: Value::Float(opacity),
                });
                changes.push(Change {
                    path: AttrPath::node(*node, Attr::Transform),
                    value: Value::Transform2D(payload.transform),
                });
            }
            Runtime::Grow {
                node,
                pristine,
                anchor,
            } => {
                let transform = if p >= 1.0 {
                    *pristine
                } else {
                    Transform2D {
                        translation: [
                            anchor[0] + p * (pristine.translation[0] - anchor[0]),
                            anchor[1] + p * (pristine.translation[1] - anchor[1]),
                        ],
                        rotation: pristine.rotation,
                        scale: [p * pristine.scale[0], p * pristine.scale[1]],
                    }
                };
                scene.payload_mut(*node)?.transform = transform;
                changes.push(Change {
                    path: AttrPath::node(*node, Attr::Transform),
                    value: Value::Transform2D(transform),
                });
            }
            Runtime::Morph {
                node,
                pairs,
                start_style,
                start_transform,
                target,
            } => {
                let payload = scene.payload_mut(*node)?;
                if p >= 1.0 {
                    payload.geometry = target.geometry.clone();
                    payload.style = target.style;
                    payload.transform = target.transform;
                } else {
                    let subpaths = pairs
                        .iter()
                        .map(|(a, b)| Polyline {
                            points: a
                                .points
                                .iter()
                                .zip(b.points.iter())
                                .map(|(pa, pb)| lerp_vec2(*pa, *pb, p))
                                .collect(),
                            closed: a.closed && b.closed,
                        })
                        .collect();
                    payload.geometry = Geometry::Path(PathData { subpaths });
                    payload.style = lerp_style(start_style, &target.style, p);
                    payload.transform = lerp_transform(start_transform, &target.transform, p);
                }
                events.push(EngineEvent::NodeRedrawn {
                    node: *node,
                    drawable: scene.payload(*node)?.clone(),
                });
            }
            Runtime::Tween {
                node,
                attr,
                from,
                to,
            } => {
                let value = if p >= 1.0 {
                    to.clone()
                } else {
                    lerp_value(from, to, p)
                };
                write_attr(scene.payload_mut(*node)?, *attr, &value);
                changes.push(Change {
                    path: AttrPath::node(*node, *attr),
                    value,
                });
            }
            Runtime::TrackerTo { tracker, from, to } => {
                let value = if p >= 1.0 {
                    to.clone()
                } else {
                    lerp_value(from, to, p)
                };
                trackers.set(*tracker, value.clone());
                changes.push(Change {
                    path: AttrPath::tracker(*tracker),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Re-evaluate dirty bindings, once per frame, after animation sampling.
    /// Idempotent when no dependency changed: clean bindings are skipped
    /// entirely.
    fn reactive_pass(&mut self) -> Result<(), EngineError> {
        for i in 0..self.bindings.len() {
            if !self.bindings[i].dirty(&self.trackers) {
                continue;
            }
            let drawable = self.bindings[i].evaluate(&self.trackers)?;
            let node = self.bindings[i].node;
            log::trace!("redraw b{} -> n{}", self.bindings[i].id.0, node.0);
            self.scene.replace_payload(node, drawable.clone())?;
            self.pending_events
                .push(EngineEvent::NodeRedrawn { node, drawable });
        }
        Ok(())
    }

    fn retire_bindings(&mut self, removed: &[NodeId]) {
        self.bindings.retain(|b| !removed.contains(&b.node));
    }

    fn emit_frame(&mut self) {
        self.recording.push_frame(FrameOutputs {
            frame: self.frame,
            time: self.time(),
            changes: std::mem::take(&mut self.pending_changes),
            events: std::mem::take(&mut self.pending_events),
        });
    }
}

fn lerp_style(a: &Style, b: &Style, t: f32) -> Style {
    Style {
        stroke: lerp_rgba(a.stroke, b.stroke, t),
        fill: lerp_rgba(a.fill, b.fill, t),
        stroke_width: a.stroke_width + (b.stroke_width - a.stroke_width) * t,
        opacity: a.opacity + (b.opacity - a.opacity) * t,
    }
}

fn read_attr(payload: &Drawable, attr: Attr) -> Value {
    match attr {
        Attr::Opacity => Value::Float(payload.style.opacity),
        Attr::Stroke => Value::ColorRgba(payload.style.stroke),
        Attr::Fill => Value::ColorRgba(payload.style.fill),
        Attr::StrokeWidth => Value::Float(payload.style.stroke_width),
        Attr::Transform => Value::Transform2D(payload.transform),
        // Point tweens address the first subpath.
        Attr::Points => Value::Points(
            payload
                .geometry
                .path()
                .and_then(|p| p.subpaths.first())
                .map(|s| s.points.clone())
                .unwrap_or_default(),
        ),
    }
}

fn write_attr(payload: &mut Drawable, attr: Attr, value: &Value) {
    match (attr, value) {
        (Attr::Opacity, Value::Float(v)) => payload.style.opacity = *v,
        (Attr::Stroke, Value::ColorRgba(c)) => payload.style.stroke = *c,
        (Attr::Fill, Value::ColorRgba(c)) => payload.style.fill = *c,
        (Attr::StrokeWidth, Value::Float(v)) => payload.style.stroke_width = *v,
        (Attr::Transform, Value::Transform2D(t)) => payload.transform = *t,
        (Attr::Points, Value::Points(points)) => {
            payload.geometry = Geometry::Path(PathData::single(Polyline::open(points.clone())));
        }
        // Kind mismatches are construction bugs; leave the attribute alone.
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovation_scene_core::shapes;

    #[test]
    fn checkpoint_rejected_while_playing() {
        let mut engine = Engine::default();
        engine.state = EngineState::Playing;
        let err = engine.checkpoint().unwrap_err();
        assert!(matches!(err, EngineError::InvalidCheckpoint { .. }));
    }

    #[test]
    fn play_validates_before_mutating() {
        let mut engine = Engine::default();
        let live = engine
            .add(shapes::circle(1.0, Style::default()), None)
            .unwrap();
        let before = engine.snapshot().unwrap();
        let err = engine
            .play(
                vec![
                    Animation::fade_out(live),
                    Animation::create(NodeId(99)),
                ],
                PlayOpts::default(),
            )
            .unwrap_err();
        assert_eq!(err, EngineError::invalid_node(NodeId(99)));
        // The valid animation in the batch must not have run either.
        assert_eq!(engine.snapshot().unwrap(), before);
        assert!(engine.recording().is_empty());
    }

    #[test]
    fn morph_requires_point_data() {
        let mut engine = Engine::default();
        let group = engine.add(Drawable::group(), None).unwrap();
        let err = engine
            .play(
                vec![Animation::morph(
                    group,
                    shapes::circle(1.0, Style::default()),
                )],
                PlayOpts::default(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::MismatchedMorph { .. }));
    }
}
