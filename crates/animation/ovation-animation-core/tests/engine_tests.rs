//! End-to-end scripting tests: play/wait/checkpoint/wipe against the frame
//! stream and slide index.

use ovation_animation_core::{
    shapes, Animation, Attr, AttrPath, Config, Drawable, Edge, Engine, EngineError, EngineEvent,
    NodeId, PlayOpts, Polyline, Recording, Style, TrackerId, Transform2D, Value, WipeOpts,
};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn tracker_values(rec: &Recording, id: TrackerId) -> Vec<f32> {
    rec.frames
        .iter()
        .flat_map(|f| f.changes.iter())
        .filter_map(|c| match (c.path, &c.value) {
            (AttrPath::Tracker(t), Value::Float(v)) if t == id => Some(*v),
            _ => None,
        })
        .collect()
}

fn transforms_for(rec: &Recording, node: NodeId) -> Vec<Transform2D> {
    rec.frames
        .iter()
        .flat_map(|f| f.changes.iter())
        .filter_map(|c| match (c.path, &c.value) {
            (AttrPath::Node { node: n, attr: Attr::Transform }, Value::Transform2D(t))
                if n == node =>
            {
                Some(*t)
            }
            _ => None,
        })
        .collect()
}

#[test]
fn play_advances_clock_in_whole_frames() {
    let mut engine = Engine::default();
    let node = engine
        .add(shapes::circle(1.0, Style::default()), None)
        .unwrap();
    engine
        .play(vec![Animation::fade_in(node)], PlayOpts::run_time(0.5))
        .unwrap();
    assert_eq!(engine.recording().frames.len(), 30);
    assert!(approx(engine.time(), 0.5, 1e-6));
}

#[test]
fn finished_animations_land_exactly_on_their_destination() {
    let mut engine = Engine::default();
    let node = engine
        .add(shapes::rectangle(2.0, 1.0, Style::default()), None)
        .unwrap();
    engine
        .play(
            vec![Animation::tween(node, Attr::Opacity, Value::Float(0.25))],
            // A run time that does not divide evenly into frames.
            PlayOpts::run_time(0.333),
        )
        .unwrap();
    // Bit-exact, not approximately: the final step snaps to the destination.
    assert_eq!(engine.scene().payload(node).unwrap().style.opacity, 0.25);
}

#[test]
fn tracker_plays_are_monotonic_with_exact_endpoints() {
    let mut engine = Engine::default();
    let k = engine.create_tracker(Value::Float(0.1));
    for target in [0.5, 0.95, 1.8] {
        engine
            .play(
                vec![engine.animate_tracker(k, Value::Float(target))],
                PlayOpts::default(),
            )
            .unwrap();
        assert_eq!(engine.tracker(k).unwrap(), Value::Float(target));
    }
    let values = tracker_values(engine.recording(), k);
    assert!(!values.is_empty());
    let mut prev = 0.1;
    for v in values {
        assert!(v >= prev - 1e-6, "tracker regressed: {prev} -> {v}");
        prev = v;
    }
    assert_eq!(prev, 1.8);
}

#[test]
fn reveal_grows_to_the_pristine_geometry() {
    let mut engine = Engine::default();
    let pristine = Polyline::open(vec![[0.0, 0.0], [4.0, 0.0]]);
    let node = engine
        .add(
            Drawable::polyline(pristine.clone(), Style::default()),
            None,
        )
        .unwrap();
    engine
        .play(vec![Animation::create(node)], PlayOpts::linear(1.0))
        .unwrap();

    // Mid-play frames carry partial prefixes in draw order.
    let mut saw_partial = false;
    for frame in &engine.recording().frames {
        for ev in &frame.events {
            if let EngineEvent::NodeRedrawn { node: n, drawable } = ev {
                if *n == node {
                    let path = drawable.geometry.path().unwrap();
                    let len = path.arc_length();
                    assert!(len <= 4.0 + 1e-4);
                    if len < 4.0 - 1e-3 {
                        saw_partial = true;
                        // Linear pacing: revealed length tracks time.
                        assert!(approx(len, 4.0 * frame.time, 1e-2));
                    }
                }
            }
        }
    }
    assert!(saw_partial);
    assert_eq!(
        engine.scene().payload(node).unwrap().geometry.path().unwrap(),
        &ovation_animation_core::PathData::single(pristine)
    );
}

#[test]
fn morph_resamples_and_snaps_to_destination() {
    let mut engine = Engine::default();
    let node = engine
        .add(
            Drawable::polyline(
                Polyline::open(vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]),
                Style::default(),
            ),
            None,
        )
        .unwrap();
    let target = Drawable::polyline(
        Polyline::open((0..12).map(|i| [i as f32 * 0.25, 1.0]).collect()),
        Style::stroked([1.0, 0.0, 0.0, 1.0]),
    );
    engine
        .play(vec![Animation::morph(node, target.clone())], PlayOpts::default())
        .unwrap();

    // Intermediate frames interpolate at the destination's cardinality.
    let mid = engine.recording().frames.iter().take(30).flat_map(|f| {
        f.events.iter().filter_map(|ev| match ev {
            EngineEvent::NodeRedrawn { node: n, drawable } if *n == node => Some(drawable),
            _ => None,
        })
    });
    for drawable in mid {
        assert_eq!(drawable.geometry.path().unwrap().point_count(), 12);
    }

    let payload = engine.scene().payload(node).unwrap();
    assert_eq!(payload.geometry, target.geometry);
    assert_eq!(payload.style, target.style);
    assert_eq!(payload.transform, target.transform);
}

#[test]
fn grow_from_edge_keeps_the_anchor_fixed() {
    let mut engine = Engine::default();
    let node = engine
        .add(shapes::circle(1.0, Style::default()).at([2.0, 0.0]), None)
        .unwrap();
    engine
        .play(
            vec![Animation::grow_from_edge(node, Edge::Left)],
            PlayOpts::default(),
        )
        .unwrap();

    // The left-edge point (geometry-space [-1, 0]) stays put all the way up.
    for t in transforms_for(engine.recording(), node) {
        let mapped = [
            t.translation[0] - t.scale[0],
            t.translation[1],
        ];
        assert!(approx(mapped[0], 1.0, 1e-3), "anchor drifted to {mapped:?}");
        assert!(approx(mapped[1], 0.0, 1e-3));
    }
    let end = engine.scene().payload(node).unwrap().transform;
    assert_eq!(end.translation, [2.0, 0.0]);
    assert_eq!(end.scale, [1.0, 1.0]);
}

#[test]
fn wipe_is_one_atomic_batch_that_swaps_the_groups() {
    let mut engine = Engine::default();
    let a = engine
        .add(shapes::circle(1.0, Style::default()), None)
        .unwrap();
    engine.checkpoint().unwrap();

    let b = engine
        .add(shapes::rectangle(2.0, 1.0, Style::default()), None)
        .unwrap();
    let b_home = engine.scene().payload(b).unwrap().transform.translation;
    engine.wipe(&[a], &[b], WipeOpts::default()).unwrap();
    engine.checkpoint().unwrap();

    assert!(!engine.scene().contains(a));
    let payload = engine.scene().payload(b).unwrap();
    assert_eq!(payload.transform.translation, b_home);
    assert_eq!(payload.style.opacity, 1.0);

    // One play step between the checkpoints, so a viewer can never land
    // mid-wipe.
    let slides = engine.slides();
    assert_eq!(slides.len(), 2);
    assert!(slides.get(1).unwrap().snapshot.contains(b));
    assert!(!slides.get(1).unwrap().snapshot.contains(a));
    assert!(engine.timeline().checkpoints_are_idle());
}

#[test]
fn wipe_retires_bindings_bound_into_the_outgoing_group() {
    let mut engine = Engine::default();
    let k = engine.create_tracker(Value::Float(0.0));
    let group = engine.add(Drawable::group(), None).unwrap();
    engine
        .always_redraw(&[k], Some(group), move |ctx| {
            let x = ctx.get_f32(k);
            shapes::dot([x, 0.0], Style::default())
        })
        .unwrap();
    let replacement = engine
        .add(shapes::circle(0.5, Style::default()), None)
        .unwrap();
    engine.wipe(&[group], &[replacement], WipeOpts::default()).unwrap();

    let before = engine.recording().frames.len();
    engine.set_tracker(k, Value::Float(3.0)).unwrap();
    engine.wait(0.1).unwrap();
    // The binding died with its node: no redraws fire for the dead subtree.
    let redraws = engine.recording().frames[before..]
        .iter()
        .flat_map(|f| f.events.iter())
        .filter(|ev| matches!(ev, EngineEvent::NodeRedrawn { .. }))
        .count();
    assert_eq!(redraws, 0);
}

#[test]
fn reactive_binding_follows_its_trackers_during_wait() {
    let mut engine = Engine::default();
    let k = engine.create_tracker(Value::Float(1.0));
    let node = engine
        .always_redraw(&[k], None, move |ctx| {
            let x = ctx.get_f32(k);
            shapes::dot([x, x * x], Style::default())
        })
        .unwrap();

    engine
        .play(
            vec![engine.animate_tracker(k, Value::Float(2.0))],
            PlayOpts::default(),
        )
        .unwrap();
    // The dot landed exactly on the curve at the tracker's final value.
    let bb = engine.scene().bbox(node).unwrap().unwrap();
    assert!(approx(bb.center()[0], 2.0, 1e-4));
    assert!(approx(bb.center()[1], 4.0, 1e-4));
}

#[test]
fn clean_bindings_are_not_reevaluated() {
    let mut engine = Engine::default();
    let k = engine.create_tracker(Value::Float(0.5));
    engine
        .always_redraw(&[k], None, move |ctx| {
            let x = ctx.get_f32(k);
            shapes::dot([x, 0.0], Style::default())
        })
        .unwrap();

    engine.wait(0.1).unwrap();
    let snapshot = engine.snapshot().unwrap();
    let before = engine.recording().frames.len();
    engine.wait(0.1).unwrap();

    // Nothing changed, so the pass is idempotent and emits no redraws.
    assert_eq!(engine.snapshot().unwrap(), snapshot);
    let redraws = engine.recording().frames[before..]
        .iter()
        .flat_map(|f| f.events.iter())
        .filter(|ev| matches!(ev, EngineEvent::NodeRedrawn { .. }))
        .count();
    assert_eq!(redraws, 0);
}

#[test]
fn undeclared_reads_widen_the_dependency_set() {
    let mut engine = Engine::default();
    let declared = engine.create_tracker(Value::Float(0.0));
    let hidden = engine.create_tracker(Value::Float(1.0));
    let node = engine
        .always_redraw(&[declared], None, move |ctx| {
            let x = ctx.get_f32(declared);
            let y = ctx.get_f32(hidden);
            shapes::dot([x, y], Style::default())
        })
        .unwrap();

    // A change to the tracker the binding only read (never declared) still
    // re-fires it.
    engine.set_tracker(hidden, Value::Float(5.0)).unwrap();
    engine.wait(0.05).unwrap();
    let bb = engine.scene().bbox(node).unwrap().unwrap();
    assert!(approx(bb.center()[1], 5.0, 1e-4));
}

#[test]
fn writing_a_tracker_from_a_binding_is_a_cycle() {
    let mut engine = Engine::default();
    let k = engine.create_tracker(Value::Float(0.0));
    let before = engine.scene().len();
    let err = engine
        .always_redraw(&[k], None, move |ctx| {
            let x = ctx.get_f32(k);
            ctx.set(k, Value::Float(x + 1.0));
            shapes::dot([x, 0.0], Style::default())
        })
        .unwrap_err();
    // Rejected at construction, before any frame; the write never applied.
    assert!(matches!(err, EngineError::DependencyCycle { .. }));
    assert_eq!(engine.scene().len(), before);
    assert_eq!(engine.tracker(k).unwrap(), Value::Float(0.0));
}

#[test]
fn unknown_references_are_rejected() {
    let mut engine = Engine::default();
    assert_eq!(
        engine
            .play(vec![Animation::fade_in(NodeId(42))], PlayOpts::default())
            .unwrap_err(),
        EngineError::invalid_node(NodeId(42))
    );
    assert_eq!(
        engine.tracker(TrackerId(3)).unwrap_err(),
        EngineError::invalid_tracker(TrackerId(3))
    );
    assert!(engine
        .always_redraw(&[TrackerId(0)], None, |_| Drawable::group())
        .is_err());
}

#[test]
fn slides_partition_the_timeline() {
    let mut engine = Engine::new(Config::default());
    let node = engine
        .add(shapes::circle(1.0, Style::default()), None)
        .unwrap();
    engine
        .play(vec![Animation::fade_in(node)], PlayOpts::default())
        .unwrap();
    engine.checkpoint().unwrap();
    engine.wait(0.5).unwrap();
    engine
        .play(vec![Animation::fade_out(node)], PlayOpts::default())
        .unwrap();
    engine.checkpoint().unwrap();

    let slides = engine.slides();
    assert_eq!(slides.len(), 2);
    let first = slides.get(0).unwrap();
    let second = slides.get(1).unwrap();
    assert_eq!(first.start_time, 0.0);
    assert_eq!(first.end_time, second.start_time);
    assert!(approx(second.end_time, engine.time(), 1e-6));
    assert!(engine.timeline().checkpoints_are_idle());
}

#[test]
fn recording_and_slide_index_round_trip_as_json() {
    let mut engine = Engine::default();
    let k = engine.create_tracker(Value::Float(0.0));
    let node = engine
        .add(shapes::arrow([0.0, 0.0], [1.0, 1.0], Style::default()), None)
        .unwrap();
    engine
        .play(
            vec![
                Animation::write(node),
                engine.animate_tracker(k, Value::Float(1.0)),
            ],
            PlayOpts::run_time(0.2),
        )
        .unwrap();
    engine.checkpoint().unwrap();

    let (recording, slides) = engine.finish();
    let json = serde_json::to_string(&recording).unwrap();
    let back: Recording = serde_json::from_str(&json).unwrap();
    assert_eq!(back, recording);

    let json = serde_json::to_string(&slides).unwrap();
    let back: ovation_animation_core::SlideIndex = serde_json::from_str(&json).unwrap();
    assert_eq!(back, slides);
}
