//! A short scripted deck about secant slopes: wipes between slides, a
//! tracker-driven secant line redrawn reactively, and a morph sequence of
//! finer and finer step approximations under a curve.
//!
//! Run with `cargo run --example limits_deck`; prints a summary of the
//! recording and slide index it produces.

use ovation_animation_core::{
    shapes, Animation, Drawable, Edge, Engine, EngineError, PlayOpts, Polyline, Style, Value,
    WipeOpts, DEFAULT_BUFF,
};

fn f(x: f32) -> f32 {
    x * x / 4.0
}

/// Step-function outline under `f` over [0, 3] with `n` steps, sampled at
/// each step's right end.
fn steps(n: usize) -> Drawable {
    let mut points = vec![[0.0, 0.0]];
    let dx = 3.0 / n as f32;
    for i in 0..n {
        let x0 = i as f32 * dx;
        let x1 = x0 + dx;
        let y = f(x1);
        points.push([x0, y]);
        points.push([x1, y]);
    }
    points.push([3.0, 0.0]);
    Drawable::polyline(
        Polyline::open(points),
        Style::stroked([0.3, 0.9, 0.5, 1.0]),
    )
}

fn main() -> Result<(), EngineError> {
    let mut engine = Engine::default();
    let stage = engine.stage();

    // Title card: a framed rule, written on.
    let title = engine.add(Drawable::group().named("title"), None)?;
    let rule = engine.add(
        shapes::line([-2.5, 0.0], [2.5, 0.0], Style::default()),
        Some(title),
    )?;
    let frame = engine.add(
        shapes::rounded_rectangle(7.0, 2.0, 0.25, Style::stroked([0.4, 0.7, 1.0, 1.0])),
        Some(title),
    )?;
    engine.play(
        vec![Animation::write(frame), Animation::create(rule)],
        PlayOpts::default(),
    )?;
    engine.checkpoint()?;

    // Graph slide: axes, the curve, and a label box tucked into a corner.
    let graph = engine.add(Drawable::group().named("graph"), None)?;
    engine.add(
        shapes::arrow([-4.5, 0.0], [4.5, 0.0], Style::default()),
        Some(graph),
    )?;
    engine.add(
        shapes::arrow([0.0, -0.5], [0.0, 3.5], Style::default()),
        Some(graph),
    )?;
    engine.add(
        Drawable::polyline(
            Polyline::sampled(-4.0, 4.0, 64, f),
            Style::stroked([1.0, 0.8, 0.2, 1.0]),
        )
        .named("curve"),
        Some(graph),
    )?;
    engine.scene_mut().shift(graph, [0.0, -1.0])?;
    engine.wipe(&[title], &[graph], WipeOpts::default())?;

    let badge = engine.add(
        shapes::rounded_rectangle(2.0, 0.8, 0.15, Style::stroked([0.6, 0.6, 0.6, 1.0])),
        None,
    )?;
    engine
        .scene_mut()
        .to_corner(badge, ovation_animation_core::Corner::UpLeft, DEFAULT_BUFF, &stage)?;
    engine.play(vec![Animation::fade_in(badge)], PlayOpts::run_time(0.5))?;
    engine.checkpoint()?;

    // Secant slide: a tracker drives the offset of the second intersection
    // point; line and dot are redrawn reactively as it animates toward zero.
    let a = 1.0_f32;
    let dx = engine.create_tracker(Value::Float(2.0));
    let secant = engine.always_redraw(&[dx], Some(graph), move |ctx| {
        let h = ctx.get_f32(dx).max(1e-3);
        let (x0, y0) = (a, f(a));
        let (x1, y1) = (a + h, f(a + h));
        // Extend the chord a little past both points.
        let dir = [(x1 - x0) / h, (y1 - y0) / h];
        Drawable::polyline(
            Polyline::open(vec![
                [x0 - dir[0], y0 - dir[1]],
                [x1 + dir[0], y1 + dir[1]],
            ]),
            Style::stroked([0.4, 0.9, 1.0, 1.0]),
        )
    })?;
    let touch = engine.always_redraw(&[dx], Some(graph), move |ctx| {
        let h = ctx.get_f32(dx).max(1e-3);
        shapes::dot([a + h, f(a + h)], Style::stroked([1.0, 0.4, 0.4, 1.0]))
    })?;
    engine.play(vec![Animation::create(secant)], PlayOpts::default())?;
    for target in [1.0, 0.4, 0.05] {
        engine.play(
            vec![engine.animate_tracker(dx, Value::Float(target))],
            PlayOpts::default(),
        )?;
        engine.wait(0.25)?;
    }

    // Call out the point of tangency.
    let ring = {
        let bb = engine.scene().bbox(touch)?.unwrap_or_else(|| {
            ovation_animation_core::BBox::of_point([a, f(a)])
        });
        engine.add(
            shapes::surrounding_rect(&bb, 0.2, 0.1, Style::stroked([1.0, 1.0, 0.3, 1.0])),
            None,
        )?
    };
    engine.play(
        vec![Animation::grow_from_edge(ring, Edge::Left)],
        PlayOpts::run_time(0.75),
    )?;
    engine.checkpoint()?;

    // Area slide: step approximations refined by morphing, coarse to fine.
    let area = engine.add(steps(4).named("steps"), Some(graph))?;
    engine.play(vec![Animation::fade_in(area)], PlayOpts::run_time(0.5))?;
    for n in [8, 16, 32] {
        engine.play(vec![Animation::morph(area, steps(n))], PlayOpts::default())?;
        engine.wait(0.25)?;
    }
    engine.checkpoint()?;

    // Closing: clear the stage with a downward wipe onto a single mark.
    let coda = engine.add(shapes::circle(0.4, Style::default()), None)?;
    engine.wipe(
        &[graph, badge, ring],
        &[coda],
        WipeOpts {
            run_time: Some(1.5),
            toward: Edge::Down,
        },
    )?;
    engine.checkpoint()?;

    let (recording, slides) = engine.finish();
    let changes: usize = recording.frames.iter().map(|f| f.changes.len()).sum();
    let events: usize = recording.frames.iter().map(|f| f.events.len()).sum();
    println!(
        "{} slides, {} frames at {} fps ({} changes, {} events)",
        slides.len(),
        recording.frames.len(),
        recording.fps,
        changes,
        events
    );
    for slide in &slides.entries {
        println!(
            "  slide {}: [{:.2}s, {:.2}s) {} nodes",
            slide.index,
            slide.start_time,
            slide.end_time,
            slide.snapshot.nodes.len()
        );
    }
    Ok(())
}
