//! ovation-animation-core: script-driven presentation animation (core, render-agnostic)
//!
//! The engine owns a scene of drawables, a table of versioned value trackers,
//! and reactive bindings over them, and exposes a blocking, sequential script
//! API:
//! - `play` runs a batch of animations over a fixed-step virtual clock
//! - `wait` holds while reactive bindings keep updating
//! - `checkpoint` records a slide boundary with a full scene snapshot
//! - `wipe` swaps two groups of drawables as one atomic transition
//!
//! Output is a serializable `Recording` (per-frame changes and events) plus a
//! `SlideIndex` a viewer can seek by.

pub mod anim;
pub mod binding;
pub mod config;
pub mod easing;
pub mod engine;
pub mod error;
pub mod outputs;
pub mod slides;
pub mod timeline;
pub mod tracker;

pub use anim::{AnimKind, Animation};
pub use binding::{ReactiveBinding, ReactiveCtx};
pub use config::Config;
pub use easing::Easing;
pub use engine::{Engine, PlayOpts, WipeOpts};
pub use error::EngineError;
pub use outputs::{Change, EngineEvent, FrameOutputs, Recording};
pub use slides::{SlideEntry, SlideIndex};
pub use timeline::{Step, Timeline};
pub use tracker::{Tracker, TrackerTable};

pub use ovation_api_core::{
    Attr, AttrPath, BindingId, NodeId, TrackerId, Transform2D, Value, ValueKind,
};
pub use ovation_scene_core::{
    shapes, BBox, Corner, Drawable, Edge, Frame, Geometry, PathData, Polyline, SceneSnapshot,
    SceneStore, Style, DEFAULT_BUFF,
};
