//! Output contracts from the engine: the frame stream a rendering backend
//! consumes.
//!
//! Each virtual frame appends a `FrameOutputs` record carrying attribute
//! deltas plus semantic events. `NodeAdded`/`NodeRedrawn` carry the full
//! payload so a backend can reconstruct state forward-only, without access
//! to the store.

use ovation_api_core::{AttrPath, NodeId, Value};
use ovation_scene_core::Drawable;
use serde::{Deserialize, Serialize};

/// One changed attribute this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub path: AttrPath,
    pub value: Value,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EngineEvent {
    NodeAdded {
        node: NodeId,
        parent: Option<NodeId>,
        drawable: Drawable,
    },
    NodeRemoved {
        node: NodeId,
    },
    /// Geometry-level replacement (reveal step, morph step, reactive redraw).
    NodeRedrawn {
        node: NodeId,
        drawable: Drawable,
    },
    PlayStarted {
        animations: usize,
        run_time: f32,
    },
    PlayFinished {
        run_time: f32,
    },
    WaitFinished {
        duration: f32,
    },
    CheckpointRecorded {
        index: usize,
    },
}

/// Everything produced during one virtual frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameOutputs {
    pub frame: u64,
    pub time: f32,
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<EngineEvent>,
}

/// The full frame stream of a presentation, serializable for a viewer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub fps: u32,
    #[serde(default)]
    pub frames: Vec<FrameOutputs>,
}

impl Recording {
    pub fn new(fps: u32) -> Self {
        Self {
            fps,
            frames: Vec::new(),
        }
    }

    #[inline]
    pub fn push_frame(&mut self, frame: FrameOutputs) {
        self.frames.push(frame);
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
