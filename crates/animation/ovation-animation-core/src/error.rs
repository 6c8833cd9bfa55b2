//! Error taxonomy for the animation engine.
//!
//! All errors are raised synchronously at the offending call and never
//! retried; `play` validates its whole batch before mutating anything.

use ovation_api_core::{BindingId, NodeId, TrackerId};
use ovation_scene_core::SceneError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EngineError {
    /// The operation targets a drawable or tracker that is not currently
    /// owned by the engine. `target` is the formatted path ("n7", "t3").
    #[error("invalid reference: {target} is not owned by the engine")]
    InvalidReference { target: String },

    /// A reactive binding depends, directly or transitively, on a tracker it
    /// itself writes.
    #[error("dependency cycle: binding b{} writes tracker t{}", .binding.0, .tracker.0)]
    DependencyCycle {
        binding: BindingId,
        tracker: TrackerId,
    },

    /// A morph source or destination has no point data to resample from.
    #[error("mismatched morph on n{}: {reason}", .node.0)]
    MismatchedMorph { node: NodeId, reason: String },

    /// Checkpoint requested while the engine is not idle.
    #[error("invalid checkpoint: engine is {state}")]
    InvalidCheckpoint { state: String },
}

impl EngineError {
    pub fn invalid_node(id: NodeId) -> Self {
        EngineError::InvalidReference {
            target: format!("n{}", id.0),
        }
    }

    pub fn invalid_tracker(id: TrackerId) -> Self {
        EngineError::InvalidReference {
            target: format!("t{}", id.0),
        }
    }
}

impl From<SceneError> for EngineError {
    fn from(err: SceneError) -> Self {
        match err {
            SceneError::InvalidReference { id } => EngineError::invalid_node(id),
            // `SceneError` is `#[non_exhaustive]` in a foreign crate, so a
            // wildcard arm is required even though it has no other variants.
            _ => unreachable!("unhandled SceneError variant"),
        }
    }
}
