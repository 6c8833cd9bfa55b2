//! Core configuration for ovation-animation-core.

use ovation_scene_core::Frame;
use serde::{Deserialize, Serialize};

/// Engine sizing and pacing defaults. Keep this minimal; expand as needed
/// without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Virtual frames per second. The clock advances in exact `1/fps` steps
    /// derived from an integer frame counter, so replays are stable.
    pub fps: u32,

    /// Stage rectangle used by edge/corner layout and wipe drift.
    pub frame: Frame,

    /// Default run time of a play batch when neither the call nor any
    /// animation specifies one.
    pub default_run_time: f32,

    /// Default run time of `Write` reveals (slower pacing than `Create`).
    pub write_run_time: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 60,
            frame: Frame::default(),
            default_run_time: 1.0,
            write_run_time: 2.0,
        }
    }
}
