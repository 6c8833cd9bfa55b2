//! Slide index: seekable checkpoint records.
//!
//! Entries are append-only and immutable once recorded; a viewer can jump to
//! any checkpoint's snapshot without re-simulating prior animations.

use ovation_scene_core::SceneSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideEntry {
    pub index: usize,
    /// `[start_time, end_time)` of the segment preceding this checkpoint.
    pub start_time: f32,
    pub end_time: f32,
    pub snapshot: SceneSnapshot,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideIndex {
    pub entries: Vec<SlideEntry>,
}

impl SlideIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideEntry> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&SlideEntry> {
        self.entries.last()
    }
}
