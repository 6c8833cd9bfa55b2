//! Value trackers: versioned mutable values driving reactive bindings.

use ovation_api_core::{TrackerId, Value};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    pub value: Value,
    /// Incremented on every set, including every animation-sampled step.
    pub version: u64,
}

/// Engine-owned table of trackers keyed by dense `TrackerId`. Trackers live
/// until the presentation ends, so slots are never freed.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct TrackerTable {
    items: Vec<Tracker>,
}

impl TrackerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tracker; the caller allocates the id and ids are dense, so
    /// the new slot index must match.
    pub fn insert(&mut self, id: TrackerId, value: Value) {
        debug_assert_eq!(id.0 as usize, self.items.len());
        self.items.push(Tracker { value, version: 0 });
    }

    pub fn contains(&self, id: TrackerId) -> bool {
        (id.0 as usize) < self.items.len()
    }

    pub fn get(&self, id: TrackerId) -> Option<&Tracker> {
        self.items.get(id.0 as usize)
    }

    /// Update a value, bumping the version counter.
    pub fn set(&mut self, id: TrackerId, value: Value) -> bool {
        match self.items.get_mut(id.0 as usize) {
            Some(t) => {
                t.value = value;
                t.version = t.version.wrapping_add(1);
                true
            }
            None => false,
        }
    }

    pub fn version(&self, id: TrackerId) -> Option<u64> {
        self.get(id).map(|t| t.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bumps_version() {
        let mut table = TrackerTable::new();
        let id = TrackerId(0);
        table.insert(id, Value::Float(0.1));
        assert_eq!(table.version(id), Some(0));
        assert!(table.set(id, Value::Float(0.5)));
        assert!(table.set(id, Value::Float(0.5)));
        assert_eq!(table.version(id), Some(2));
        assert_eq!(table.get(id).unwrap().value, Value::Float(0.5));
        assert!(!table.set(TrackerId(7), Value::Float(0.0)));
    }
}
