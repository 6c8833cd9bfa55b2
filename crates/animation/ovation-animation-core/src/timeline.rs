//! Timeline: the ordered record of steps a presentation executed.
//!
//! Invariant: checkpoints never fall strictly inside a play interval. The
//! engine enforces this by construction (checkpoints only while idle); the
//! timeline can re-verify it for tests and tooling.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Step {
    Play {
        start: f32,
        /// Realized span in virtual time (whole frames).
        run_time: f32,
    },
    Wait {
        start: f32,
        duration: f32,
    },
    Checkpoint {
        index: usize,
        time: f32,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub steps: Vec<Step>,
}

impl Timeline {
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// `[start, start + duration)` of every play/wait step.
    pub fn busy_intervals(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.steps.iter().filter_map(|s| match s {
            Step::Play { start, run_time } => Some((*start, *start + *run_time)),
            Step::Wait { start, duration } => Some((*start, *start + *duration)),
            Step::Checkpoint { .. } => None,
        })
    }

    /// True when no checkpoint time lies strictly inside a busy interval.
    pub fn checkpoints_are_idle(&self) -> bool {
        let checkpoints: Vec<f32> = self
            .steps
            .iter()
            .filter_map(|s| match s {
                Step::Checkpoint { time, .. } => Some(*time),
                _ => None,
            })
            .collect();
        self.busy_intervals()
            .all(|(start, end)| checkpoints.iter().all(|t| *t <= start || *t >= end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoint_inside_play_is_detected() {
        let mut tl = Timeline::default();
        tl.push(Step::Play {
            start: 0.0,
            run_time: 1.0,
        });
        tl.push(Step::Checkpoint {
            index: 0,
            time: 1.0,
        });
        assert!(tl.checkpoints_are_idle());

        tl.push(Step::Play {
            start: 1.0,
            run_time: 2.0,
        });
        tl.push(Step::Checkpoint {
            index: 1,
            time: 1.5,
        });
        assert!(!tl.checkpoints_are_idle());
    }
}
