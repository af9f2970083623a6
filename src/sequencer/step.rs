//! Animation steps - one frame of a recorded sort

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Compare,
    Swap,
    Complete,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so column widths like {:<8} apply
        f.pad(match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::Complete => "complete",
        })
    }
}

/// A single step of the trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationStep {
    /// Position within its own sequence, starting at 0
    pub id: usize,
    pub kind: StepKind,
    /// The two positions involved; empty for [`StepKind::Complete`]
    pub indices: Vec<usize>,
    /// Full array state after this step
    pub array: Vec<i64>,
    pub description: String,
    /// Scheduled offset from the start of playback, in milliseconds
    pub delay: u64,
}

impl AnimationStep {
    pub fn is_complete(&self) -> bool {
        self.kind == StepKind::Complete
    }

    /// Serialize to a single JSON line
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
