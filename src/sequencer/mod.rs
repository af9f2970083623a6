//! Step sequencer - replayable traces of a sorting algorithm

mod bubble;
pub mod clock;
pub mod playback;
mod step;

pub use bubble::generate;
pub use clock::{Clock, ClockedPlayer, ManualClock, SystemClock};
pub use playback::{Playback, PlaybackState};
pub use step::{AnimationStep, StepKind};
