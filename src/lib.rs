//! SortViz - natural-language control of a sorting visualization
//!
//! Two independent pieces:
//! - [`interpreter`] turns a free-text message into a scored command and a
//!   reply sentence.
//! - [`sequencer`] records a sort as replayable compare/swap/complete steps
//!   and provides the playback state machine.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod interpreter;
pub mod sequencer;

// Re-exports
pub use app::{VisualizationSettings, Visualizer};
pub use config::Config;
pub use error::{Error, Result};
pub use events::{run_playback, EventStream, PlaybackEvent};
pub use interpreter::{describe, parse, Action, Command, CommandInterpreter, ParsedCommand};
pub use sequencer::{generate, AnimationStep, Playback, PlaybackState, StepKind};
