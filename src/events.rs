//! Playback events and the interval-driven ticker
//!
//! JSON-serializable events that any renderer can consume.

use crate::sequencer::{AnimationStep, Playback, PlaybackState, StepKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::{broadcast, watch};

/// Events emitted while a sequence plays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// A step became the current frame
    StepShown {
        index: usize,
        kind: StepKind,
        indices: Vec<usize>,
        array: Vec<i64>,
        description: String,
    },
    /// Playback stopped before the end
    Paused { index: usize },
    /// The last step was reached
    Completed { steps: usize },
}

impl PlaybackEvent {
    pub fn step_shown(index: usize, step: &AnimationStep) -> Self {
        PlaybackEvent::StepShown {
            index,
            kind: step.kind,
            indices: step.indices.clone(),
            array: step.array.clone(),
            description: step.description.clone(),
        }
    }

    /// Serialize to JSON line
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Broadcast-based event stream for multiple consumers
pub struct EventStream {
    tx: broadcast::Sender<PlaybackEvent>,
}

impl EventStream {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all subscribers
    pub fn emit(&self, event: PlaybackEvent) {
        let _ = self.tx.send(event);
    }

    /// Subscribe to the event stream
    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventStream {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Play `steps` from the playback's current position, one step per
/// `period`, until playback completes or `pause` flips to `true`.
///
/// A playback sized for a different sequence is rebuilt for `steps`.
/// Dropping the pause sender lets playback run to the end.
pub async fn run_playback(
    playback: &mut Playback,
    steps: &[AnimationStep],
    period: Duration,
    events: &EventStream,
    mut pause: watch::Receiver<bool>,
) {
    if steps.is_empty() {
        return;
    }
    if playback.len() != steps.len() {
        log::debug!(
            "Playback sized for {} steps, rebuilding for {}",
            playback.len(),
            steps.len()
        );
        *playback = Playback::for_steps(steps);
    }
    playback.play();

    let mut interval = tokio::time::interval(period);
    // First tick completes immediately and shows the starting frame
    interval.tick().await;
    if let Some(step) = steps.get(playback.position()) {
        events.emit(PlaybackEvent::step_shown(playback.position(), step));
    }

    let mut pause_open = true;
    while playback.is_playing() {
        if *pause.borrow_and_update() {
            playback.pause();
            break;
        }
        tokio::select! {
            _ = interval.tick() => {}
            changed = pause.changed(), if pause_open => {
                if changed.is_err() {
                    pause_open = false;
                }
                continue;
            }
        }
        match playback.tick().and_then(|index| steps.get(index).map(|s| (index, s))) {
            Some((index, step)) => events.emit(PlaybackEvent::step_shown(index, step)),
            None => break,
        }
    }

    match playback.state() {
        PlaybackState::Complete => events.emit(PlaybackEvent::Completed { steps: steps.len() }),
        _ => events.emit(PlaybackEvent::Paused {
            index: playback.position(),
        }),
    }
}
