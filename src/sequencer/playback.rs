//! Playback state machine over a precomputed step sequence
//!
//! Only tracks position and state; timers belong to whoever drives it
//! (see [`crate::events::run_playback`] and [`super::clock::ClockedPlayer`]).

use super::step::AnimationStep;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Nothing played yet
    Idle,
    Playing,
    Paused,
    /// Paused on the last step after playing through
    Complete,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Playing => write!(f, "playing"),
            Self::Paused => write!(f, "paused"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    len: usize,
    position: usize,
    state: PlaybackState,
}

impl Playback {
    /// Playback over `len` steps, idle at step 0
    pub fn new(len: usize) -> Self {
        Self {
            len,
            position: 0,
            state: PlaybackState::Idle,
        }
    }

    pub fn for_steps(steps: &[AnimationStep]) -> Self {
        Self::new(steps.len())
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.last_index()
    }

    /// Start or resume. Restarts from step 0 when already at the end.
    pub fn play(&mut self) {
        if self.state == PlaybackState::Playing {
            return;
        }
        if self.is_at_end() {
            self.position = 0;
        }
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Step forward by one without touching the play state
    pub fn next(&mut self) {
        self.position = (self.position + 1).min(self.last_index());
    }

    /// Step back by one without touching the play state
    pub fn prev(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Jump to `index`, clamped to the sequence
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.last_index());
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.state = PlaybackState::Paused;
    }

    /// Advance one step while playing. Returns the new position, or `None`
    /// when nothing moved. Landing on the last step completes playback.
    pub fn tick(&mut self) -> Option<usize> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        if self.is_at_end() {
            self.state = PlaybackState::Complete;
            return None;
        }
        self.position += 1;
        if self.is_at_end() {
            self.state = PlaybackState::Complete;
        }
        Some(self.position)
    }

    /// Position at the last step whose `delay` is not after `elapsed_ms`.
    pub fn seek_to_time(&mut self, elapsed_ms: u64, steps: &[AnimationStep]) -> usize {
        let index = steps
            .iter()
            .rposition(|s| s.delay <= elapsed_ms)
            .unwrap_or(0);
        self.seek(index);
        if self.is_playing() && self.is_at_end() {
            self.state = PlaybackState::Complete;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::generate;

    #[test]
    fn test_initial_state() {
        let playback = Playback::new(5);
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.position(), 0);
        assert_eq!(playback.last_index(), 4);
    }

    #[test]
    fn test_play_to_completion() {
        let mut playback = Playback::new(3);
        playback.play();
        assert!(playback.is_playing());
        assert_eq!(playback.tick(), Some(1));
        assert_eq!(playback.tick(), Some(2));
        assert_eq!(playback.state(), PlaybackState::Complete);
        assert_eq!(playback.tick(), None);
        assert_eq!(playback.position(), 2);
    }

    #[test]
    fn test_play_at_end_restarts() {
        let mut playback = Playback::new(3);
        playback.seek(2);
        playback.play();
        assert_eq!(playback.position(), 0);
        assert!(playback.is_playing());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut playback = Playback::new(4);
        playback.play();
        playback.tick();
        playback.pause();
        assert_eq!(playback.state(), PlaybackState::Paused);
        assert_eq!(playback.tick(), None);
        playback.play();
        assert_eq!(playback.position(), 1);
        assert_eq!(playback.tick(), Some(2));
    }

    #[test]
    fn test_toggle() {
        let mut playback = Playback::new(3);
        playback.toggle();
        assert_eq!(playback.state(), PlaybackState::Playing);
        playback.toggle();
        assert_eq!(playback.state(), PlaybackState::Paused);

        playback.seek(2);
        playback.toggle();
        assert_eq!(playback.state(), PlaybackState::Playing);
        assert_eq!(playback.position(), 0);
    }

    #[test]
    fn test_pause_only_from_playing() {
        let mut playback = Playback::new(4);
        playback.pause();
        assert_eq!(playback.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_manual_stepping_is_clamped() {
        let mut playback = Playback::new(3);
        playback.prev();
        assert_eq!(playback.position(), 0);
        playback.next();
        playback.next();
        playback.next();
        assert_eq!(playback.position(), 2);
        assert_eq!(playback.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_reset_pauses_at_start() {
        let mut playback = Playback::new(3);
        playback.play();
        playback.tick();
        playback.reset();
        assert_eq!(playback.position(), 0);
        assert_eq!(playback.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_single_step_sequence() {
        let mut playback = Playback::new(1);
        playback.play();
        assert_eq!(playback.tick(), None);
        assert_eq!(playback.state(), PlaybackState::Complete);
    }

    #[test]
    fn test_seek_to_time() {
        let steps = generate(&[5, 3, 8], 1000);
        let mut playback = Playback::for_steps(&steps);
        assert_eq!(playback.seek_to_time(0, &steps), 0);
        assert_eq!(playback.seek_to_time(2500, &steps), 2);
        playback.play();
        assert_eq!(playback.seek_to_time(60_000, &steps), steps.len() - 1);
        assert_eq!(playback.state(), PlaybackState::Complete);
    }
}
