//! Time sources for delay-based playback

use super::playback::{Playback, PlaybackState};
use super::step::AnimationStep;
use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock, measured from construction
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Plays a step sequence against a clock, using each step's `delay`
/// instead of fixed ticks.
pub struct ClockedPlayer<C: Clock> {
    clock: C,
    playback: Playback,
    steps: Vec<AnimationStep>,
    /// Clock reading that corresponds to step 0
    anchor_ms: u64,
}

impl<C: Clock> ClockedPlayer<C> {
    pub fn new(clock: C, steps: Vec<AnimationStep>) -> Self {
        let playback = Playback::for_steps(&steps);
        Self {
            clock,
            playback,
            steps,
            anchor_ms: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn current(&self) -> Option<&AnimationStep> {
        self.steps.get(self.playback.position())
    }

    pub fn play(&mut self) {
        self.playback.play();
        self.reanchor();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn reset(&mut self) {
        self.playback.reset();
    }

    /// Bring the position up to date with the clock while playing
    pub fn poll(&mut self) -> Option<&AnimationStep> {
        if self.playback.state() == PlaybackState::Playing {
            let elapsed = self.clock.now_ms().saturating_sub(self.anchor_ms);
            self.playback.seek_to_time(elapsed, &self.steps);
        }
        self.current()
    }

    /// Pin the current step's delay to "now" so resuming continues from it
    fn reanchor(&mut self) {
        let offset = self.current().map(|s| s.delay).unwrap_or(0);
        self.anchor_ms = self.clock.now_ms().saturating_sub(offset);
    }
}
