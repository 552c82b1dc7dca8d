use std::time::{Duration, Instant};

use crate::tween::{Easing, Tween};

/// Payload delivered when a run's offset channel finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The panel reached its off-screen rest position and should unmount.
    Hide,
}

/// End values for one run. Both channels share the duration and easing so
/// the backdrop fade and the slide stay synchronized however far the panel
/// has to travel.
#[derive(Debug, Clone, Copy)]
pub struct RunTargets {
    pub opacity: f32,
    pub offset: f32,
    pub duration: Duration,
    pub easing: Easing,
}

/// One animated scalar plus its in-flight tween, if any.
#[derive(Debug, Default)]
struct Channel {
    value: f32,
    tween: Option<Tween>,
}

impl Channel {
    /// Cancel the in-flight tween, freezing the channel at its value at `now`.
    fn stop(&mut self, now: Instant) {
        if let Some(tween) = self.tween.take() {
            self.value = tween.value_at(now);
        }
    }

    fn start(&mut self, to: f32, now: Instant, duration: Duration, easing: Easing) {
        self.tween = Some(Tween::new(self.value, to, now, duration, easing));
    }

    /// Advance to `now`. Returns true on the tick the tween finishes.
    fn tick(&mut self, now: Instant) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        if tween.is_finished_at(now) {
            self.value = tween.to;
            self.tween = None;
            true
        } else {
            self.value = tween.value_at(now);
            false
        }
    }
}

/// Drives the backdrop-opacity and panel-offset channels in lock-step.
///
/// Callers batch `stop_all` -> `configure` -> `start_all` synchronously
/// within one reaction, so a new run never races a stale one on the same
/// channel and a cancelled run's completion can never be delivered.
#[derive(Debug, Default)]
pub struct Animator {
    opacity: Channel,
    offset: Channel,
    armed: Option<RunTargets>,
    outcome: Option<RunOutcome>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value
    }

    pub fn offset(&self) -> f32 {
        self.offset.value
    }

    pub fn is_animating(&self) -> bool {
        self.opacity.tween.is_some() || self.offset.tween.is_some()
    }

    /// Cancel both in-flight tweens, freezing each channel at its
    /// interpolated value at `now`. Any armed run and pending completion are
    /// dropped with them. No-op when nothing is running.
    pub fn stop_all(&mut self, now: Instant) {
        self.opacity.stop(now);
        self.offset.stop(now);
        self.armed = None;
        self.outcome = None;
    }

    /// Arm both channels with new end values. Does not start them.
    pub fn configure(&mut self, targets: RunTargets) {
        self.armed = Some(targets);
    }

    /// Start the armed run at `now`. `outcome` is delivered exactly once,
    /// when the offset channel finishes; the opacity channel's completion is
    /// not separately observed. No-op when nothing is armed.
    pub fn start_all(&mut self, now: Instant, outcome: Option<RunOutcome>) {
        let Some(targets) = self.armed.take() else {
            return;
        };
        self.opacity
            .start(targets.opacity, now, targets.duration, targets.easing);
        self.offset
            .start(targets.offset, now, targets.duration, targets.easing);
        self.outcome = outcome;
    }

    /// Seed both channel rest values without animating. Used when a freshly
    /// opened panel learns its first measured size and must start the reveal
    /// from the off-screen position.
    pub fn snap(&mut self, opacity: f32, offset: f32) {
        self.opacity.value = opacity;
        self.opacity.tween = None;
        self.offset.value = offset;
        self.offset.tween = None;
    }

    /// Advance both channels to `now`. Returns the run outcome on the tick
    /// the offset channel finishes.
    pub fn tick(&mut self, now: Instant) -> Option<RunOutcome> {
        self.opacity.tick(now);
        if self.offset.tick(now) {
            self.outcome.take()
        } else {
            None
        }
    }
}
