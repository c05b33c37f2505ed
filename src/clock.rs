//! Frame timing.

use std::time::{Duration, Instant};

/// Tracks the time since start and the time between frames.
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start, last: start }
    }

    /// Marks a new frame and returns the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        delta.as_secs_f32()
    }

    /// Seconds since the clock was created.
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Seconds from start to the most recent tick.
    pub fn frame_time(&self) -> f32 {
        self.last.duration_since(self.start).as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts frames and reports the average frame rate once per interval.
pub struct FpsCounter {
    interval: Duration,
    frames: u32,
    accumulated: f32,
}

impl FpsCounter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frames: 0,
            accumulated: 0.0,
        }
    }

    /// Adds one frame. Returns the average rate when an interval has passed.
    pub fn frame(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.accumulated += delta;
        if self.accumulated < self.interval.as_secs_f32() {
            return None;
        }
        let fps = self.frames as f32 / self.accumulated;
        self.frames = 0;
        self.accumulated = 0.0;
        Some(fps)
    }
}
