// Fixed-rate frame pacing for the host loop.
// The loop sleeps until `deadline()` then draws one frame and calls `advance()`.

use std::time::{Duration, Instant};

pub struct FramePacer {
    frame: Duration,
    next: Instant,
}

impl FramePacer {
    /// `fps` of zero is treated as one frame per second.
    pub fn new(fps: u32, now: Instant) -> Self {
        let frame = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
        Self { frame, next: now + frame }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the following frame. A frame that ran late restarts the
    /// cadence from `now` instead of queueing catch-up frames.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.frame;
        if self.next <= now {
            self.next = now + self.frame;
        }
    }
}
