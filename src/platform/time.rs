//! Frame pacing
//!
//! Best-effort frame-rate cap: sleep out whatever is left of the frame
//! budget. A frame that overruns its budget is not compensated for; the
//! next frame simply starts late.

use std::thread;
use std::time::{Duration, Instant};

/// Caps a loop at a fixed frame interval
#[derive(Debug)]
pub struct FrameLimiter {
    interval: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_start: Instant::now(),
        }
    }

    /// Mark the start of a frame
    pub fn start_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Sleep out the remainder of the frame budget, if any
    pub fn cap(&self) {
        let elapsed = self.frame_start.elapsed();
        if let Some(remaining) = self.interval.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_stretches_fast_frames_to_the_interval() {
        let mut limiter = FrameLimiter::new(Duration::from_millis(20));
        limiter.start_frame();
        limiter.cap();
        assert!(limiter.frame_start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_cap_does_not_sleep_after_an_overrun() {
        let mut limiter = FrameLimiter::new(Duration::from_millis(5));
        limiter.start_frame();
        thread::sleep(Duration::from_millis(10));

        let before_cap = Instant::now();
        limiter.cap();
        assert!(before_cap.elapsed() < Duration::from_millis(5));
    }
}
