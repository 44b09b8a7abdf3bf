//! Wall-clock frame pacing.

use std::time::{Duration, Instant};

/// Paces frame presentation to a target rate.
///
/// [`tick`](FrameClock::tick) sleeps for whatever remains of the
/// current frame period. The first tick never sleeps; a tick that
/// arrives late resets the reference point instead of trying to catch
/// up, so a stalled caller is not punished with a burst of frames.
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    last: Option<Instant>,
}

impl FrameClock {
    /// A clock targeting `fps` frames per second.
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            last: None,
        }
    }

    /// The target frame period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until the next frame boundary.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last {
            let elapsed = now.duration_since(last);
            if elapsed < self.period {
                std::thread::sleep(self.period - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_matches_fps() {
        assert_eq!(FrameClock::new(30).period(), Duration::from_secs(1) / 30);
        // Zero fps is clamped rather than dividing by zero.
        assert_eq!(FrameClock::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn first_tick_does_not_block() {
        let mut clock = FrameClock::new(1);
        let start = Instant::now();
        clock.tick();
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
