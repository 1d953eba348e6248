use std::thread;
use std::time::{Duration, Instant};

/// Fixed-timestep frame clock. Each call to [FrameClock::tick] returns once the next
/// frame is due; without realtime pacing frames are due immediately.
pub struct FrameClock {
    interval: Duration,
    next_tick: Instant,
    realtime: bool,
}

impl FrameClock {
    pub fn new(interval: Duration, realtime: bool) -> Self {
        FrameClock {
            interval,
            next_tick: Instant::now(),
            realtime,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for the next frame deadline. A frame that finished late doesn't cause a
    /// burst of catch-up frames, the schedule restarts from now.
    pub fn tick(&mut self) {
        if !self.realtime {
            return;
        }
        let now = Instant::now();
        if self.next_tick > now {
            thread::sleep(self.next_tick - now);
            self.next_tick += self.interval;
        } else {
            self.next_tick = now + self.interval;
        }
    }
}
