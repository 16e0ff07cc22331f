use std::time::Instant;

/// Longest delta a single tick reports, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Wall clock for the frame loop. Reports time since the previous tick,
/// capped so a stalled frame doesn't fling the marker across the path.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Seconds since the last tick, at most `MAX_FRAME_DELTA`
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(MAX_FRAME_DELTA)
    }

    /// Seconds since the clock was created
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Forget time spent while the caller wasn't ticking (e.g. paused)
    pub fn resume(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
