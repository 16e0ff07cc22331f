use super::clock::Clock;

/// Frame metadata handed to the per-frame callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator of wall-clock frames
/// Deltas are capped at [`MAX_FRAME_DELTA`](super::clock::MAX_FRAME_DELTA),
/// so below 10 fps playback runs slower than real time.
/// Use this in a loop: `for frame in RealtimeFrames::new().take(n) { ... }`
pub struct RealtimeFrames {
    clock: Clock,
    frame_number: u64,
}

impl RealtimeFrames {
    pub fn new() -> Self {
        Self {
            clock: Clock::new(),
            frame_number: 0,
        }
    }
}

impl Default for RealtimeFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RealtimeFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = self.clock.tick();
        let info = FrameInfo::new(self.frame_number, self.clock.elapsed(), delta);
        self.frame_number += 1;
        Some(info)
    }
}

/// Deterministic frames at a fixed rate, for headless playback and tests
#[derive(Debug, Clone)]
pub struct FixedFrames {
    delta: f32,
    frame_number: u64,
}

impl FixedFrames {
    pub fn new(fps: f32) -> Self {
        Self {
            delta: if fps > 0.0 { 1.0 / fps } else { 0.0 },
            frame_number: 0,
        }
    }
}

impl Iterator for FixedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        self.frame_number += 1;
        let time = self.frame_number as f32 * self.delta;
        Some(FrameInfo::new(self.frame_number - 1, time, self.delta))
    }
}
