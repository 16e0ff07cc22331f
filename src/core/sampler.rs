use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::path::RECONNECT_INDEX;
use crate::types::Waypoint;

/// Progress value the marker wraps back to after a lap
pub const RESTART_INDEX: f32 = RECONNECT_INDEX as f32;

/// Shortest path `sample` accepts: the reconnect waypoint plus one past it,
/// so a wrap lands strictly before the end
pub const MIN_SAMPLED_LEN: usize = RECONNECT_INDEX + 2;

/// Bounce amplitude as a fraction of the marker radius
pub const BOUNCE_FRACTION: f32 = 0.25;

/// Marker size and hover height above the tread
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub radius: f32,
    pub hover: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 0.2,
            hover: 0.2,
        }
    }
}

impl MarkerStyle {
    pub fn bounce_at(&self, progress: f32) -> f32 {
        (progress * TAU).sin() * self.radius * BOUNCE_FRACTION
    }
}

/// Distance travelled along a waypoint path, in waypoints
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    progress: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a given progress. Negative or non-finite values start at 0.
    pub fn at(progress: f32) -> Self {
        let progress = if progress.is_finite() { progress.max(0.0) } else { 0.0 };
        Self { progress }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Moves progress forward, wrapping to `RESTART_INDEX` once it reaches
    /// the last waypoint. `path_len` must be at least `MIN_SAMPLED_LEN`.
    fn advance(&mut self, distance: f32, path_len: usize) {
        let distance = if distance.is_finite() { distance.max(0.0) } else { 0.0 };
        self.progress += distance;

        if self.progress >= (path_len - 1) as f32 {
            self.progress = RESTART_INDEX;
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MarkerSample {
    /// Display space: Y up, path height mapped to Y, path y mapped to -Z
    pub position: Vec3,
    pub bounce: f32,
    pub progress: f32,
}

/// Linear interpolation along the path at `progress`, in path space.
///
/// `progress` is clamped to `[0, len - 1]`, so the result always lies on
/// the path. Returns `None` for paths with fewer than two waypoints.
pub fn interpolate(path: &[Waypoint], progress: f32) -> Option<Vec3> {
    if path.len() < 2 {
        return None;
    }

    let end = (path.len() - 1) as f32;
    let progress = if progress.is_finite() { progress.clamp(0.0, end) } else { 0.0 };
    let index = (progress.floor() as usize).min(path.len() - 2);
    let next = (index + 1) % path.len();
    let frac = progress - index as f32;

    let a = path[index];
    let b = path[next];
    Some(a + (b - a) * frac)
}

/// Maps a path-space point into display space. The stairs group is rotated
/// at render time so path z becomes up and path y runs into the screen.
pub fn to_display(point: Vec3) -> Vec3 {
    Vec3::new(point.x, point.z, -point.y)
}

/// Advances `state` by `delta * speed` and returns where the marker sits.
///
/// Returns `None` without touching `state` if the path is shorter than
/// `MIN_SAMPLED_LEN`; on such a path the wrap target would sit on the end
/// and the marker could never move again.
pub fn sample(
    path: &[Waypoint],
    state: &mut AnimationState,
    delta: f32,
    speed: f32,
    style: &MarkerStyle,
) -> Option<MarkerSample> {
    if path.len() < MIN_SAMPLED_LEN {
        return None;
    }

    state.advance(delta * speed, path.len());

    let progress = state.progress;
    let point = interpolate(path, progress)?;
    let bounce = style.bounce_at(progress);

    Some(MarkerSample {
        position: to_display(point) + Vec3::Y * (style.hover + bounce),
        bounce,
        progress,
    })
}
