use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use crate::illusion::StairsParams;
use crate::math::{scaled, STAIRS_PALETTE};
use crate::types::Placement;

/// One side of the square stair loop
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    South,
    East,
    North,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::South, Side::East, Side::North, Side::West];

    pub fn from_index(index: usize) -> Side {
        Self::ALL[index % 4]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Starting corner of the side on a unit square footprint
    pub fn corner(self) -> Vec2 {
        match self {
            Side::South => Vec2::new(0.0, 0.0),
            Side::East => Vec2::new(1.0, 0.0),
            Side::North => Vec2::new(1.0, 1.0),
            Side::West => Vec2::new(0.0, 1.0),
        }
    }

    pub fn direction(self) -> Vec2 {
        match self {
            Side::South => Vec2::X,
            Side::East => Vec2::Y,
            Side::North => Vec2::NEG_X,
            Side::West => Vec2::NEG_Y,
        }
    }

    /// Rotation about the vertical axis. East and West get a quarter turn
    /// extra so their treads face the viewer like the other two sides.
    pub fn yaw(self) -> f32 {
        let base = self.index() as f32 * FRAC_PI_2;
        match self {
            Side::East | Side::West => base + FRAC_PI_2,
            Side::South | Side::North => base,
        }
    }

    pub fn color(self) -> [f32; 3] {
        STAIRS_PALETTE[self.index()]
    }
}

/// Planar (x, y) center of step `i`, footprint centered on the origin
fn step_center(i: usize, steps_per_side: usize, unit: f32) -> Vec2 {
    let side = Side::from_index(i / steps_per_side);
    let step_in_side = (i % steps_per_side) as f32;
    let side_length = steps_per_side as f32 * unit;

    let local = side.corner() * side_length + side.direction() * step_in_side * unit;
    local - Vec2::splat(side_length * 0.5)
}

/// Height of step `i`. In illusion mode the last step is dropped back to the
/// ground, which is what lets the loop appear to close.
fn step_height(i: usize, total_steps: usize, rise: f32, reveal_true_geometry: bool) -> f32 {
    if !reveal_true_geometry && i + 1 == total_steps {
        0.0
    } else {
        i as f32 * rise
    }
}

pub fn generate_stairs(params: &StairsParams) -> Vec<Placement> {
    let steps_per_side = params.steps_per_side as usize;
    let total_steps = params.total_steps();
    let unit = scaled(params.step_depth);
    let rise = scaled(params.step_height);

    let steps: Vec<Placement> = (0..total_steps)
        .map(|i| {
            let side = Side::from_index(i / steps_per_side);
            let center = step_center(i, steps_per_side, unit);
            let z = step_height(i, total_steps, rise, params.reveal_true_geometry);

            Placement::new(
                Vec3::new(center.x, center.y, z),
                Vec3::new(0.0, 0.0, side.yaw()),
                Vec3::new(unit, unit, rise),
                side.color(),
            )
        })
        .collect();

    log::debug!(
        "Stairs generated: {} steps ({} per side, true geometry: {})",
        steps.len(),
        steps_per_side,
        params.reveal_true_geometry
    );
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(steps_per_side: u32, reveal_true_geometry: bool) -> StairsParams {
        StairsParams {
            steps_per_side,
            step_height: 0.5,
            step_depth: 2.0,
            reveal_true_geometry,
        }
    }

    #[test]
    fn test_side_yaws() {
        let yaws: Vec<f32> = Side::ALL.iter().map(|s| s.yaw()).collect();
        assert_eq!(yaws[0], 0.0);
        assert!((yaws[1] - 2.0 * FRAC_PI_2).abs() < 1e-6);
        assert!((yaws[2] - 2.0 * FRAC_PI_2).abs() < 1e-6);
        assert!((yaws[3] - 4.0 * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_sides_walk_the_square() {
        // Each side's corner plus its direction lands on the next side's corner
        for side in Side::ALL {
            let next = Side::from_index(side.index() + 1);
            assert_eq!(side.corner() + side.direction(), next.corner());
        }
    }

    #[test]
    fn test_footprint_is_centered() {
        let steps = generate_stairs(&params(3, false));
        let sum: Vec2 = steps.iter().map(|p| p.position.truncate()).sum();
        let mean = sum / steps.len() as f32;
        assert!(mean.length() < 1e-5, "mean = {mean:?}");
    }

    #[test]
    fn test_first_step_of_each_side() {
        // unit = 1.0, side length = 2.0, offset = 1.0
        let steps = generate_stairs(&params(2, false));
        let corners: Vec<Vec2> = [0, 2, 4, 6]
            .iter()
            .map(|&i| steps[i].position.truncate())
            .collect();
        assert_eq!(
            corners,
            vec![
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_colors_follow_side() {
        let steps = generate_stairs(&params(2, true));
        assert_eq!(steps[1].color, STAIRS_PALETTE[0]);
        assert_eq!(steps[2].color, STAIRS_PALETTE[1]);
        assert_eq!(steps[7].color, STAIRS_PALETTE[3]);
    }

    #[test]
    fn test_zero_steps_is_empty() {
        assert!(generate_stairs(&params(0, false)).is_empty());
        assert!(generate_stairs(&params(0, true)).is_empty());
    }
}
