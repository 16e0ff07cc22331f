use std::f32::consts::FRAC_PI_3;

use glam::Vec3;

use crate::illusion::TriangleParams;
use crate::math::{scaled, TRIANGLE_PALETTE};
use crate::types::Placement;

/// sin(60deg), close enough for layout
const HEIGHT_RATIO: f32 = 0.866;

/// Depth offset of the side bars in true geometry mode, in bar widths
const TRUE_DEPTH_BARS: f32 = 2.0;

/// Creates the three bars of a Penrose triangle: bottom, right, left.
///
/// The bars lie in the XY plane with Y up. In illusion mode all three share
/// z = 0, so the corners appear to join. Revealing the true geometry pushes
/// the right bar forward and the left bar back.
pub fn generate_triangle(params: &TriangleParams) -> Vec<Placement> {
    let size = scaled(params.triangle_size);
    let bar = scaled(params.bar_width);
    let height = size * HEIGHT_RATIO;

    let depth = if params.reveal_true_geometry {
        bar * TRUE_DEPTH_BARS
    } else {
        0.0
    };
    let dimensions = Vec3::new(size, bar, bar);

    let bars = vec![
        Placement::new(
            Vec3::new(0.0, -height / 3.0, 0.0),
            Vec3::ZERO,
            dimensions,
            TRIANGLE_PALETTE[0],
        ),
        Placement::new(
            Vec3::new(size / 4.0, height / 6.0, depth),
            Vec3::new(0.0, 0.0, -FRAC_PI_3),
            dimensions,
            TRIANGLE_PALETTE[1],
        ),
        Placement::new(
            Vec3::new(-size / 4.0, height / 6.0, -depth),
            Vec3::new(0.0, 0.0, FRAC_PI_3),
            dimensions,
            TRIANGLE_PALETTE[2],
        ),
    ];

    log::debug!("Triangle generated: size {size}, depth offset {depth}");
    bars
}
