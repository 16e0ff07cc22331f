use std::f32::consts::FRAC_PI_4;

use glam::{Vec2, Vec3};

use crate::illusion::CubeParams;
use crate::math::{hsv_to_rgb, scaled, CUBE_FRAME_COLOR, NEUTRAL_GREYS};
use crate::types::Placement;

/// Y rotation on the crossing connectors. Roughly 3pi, i.e. a flip that
/// lands a few milliradians short of pi. Keep as is: the visible skew is
/// part of the effect.
pub const CONNECTOR_FLIP: f32 = 9.42;

const EDGE_THICKNESS: f32 = 0.08;
const DEPTH_GAP: f32 = 0.1;

pub const EDGES_PER_FRAME: usize = 4;
pub const CONNECTOR_COUNT: usize = 4;
pub const CUBE_ELEMENT_COUNT: usize = 2 * EDGES_PER_FRAME + CONNECTOR_COUNT;

/// Corners in connector order: top-left, top-right, bottom-right, bottom-left
const CORNERS: [Vec2; 4] = [
    Vec2::new(-0.5, 0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(-0.5, -0.5),
];

fn frame_edges(center: Vec3, size: f32, thickness: f32) -> [(Vec3, Vec3); EDGES_PER_FRAME] {
    let half = size * 0.5;
    let horizontal = Vec3::new(size, thickness, thickness);
    let vertical = Vec3::new(thickness, size, thickness);
    [
        (center + Vec3::new(0.0, half, 0.0), horizontal),  // Top
        (center + Vec3::new(half, 0.0, 0.0), vertical),    // Right
        (center + Vec3::new(0.0, -half, 0.0), horizontal), // Bottom
        (center + Vec3::new(-half, 0.0, 0.0), vertical),   // Left
    ]
}

fn element_color(index: usize, is_connector: bool, reveal_true_geometry: bool) -> [f32; 3] {
    if reveal_true_geometry {
        hsv_to_rgb(index as f32 / CUBE_ELEMENT_COUNT as f32, 0.7, 0.9)
    } else if is_connector {
        NEUTRAL_GREYS[index % NEUTRAL_GREYS.len()]
    } else {
        CUBE_FRAME_COLOR
    }
}

/// Creates the impossible cube: back frame edges, front frame edges, then
/// the four corner connectors. Always 12 placements.
pub fn generate_cube(params: &CubeParams) -> Vec<Placement> {
    let size = scaled(params.size);
    let thickness = size * EDGE_THICKNESS;
    let gap = size * DEPTH_GAP;
    let quarter = size / 4.0;

    let back = Vec3::new(-quarter, quarter, -gap);
    let front = Vec3::new(quarter, -quarter, gap);

    let edges = frame_edges(back, size, thickness)
        .into_iter()
        .chain(frame_edges(front, size, thickness))
        .map(|(position, dimensions)| (position, Vec3::ZERO, dimensions, false));

    let connectors = CORNERS.iter().enumerate().map(|(i, corner)| {
        let from = back + (*corner * size).extend(0.0);
        let to = front + (*corner * size).extend(0.0);
        let (tilt, flip) = if i % 2 == 0 {
            (FRAC_PI_4, 0.0)
        } else {
            (-FRAC_PI_4, CONNECTOR_FLIP)
        };
        (
            (from + to) * 0.5,
            Vec3::new(0.0, flip, tilt),
            Vec3::new(thickness, from.distance(to), thickness),
            true,
        )
    });

    let elements: Vec<Placement> = edges
        .chain(connectors)
        .enumerate()
        .map(|(i, (position, rotation, dimensions, is_connector))| {
            Placement::new(
                position,
                rotation,
                dimensions,
                element_color(i, is_connector, params.reveal_true_geometry),
            )
        })
        .collect();

    log::debug!("Cube generated: {} elements, size {size}", elements.len());
    elements
}
