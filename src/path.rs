use glam::Vec3;

use crate::illusion::StairsParams;
use crate::math::scaled;
use crate::scenes::generate_stairs;
use crate::types::Waypoint;

/// Index the marker re-enters the path at after each lap
pub const RECONNECT_INDEX: usize = 1;

/// Builds the marker path over the stairs.
///
/// One waypoint per step except the last, sitting on top of the tread
/// (`(i + 1) * rise`). The discontinuous final step is skipped; instead a
/// synthetic waypoint over step 1 at `2 * rise` closes the loop, so the
/// marker keeps climbing instead of dropping back to step 0.
///
/// Returns an empty path when there are no steps.
pub fn build_stairs_path(params: &StairsParams) -> Vec<Waypoint> {
    let steps = generate_stairs(params);
    if steps.len() <= RECONNECT_INDEX {
        return Vec::new();
    }

    let rise = scaled(params.step_height);
    let on_tread = |i: usize| {
        let center = steps[i].position;
        Vec3::new(center.x, center.y, (i + 1) as f32 * rise)
    };

    let path: Vec<Waypoint> = (0..steps.len() - 1)
        .map(&on_tread)
        .chain(std::iter::once(on_tread(RECONNECT_INDEX)))
        .collect();

    log::debug!("Stairs path built: {} waypoints", path.len());
    path
}
