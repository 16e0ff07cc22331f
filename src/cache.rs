use crate::illusion::{IllusionKind, IllusionParams, StairsParams};
use crate::path::build_stairs_path;
use crate::types::{Placement, Waypoint};

/// Bit-exact key for a parameter set; floats compare by representation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParamsKey {
    steps_per_side: u32,
    floats: [u32; 5],
    reveal_true_geometry: bool,
}

impl From<&IllusionParams> for ParamsKey {
    fn from(params: &IllusionParams) -> Self {
        Self {
            steps_per_side: params.steps_per_side,
            floats: [
                params.step_height.to_bits(),
                params.step_depth.to_bits(),
                params.bar_width.to_bits(),
                params.triangle_size.to_bits(),
                params.cube_size.to_bits(),
            ],
            reveal_true_geometry: params.reveal_true_geometry,
        }
    }
}

/// Key for the stairs path: only the fields the path reads. The reveal
/// flag is left out since the path never includes the last step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathKey {
    steps_per_side: u32,
    step_height: u32,
    step_depth: u32,
}

impl From<&StairsParams> for PathKey {
    fn from(params: &StairsParams) -> Self {
        Self {
            steps_per_side: params.steps_per_side,
            step_height: params.step_height.to_bits(),
            step_depth: params.step_depth.to_bits(),
        }
    }
}

/// Holds the last generated geometry and stairs path, regenerating only
/// when the illusion or its parameters change.
#[derive(Debug, Default)]
pub struct IllusionCache {
    placements: Option<((IllusionKind, ParamsKey), Vec<Placement>)>,
    path: Option<(PathKey, Vec<Waypoint>)>,
    misses: u64,
}

impl IllusionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placements(&mut self, kind: IllusionKind, params: &IllusionParams) -> &[Placement] {
        let key = (kind, ParamsKey::from(params));
        let stale = !matches!(&self.placements, Some((cached, _)) if *cached == key);

        if stale {
            log::debug!("Regenerating {kind} geometry");
            self.misses += 1;
            self.placements = Some((key, kind.generate(params)));
        }

        self.placements.as_ref().map(|(_, p)| p.as_slice()).unwrap_or_default()
    }

    pub fn stairs_path(&mut self, params: &IllusionParams) -> &[Waypoint] {
        let stairs = params.stairs();
        let key = PathKey::from(&stairs);
        let stale = !matches!(&self.path, Some((cached, _)) if *cached == key);

        if stale {
            log::debug!("Rebuilding stairs path");
            self.misses += 1;
            self.path = Some((key, build_stairs_path(&stairs)));
        }

        self.path.as_ref().map(|(_, p)| p.as_slice()).unwrap_or_default()
    }

    pub fn invalidate(&mut self) {
        self.placements = None;
        self.path = None;
    }

    /// Number of regenerations so far
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
