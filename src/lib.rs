pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod illusion;
pub mod math;
pub mod path;
pub mod scenes;
pub mod types;

pub use crate::core::{sample, AnimationState, MarkerSample, MarkerStyle};
pub use illusion::{CubeParams, IllusionKind, IllusionParams, ParamError, StairsParams, TriangleParams};
pub use path::build_stairs_path;
pub use scenes::{generate_cube, generate_stairs, generate_triangle};
pub use types::{Placement, PlacementInstance, Waypoint};
