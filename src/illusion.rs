use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scenes::{generate_cube, generate_stairs, generate_triangle};
use crate::types::Placement;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ParamError> {
    if !value.is_finite() {
        return Err(ParamError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ParamError::NonPositive { field, value });
    }
    Ok(())
}

/// Full parameter set shared by all illusions, as edited by the controls
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IllusionParams {
    pub steps_per_side: u32,
    pub step_height: f32,
    pub step_depth: f32,
    pub bar_width: f32,
    pub triangle_size: f32,
    pub cube_size: f32,
    pub reveal_true_geometry: bool,
}

impl Default for IllusionParams {
    fn default() -> Self {
        Self {
            steps_per_side: 4,
            step_height: 0.5,
            step_depth: 2.0,
            bar_width: 0.5,
            triangle_size: 4.0,
            cube_size: 3.0,
            reveal_true_geometry: false,
        }
    }
}

impl IllusionParams {
    pub fn stairs(&self) -> StairsParams {
        StairsParams {
            steps_per_side: self.steps_per_side,
            step_height: self.step_height,
            step_depth: self.step_depth,
            reveal_true_geometry: self.reveal_true_geometry,
        }
    }

    pub fn triangle(&self) -> TriangleParams {
        TriangleParams {
            bar_width: self.bar_width,
            triangle_size: self.triangle_size,
            reveal_true_geometry: self.reveal_true_geometry,
        }
    }

    pub fn cube(&self) -> CubeParams {
        CubeParams {
            size: self.cube_size,
            reveal_true_geometry: self.reveal_true_geometry,
        }
    }

    /// Validates only the fields `kind` reads
    pub fn validate_for(&self, kind: IllusionKind) -> Result<(), ParamError> {
        match kind {
            IllusionKind::Stairs => self.stairs().validate(),
            IllusionKind::Triangle => self.triangle().validate(),
            IllusionKind::Cube => self.cube().validate(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StairsParams {
    pub steps_per_side: u32,
    pub step_height: f32,
    pub step_depth: f32,
    pub reveal_true_geometry: bool,
}

impl StairsParams {
    pub fn total_steps(&self) -> usize {
        self.steps_per_side as usize * 4
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        check_positive("step_height", self.step_height)?;
        check_positive("step_depth", self.step_depth)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleParams {
    pub bar_width: f32,
    pub triangle_size: f32,
    pub reveal_true_geometry: bool,
}

impl TriangleParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        check_positive("triangle_size", self.triangle_size)?;
        check_positive("bar_width", self.bar_width)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubeParams {
    pub size: f32,
    pub reveal_true_geometry: bool,
}

impl CubeParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        check_positive("cube_size", self.size)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IllusionKind {
    Stairs,
    Triangle,
    Cube,
}

/// Text shown alongside an illusion
#[derive(Debug, Clone, Copy)]
pub struct Notes {
    pub title: &'static str,
    pub summary: &'static str,
    pub principle: &'static str,
    pub revealed: &'static str,
}

impl IllusionKind {
    pub const ALL: [IllusionKind; 3] = [IllusionKind::Stairs, IllusionKind::Triangle, IllusionKind::Cube];

    pub fn generate(&self, params: &IllusionParams) -> Vec<Placement> {
        match self {
            IllusionKind::Stairs => generate_stairs(&params.stairs()),
            IllusionKind::Triangle => generate_triangle(&params.triangle()),
            IllusionKind::Cube => generate_cube(&params.cube()),
        }
    }

    pub fn notes(&self) -> Notes {
        match self {
            IllusionKind::Stairs => Notes {
                title: "Penrose Stairs",
                summary: "A staircase that turns four corners and climbs on every step, \
                          yet arrives back where it started.",
                principle: "Local consistency: every pair of neighbouring steps is a valid \
                            staircase, and the eye never checks the loop as a whole.",
                revealed: "The final step actually sits a full flight below its neighbour; \
                           the loop only closes from one viewpoint.",
            },
            IllusionKind::Triangle => Notes {
                title: "Penrose Triangle",
                summary: "Three straight bars meeting at right angles to form a closed triangle.",
                principle: "Depth ambiguity: an orthographic view cannot tell whether two bars \
                            touch or merely overlap in the image.",
                revealed: "The side bars sit at different depths, so the corners never meet.",
            },
            IllusionKind::Cube => Notes {
                title: "Impossible Cube",
                summary: "A wireframe cube whose edges pass both in front of and behind each other.",
                principle: "Necker ambiguity: without shading or colour cues, either face can \
                            be read as the front.",
                revealed: "Colouring each edge shows which frame is really in front and where \
                           the connectors cross.",
            },
        }
    }
}

impl std::fmt::Display for IllusionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notes().title)
    }
}
