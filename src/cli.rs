// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::illusion::IllusionKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "impossible-objects")]
#[command(about = "Impossible object geometry and marker playback", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Show the real, non-closing geometry
    #[arg(long = "true-geometry", global = true)]
    pub true_geometry: bool,

    #[arg(long, global = true)]
    pub steps_per_side: Option<u32>,

    #[arg(long, global = true)]
    pub speed: Option<f32>,
}

impl Overrides {
    pub fn apply(&self, config: &mut AppConfig) {
        if self.true_geometry {
            config.params.reveal_true_geometry = true;
        }
        if let Some(steps) = self.steps_per_side {
            config.params.steps_per_side = steps;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the placements for an illusion as JSON
    Geometry {
        #[arg(long, value_enum, default_value = "stairs")]
        illusion: IllusionKind,

        /// Emit GPU instance matrices instead of placements
        #[arg(long)]
        instances: bool,
    },

    /// Print the stairs marker path as JSON
    Path,

    /// Run the marker along the stairs and print one sample per frame
    Simulate {
        #[arg(long, default_value = "120")]
        frames: usize,

        #[arg(long, default_value = "60")]
        fps: f32,

        /// Use wall-clock frame times instead of a fixed step
        #[arg(long)]
        realtime: bool,
    },

    /// Describe an illusion and what true geometry mode reveals
    Info {
        #[arg(long, value_enum, default_value = "stairs")]
        illusion: IllusionKind,
    },
}
