mod color;
mod units;

pub use color::{hsv_to_rgb, CUBE_FRAME_COLOR, NEUTRAL_GREYS, STAIRS_PALETTE, TRIANGLE_PALETTE};
pub use units::{scaled, SCALE_FACTOR};
