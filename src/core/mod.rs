pub mod clock;
pub mod frame;
pub mod sampler;

pub use clock::Clock;
pub use frame::{FixedFrames, FrameInfo, RealtimeFrames};
pub use sampler::{interpolate, sample, to_display, AnimationState, MarkerSample, MarkerStyle, RESTART_INDEX};
