/// Scene units per user-facing unit. Generators and the path builder
/// all go through `scaled` so their outputs line up.
pub const SCALE_FACTOR: f32 = 0.5;

pub fn scaled(value: f32) -> f32 {
    value * SCALE_FACTOR
}
