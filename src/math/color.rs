pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let h_prime = (h * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// One color per stair side, in side order
pub const STAIRS_PALETTE: [[f32; 3]; 4] = [
    [0.90, 0.45, 0.35], // Terracotta
    [0.35, 0.65, 0.85], // Sky
    [0.55, 0.80, 0.45], // Moss
    [0.95, 0.80, 0.35], // Sand
];

/// Bottom, right, left
pub const TRIANGLE_PALETTE: [[f32; 3]; 3] = [
    [0.85, 0.30, 0.30],
    [0.30, 0.75, 0.40],
    [0.30, 0.45, 0.85],
];

pub const CUBE_FRAME_COLOR: [f32; 3] = [0.35, 0.50, 0.75];

/// Connector greys for illusion mode; alternated so adjacent connectors
/// stay distinguishable without giving away depth.
pub const NEUTRAL_GREYS: [[f32; 3]; 2] = [[0.55, 0.55, 0.55], [0.62, 0.62, 0.62]];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_red() {
        let rgb = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!(rgb[1].abs() < 0.01);
        assert!(rgb[2].abs() < 0.01);
    }

    #[test]
    fn test_hsv_to_rgb_grey_when_unsaturated() {
        let rgb = hsv_to_rgb(0.4, 0.0, 0.6);
        assert!(rgb.iter().all(|c| (c - 0.6).abs() < 0.01));
    }

    #[test]
    fn test_palettes_are_distinct() {
        for (i, a) in STAIRS_PALETTE.iter().enumerate() {
            for b in &STAIRS_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_ne!(NEUTRAL_GREYS[0], NEUTRAL_GREYS[1]);
    }
}
