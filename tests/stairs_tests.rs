use impossible_objects::math::SCALE_FACTOR;
use impossible_objects::{generate_stairs, StairsParams};

#[cfg(test)]
mod stairs_tests {
    use super::*;

    fn params(steps_per_side: u32, reveal_true_geometry: bool) -> StairsParams {
        StairsParams {
            steps_per_side,
            step_height: 0.5,
            step_depth: 2.0,
            reveal_true_geometry,
        }
    }

    #[test]
    fn test_step_count_is_four_sides() {
        for steps_per_side in 1..=8 {
            let steps = generate_stairs(&params(steps_per_side, false));
            assert_eq!(steps.len(), 4 * steps_per_side as usize);
        }
    }

    #[test]
    fn test_reference_staircase() {
        let steps = generate_stairs(&params(4, false));
        let rise = 0.5 * SCALE_FACTOR;

        assert_eq!(steps.len(), 16);
        assert_eq!(steps[15].position.z, 0.0, "Last step should drop back to the ground");
        assert_eq!(steps[14].position.z, 14.0 * rise);
    }

    #[test]
    fn test_illusion_mode_has_single_discontinuity() {
        let steps = generate_stairs(&params(3, false));
        let rise = 0.5 * SCALE_FACTOR;
        let total = steps.len();

        for (i, step) in steps.iter().enumerate().take(total - 1) {
            assert_eq!(step.position.z, i as f32 * rise, "Step {i} height");
        }
        assert_eq!(steps[total - 2].position.z, (total - 2) as f32 * rise);
        assert_eq!(steps[total - 1].position.z, 0.0);
    }

    #[test]
    fn test_true_geometry_climbs_monotonically() {
        let steps = generate_stairs(&params(5, true));

        for pair in steps.windows(2) {
            assert!(
                pair[1].position.z > pair[0].position.z,
                "Heights should strictly increase: {} then {}",
                pair[0].position.z,
                pair[1].position.z
            );
        }
    }

    #[test]
    fn test_modes_differ_only_in_last_step() {
        let illusion = generate_stairs(&params(2, false));
        let revealed = generate_stairs(&params(2, true));
        let last = illusion.len() - 1;

        assert_eq!(illusion[..last], revealed[..last]);
        assert_ne!(illusion[last].position.z, revealed[last].position.z);
        assert_eq!(illusion[last].position.truncate(), revealed[last].position.truncate());
    }

    #[test]
    fn test_adjacent_steps_are_one_unit_apart() {
        let steps = generate_stairs(&params(4, false));
        let unit = 2.0 * SCALE_FACTOR;

        for pair in steps.windows(2) {
            let d = pair[0].position.truncate().distance(pair[1].position.truncate());
            assert!((d - unit).abs() < 1e-5, "Planar gap {d}");
        }
        // The loop closes in plan view
        let wrap = steps[15].position.truncate().distance(steps[0].position.truncate());
        assert!((wrap - unit).abs() < 1e-5);
    }

    #[test]
    fn test_zero_steps_is_empty() {
        assert!(generate_stairs(&params(0, false)).is_empty());
    }

    #[test]
    fn test_generation_is_idempotent() {
        let p = params(6, false);
        assert_eq!(generate_stairs(&p), generate_stairs(&p));
    }
}
