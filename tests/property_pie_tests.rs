use budget_chart::core::{PIE_START_ANGLE_DEG, PieInput, project_pie};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sweeps_total_a_full_turn(
        values in prop::collection::vec(prop::option::of(-100.0f64..1.0e6), 1..24)
    ) {
        let inputs: Vec<PieInput> = values
            .iter()
            .enumerate()
            .map(|(index, value)| PieInput::new(format!("E{index}"), *value))
            .collect();
        let slices = project_pie(&inputs);

        let positive = values.iter().flatten().filter(|value| **value > 0.0).count();
        prop_assert_eq!(slices.len(), positive);
        if slices.is_empty() {
            return Ok(());
        }

        let total: f64 = slices.iter().map(|slice| slice.sweep_angle_deg).sum();
        prop_assert!((total - 360.0).abs() <= 1e-6);
        prop_assert_eq!(slices[0].start_angle_deg, PIE_START_ANGLE_DEG);
        for pair in slices.windows(2) {
            let end = pair[0].start_angle_deg + pair[0].sweep_angle_deg;
            prop_assert!((pair[1].start_angle_deg - end).abs() <= 1e-9);
        }
    }
}

proptest! {
    #[test]
    fn tiny_trailing_slice_keeps_a_valid_sweep(
        values in prop::collection::vec(1.0f64..1.0e6, 1..12),
        tiny in 1.0e-15f64..1.0e-6
    ) {
        let mut inputs: Vec<PieInput> = values
            .iter()
            .enumerate()
            .map(|(index, value)| PieInput::new(format!("E{index}"), Some(*value)))
            .collect();
        inputs.push(PieInput::new("Tiny", Some(tiny)));

        let slices = project_pie(&inputs);
        prop_assert_eq!(slices.len(), inputs.len());
        for slice in &slices {
            prop_assert!((0.0..=360.0).contains(&slice.sweep_angle_deg));
        }
    }
}
