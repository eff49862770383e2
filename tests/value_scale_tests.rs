use approx::assert_relative_eq;
use budget_chart::core::scale::{magnitude_step, round_up_to_step};
use budget_chart::core::{
    DEFAULT_CEILING, Series, ValueScale, compute_scale, compute_scale_with_divisions,
    stacked_extent_values,
};

#[test]
fn ceiling_rounds_up_by_magnitude() {
    assert_eq!(compute_scale([1_234.0]).ceiling(), 2_000.0);
    assert_eq!(compute_scale([57.0, 12.0]).ceiling(), 60.0);
    assert_eq!(compute_scale([450.0]).ceiling(), 500.0);
    assert_eq!(compute_scale([7.2]).ceiling(), 8.0);
    assert_relative_eq!(compute_scale([0.37]).ceiling(), 0.4, epsilon = 1e-12);
}

#[test]
fn exact_steps_are_not_bumped() {
    assert_eq!(compute_scale([1_000.0]).ceiling(), 1_000.0);
    assert_eq!(compute_scale([60.0]).ceiling(), 60.0);
}

#[test]
fn empty_or_all_zero_input_uses_fallback() {
    let empty = compute_scale(std::iter::empty());
    assert_eq!(empty.ceiling(), DEFAULT_CEILING);
    assert_eq!(empty.floor(), 0.0);
    assert_eq!(empty.divisions(), 5);

    let zeros = compute_scale([0.0, 0.0, 0.0]);
    assert_eq!(zeros.ceiling(), DEFAULT_CEILING);
}

#[test]
fn non_finite_values_are_ignored() {
    let scale = compute_scale([f64::NAN, f64::INFINITY, 42.0, f64::NEG_INFINITY]);
    assert_eq!(scale.ceiling(), 50.0);
    assert_eq!(scale.floor(), 0.0);
}

#[test]
fn negative_values_lower_the_floor() {
    let mixed = compute_scale([-120.0, 80.0]);
    assert_eq!(mixed.floor(), -200.0);
    assert_eq!(mixed.ceiling(), 80.0);

    let only_negative = compute_scale([-50.0, -5.0]);
    assert_eq!(only_negative.floor(), -50.0);
    assert!(only_negative.ceiling() > 0.0);
}

#[test]
fn gridlines_partition_floor_to_ceiling() {
    let scale = compute_scale([1_234.0]);
    let values: Vec<f64> = scale.gridlines().iter().map(|line| line.value).collect();
    assert_eq!(values, vec![0.0, 400.0, 800.0, 1_200.0, 1_600.0, 2_000.0]);

    let four = compute_scale_with_divisions([90.0], 4);
    let values: Vec<f64> = four.gridlines().iter().map(|line| line.value).collect();
    assert_eq!(values, vec![0.0, 22.5, 45.0, 67.5, 90.0]);
}

#[test]
fn zero_divisions_coerce_to_one() {
    let scale = compute_scale_with_divisions([10.0], 0);
    assert_eq!(scale.divisions(), 1);
    assert_eq!(scale.gridlines().len(), 2);
}

#[test]
fn explicit_scale_rejects_degenerate_ranges() {
    assert!(ValueScale::new(0.0, 0.0, 5).is_err());
    assert!(ValueScale::new(100.0, 10.0, 5).is_err());
    assert!(ValueScale::new(f64::NAN, 0.0, 5).is_err());

    let scale = ValueScale::new(100.0, -100.0, 4).expect("valid scale");
    assert_eq!(scale.span(), 200.0);
    assert_eq!(scale.ratio(0.0), 0.5);
    assert!(scale.contains(-100.0));
    assert!(!scale.contains(101.0));
}

#[test]
fn magnitude_helpers() {
    assert_eq!(magnitude_step(1_234.0), 1_000.0);
    assert_eq!(magnitude_step(99.0), 10.0);
    assert_eq!(magnitude_step(0.0), 1.0);
    assert_eq!(magnitude_step(-5.0), 1.0);
    assert_eq!(round_up_to_step(1_001.0), 2_000.0);
}

#[test]
fn stacked_extents_cover_group_sums() {
    let series = vec![
        Series::new("Rent", vec![Some(900.0), Some(900.0)]),
        Series::new("Food", vec![Some(300.0), None]),
        Series::new("Refund", vec![Some(-50.0), Some(-120.0)]),
    ];

    let extents: Vec<f64> = stacked_extent_values(&series, 2).collect();
    assert_eq!(extents, vec![1_200.0, -50.0, 900.0, -120.0]);

    let scale = compute_scale(extents);
    assert_eq!(scale.ceiling(), 2_000.0);
    assert_eq!(scale.floor(), -200.0);
}

#[test]
fn extreme_magnitudes_keep_a_finite_scale() {
    let scale = compute_scale([1.5e308]);
    assert!(scale.ceiling().is_finite());
    assert!(scale.ceiling() >= 1.5e308);
    assert!(scale.gridlines().iter().all(|line| line.value.is_finite()));

    let wide = compute_scale([1.5e308, -1.5e308]);
    assert!(wide.ceiling().is_finite());
    assert!(wide.floor().is_finite());
    let values: Vec<f64> = wide.gridlines().iter().map(|line| line.value).collect();
    assert!(values.iter().all(|value| value.is_finite()));
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    assert_relative_eq!(wide.ratio(0.0), 0.5, epsilon = 1e-12);
    assert_relative_eq!(wide.ratio(wide.ceiling()), 1.0, epsilon = 1e-12);
}

#[test]
fn overflowing_stacks_saturate() {
    let series = vec![
        Series::new("A", vec![Some(1.0e308)]),
        Series::new("B", vec![Some(1.0e308)]),
    ];
    let extents: Vec<f64> = stacked_extent_values(&series, 1).collect();
    assert_eq!(extents, vec![f64::MAX, 0.0]);
    assert_eq!(compute_scale(extents).ceiling(), f64::MAX);
    assert_eq!(round_up_to_step(f64::MAX), f64::MAX);
}

#[test]
fn deserialized_scales_keep_their_invariants() {
    let scale: ValueScale =
        serde_json::from_str(r#"{"ceiling":400.0,"floor":-100.0,"divisions":0}"#).expect("scale");
    assert_eq!(scale.ceiling(), 400.0);
    assert_eq!(scale.floor(), -100.0);
    assert_eq!(scale.divisions(), 1);

    for input in [
        r#"{"ceiling":0.0,"floor":0.0,"divisions":5}"#,
        r#"{"ceiling":100.0,"floor":10.0,"divisions":5}"#,
        r#"{"ceiling":-5.0,"floor":-10.0,"divisions":5}"#,
    ] {
        assert!(serde_json::from_str::<ValueScale>(input).is_err(), "{input}");
    }
}
