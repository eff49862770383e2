use budget_chart::api::{
    DateLabelPattern, GridlineLabelPolicy, format_date_label, format_value_label,
};
use chrono::NaiveDate;

fn currency() -> GridlineLabelPolicy {
    GridlineLabelPolicy::default()
}

#[test]
fn currency_labels_group_thousands() {
    let policy = currency();
    assert_eq!(policy.format(0.0), "$0");
    assert_eq!(policy.format(200.0), "$200");
    assert_eq!(policy.format(1_000.0), "$1,000");
    assert_eq!(policy.format(1_234_567.0), "$1,234,567");
    assert_eq!(policy.format(-2_500.0), "-$2,500");
}

#[test]
fn values_rounding_to_zero_drop_the_sign() {
    assert_eq!(currency().format(-0.4), "$0");
    let plain = GridlineLabelPolicy::Plain { precision: 1 };
    assert_eq!(plain.format(-0.04), "0.0");
}

#[test]
fn plain_labels_honour_precision() {
    let policy = GridlineLabelPolicy::Plain { precision: 2 };
    assert_eq!(policy.format(12_500.0), "12,500.00");
    assert_eq!(policy.format(-3.14159), "-3.14");
    assert_eq!(policy.format(999.999), "1,000.00");

    let euro = GridlineLabelPolicy::Currency {
        symbol: "€".to_owned(),
        precision: 2,
    };
    assert_eq!(euro.format(42.0), "€42.00");
}

#[test]
fn compact_labels_use_suffixes() {
    let policy = GridlineLabelPolicy::Compact {
        symbol: "$".to_owned(),
    };
    assert_eq!(policy.format(950.0), "$950");
    assert_eq!(policy.format(12_500.0), "$12.5k");
    assert_eq!(policy.format(3_000_000.0), "$3M");
    assert_eq!(policy.format(2_500_000_000.0), "$2.5B");
    assert_eq!(policy.format(-1_500.0), "-$1.5k");
}

#[test]
fn non_finite_values_render_as_dash() {
    assert_eq!(format_value_label(f64::NAN, &currency()), "-");
    assert_eq!(format_value_label(f64::INFINITY, &currency()), "-");
}

#[test]
fn date_patterns() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    assert_eq!(format_date_label(date, DateLabelPattern::Iso), "2024-03-01");
    assert_eq!(format_date_label(date, DateLabelPattern::MonthDay), "Mar 01");
    assert_eq!(format_date_label(date, DateLabelPattern::MonthYear), "Mar 2024");
}

#[test]
fn fractional_steps_raise_precision() {
    assert_eq!(
        currency().for_step(0.08),
        GridlineLabelPolicy::Currency {
            symbol: "$".to_owned(),
            precision: 2
        }
    );
    assert_eq!(currency().for_step(0.25).format(0.75), "$0.75");
    assert_eq!(currency().for_step(0.1).format(0.3), "$0.3");
    assert_eq!(currency().for_step(0.4 / 3.0).format(0.4 / 3.0), "$0.133");
}

#[test]
fn whole_steps_and_explicit_precision_are_kept() {
    assert_eq!(currency().for_step(6.0), currency());
    assert_eq!(currency().for_step(f64::NAN), currency());

    let plain = GridlineLabelPolicy::Plain { precision: 3 };
    assert_eq!(plain.for_step(0.5), plain);

    let compact = GridlineLabelPolicy::Compact {
        symbol: "$".to_owned(),
    };
    assert_eq!(compact.for_step(0.01), compact);

    let tiny = currency().for_step(1e-30);
    assert_eq!(
        tiny,
        GridlineLabelPolicy::Currency {
            symbol: "$".to_owned(),
            precision: 12
        }
    );
}
