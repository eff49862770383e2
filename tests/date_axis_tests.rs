use budget_chart::core::{DateAxis, ParseField, RawRecord, build_axis};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn axis_is_sorted_and_deduplicated_across_collections() {
    let checking = vec![
        RawRecord::new("Checking", "2024-01-03", 30.0),
        RawRecord::new("Checking", "2024-01-01", 10.0),
        RawRecord::new("Checking", "2024-01-03", 35.0),
    ];
    let savings = vec![
        RawRecord::new("Savings", "2024-01-02", 20.0),
        RawRecord::new("Savings", "2024-01-01", 15.0),
    ];

    let build = build_axis([checking.as_slice(), savings.as_slice()]);
    assert!(build.rejected.is_empty());
    assert_eq!(
        build.axis.dates(),
        &[date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
    );
    assert_eq!(build.axis.index_of(date(2024, 1, 2)), Some(1));
    assert_eq!(build.axis.index_of(date(2024, 1, 4)), None);
}

#[test]
fn unparseable_dates_are_dropped_and_reported() {
    let records = vec![
        RawRecord::new("Checking", "2024-13-01", 1.0),
        RawRecord::new("Checking", "not a date", 2.0),
        RawRecord::new("Savings", "", 3.0),
        RawRecord::new("Savings", "2024-02-29", 4.0),
    ];

    let build = build_axis([records.as_slice()]);
    assert_eq!(build.axis.dates(), &[date(2024, 2, 29)]);
    assert_eq!(build.rejected.len(), 3);
    assert!(build
        .rejected
        .iter()
        .all(|failure| failure.field == ParseField::Date));
    assert_eq!(build.rejected[1].raw, "not a date");
    assert_eq!(build.rejected[2].entity, "Savings");
}

#[test]
fn time_suffix_resolves_to_calendar_day() {
    let records = vec![
        RawRecord::new("Checking", "2024-05-01T08:30:00Z", 1.0),
        RawRecord::new("Checking", " 2024-05-01 ", 2.0),
        RawRecord::new("Checking", "2024-05-02 23:59:59", 3.0),
    ];

    let build = build_axis([records.as_slice()]);
    assert_eq!(build.axis.dates(), &[date(2024, 5, 1), date(2024, 5, 2)]);
}

#[test]
fn empty_input_produces_empty_axis() {
    let build = build_axis(std::iter::empty::<&[RawRecord]>());
    assert!(build.axis.is_empty());
    assert_eq!(build.axis.len(), 0);
    assert_eq!(build.axis.first(), None);

    let only_invalid = vec![RawRecord::new("Checking", "garbage", 1.0)];
    let build = build_axis([only_invalid.as_slice()]);
    assert!(build.axis.is_empty());
    assert_eq!(build.rejected.len(), 1);
}

#[test]
fn from_dates_enforces_strict_ordering() {
    let axis = DateAxis::from_dates([date(2024, 3, 1), date(2023, 12, 31), date(2024, 3, 1)]);
    assert_eq!(axis.dates(), &[date(2023, 12, 31), date(2024, 3, 1)]);
    assert_eq!(axis.date_at(1), Some(date(2024, 3, 1)));
    assert_eq!(axis.date_at(2), None);
}

#[test]
fn deserialized_axis_keeps_invariant() {
    let axis: DateAxis =
        serde_json::from_str(r#"["2024-01-03","2024-01-01","2024-01-03"]"#).expect("axis json");
    assert_eq!(axis.dates(), &[date(2024, 1, 1), date(2024, 1, 3)]);
}
