use std::collections::HashMap;

use budget_chart::core::{RawRecord, RawValue, align_records, build_axis};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

const ENTITIES: [&str; 3] = ["Checking", "Savings", "Brokerage"];

fn date_string(offset: u64) -> String {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid base date");
    (base + Days::new(offset)).format("%Y-%m-%d").to_string()
}

proptest! {
    #[test]
    fn aligned_points_match_the_last_record_or_stay_gaps(
        raw in prop::collection::vec((0usize..3, 0u64..90, -1_000_000i64..1_000_000), 1..120)
    ) {
        let records: Vec<RawRecord> = raw
            .iter()
            .map(|(entity, offset, cents)| {
                RawRecord::new(ENTITIES[*entity], date_string(*offset), *cents as f64 / 100.0)
            })
            .collect();

        let mut expected: HashMap<(&str, String), f64> = HashMap::new();
        for record in &records {
            let value = match record.value {
                RawValue::Number(value) => value,
                _ => unreachable!("generated numbers"),
            };
            expected.insert((record.entity.as_str(), record.date.clone()), value);
        }

        let build = build_axis([records.as_slice()]);
        let (series, rejected) = align_records(&build.axis, &records);
        prop_assert!(rejected.is_empty());

        for series in &series {
            prop_assert_eq!(series.points.len(), build.axis.len());
            for (index, date) in build.axis.iter().enumerate() {
                let key = (series.entity.as_str(), date.format("%Y-%m-%d").to_string());
                prop_assert_eq!(series.points[index], expected.get(&key).copied());
            }
        }
    }
}
