//! Property tests for week and month keys.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use gymlog::domain::value_objects::format_iso_date;
use gymlog::{month_key, monthly_summary, week_key, weekly_summary};

use super::strategies::workouts;

fn monday() -> impl Strategy<Value = NaiveDate> {
    // 2024-01-01 is a Monday
    (0u64..520).prop_map(|weeks| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(weeks * 7)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A Monday-started run of seven days shares one key, and the
    /// next Monday starts a strictly greater key.
    #[test]
    fn property_week_key_buckets_monday_runs(start in monday()) {
        prop_assert_eq!(start.weekday(), Weekday::Mon);
        let key = week_key(&format_iso_date(start)).unwrap();
        prop_assert_eq!(&key, &format_iso_date(start));

        for offset in 1..7 {
            let day = format_iso_date(start + Days::new(offset));
            let day_key = week_key(&day);
            prop_assert_eq!(day_key.as_deref(), Some(key.as_str()));
        }

        let next = week_key(&format_iso_date(start + Days::new(7))).unwrap();
        prop_assert!(next > key);
    }

    /// PROPERTY: A month key is the date's year and month.
    #[test]
    fn property_month_key_is_year_month(start in monday(), offset in 0u64..31) {
        let day = start + Days::new(offset);
        prop_assert_eq!(
            month_key(&format_iso_date(day)),
            format!("{:04}-{:02}", day.year(), day.month())
        );
    }

    /// PROPERTY: Summaries count only dated workouts, newest key first.
    #[test]
    fn property_summaries_cover_dated_workouts(workouts in workouts()) {
        let dated = workouts.iter().filter(|w| !w.date.is_empty()).count();

        for rows in [weekly_summary(&workouts), monthly_summary(&workouts)] {
            prop_assert_eq!(rows.iter().map(|r| r.workouts).sum::<usize>(), dated);
            prop_assert!(rows.windows(2).all(|pair| pair[0].key > pair[1].key));
        }
    }
}
