use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First weekday of a calendar week.
///
/// The historical client hard-coded Sunday; the anchor is configurable here
/// because "local week" is ambiguous across locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    fn days_into_week(self, d: NaiveDate) -> i64 {
        let n = match self {
            WeekStart::Sunday => d.weekday().num_days_from_sunday(),
            WeekStart::Monday => d.weekday().num_days_from_monday(),
        };
        i64::from(n)
    }

    /// First day of the week containing `d`.
    pub fn week_of(self, d: NaiveDate) -> NaiveDate {
        d - Duration::days(self.days_into_week(d))
    }
}

/// Inclusive bounds of the calendar week `weeks_ago` weeks before the week
/// containing `today`: first day 00:00:00.000 through last day 23:59:59.999,
/// in naive local time.
pub fn week_bounds(
    today: NaiveDate,
    weeks_ago: i64,
    week_start: WeekStart,
) -> (NaiveDateTime, NaiveDateTime) {
    let start_day = week_start.week_of(today) - Duration::weeks(weeks_ago);
    let end_day = start_day + Duration::days(6);
    let start = start_day.and_hms_opt(0, 0, 0).unwrap();
    let end = end_day.and_hms_milli_opt(23, 59, 59, 999).unwrap();
    (start, end)
}

/// Chart label for a week bucket, e.g. "Apr 7".
pub fn month_day_label(d: NaiveDate) -> String {
    format!("{} {}", d.format("%b"), d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn sunday_anchor() {
        // 2025-04-09 is a Wednesday; its Sunday-week starts on 2025-04-06
        assert_eq!(WeekStart::Sunday.week_of(d("2025-04-09")), d("2025-04-06"));
        // a Sunday is its own week start
        assert_eq!(WeekStart::Sunday.week_of(d("2025-04-06")), d("2025-04-06"));
    }

    #[test]
    fn monday_anchor() {
        assert_eq!(WeekStart::Monday.week_of(d("2025-04-09")), d("2025-04-07"));
        assert_eq!(WeekStart::Monday.week_of(d("2025-04-06")), d("2025-03-31"));
    }

    #[test]
    fn bounds_cover_exactly_seven_days() {
        let (start, end) = week_bounds(d("2025-04-09"), 0, WeekStart::Sunday);
        assert_eq!(start.date(), d("2025-04-06"));
        assert_eq!(end.date(), d("2025-04-12"));
        assert_eq!(start.time(), chrono::NaiveTime::MIN);
        assert_eq!((end.date() - start.date()).num_days(), 6);
    }

    #[test]
    fn consecutive_buckets_are_contiguous_and_disjoint() {
        let today = d("2025-04-09");
        for i in 0..3 {
            let (_, end_older) = week_bounds(today, i + 1, WeekStart::Sunday);
            let (start_newer, _) = week_bounds(today, i, WeekStart::Sunday);
            assert!(end_older < start_newer);
            assert_eq!((start_newer.date() - end_older.date()).num_days(), 1);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(month_day_label(d("2025-04-07")), "Apr 7");
        assert_eq!(month_day_label(d("2025-12-28")), "Dec 28");
    }
}
